use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::{
    error::ServiceError,
    model::employee::{Employee, NewEmployee, UpdateEmployee},
    service::RecordStore,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Case-insensitive name fragment
    pub name: Option<String>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid payload", body = Object, example = json!({
            "InvalidPayload": "name: name must not be empty"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<RecordStore>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee = store.add_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List employees, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employees", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<RecordStore>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, ServiceError> {
    let employees = match &query.name {
        Some(name) => store.search_employees(name).await?,
        None => store.list_employees().await?,
    };

    debug!(count = employees.len(), "Listing employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "NotFound": "employee with id=42 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee = store.get_employee(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
    body: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee = store
        .update_employee(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            // /employee
            .service(
                web::resource("")
                    .route(web::post().to(create_employee))
                    .route(web::get().to(list_employees)),
            )
            // /employee/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_employee))
                    .route(web::get().to(get_employee)),
            ),
    );
}
