use actix_web::{HttpResponse, web};

use crate::{
    error::ServiceError,
    model::payroll::{NewPayroll, Payroll},
    service::RecordStore,
};

#[utoipa::path(
    post,
    path = "/api/payroll",
    request_body = NewPayroll,
    responses(
        (status = 201, description = "Payroll created", body = Payslip),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "NotFound": "employee with id=42 not found"
        }))
    ),
    tag = "Payroll"
)]
pub async fn create_payroll(
    store: web::Data<RecordStore>,
    payload: web::Json<NewPayroll>,
) -> Result<HttpResponse, ServiceError> {
    let payslip = store.add_payroll(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(payslip))
}

#[utoipa::path(
    get,
    path = "/api/payroll",
    responses(
        (status = 200, body = [Payroll])
    ),
    tag = "Payroll"
)]
pub async fn list_payrolls(store: web::Data<RecordStore>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(store.list_payrolls().await?))
}

#[utoipa::path(
    get,
    path = "/api/payroll/{id}",
    params(
        ("id" = String, Path, description = "Payroll ID")
    ),
    responses(
        (status = 200, body = Payroll),
        (status = 404, description = "Payroll not found")
    ),
    tag = "Payroll"
)]
pub async fn get_payroll(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let payroll = store.get_payroll(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payroll))
}

#[utoipa::path(
    get,
    path = "/api/payroll/employee/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, body = [Payroll])
    ),
    tag = "Payroll"
)]
pub async fn employee_payrolls(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let payrolls = store.employee_payrolls(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payrolls))
}

#[utoipa::path(
    get,
    path = "/api/payroll/year/{year}",
    params(
        ("year" = u64, Path, description = "Pay year, e.g. 2024")
    ),
    responses(
        (status = 200, body = [Payroll])
    ),
    tag = "Payroll"
)]
pub async fn year_payrolls(
    store: web::Data<RecordStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    let payrolls = store.payrolls_by_year(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payrolls))
}

#[utoipa::path(
    get,
    path = "/api/payroll/month/{month}",
    params(
        ("month" = String, Path, description = "Pay month as recorded, e.g. March")
    ),
    responses(
        (status = 200, body = [Payroll])
    ),
    tag = "Payroll"
)]
pub async fn month_payrolls(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let payrolls = store.payrolls_by_month(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payrolls))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payroll")
            // /payroll
            .service(
                web::resource("")
                    .route(web::post().to(create_payroll))
                    .route(web::get().to(list_payrolls)),
            )
            .service(web::resource("/employee/{employee_id}").route(web::get().to(employee_payrolls)))
            .service(web::resource("/year/{year}").route(web::get().to(year_payrolls)))
            .service(web::resource("/month/{month}").route(web::get().to(month_payrolls)))
            //payroll/{id}
            .service(web::resource("/{id}").route(web::get().to(get_payroll))),
    );
}
