use actix_web::{HttpResponse, web};
use chrono::NaiveDate;

use crate::{
    error::ServiceError,
    model::attendance::{Attendance, CheckIn},
    service::RecordStore,
};

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CheckIn,
    responses(
        (status = 201, description = "Checked in", body = Attendance),
        (status = 400, description = "Empty employee id", body = Object, example = json!({
            "InvalidPayload": "employeeId must not be empty"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    store: web::Data<RecordStore>,
    payload: web::Json<CheckIn>,
) -> Result<HttpResponse, ServiceError> {
    let attendance = store.check_in(&payload.employee_id).await?;
    Ok(HttpResponse::Created().json(attendance))
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/attendance/{id}",
    params(
        ("id" = String, Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Checked out", body = Attendance),
        (status = 404, description = "Attendance not found", body = Object, example = json!({
            "NotFound": "attendance with id=42 not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let attendance = store.check_out(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(attendance))
}

#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_attendances(store: web::Data<RecordStore>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(store.list_attendances().await?))
}

#[utoipa::path(
    get,
    path = "/api/attendance/{id}",
    params(
        ("id" = String, Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, body = Attendance),
        (status = 404, description = "Attendance not found")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let attendance = store.get_attendance(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(attendance))
}

/// First attendance record of the given day
#[utoipa::path(
    get,
    path = "/api/attendance/date/{date}",
    params(
        ("date" = String, Path, description = "Day, e.g. 2024-03-01")
    ),
    responses(
        (status = 200, body = Attendance),
        (status = 404, description = "No attendance on that day")
    ),
    tag = "Attendance"
)]
pub async fn attendance_by_date(
    store: web::Data<RecordStore>,
    path: web::Path<NaiveDate>,
) -> Result<HttpResponse, ServiceError> {
    let attendance = store.attendance_by_date(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(attendance))
}

#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Records of the employee, empty when unknown", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn employee_attendances(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let records = store.employee_attendances(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance summary; absentDays counts records without a check-out
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}/analysis",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, body = EmployeeAnalysis),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn employee_analysis(
    store: web::Data<RecordStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let analysis = store.analyze_employee(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(analysis))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(
                web::resource("")
                    .route(web::post().to(check_in))
                    .route(web::get().to(list_attendances)),
            )
            .service(web::resource("/date/{date}").route(web::get().to(attendance_by_date)))
            .service(
                web::resource("/employee/{employee_id}")
                    .route(web::get().to(employee_attendances)),
            )
            .service(
                web::resource("/employee/{employee_id}/analysis")
                    .route(web::get().to(employee_analysis)),
            )
            // /attendance/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(check_out))
                    .route(web::get().to(get_attendance)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{test_app, test_request},
        model::employee::Employee,
    };
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn check_in_check_out_and_analysis() {
        let app = test::init_service(test_app().await).await;

        let req = test_request::post()
            .uri("/api/employee")
            .set_json(json!({ "name": "Alice", "email": "alice@company.com", "salary": 5000 }))
            .to_request();
        let alice: Employee = test::call_and_read_body_json(&app, req).await;

        let req = test_request::post()
            .uri("/api/attendance")
            .set_json(json!({ "employeeId": &alice.id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let opened: Value = test::read_body_json(resp).await;
        assert_eq!(opened["checkOutTime"], Value::Null);
        let id = opened["id"].as_str().unwrap().to_string();

        let req = test_request::put()
            .uri(&format!("/api/attendance/{}", id))
            .to_request();
        let closed: Attendance = test::call_and_read_body_json(&app, req).await;
        assert!(closed.check_out_time.is_some());

        let req = test_request::get()
            .uri(&format!("/api/attendance/{}", id))
            .to_request();
        let fetched: Attendance = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, closed);

        let req = test_request::get()
            .uri(&format!("/api/attendance/date/{}", closed.date))
            .to_request();
        let by_date: Attendance = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_date.id, id);

        let req = test_request::get()
            .uri(&format!("/api/attendance/employee/{}/analysis", alice.id))
            .to_request();
        let analysis: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            analysis,
            json!({ "employeeName": "Alice", "totalDays": "1", "presentDays": "1", "absentDays": "0" })
        );
    }

    #[actix_web::test]
    async fn unknown_employee_cannot_check_in() {
        let app = test::init_service(test_app().await).await;

        let req = test_request::post()
            .uri("/api/attendance")
            .set_json(json!({ "employeeId": "missing" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test_request::get().uri("/api/attendance").to_request();
        let all: Vec<Attendance> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn unknown_employee_has_no_records() {
        let app = test::init_service(test_app().await).await;

        let req = test_request::get()
            .uri("/api/attendance/employee/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let records: Vec<Attendance> = test::read_body_json(resp).await;
        assert!(records.is_empty());
    }

    #[actix_web::test]
    async fn bad_date_is_invalid_payload() {
        let app = test::init_service(test_app().await).await;

        let req = test_request::get()
            .uri("/api/attendance/date/yesterday")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
