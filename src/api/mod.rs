use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::error::ServiceError;

pub mod attendance;
pub mod employee;
pub mod payroll;

/// Malformed JSON bodies surface as `InvalidPayload`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::InvalidPayload(err.to_string()).into())
}

/// Unparseable path segments (dates, years) surface as `InvalidPayload`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ServiceError::InvalidPayload(err.to_string()).into())
}

/// Malformed query strings surface as `InvalidPayload`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ServiceError::InvalidPayload(err.to_string()).into())
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) async fn test_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    use crate::{routes, service::RecordStore, service::test_support};

    let store: RecordStore = test_support::store().await;
    let limiter = routes::build_limiter(1000).expect("limiter");

    actix_web::App::new()
        .app_data(web::Data::new(store))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(health)
        .configure(|cfg| routes::configure(cfg, "/api", limiter))
}
