use crate::api::{attendance, employee, payroll};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-peer-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<Limiter> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit of {} requests per minute", requests_per_min))?;

    Ok(Arc::new(Governor::new(&cfg)))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: Limiter) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(limiter) // rate limiting
            .configure(employee::configure)
            .configure(attendance::configure)
            .configure(payroll::configure),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::test_request, service::test_support};
    use actix_web::{App, http::StatusCode, test};

    #[::core::prelude::v1::test]
    fn limiter_accepts_configured_rates() {
        assert!(build_limiter(60).is_ok());
        assert!(build_limiter(1000).is_ok());
        assert!(build_limiter(120_000).is_ok());
        assert!(build_limiter(0).is_ok());
    }

    #[actix_web::test]
    async fn scopes_mount_under_prefix_behind_limiter() {
        let store = test_support::store().await;
        let limiter = build_limiter(1).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(|cfg| configure(cfg, "/v1", limiter)),
        )
        .await;

        let req = test_request::get().uri("/api/employee").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test_request::get().uri("/v1/employee").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test_request::get().uri("/v1/payroll").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }
}
