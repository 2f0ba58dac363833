//! Tags `/api` responses with the backend origin they were produced against.
//!
//! Relayed responses get `x-proxy-api-base` from the forwarder. This
//! middleware covers the answers that never reached the backend (rejected
//! input, unknown routes) so a misrouted call is diagnosable from the
//! response alone. Nothing is added while the origin is unconfigured.

use crate::error::API_BASE_HEADER;
use crate::proxy::Forwarder;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{web, Error};

pub async fn tag_api_base(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let origin = req
        .path()
        .starts_with("/api")
        .then(|| req.app_data::<web::Data<Forwarder>>())
        .flatten()
        .and_then(|forwarder| forwarder.configured_origin())
        .and_then(|origin| HeaderValue::from_str(origin.as_str()).ok());

    let mut res = next.call(req).await?;
    if let Some(origin) = origin {
        let name = HeaderName::from_static(API_BASE_HEADER);
        if !res.headers().contains_key(&name) {
            res.headers_mut().insert(name, origin);
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, DebugEndpoints, Timeouts};
    use crate::test_support::{forwarder_for, proxy_app, unreachable_origin};
    use actix_web::middleware::from_fn;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn local_rejections_carry_the_origin() {
        let base = unreachable_origin();
        let app = test::init_service(
            App::new()
                .wrap(from_fn(tag_api_base))
                .configure(proxy_app(forwarder_for(&base), DebugEndpoints(false))),
        )
        .await;

        let requests = [
            test::TestRequest::get().uri("/api/status/a.b").to_request(),
            test::TestRequest::get().uri("/api/youtube/tracks").to_request(),
            test::TestRequest::post()
                .uri("/api/ingest/url")
                .set_json(serde_json::json!({"url": "ftp://example.com"}))
                .to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);
            assert_eq!(resp.headers().get(API_BASE_HEADER).unwrap(), base.as_str());
        }
    }

    #[actix_web::test]
    async fn unconfigured_origin_adds_nothing() {
        let forwarder = Forwarder::new(Err(ConfigError::Missing), Timeouts::default()).unwrap();
        let app = test::init_service(
            App::new()
                .wrap(from_fn(tag_api_base))
                .configure(proxy_app(forwarder, DebugEndpoints(false))),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/status/abc").to_request()).await;
        assert_eq!(resp.status(), 500);
        assert!(!resp.headers().contains_key(API_BASE_HEADER));
    }
}
