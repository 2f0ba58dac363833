use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use common::requests::IngestUrlRequest;
use common::validation::validate_http_url;
use serde_json::json;

/// `POST /api/ingest/url`. The URL must be http(s); the body is otherwise
/// relayed as received.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    body: web::Json<IngestUrlRequest>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let mut request = body.into_inner();
    validate_http_url(&request.url)?;
    request.url = request.url.trim().to_string();

    let payload = serde_json::to_value(&request)
        .map_err(|e| ProxyError::BadRequest(e.to_string()))?;
    forwarder
        .forward(ProxyRequest::post("/ingest/url").json(payload))
        .await
}

pub(crate) async fn preflight() -> HttpResponse {
    HttpResponse::Ok().json(json!({}))
}

#[cfg(test)]
mod tests {
    use crate::config::DebugEndpoints;
    use crate::test_support::{forwarder_for, proxy_app, spawn_upstream, unreachable_origin};
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::{json, Value};

    fn upstream(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/ingest/url",
            web::post().to(|body: web::Json<Value>| async move {
                HttpResponse::Created().json(json!({ "received": body.into_inner(), "pdf_id": "yt-1" }))
            }),
        );
    }

    #[actix_web::test]
    async fn ingest_relays_body_and_status() {
        let base = spawn_upstream(upstream).await;
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&base), DebugEndpoints(false))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ingest/url")
            .set_json(json!({ "url": " https://youtu.be/dQw4w9WgXcQ ", "kind": "youtube" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["received"]["url"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(json["received"]["kind"], "youtube");
    }

    #[actix_web::test]
    async fn non_http_url_is_rejected_locally() {
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&unreachable_origin()), DebugEndpoints(false))),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/ingest/url")
            .set_json(json!({ "url": "javascript:alert(1)" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/ingest/url")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let json: Value = test::read_body_json(resp).await;
        assert!(json["detail"].is_string());
    }

    #[actix_web::test]
    async fn preflight_is_answered_locally() {
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&unreachable_origin()), DebugEndpoints(false))),
        )
        .await;
        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/ingest/url")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({}));
    }
}
