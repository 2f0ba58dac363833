use crate::config::DebugEndpoints;
use crate::error::{ProxyError, API_BASE_HEADER};
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use serde_json::{json, Value};

/// `GET /api/_debug/ping`: calls the backend root and reports what it said.
///
/// - disabled ⇒ `404 {ok:false, error:"disabled"}`
/// - reachable ⇒ `200 {ok:true, base, backend}` (`backend` is `{}` for non-JSON)
/// - unreachable ⇒ `502 {ok:false, base, error}`
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    debug: web::Data<DebugEndpoints>,
) -> Result<HttpResponse, ProxyError> {
    if !debug.0 {
        return Ok(HttpResponse::NotFound().json(json!({ "ok": false, "error": "disabled" })));
    }
    let base = forwarder.origin()?.as_str().to_string();

    match forwarder.send(ProxyRequest::get("/")).await {
        Ok(upstream) => {
            let backend: Value =
                serde_json::from_slice(&upstream.body).unwrap_or_else(|_| json!({}));
            Ok(HttpResponse::Ok()
                .insert_header((API_BASE_HEADER, base.as_str()))
                .json(json!({ "ok": true, "base": base, "backend": backend })))
        }
        Err(ProxyError::Transport { reason, .. }) => Ok(HttpResponse::BadGateway()
            .insert_header((API_BASE_HEADER, base.as_str()))
            .json(json!({ "ok": false, "base": base, "error": reason }))),
        Err(other) => Err(other),
    }
}
