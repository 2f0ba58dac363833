use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use common::error::ValidationError;
use common::validation::validate_http_url;
use serde_json::Value;

/// `POST /api/youtube/flashcards`.
///
/// Only `url` is checked here. Card count, language hints and the extraction
/// toggles are the backend's to interpret and travel as sent.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let body = body.into_inner();
    let url = body
        .get("url")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingField("url"))?;
    validate_http_url(url)?;

    forwarder
        .forward(ProxyRequest::post("/youtube/flashcards").json(body))
        .await
}
