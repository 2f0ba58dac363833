use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct TracksQuery {
    url: Option<String>,
}

/// `GET /api/youtube/tracks?url=...`
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    query: web::Query<TracksQuery>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let url = query
        .into_inner()
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ProxyError::BadRequest("Missing 'url' query parameter".to_string()))?;

    forwarder
        .forward(ProxyRequest::get("/youtube/tracks").query("url", url))
        .await
}
