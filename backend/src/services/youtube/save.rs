//! # Deck Save
//!
//! `PUT /api/youtube/flashcards` stores generated cards as a deck through the
//! backend's `POST /youtube/save` and relays the `{pdf_id}` it returns.
//!
//! The body is decoded into [`SaveDeckRequest`] before relaying, which pins
//! the title policy in one place: a missing title stays `null` and is never
//! filled in with the video id.

use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use common::requests::SaveDeckRequest;

pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    body: web::Json<SaveDeckRequest>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let payload = serde_json::to_value(body.into_inner())
        .map_err(|e| ProxyError::BadRequest(e.to_string()))?;
    forwarder
        .forward(ProxyRequest::post("/youtube/save").json(payload))
        .await
}
