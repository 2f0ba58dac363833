//! # Proxy Routes
//!
//! Each sub-module owns one `/api/...` scope and exposes `configure_routes()`,
//! the way every area of this server is mounted.
//!
//! ## Sub-modules:
//! - `jobs`: PDF upload, generation trigger, status polling and flashcard retrieval.
//! - `ingest`: URL ingestion.
//! - `youtube`: YouTube-to-flashcards generation, deck save and caption-track check.
//! - `summaries`: citation-backed summaries.
//! - `debug`: the opt-in connectivity ping.

pub mod debug;
pub mod ingest;
pub mod jobs;
pub mod summaries;
pub mod youtube;

use crate::error::ProxyError;
use actix_web::web;

/// Mounts every API scope. `jobs` sits directly on `/api`, so it goes last:
/// actix matches scopes in registration order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ingest::configure_routes())
        .service(youtube::configure_routes())
        .service(summaries::configure_routes())
        .service(debug::configure_routes())
        .service(jobs::configure_routes());
}

/// JSON extractor settings: bodies up to 10 MB, and rejections rendered as
/// `{detail}` like every other proxy error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(10 * 1024 * 1024)
        .error_handler(|err, _req| ProxyError::BadRequest(err.to_string()).into())
}
