//! # Summary Routes
//!
//! Citation-backed summaries are built asynchronously by the backend. The
//! client fetches whatever exists and may ask for a rebuild.

mod get;
mod refresh;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/summaries";

/// *   **`GET /{source_id}`**: ⇒ backend `GET /summaries/{source_id}`; a 404
///     becomes an empty summary.
/// *   **`POST /{source_id}/refresh`**: ⇒ backend `POST /summaries/{source_id}/refresh`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{source_id}", get().to(get::process))
        .route("/{source_id}/refresh", post().to(refresh::process))
}
