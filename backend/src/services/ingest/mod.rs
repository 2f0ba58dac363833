//! # URL Ingest Routes
//!
//! Relays URL submissions (currently YouTube links) to the backend's ingest
//! endpoint, answering the browser's CORS preflight locally.

mod url;

use actix_web::web::{method, post, scope};
use actix_web::http::Method;
use actix_web::Scope;

const API_PATH: &str = "/api/ingest";

/// *   **`POST /url`**: `{url, kind}` ⇒ backend `POST /ingest/url`.
/// *   **`OPTIONS /url`**: answered here with `200 {}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/url", post().to(url::process))
        .route("/url", method(Method::OPTIONS).to(url::preflight))
}
