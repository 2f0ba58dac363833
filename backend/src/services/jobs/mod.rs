//! # Job Routes
//!
//! Everything needed to take a PDF from the browser to a finished flashcard
//! set. The processing backend owns each job; these routes only relay.
//!
//! ## Sub-modules:
//! - `upload`: re-validates the PDF and forwards it as a fresh multipart body.
//! - `generate`: asks the backend to start generating cards for a job.
//! - `status`: the endpoint the client poller hits every couple of seconds.
//! - `flashcards`: the finished (or still empty) flashcard set.

mod flashcards;
mod generate;
mod status;
mod upload;

use crate::error::ProxyError;
use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::validation::validate_job_id;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for job routes.
///
/// # Registered Routes:
///
/// *   **`POST /upload/pdf`**: multipart body with a `file` field ⇒ backend `POST /upload-pdf`.
/// *   **`POST /generate/{job_id}`**: ⇒ backend `POST /generate-flashcards/{job_id}`.
/// *   **`GET /status/{job_id}`**: ⇒ backend `GET /status/{job_id}`, shorter timeout.
/// *   **`GET /flashcards/{job_id}`**: ⇒ backend `GET /flashcards/{job_id}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload/pdf", post().to(upload::process))
        .route("/generate/{job_id}", post().to(generate::process))
        .route("/status/{job_id}", get().to(status::process))
        .route("/flashcards/{job_id}", get().to(flashcards::process))
}

/// Backend path for `job_id` under `prefix`, after checking the id cannot
/// alter the path.
fn job_path(prefix: &str, job_id: &str) -> Result<String, ProxyError> {
    validate_job_id(job_id)?;
    Ok(format!("{prefix}/{job_id}"))
}
