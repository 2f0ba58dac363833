//! # PDF Upload
//!
//! Handler for `POST /api/upload/pdf`.
//!
//! ## Workflow
//!
//! 1.  **Origin check**: fails with a configuration error before the body is read.
//! 2.  **Collect**: the multipart body is read into owned parts, stopping early
//!     once the file passes the 10 MiB cap.
//! 3.  **Validate**: a `file` part must exist and pass the same PDF checks the
//!     client runs, so nothing invalid ever reaches the backend.
//! 4.  **Forward**: the parts are re-encoded as a fresh multipart form and sent
//!     to `/upload-pdf`; the backend's answer (`{pdf_id, filename, status}` or
//!     an error) is relayed unchanged.

use crate::error::ProxyError;
use crate::proxy::multipart::{collect_parts, PartValue};
use crate::proxy::{Forwarder, ProxyRequest};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::error::ValidationError;
use common::validation::{validate_pdf, MAX_UPLOAD_BYTES};
use log::info;

pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    payload: Multipart,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;

    let parts = collect_parts(payload, MAX_UPLOAD_BYTES).await?;
    let (filename, media_type, size) = parts
        .iter()
        .find_map(|part| match &part.value {
            PartValue::File {
                filename,
                media_type,
                bytes,
            } if part.name == "file" => Some((filename, media_type, bytes.len() as u64)),
            _ => None,
        })
        .ok_or(ValidationError::MissingField("file"))?;
    validate_pdf(media_type, size)?;

    info!("Forwarding upload '{}' ({} bytes)", filename, size);
    forwarder
        .forward(ProxyRequest::post("/upload-pdf").form(parts))
        .await
}
