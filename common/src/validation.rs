//! Client-side input guards.
//!
//! These run before any network call. The proxy re-runs the PDF checks on the
//! multipart body it receives, so a client that skips them still cannot push
//! an oversized or non-PDF upload to the backend.

use crate::error::ValidationError;

/// Upload cap: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type without parameters, lower-cased.
fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Checks the declared media type first, then the size.
pub fn validate_pdf(media_type: &str, size: u64) -> Result<(), ValidationError> {
    if essence(media_type) != PDF_MEDIA_TYPE {
        return Err(ValidationError::NotPdf {
            media_type: media_type.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge { size });
    }
    if size == 0 {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("url"));
    }
    let lower = trimmed.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    match rest {
        Some(host_and_path) if !host_and_path.is_empty() && !host_and_path.starts_with('/') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidUrl(trimmed.to_string())),
    }
}

pub fn validate_job_id(job_id: &str) -> Result<(), ValidationError> {
    if crate::jobs::is_valid_job_id(job_id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidJobId(job_id.to_string()))
    }
}
