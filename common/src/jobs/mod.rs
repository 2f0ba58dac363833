//! Job status vocabulary shared by the proxy and the client.
//!
//! The external processing backend owns every job. This module only names the
//! statuses it reports through `GET /status/{job_id}` and classifies them:
//!
//! - `uploaded` and `processing` are the only non-terminal statuses.
//! - `completed` is the single successful terminal status.
//! - `error`, `quota_exceeded`, `auth_error`, `timeout` and `service_error` are
//!   terminal failures. Callers treat them alike but show distinct messages.
//!
//! Unknown status strings are kept verbatim in [`JobStatus::Other`] and treated
//! as non-terminal, so a newer backend never wedges an older client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a job as reported by the processing backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Uploaded,
    Processing,
    Completed,
    Error,
    QuotaExceeded,
    AuthError,
    Timeout,
    ServiceError,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Uploaded => "uploaded",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
            JobStatus::QuotaExceeded => "quota_exceeded",
            JobStatus::AuthError => "auth_error",
            JobStatus::Timeout => "timeout",
            JobStatus::ServiceError => "service_error",
            JobStatus::Other(raw) => raw,
        }
    }

    /// `true` once no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed) || self.failure_kind().is_some()
    }

    /// The failure kind for the five terminal failure statuses, `None` otherwise.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            JobStatus::Error => Some(FailureKind::Error),
            JobStatus::QuotaExceeded => Some(FailureKind::QuotaExceeded),
            JobStatus::AuthError => Some(FailureKind::AuthError),
            JobStatus::Timeout => Some(FailureKind::Timeout),
            JobStatus::ServiceError => Some(FailureKind::ServiceError),
            _ => None,
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "uploaded" => JobStatus::Uploaded,
            "processing" => JobStatus::Processing,
            "completed" => JobStatus::Completed,
            "error" => JobStatus::Error,
            "quota_exceeded" => JobStatus::QuotaExceeded,
            "auth_error" => JobStatus::AuthError,
            "timeout" => JobStatus::Timeout,
            "service_error" => JobStatus::ServiceError,
            _ => JobStatus::Other(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a job ended without producing flashcards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Error,
    QuotaExceeded,
    AuthError,
    Timeout,
    ServiceError,
}

impl FailureKind {
    /// Message shown when the backend supplies no `error_message` of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            FailureKind::QuotaExceeded => "AI quota exceeded, please try again later",
            FailureKind::AuthError => "AI service authentication failed, please contact support",
            FailureKind::Timeout => "AI service timeout, please try again later",
            FailureKind::ServiceError => {
                "AI service temporarily unavailable, please try again later"
            }
            FailureKind::Error => "Failed to generate flashcards, please try again later",
        }
    }
}

/// Body of `GET /status/{job_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(default, rename = "pdf_id", alias = "job_id", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl StatusReport {
    pub fn new(status: JobStatus) -> Self {
        Self {
            job_id: None,
            status,
            error_message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// The backend message when present and non-blank, else the per-kind fallback.
    pub fn failure_message(&self) -> Option<String> {
        let kind = self.status.failure_kind()?;
        let message = self
            .error_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| kind.fallback_message().to_string());
        Some(message)
    }
}

/// Handle returned by a successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    #[serde(alias = "pdf_id")]
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Job ids are opaque, but they end up inside proxied URL paths, so only
/// characters that cannot change the path structure are accepted.
pub fn is_valid_job_id(job_id: &str) -> bool {
    !job_id.is_empty()
        && job_id.len() <= 128
        && job_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_processing_and_uploaded_are_non_terminal() {
        let all = [
            "uploaded",
            "processing",
            "completed",
            "error",
            "quota_exceeded",
            "auth_error",
            "timeout",
            "service_error",
        ];
        let non_terminal: Vec<_> = all
            .iter()
            .map(|s| JobStatus::from(s.to_string()))
            .filter(|s| !s.is_terminal())
            .collect();
        assert_eq!(non_terminal, vec![JobStatus::Uploaded, JobStatus::Processing]);
    }

    #[test]
    fn unknown_status_is_kept_and_non_terminal() {
        let status = JobStatus::from("queued".to_string());
        assert_eq!(status, JobStatus::Other("queued".into()));
        assert!(!status.is_terminal());
        assert_eq!(status.as_str(), "queued");
    }

    #[test]
    fn status_report_accepts_backend_shape() {
        let report: StatusReport = serde_json::from_str(
            r#"{"pdf_id":"abc123","status":"quota_exceeded","error_message":"AI quota exceeded"}"#,
        )
        .unwrap();
        assert_eq!(report.job_id.as_deref(), Some("abc123"));
        assert_eq!(report.status, JobStatus::QuotaExceeded);
        assert_eq!(report.failure_message().as_deref(), Some("AI quota exceeded"));
    }

    #[test]
    fn blank_error_message_falls_back_per_kind() {
        let report = StatusReport::new(JobStatus::AuthError).with_message("   ");
        assert_eq!(
            report.failure_message().as_deref(),
            Some(FailureKind::AuthError.fallback_message())
        );
        assert_eq!(StatusReport::new(JobStatus::Processing).failure_message(), None);
    }

    #[test]
    fn job_handle_reads_either_id_field() {
        let a: JobHandle = serde_json::from_str(r#"{"job_id":"x1"}"#).unwrap();
        let b: JobHandle = serde_json::from_str(r#"{"pdf_id":"x2","filename":"a.pdf"}"#).unwrap();
        assert_eq!(a.job_id, "x1");
        assert_eq!(b.job_id, "x2");
        assert_eq!(b.filename.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn job_ids_cannot_escape_the_path() {
        assert!(is_valid_job_id("0b8a9c1e-2f7d-4c4b-9a53-0f1e2d3c4b5a"));
        assert!(!is_valid_job_id(""));
        assert!(!is_valid_job_id("../files"));
        assert!(!is_valid_job_id("a/b"));
        assert!(!is_valid_job_id("id?x=1"));
    }
}
