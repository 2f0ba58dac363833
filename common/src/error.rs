//! Error kinds carried through every client-side layer of the pipeline.
//!
//! [`PipelineError`] is closed: submission, polling and presentation all
//! produce one of its variants, and the UI decides what to render purely by
//! matching on it. Only [`PipelineError::Transport`] is ever retried, and only
//! inside the bounded polling loop.

use crate::jobs::FailureKind;
use thiserror::Error;

/// Input rejected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a PDF file only.")]
    NotPdf { media_type: String },

    #[error("File size must be less than 10MB.")]
    TooLarge { size: u64 },

    #[error("File is empty.")]
    Empty,

    #[error("Missing required field '{0}'.")]
    MissingField(&'static str),

    #[error("'{0}' is not an http(s) URL.")]
    InvalidUrl(String),

    #[error("'{0}' is not a valid job id.")]
    InvalidJobId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The proxy has no usable backend origin.
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend (or the proxy) could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The job reached one of the five failure statuses.
    #[error("{message}")]
    BackendFailure { kind: FailureKind, message: String },

    /// The backend answered a request with a non-success status.
    /// `detail` is the backend's own error text, unchanged.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("{0}")]
    MalformedResponse(String),
}

impl PipelineError {
    pub fn is_transient(&self) -> bool {
        matches!(self, PipelineError::Transport(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            PipelineError::BackendFailure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_message_matches_upload_guard() {
        let e = PipelineError::from(ValidationError::TooLarge { size: 15 << 20 });
        assert!(e.to_string().contains("File size must be less than 10MB"));
    }

    #[test]
    fn rejected_detail_is_passed_through_unchanged() {
        let e = PipelineError::Rejected {
            status: 400,
            detail: "Only PDF files are allowed. Received: text/plain".into(),
        };
        assert_eq!(e.to_string(), "Only PDF files are allowed. Received: text/plain");
        assert!(!e.is_transient());
    }

    #[test]
    fn only_transport_is_transient() {
        assert!(PipelineError::Transport("down".into()).is_transient());
        assert!(!PipelineError::Config("unset".into()).is_transient());
        assert!(!PipelineError::MalformedResponse("html".into()).is_transient());
        assert!(
            !PipelineError::BackendFailure {
                kind: FailureKind::Timeout,
                message: "slow".into()
            }
            .is_transient()
        );
    }
}
