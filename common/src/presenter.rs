//! Result presenter: maps what the client knows about a job to exactly one view.
//!
//! The flashcard page and the processing view never branch on raw statuses;
//! they render whatever [`present`] or [`StatusBanner::for_report`] returns.
//!
//! | Input                                   | Presentation  |
//! |-----------------------------------------|---------------|
//! | fetch in flight                         | `Loading`     |
//! | fetch failed (any error)                | `Error`       |
//! | `uploaded` / `processing` / unknown     | `Processing`  |
//! | one of the five failure statuses        | `Error`       |
//! | `completed`, at least one card          | `Completed`   |
//! | `completed`, no cards                   | `NoResults`   |

use crate::error::PipelineError;
use crate::jobs::{FailureKind, JobStatus, StatusReport};
use crate::model::flashcard::{Flashcard, FlashcardSet};
use crate::poll::PollOutcome;

/// State of the flashcard fetch backing the page.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(FlashcardSet),
    Failed(PipelineError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Presentation {
    Loading,
    Processing,
    Error { message: String },
    /// Cards in `card_number` order, never empty.
    Completed(Vec<Flashcard>),
    NoResults,
}

/// The one action each settled view offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    TryAgain,
    UploadNew,
    BackToUpload,
}

impl RecoveryAction {
    pub fn label(self) -> &'static str {
        match self {
            RecoveryAction::TryAgain => "Try Again",
            RecoveryAction::UploadNew => "Upload New PDF",
            RecoveryAction::BackToUpload => "Back to Upload",
        }
    }
}

pub fn present(state: &FetchState) -> Presentation {
    match state {
        FetchState::Loading => Presentation::Loading,
        FetchState::Failed(error) => Presentation::Error {
            message: error.to_string(),
        },
        FetchState::Loaded(set) => {
            if let Some(kind) = set.status.failure_kind() {
                return Presentation::Error {
                    message: kind.fallback_message().to_string(),
                };
            }
            if set.status != JobStatus::Completed {
                return Presentation::Processing;
            }
            let cards = set.ordered_cards();
            if cards.is_empty() {
                Presentation::NoResults
            } else {
                Presentation::Completed(cards)
            }
        }
    }
}

impl Presentation {
    pub fn recovery(&self) -> Option<RecoveryAction> {
        match self {
            Presentation::Loading | Presentation::Processing => None,
            Presentation::Error { .. } => Some(RecoveryAction::TryAgain),
            Presentation::NoResults => Some(RecoveryAction::UploadNew),
            Presentation::Completed(_) => Some(RecoveryAction::BackToUpload),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Presentation::Loading => "Loading flashcards...",
            Presentation::Processing => "Processing Your PDF",
            Presentation::Error { .. } => "Error",
            Presentation::Completed(_) => "Ready to Study!",
            Presentation::NoResults => "No Flashcards Found",
        }
    }
}

/// Visual tone of the processing banner; the view maps it to a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Working,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Working => "status-working",
            Tone::Success => "status-success",
            Tone::Warning => "status-warning",
            Tone::Danger => "status-danger",
        }
    }
}

/// Heading, message and tone shown while a job is being polled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBanner {
    pub heading: &'static str,
    pub message: String,
    pub tone: Tone,
    pub offers_retry: bool,
}

impl StatusBanner {
    pub fn working() -> Self {
        Self {
            heading: "Processing Your PDF",
            message: "Generating flashcards with AI".to_string(),
            tone: Tone::Working,
            offers_retry: false,
        }
    }

    pub fn for_report(report: &StatusReport) -> Self {
        if report.status == JobStatus::Completed {
            return Self {
                heading: "Ready to Study!",
                message: "Flashcards generated successfully!".to_string(),
                tone: Tone::Success,
                offers_retry: false,
            };
        }
        match (report.status.failure_kind(), report.failure_message()) {
            (Some(kind), Some(message)) => Self {
                heading: "Oops!",
                message,
                tone: match kind {
                    FailureKind::QuotaExceeded
                    | FailureKind::Timeout => Tone::Warning,
                    _ => Tone::Danger,
                },
                offers_retry: true,
            },
            _ => Self::working(),
        }
    }

    /// Banner for the poller's final word, which may be a client-side timeout
    /// or an error that never came from a status report.
    pub fn for_outcome(outcome: &PollOutcome) -> Self {
        match outcome {
            PollOutcome::Completed => Self::for_report(&StatusReport::new(JobStatus::Completed)),
            PollOutcome::Failed(error) => Self {
                heading: "Oops!",
                message: error.to_string(),
                tone: if error.failure_kind() == Some(FailureKind::Timeout) {
                    Tone::Warning
                } else {
                    Tone::Danger
                },
                offers_retry: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(status: &str, cards: usize) -> FetchState {
        FetchState::Loaded(FlashcardSet {
            job_id: "abc123".into(),
            status: JobStatus::from(status.to_string()),
            flashcards: (0..cards)
                .map(|i| Flashcard {
                    id: i as i64,
                    question: format!("Q{i}"),
                    answer: format!("A{i}"),
                    card_number: (cards - i) as u32,
                })
                .collect(),
        })
    }

    #[test]
    fn every_status_maps_to_exactly_one_view() {
        let cases = [
            ("uploaded", "processing"),
            ("processing", "processing"),
            ("queued", "processing"),
            ("error", "error"),
            ("quota_exceeded", "error"),
            ("auth_error", "error"),
            ("timeout", "error"),
            ("service_error", "error"),
        ];
        for (status, expected) in cases {
            let got = match present(&set(status, 0)) {
                Presentation::Processing => "processing",
                Presentation::Error { .. } => "error",
                other => panic!("{status} mapped to {other:?}"),
            };
            assert_eq!(got, expected, "status {status}");
        }
    }

    #[test]
    fn completed_without_cards_is_no_results_not_error() {
        assert_eq!(present(&set("completed", 0)), Presentation::NoResults);
        assert_eq!(
            Presentation::NoResults.recovery(),
            Some(RecoveryAction::UploadNew)
        );
    }

    #[test]
    fn completed_cards_come_out_in_card_number_order() {
        match present(&set("completed", 10)) {
            Presentation::Completed(cards) => {
                let numbers: Vec<_> = cards.iter().map(|c| c.card_number).collect();
                assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn loading_and_fetch_failure() {
        assert_eq!(present(&FetchState::Loading), Presentation::Loading);
        assert_eq!(Presentation::Loading.recovery(), None);
        let failed = present(&FetchState::Failed(PipelineError::Transport(
            "Proxy could not reach http://backend:8000/flashcards/abc".into(),
        )));
        assert_eq!(failed.recovery(), Some(RecoveryAction::TryAgain));
    }

    #[test]
    fn banner_prefers_backend_message() {
        let banner = StatusBanner::for_report(
            &StatusReport::new(JobStatus::QuotaExceeded).with_message("AI quota exceeded"),
        );
        assert_eq!(banner.message, "AI quota exceeded");
        assert_eq!(banner.tone, Tone::Warning);
        assert!(banner.offers_retry);

        let working = StatusBanner::for_report(&StatusReport::new(JobStatus::Uploaded));
        assert_eq!(working, StatusBanner::working());
    }

    #[test]
    fn banner_for_client_timeout() {
        let banner = StatusBanner::for_outcome(&PollOutcome::Failed(
            PipelineError::BackendFailure {
                kind: FailureKind::Timeout,
                message: "too long".into(),
            },
        ));
        assert_eq!(banner.message, "too long");
        assert_eq!(banner.tone, Tone::Warning);
    }
}
