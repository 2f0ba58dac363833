//! State of the upload form.

use common::model::upload::UploadPayload;
use common::validation::MAX_UPLOAD_BYTES;
use yew::NodeRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Uploading,
    Generating,
}

impl Stage {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Stage::Idle => None,
            Stage::Uploading => Some("Uploading PDF..."),
            Stage::Generating => Some("Generating flashcards with AI..."),
        }
    }
}

pub struct UploadForm {
    /// The chosen file. Only ever holds a file that passed validation.
    pub file: Option<web_sys::File>,
    pub stage: Stage,
    pub dragging: bool,
    pub error: Option<String>,
    pub input_ref: NodeRef,
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            file: None,
            stage: Stage::Idle,
            dragging: false,
            error: None,
            input_ref: NodeRef::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_busy()
    }
}

/// Payload describing `file`, used to validate it before anything is sent.
pub fn describe(file: &web_sys::File) -> UploadPayload {
    UploadPayload::file(file.name(), file.type_(), file.size() as u64)
}

/// `"2.4 MB"`-style size label.
pub fn size_label(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

pub fn limit_label() -> String {
    format!("PDF up to {} MB", MAX_UPLOAD_BYTES >> 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(size_label(2 * 1024 * 1024 + 400 * 1024), "2.4 MB");
        assert_eq!(limit_label(), "PDF up to 10 MB");
        assert_eq!(Stage::Idle.label(), None);
        assert_eq!(Stage::Generating.label(), Some("Generating flashcards with AI..."));
    }
}
