use crate::error::ValidationError;
use crate::validation::{validate_http_url, validate_pdf};
use serde::{Deserialize, Serialize};

/// Where a URL submission comes from. Only YouTube is accepted by the backend today.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Youtube,
}

/// One submission: a file or a URL, never both.
///
/// File submissions carry only metadata. The bytes themselves stay in the
/// browser `File` (or the proxy's multipart buffer) and are attached to the
/// outbound body after validation succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadPayload {
    File {
        filename: String,
        media_type: String,
        size: u64,
    },
    Url {
        url: String,
        kind: SourceKind,
    },
}

impl UploadPayload {
    pub fn file(filename: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        UploadPayload::File {
            filename: filename.into(),
            media_type: media_type.into(),
            size,
        }
    }

    pub fn youtube(url: impl Into<String>) -> Self {
        UploadPayload::Url {
            url: url.into().trim().to_string(),
            kind: SourceKind::Youtube,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            UploadPayload::File {
                filename,
                media_type,
                size,
            } => {
                if filename.trim().is_empty() {
                    return Err(ValidationError::MissingField("filename"));
                }
                validate_pdf(media_type, *size)
            }
            UploadPayload::Url { url, .. } => validate_http_url(url),
        }
    }
}
