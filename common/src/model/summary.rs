use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Citation {
    pub chunk_id: String,
    #[serde(default)]
    pub start_char: Option<u32>,
    #[serde(default)]
    pub end_char: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub preview_text: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    Supported,
    Insufficient,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SummarySentence {
    pub id: String,
    pub order_index: u32,
    pub sentence_text: String,
    pub support_status: SupportStatus,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// Citation-backed summary of one source, as produced by the backend.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub summary_id: String,
    pub source_id: String,
    #[serde(default)]
    pub sentences: Vec<SummarySentence>,
}

impl Summary {
    /// What a source without a summary yet looks like to the client.
    pub fn empty(source_id: impl Into<String>) -> Self {
        Self {
            summary_id: String::new(),
            source_id: source_id.into(),
            sentences: Vec::new(),
        }
    }
}
