use crate::model::upload::SourceKind;
use crate::model::youtube::{
    YouTubeCard, YouTubeFlashcardsResponse, clamp_card_count, default_lang_hint,
};
use serde::{Deserialize, Serialize};

/// Request payload for `POST /ingest/url`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IngestUrlRequest {
    pub url: String,
    #[serde(default)]
    pub kind: SourceKind,
}

/// Request payload for `POST /youtube/flashcards`.
///
/// The extraction options travel to the backend untouched; the client only
/// clamps `n_cards` into the range the backend accepts.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct YouTubeFlashcardsRequest {
    pub url: String,
    pub n_cards: u8,
    #[serde(rename = "langHint")]
    pub lang_hint: Vec<String>,
    pub allow_auto_generated: bool,
    pub use_cookies: bool,
    pub enable_fallback: bool,
}

impl YouTubeFlashcardsRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            n_cards: crate::model::youtube::DEFAULT_CARDS,
            lang_hint: default_lang_hint(),
            allow_auto_generated: true,
            use_cookies: false,
            enable_fallback: false,
        }
    }

    pub fn with_cards(mut self, n: u8) -> Self {
        self.n_cards = clamp_card_count(n);
        self
    }
}

/// Request payload for saving generated YouTube cards as a deck.
///
/// `title` is the generated title or `None`. It is never replaced by the
/// video id, so saving cannot overwrite an existing title with a bare id.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SaveDeckRequest {
    pub url: String,
    pub video_id: String,
    pub title: Option<String>,
    pub lang: String,
    pub cards: Vec<YouTubeCard>,
}

impl From<&YouTubeFlashcardsResponse> for SaveDeckRequest {
    fn from(resp: &YouTubeFlashcardsResponse) -> Self {
        Self {
            url: resp.url.clone(),
            video_id: resp.video_id.clone(),
            title: resp
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            lang: resp.lang.clone(),
            cards: resp.cards.clone(),
        }
    }
}
