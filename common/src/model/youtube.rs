//! YouTube-to-flashcards models and the small helpers the form needs.
//!
//! Caption extraction and card generation happen in the external backend; the
//! client only shapes the request, shows the returned cards and saves them.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const MIN_CARDS: u8 = 5;
pub const MAX_CARDS: u8 = 20;
pub const DEFAULT_CARDS: u8 = 10;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A generated card, optionally anchored to a span of the video.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct YouTubeCard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub cloze: Option<String>,
    #[serde(default)]
    pub start_s: Option<f64>,
    #[serde(default)]
    pub end_s: Option<f64>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl YouTubeCard {
    /// `m:ss` label of the card's start offset.
    pub fn timestamp_label(&self) -> String {
        let total = self.start_s.unwrap_or(0.0).max(0.0).floor() as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }

    /// Link that opens `video_url` at the card's start offset.
    pub fn timestamp_link(&self, video_url: &str) -> String {
        let secs = self.start_s.unwrap_or(0.0).max(0.0).floor() as u64;
        let sep = if video_url.contains('?') { '&' } else { '?' };
        format!("{video_url}{sep}t={secs}")
    }
}

/// Body of `POST /youtube/flashcards`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct YouTubeFlashcardsResponse {
    pub video_id: String,
    pub url: String,
    pub lang: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cards: Vec<YouTubeCard>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Body of `POST /youtube/save`: the synthetic deck id the viewer opens.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SaveDeckResponse {
    pub pdf_id: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CaptionTrack {
    pub lang: String,
    pub kind: String,
}

/// Body of `GET /youtube/tracks`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TracksResponse {
    pub video_id: String,
    #[serde(default)]
    pub tracks: Vec<CaptionTrack>,
    #[serde(default)]
    pub gated: bool,
}

impl TracksResponse {
    /// When no English track exists, the preferred hint becomes the first
    /// available track followed by `en`. `None` means keep the current hint.
    pub fn suggested_lang_hint(&self) -> Option<Vec<String>> {
        let has_english = self.tracks.iter().any(|t| t.lang.starts_with("en"));
        match self.tracks.first() {
            Some(first) if !has_english => Some(vec![first.lang.clone(), "en".to_string()]),
            _ => None,
        }
    }
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|shorts/|embed/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("video id pattern is valid")
    })
}

/// Extracts the 11-character video id from the common YouTube URL shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_pattern()
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parses a comma-separated language list, dropping blanks.
pub fn parse_lang_hint(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn default_lang_hint() -> Vec<String> {
    vec!["en".into(), "en-US".into(), "en-GB".into()]
}

pub fn clamp_card_count(n: u8) -> u8 {
    n.clamp(MIN_CARDS, MAX_CARDS)
}
