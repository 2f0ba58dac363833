//! Form state and the request it produces.

use common::model::youtube::{
    clamp_card_count, default_lang_hint, parse_lang_hint, TracksResponse,
    YouTubeFlashcardsResponse, DEFAULT_CARDS,
};
use common::requests::YouTubeFlashcardsRequest;
use common::validation::validate_http_url;

pub struct YouTubeForm {
    pub url: String,
    pub n_cards: u8,
    /// Comma-separated, as typed.
    pub lang_hint: String,
    pub allow_auto_generated: bool,
    pub use_cookies: bool,
    pub enable_fallback: bool,

    pub checking: bool,
    pub generating: bool,
    pub saving: bool,

    pub tracks: Option<TracksResponse>,
    pub result: Option<YouTubeFlashcardsResponse>,
    pub saved_deck: Option<String>,
    pub error: Option<String>,
}

impl YouTubeForm {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            n_cards: DEFAULT_CARDS,
            lang_hint: default_lang_hint().join(", "),
            allow_auto_generated: true,
            use_cookies: false,
            enable_fallback: false,
            checking: false,
            generating: false,
            saving: false,
            tracks: None,
            result: None,
            saved_deck: None,
            error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.checking || self.generating || self.saving
    }

    pub fn has_valid_url(&self) -> bool {
        validate_http_url(self.url.trim()).is_ok()
    }

    pub fn can_generate(&self) -> bool {
        self.has_valid_url() && !self.is_busy()
    }

    pub fn can_save(&self) -> bool {
        !self.is_busy() && self.result.as_ref().is_some_and(|r| !r.cards.is_empty())
    }

    /// Card count from the number input. Non-numbers keep the current value.
    pub fn set_card_count(&mut self, raw: &str) {
        if let Ok(n) = raw.trim().parse::<u16>() {
            self.n_cards = clamp_card_count(n.min(u8::MAX as u16) as u8);
        }
    }

    /// An empty hint falls back to the English defaults.
    pub fn request(&self) -> YouTubeFlashcardsRequest {
        let mut lang_hint = parse_lang_hint(&self.lang_hint);
        if lang_hint.is_empty() {
            lang_hint = default_lang_hint();
        }
        YouTubeFlashcardsRequest {
            lang_hint,
            allow_auto_generated: self.allow_auto_generated,
            use_cookies: self.use_cookies,
            enable_fallback: self.enable_fallback,
            ..YouTubeFlashcardsRequest::new(self.url.trim()).with_cards(self.n_cards)
        }
    }

    pub fn apply_tracks(&mut self, tracks: TracksResponse) {
        if let Some(hint) = tracks.suggested_lang_hint() {
            self.lang_hint = hint.join(", ");
        }
        self.tracks = Some(tracks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::youtube::CaptionTrack;

    #[test]
    fn generate_needs_an_http_url_and_an_idle_form() {
        let mut form = YouTubeForm::new();
        assert!(!form.can_generate());
        form.url = "youtube.com/watch?v=dQw4w9WgXcQ".into();
        assert!(!form.can_generate());
        form.url = "  https://www.youtube.com/watch?v=dQw4w9WgXcQ ".into();
        assert!(form.can_generate());
        form.checking = true;
        assert!(!form.can_generate());
    }

    #[test]
    fn request_carries_every_option() {
        let mut form = YouTubeForm::new();
        form.url = " https://youtu.be/dQw4w9WgXcQ ".into();
        form.set_card_count("50");
        form.lang_hint = "es, , en".into();
        form.allow_auto_generated = false;
        form.use_cookies = true;
        form.enable_fallback = true;

        let request = form.request();
        assert_eq!(request.url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(request.n_cards, 20);
        assert_eq!(request.lang_hint, vec!["es", "en"]);
        assert!(!request.allow_auto_generated);
        assert!(request.use_cookies);
        assert!(request.enable_fallback);
    }

    #[test]
    fn card_count_input_is_clamped_and_junk_ignored() {
        let mut form = YouTubeForm::new();
        form.set_card_count("2");
        assert_eq!(form.n_cards, 5);
        form.set_card_count("abc");
        assert_eq!(form.n_cards, 5);
        form.set_card_count("12");
        assert_eq!(form.n_cards, 12);
    }

    #[test]
    fn blank_hint_falls_back_to_english() {
        let mut form = YouTubeForm::new();
        form.url = "https://youtu.be/dQw4w9WgXcQ".into();
        form.lang_hint = " , ".into();
        assert_eq!(form.request().lang_hint, default_lang_hint());
    }

    #[test]
    fn tracks_without_english_reorder_the_hint() {
        let mut form = YouTubeForm::new();
        form.apply_tracks(TracksResponse {
            video_id: "dQw4w9WgXcQ".into(),
            tracks: vec![CaptionTrack { lang: "de".into(), kind: "asr".into() }],
            gated: false,
        });
        assert_eq!(form.lang_hint, "de, en");
        assert!(form.tracks.is_some());
    }
}
