use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::PipelineError;
use common::requests::SaveDeckRequest;

use crate::api;
use crate::components::toast::{show_toast, ToastKind};
use crate::route::Route;

use super::messages::Msg;
use super::state::YouTubeForm;

/// Backend detail when there is one, else `fallback`.
fn describe(error: &PipelineError, fallback: &str) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

pub fn update(form: &mut YouTubeForm, ctx: &Context<YouTubeForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetUrl(url) => {
            form.url = url;
            form.tracks = None;
        }
        Msg::SetCardCount(raw) => form.set_card_count(&raw),
        Msg::SetLangHint(hint) => form.lang_hint = hint,
        Msg::ToggleAutoGenerated => form.allow_auto_generated = !form.allow_auto_generated,
        Msg::ToggleCookies => form.use_cookies = !form.use_cookies,
        Msg::ToggleFallback => form.enable_fallback = !form.enable_fallback,

        Msg::CheckTracks => {
            if !form.has_valid_url() || form.is_busy() {
                return false;
            }
            form.checking = true;
            form.error = None;
            let url = form.url.trim().to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::TracksChecked(api::check_tracks(&url).await));
            });
        }
        Msg::TracksChecked(result) => {
            form.checking = false;
            match result {
                Ok(tracks) => form.apply_tracks(tracks),
                Err(e) => form.error = Some(describe(&e, "Failed to check tracks.")),
            }
        }

        Msg::Generate => {
            if !form.can_generate() {
                return false;
            }
            form.generating = true;
            form.error = None;
            form.result = None;
            form.saved_deck = None;
            let request = form.request();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Generated(api::generate_youtube_cards(&request).await));
            });
        }
        Msg::Generated(result) => {
            form.generating = false;
            match result {
                Ok(response) => {
                    for warning in &response.warnings {
                        gloo_console::warn!("generation warning:", warning.clone());
                    }
                    form.result = Some(response);
                }
                Err(e) => {
                    gloo_console::warn!("youtube generation failed:", e.to_string());
                    form.error = Some(describe(&e, "Network error or API unavailable."));
                }
            }
        }

        Msg::Save => {
            let Some(result) = form.result.as_ref().filter(|_| form.can_save()) else {
                return false;
            };
            let request = SaveDeckRequest::from(result);
            form.saving = true;
            form.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Saved(api::save_youtube_deck(&request).await));
            });
        }
        Msg::Saved(result) => {
            form.saving = false;
            match result {
                Ok(saved) => {
                    show_toast("Deck saved.", ToastKind::Info);
                    form.saved_deck = Some(saved.pdf_id);
                }
                Err(e) => {
                    let message = describe(&e, "Failed to save deck.");
                    show_toast(&message, ToastKind::Error);
                    form.error = Some(message);
                }
            }
        }
        Msg::OpenDeck => {
            if let Some(id) = &form.saved_deck {
                Route::Flashcards(id.clone()).navigate();
            }
            return false;
        }
    }
    true
}
