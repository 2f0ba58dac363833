//! View for the YouTube form: options on top, generated cards below.

use common::model::youtube::{extract_video_id, YouTubeCard, YouTubeFlashcardsResponse, MAX_CARDS, MIN_CARDS};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::YouTubeForm;

fn input_value(e: InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn view(form: &YouTubeForm, ctx: &Context<YouTubeForm>) -> Html {
    let link = ctx.link();

    html! {
        <section class="youtube-page">
            <h1>{ "YouTube to Flashcards" }</h1>

            <div class="form-row">
                <input type="url" class="form-control" placeholder="https://www.youtube.com/watch?v=..."
                    value={form.url.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetUrl(input_value(e)))} />
                if let Some(id) = extract_video_id(&form.url) {
                    <span class="hint">{ format!("Video {id}") }</span>
                }
            </div>

            <div class="form-row">
                <label>
                    { "Cards " }
                    <input type="number" min={MIN_CARDS.to_string()} max={MAX_CARDS.to_string()}
                        value={form.n_cards.to_string()}
                        oninput={link.callback(|e: InputEvent| Msg::SetCardCount(input_value(e)))} />
                </label>
                <label>
                    { "Caption languages " }
                    <input type="text" value={form.lang_hint.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetLangHint(input_value(e)))} />
                </label>
            </div>

            <div class="form-row options">
                { checkbox("Allow auto-generated captions", form.allow_auto_generated, link.callback(|_| Msg::ToggleAutoGenerated)) }
                { checkbox("Use cookies", form.use_cookies, link.callback(|_| Msg::ToggleCookies)) }
                { checkbox("Enable fallback extractor", form.enable_fallback, link.callback(|_| Msg::ToggleFallback)) }
            </div>

            <div class="form-row actions">
                <button class="btn btn-secondary"
                    disabled={!form.has_valid_url() || form.is_busy()}
                    onclick={link.callback(|_| Msg::CheckTracks)}>
                    { if form.checking { "Checking..." } else { "Check captions" } }
                </button>
                <button class="btn btn-primary" disabled={!form.can_generate()}
                    onclick={link.callback(|_| Msg::Generate)}>
                    { if form.generating { "Generating..." } else { "Generate" } }
                </button>
            </div>

            { tracks_view(form) }

            if let Some(error) = &form.error {
                <div class="alert alert-danger">{ error }</div>
            }

            if let Some(result) = &form.result {
                { result_view(form, result, link) }
            }
        </section>
    }
}

fn checkbox(label: &'static str, checked: bool, onchange: Callback<Event>) -> Html {
    html! {
        <label class="checkbox">
            <input type="checkbox" {checked} {onchange} />
            { format!(" {label}") }
        </label>
    }
}

fn tracks_view(form: &YouTubeForm) -> Html {
    let Some(tracks) = &form.tracks else {
        return html! {};
    };
    if tracks.tracks.is_empty() {
        return html! { <p class="hint">{ "No caption tracks found." }</p> };
    }
    let listed = tracks
        .tracks
        .iter()
        .map(|t| format!("{} ({})", t.lang, t.kind))
        .collect::<Vec<_>>()
        .join(", ");
    html! {
        <p class="hint">
            { format!("Available captions: {listed}") }
            if tracks.gated {
                { " · sign-in required" }
            }
        </p>
    }
}

fn result_view(form: &YouTubeForm, result: &YouTubeFlashcardsResponse, link: &Scope<YouTubeForm>) -> Html {
    html! {
        <div class="youtube-result">
            <h2>{ result.title.clone().unwrap_or_else(|| "Generated cards".to_string()) }</h2>
            <p class="hint">{ format!("{} cards · {}", result.cards.len(), result.lang) }</p>
            { for result.warnings.iter().map(|w| html! { <div class="alert alert-warning">{ w }</div> }) }

            <ol class="card-list">
                { for result.cards.iter().map(|card| card_view(card, &result.url)) }
            </ol>

            <div class="form-row actions">
                <button class="btn btn-primary" disabled={!form.can_save()}
                    onclick={link.callback(|_| Msg::Save)}>
                    { if form.saving { "Saving..." } else { "Save all" } }
                </button>
                if form.saved_deck.is_some() {
                    <button class="btn btn-success" onclick={link.callback(|_| Msg::OpenDeck)}>
                        { "Study deck" }
                    </button>
                }
            </div>
        </div>
    }
}

fn card_view(card: &YouTubeCard, video_url: &str) -> Html {
    html! {
        <li class="card-item">
            <div class="card-front">{ &card.front }</div>
            <div class="card-back">{ &card.back }</div>
            <div class="card-meta">
                if card.start_s.is_some() {
                    <a href={card.timestamp_link(video_url)} target="_blank" rel="noopener noreferrer">
                        { card.timestamp_label() }
                    </a>
                }
                if let Some(difficulty) = card.difficulty {
                    <span class="badge">{ format!("{difficulty:?}") }</span>
                }
                { for card.tags.iter().map(|t| html! { <span class="tag">{ t }</span> }) }
            </div>
            if let Some(evidence) = &card.evidence {
                <blockquote class="evidence">{ evidence }</blockquote>
            }
        </li>
    }
}
