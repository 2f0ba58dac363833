//! Flashcard page for one job.
//!
//! Fetches `/api/flashcards/{job_id}` once and renders exactly the view that
//! `common::presenter::present` picks for what came back. While the job is
//! still running the page hosts a [`ProcessingStatus`] and fetches again when
//! it completes.

mod viewer;

use common::error::PipelineError;
use common::model::flashcard::FlashcardSet;
use common::presenter::{present, FetchState, Presentation, RecoveryAction};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::processing_status::ProcessingStatus;
use crate::route::Route;

pub use viewer::FlashcardViewer;

#[derive(Properties, PartialEq, Clone)]
pub struct FlashcardsPageProps {
    pub job_id: String,
}

pub enum Msg {
    Loaded(Result<FlashcardSet, PipelineError>),
    Reload,
    Recover(RecoveryAction),
}

pub struct FlashcardsPage {
    fetch: FetchState,
}

impl Component for FlashcardsPage {
    type Message = Msg;
    type Properties = FlashcardsPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            fetch: FetchState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(set)) => self.fetch = FetchState::Loaded(set),
            Msg::Loaded(Err(e)) => {
                gloo_console::warn!("flashcard fetch failed:", e.to_string());
                self.fetch = FetchState::Failed(e);
            }
            Msg::Reload => {
                self.fetch = FetchState::Loading;
                load(ctx);
            }
            // A fetch that failed is worth repeating; a job that failed has to
            // start over from a new upload.
            Msg::Recover(RecoveryAction::TryAgain) if matches!(self.fetch, FetchState::Failed(_)) => {
                self.fetch = FetchState::Loading;
                load(ctx);
            }
            Msg::Recover(_) => {
                Route::Upload.navigate();
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let presentation = present(&self.fetch);
        let job_id = ctx.props().job_id.clone();

        let body = match &presentation {
            Presentation::Loading => html! { <div class="spinner" /> },
            Presentation::Processing => html! {
                <ProcessingStatus
                    job_id={job_id}
                    on_complete={ctx.link().callback(|_| Msg::Reload)}
                    on_retry={ctx.link().callback(|_| Msg::Recover(RecoveryAction::UploadNew))} />
            },
            Presentation::Error { message } => html! {
                <div class="alert alert-danger">{ message }</div>
            },
            Presentation::NoResults => html! {
                <p>{ "No Flashcards Available" }</p>
            },
            Presentation::Completed(cards) => html! {
                <FlashcardViewer cards={cards.clone()} />
            },
        };

        let heading = match &presentation {
            Presentation::Processing => None,
            _ => Some(presentation.heading()),
        };

        html! {
            <section class="flashcards-page">
                if let Some(heading) = heading {
                    <h1>{ heading }</h1>
                }
                { body }
                if let Some(action) = presentation.recovery() {
                    <button class="btn btn-secondary"
                        onclick={ctx.link().callback(move |_| Msg::Recover(action))}>
                        { action.label() }
                    </button>
                }
            </section>
        }
    }
}

fn load(ctx: &Context<FlashcardsPage>) {
    let link = ctx.link().clone();
    let job_id = ctx.props().job_id.clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(api::fetch_flashcards(&job_id).await));
    });
}
