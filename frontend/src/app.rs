//! Application shell: navigation bar plus the page for the current path.
//!
//! The upload page keeps the job it started in local state and swaps the form
//! for the processing view; once the job completes it moves on to the job's
//! flashcard page.

use yew::prelude::*;

use crate::components::flashcards::FlashcardsPage;
use crate::components::processing_status::ProcessingStatus;
use crate::components::upload::UploadForm;
use crate::components::youtube::YouTubeForm;
use crate::route::Route;

pub enum Msg {
    JobStarted(String),
    JobCompleted(String),
    StartOver,
}

pub struct App {
    route: Route,
    job_id: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::current(),
            job_id: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::JobStarted(job_id) => {
                self.job_id = Some(job_id);
                true
            }
            Msg::JobCompleted(job_id) => {
                Route::Flashcards(job_id).navigate();
                false
            }
            Msg::StartOver => {
                self.job_id = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = match &self.route {
            Route::Upload => match &self.job_id {
                Some(job_id) => html! {
                    <ProcessingStatus
                        job_id={job_id.clone()}
                        on_complete={link.callback(Msg::JobCompleted)}
                        on_retry={link.callback(|_| Msg::StartOver)} />
                },
                None => html! { <UploadForm on_job={link.callback(Msg::JobStarted)} /> },
            },
            Route::Flashcards(job_id) => html! { <FlashcardsPage job_id={job_id.clone()} /> },
            Route::YouTube => html! { <YouTubeForm /> },
            Route::NotFound => html! {
                <div class="alert alert-warning">{ "Page not found." }</div>
            },
        };

        html! {
            <div class="app">
                <nav class="navbar">
                    <a class="brand" href={Route::Upload.path()}>{ "Second Brain" }</a>
                    <a href={Route::Upload.path()}>{ "Upload PDF" }</a>
                    <a href={Route::YouTube.path()}>{ "YouTube" }</a>
                </nav>
                <main class="container">{ page }</main>
            </div>
        }
    }
}
