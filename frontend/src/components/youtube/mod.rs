//! YouTube-to-flashcards form.
//!
//! The user pastes a video URL, optionally checks which caption tracks exist,
//! generates cards through the proxy and saves them as a deck that opens in
//! the regular flashcard viewer.
//!
//! ## Workflow
//!
//! 1.  **Check captions** (optional): `GET /api/youtube/tracks`. When the
//!     video has no English track the language hint is rewritten to put the
//!     first available track first.
//! 2.  **Generate**: `POST /api/youtube/flashcards` with the extraction options
//!     passed through untouched.
//! 3.  **Save**: `PUT /api/youtube/flashcards` with the generated cards. The
//!     returned deck id links to `/flashcards/{id}`.

mod messages;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use state::YouTubeForm;

impl Component for YouTubeForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        YouTubeForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
