//! PDF upload: the first half of the pipeline.
//!
//! ## Workflow
//!
//! 1.  **Pick**: the user chooses or drops one file. It is checked against the
//!     same rules the proxy enforces (PDF only, at most 10 MB) and a rejected
//!     file never leaves the browser.
//! 2.  **Upload**: the file is posted to `/api/upload/pdf`; the proxy answers
//!     with the backend-assigned job id.
//! 3.  **Generate**: `/api/generate/{job_id}` starts card generation.
//! 4.  **Hand-off**: the job id is emitted through `on_job` so the parent can
//!     start polling.
//!
//! Any failure lands in `UploadForm::error` and re-enables the form.

mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::UploadProps;
pub use state::UploadForm;

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
