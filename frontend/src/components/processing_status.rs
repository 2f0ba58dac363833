//! Processing view: polls one job until it settles.
//!
//! The loop itself lives in `common::poll`; this component supplies the
//! fetch (`/api/status/{job_id}`) and the sleep (gloo timers), and renders
//! whatever banner the latest status maps to. Dropping the component cancels
//! the loop, so no message is sent after teardown.

use common::jobs::StatusReport;
use common::poll::{CancelToken, PollOutcome, StatusPoller};
use common::presenter::StatusBanner;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::toast::{show_toast, ToastKind};

#[derive(Properties, PartialEq, Clone)]
pub struct ProcessingProps {
    pub job_id: String,
    pub on_complete: Callback<String>,
    /// Shown as "Try Again" once the job failed.
    pub on_retry: Callback<()>,
}

pub enum Msg {
    Status(StatusReport),
    Finished(PollOutcome),
}

pub struct ProcessingStatus {
    banner: StatusBanner,
    polls: u32,
    cancel: CancelToken,
}

impl Component for ProcessingStatus {
    type Message = Msg;
    type Properties = ProcessingProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            banner: StatusBanner::working(),
            polls: 0,
            cancel: start_polling(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        match msg {
            Msg::Status(report) => {
                self.polls += 1;
                gloo_console::debug!("job status:", report.status.as_str().to_string());
                self.banner = StatusBanner::for_report(&report);
            }
            Msg::Finished(outcome) => {
                self.banner = StatusBanner::for_outcome(&outcome);
                match outcome {
                    PollOutcome::Completed => {
                        show_toast("Flashcards generated successfully!", ToastKind::Info);
                        ctx.props().on_complete.emit(ctx.props().job_id.clone());
                    }
                    PollOutcome::Failed(e) => {
                        gloo_console::warn!("job failed:", e.to_string());
                    }
                }
            }
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().job_id != old_props.job_id {
            self.cancel.cancel();
            self.banner = StatusBanner::working();
            self.polls = 0;
            self.cancel = start_polling(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let banner = &self.banner;
        let on_retry = ctx.props().on_retry.reform(|_: MouseEvent| ());
        html! {
            <div class={classes!("status-banner", banner.tone.css_class())}>
                <h2>{ banner.heading }</h2>
                <p>{ &banner.message }</p>
                if !banner.offers_retry && self.polls > 0 {
                    <p class="hint">{ format!("Checked {} time(s)", self.polls) }</p>
                }
                if banner.offers_retry {
                    <button class="btn btn-primary" onclick={on_retry}>{ "Try Again" }</button>
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel.cancel();
    }
}

fn start_polling(ctx: &Context<ProcessingStatus>) -> CancelToken {
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let link = ctx.link().clone();
    let job_id = ctx.props().job_id.clone();

    spawn_local(async move {
        let mut poller = StatusPoller::default();
        let status_link = link.clone();
        let outcome = poller
            .run(
                &token,
                |attempt| {
                    let job_id = job_id.clone();
                    async move {
                        gloo_console::debug!("status poll", attempt);
                        api::fetch_status(&job_id).await
                    }
                },
                gloo_timers::future::sleep,
                |report| status_link.send_message(Msg::Status(report.clone())),
            )
            .await;
        if let Some(outcome) = outcome {
            link.send_message(Msg::Finished(outcome));
        }
    });

    cancel
}
