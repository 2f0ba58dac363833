//! Elm-style update for the upload form.
//!
//! The upload and the generation trigger run one after the other inside
//! `spawn_local`; each result comes back as a message, so the form state only
//! ever changes here.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::toast::{show_toast, ToastKind};

use super::messages::Msg;
use super::state::{describe, Stage, UploadForm};

pub fn update(form: &mut UploadForm, ctx: &Context<UploadForm>, msg: Msg) -> bool {
    match msg {
        Msg::FileChosen(file) => {
            form.dragging = false;
            let Some(file) = file else {
                return false;
            };
            match describe(&file).validate() {
                Ok(()) => {
                    form.error = None;
                    form.file = Some(file);
                }
                Err(e) => {
                    form.file = None;
                    form.error = Some(e.to_string());
                }
            }
            true
        }
        Msg::SetDragging(dragging) => {
            let changed = form.dragging != dragging;
            form.dragging = dragging;
            changed
        }
        Msg::Submit => {
            let Some(file) = form.file.clone().filter(|_| !form.is_busy()) else {
                return false;
            };
            form.error = None;
            form.stage = Stage::Uploading;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::upload_pdf(&file).await {
                    Ok(handle) => link.send_message(Msg::Uploaded(handle.job_id)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            true
        }
        Msg::Uploaded(job_id) => {
            show_toast("PDF uploaded successfully!", ToastKind::Info);
            form.stage = Stage::Generating;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::start_generation(&job_id).await {
                    Ok(()) => link.send_message(Msg::GenerationStarted(job_id)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            true
        }
        Msg::GenerationStarted(job_id) => {
            gloo_console::log!("generation started for", job_id.clone());
            ctx.props().on_job.emit(job_id);
            form.stage = Stage::Idle;
            true
        }
        Msg::Failed(e) => {
            gloo_console::warn!("upload failed:", e.to_string());
            form.stage = Stage::Idle;
            form.error = Some(e.to_string());
            true
        }
        Msg::Clear => {
            form.file = None;
            form.error = None;
            if let Some(input) = form.input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
    }
}
