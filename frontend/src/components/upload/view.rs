//! View for the upload form: a drop zone that doubles as a file picker, the
//! chosen file, and the submit button.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{limit_label, size_label, UploadForm};

pub fn view(form: &UploadForm, ctx: &Context<UploadForm>) -> Html {
    let link = ctx.link();

    let on_change = link.callback(|e: Event| {
        let file = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        Msg::FileChosen(file)
    });
    let on_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });
    let on_drag_leave = link.callback(|_: DragEvent| Msg::SetDragging(false));
    let on_drop = link.callback(|e: DragEvent| {
        e.prevent_default();
        let file = e
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        Msg::FileChosen(file)
    });

    let input_ref = form.input_ref.clone();
    let open_picker = Callback::from(move |_: MouseEvent| {
        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
            input.click();
        }
    });

    let zone_class = classes!("drop-zone", form.dragging.then_some("drop-zone-active"));

    html! {
        <div class="upload-card">
            <h2>{ "Upload a PDF" }</h2>
            <input type="file" accept="application/pdf,.pdf" hidden=true
                ref={form.input_ref.clone()}
                onchange={on_change}
                disabled={form.is_busy()} />
            <div class={zone_class}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
                onclick={open_picker}>
                <p>{ "Drop your PDF here or click to browse" }</p>
                <p class="hint">{ limit_label() }</p>
            </div>

            { selected_file(form, link) }

            if let Some(error) = &form.error {
                <div class="alert alert-danger">{ error }</div>
            }

            <button class="btn btn-primary"
                disabled={!form.can_submit()}
                onclick={link.callback(|_| Msg::Submit)}>
                { form.stage.label().unwrap_or("Generate Flashcards") }
            </button>
        </div>
    }
}

fn selected_file(form: &UploadForm, link: &Scope<UploadForm>) -> Html {
    match &form.file {
        Some(file) => html! {
            <div class="selected-file">
                <span class="file-name">{ file.name() }</span>
                <span class="file-size">{ size_label(file.size() as u64) }</span>
                <button class="btn btn-link" disabled={form.is_busy()}
                    onclick={link.callback(|_| Msg::Clear)}>
                    { "Remove" }
                </button>
            </div>
        },
        None => html! {},
    }
}
