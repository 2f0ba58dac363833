//! Flashcard viewer: one card at a time with reveal, navigation and grading.
//!
//! All behaviour lives in `common::study::StudySession`; this component only
//! forwards clicks and key presses to it. The card area takes focus on mount so
//! the keyboard shortcuts work without clicking first.

use common::model::flashcard::Flashcard;
use common::study::{Grade, StudySession};
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FlashcardViewerProps {
    /// Cards in presentation order.
    pub cards: Vec<Flashcard>,
}

pub enum Msg {
    Key(String),
    ToggleReveal,
    Next,
    Previous,
    Grade(Grade),
    Restart,
    ToggleAutoAdvance,
}

pub struct FlashcardViewer {
    session: StudySession,
    card_ref: NodeRef,
}

impl Component for FlashcardViewer {
    type Message = Msg;
    type Properties = FlashcardViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: StudySession::new(ctx.props().cards.clone()),
            card_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let session = &mut self.session;
        match msg {
            Msg::Key(key) => session.handle_key(&key),
            Msg::ToggleReveal => {
                session.toggle_reveal();
                true
            }
            Msg::Next => session.next(),
            Msg::Previous => session.previous(),
            Msg::Grade(grade) => session.grade(grade),
            Msg::Restart => {
                session.restart();
                true
            }
            Msg::ToggleAutoAdvance => {
                let on = !session.auto_advance();
                session.set_auto_advance(on);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.session = StudySession::new(ctx.props().cards.clone());
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(card) = self.card_ref.cast::<HtmlElement>() {
                card.focus().ok();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let session = &self.session;
        let Some(card) = session.current() else {
            return html! {};
        };

        let on_key = link.callback(|e: KeyboardEvent| {
            let key = e.key();
            if matches!(key.as_str(), " " | "Spacebar" | "ArrowLeft" | "ArrowRight") {
                e.prevent_default();
            }
            Msg::Key(key)
        });

        html! {
            <div class="flashcard-viewer">
                <div class="viewer-header">
                    <span>{ format!("Card {} of {}", session.position(), session.total()) }</span>
                    <label class="auto-advance">
                        <input type="checkbox" checked={session.auto_advance()}
                            onchange={link.callback(|_| Msg::ToggleAutoAdvance)} />
                        { " Auto-advance after grading" }
                    </label>
                </div>
                <div class="progress">
                    <div class="progress-bar"
                        style={format!("width: {:.0}%", session.progress() * 100.0)} />
                </div>

                <div class="flashcard" tabindex="0" ref={self.card_ref.clone()}
                    onkeydown={on_key}
                    onclick={link.callback(|_| Msg::ToggleReveal)}>
                    <div class="flashcard-question">{ &card.question }</div>
                    if session.is_revealed() {
                        <hr />
                        <div class="flashcard-answer">{ &card.answer }</div>
                    } else {
                        <p class="hint">{ "Click or press Space to show the answer" }</p>
                    }
                </div>

                if session.is_revealed() {
                    <div class="grade-buttons">
                        { for Grade::ALL.iter().map(|&grade| html! {
                            <button class={classes!("btn", grade_class(grade))}
                                onclick={link.callback(move |_| Msg::Grade(grade))}>
                                { grade.label() }
                            </button>
                        }) }
                    </div>
                }

                <div class="viewer-nav">
                    <button class="btn" disabled={!session.has_previous()}
                        onclick={link.callback(|_| Msg::Previous)}>{ "Previous" }</button>
                    <button class="btn" onclick={link.callback(|_| Msg::Restart)}>{ "Restart" }</button>
                    <button class="btn" disabled={!session.has_next()}
                        onclick={link.callback(|_| Msg::Next)}>{ "Next" }</button>
                </div>
                <p class="hint">
                    { format!("Graded {} · Space: show/hide · ←/→: navigate · 1-4: grade", session.grades().len()) }
                </p>
            </div>
        }
    }
}

fn grade_class(grade: Grade) -> &'static str {
    match grade {
        Grade::Again => "btn-danger",
        Grade::Hard => "btn-warning",
        Grade::Good => "btn-primary",
        Grade::Easy => "btn-success",
    }
}
