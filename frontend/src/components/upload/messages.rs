use common::error::PipelineError;

pub enum Msg {
    FileChosen(Option<web_sys::File>),
    SetDragging(bool),
    Submit,
    Uploaded(String),
    GenerationStarted(String),
    Failed(PipelineError),
    Clear,
}
