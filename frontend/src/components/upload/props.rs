use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadProps {
    /// Receives the job id once the upload succeeded and generation started.
    pub on_job: Callback<String>,
}
