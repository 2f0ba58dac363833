use common::error::PipelineError;
use common::model::youtube::{SaveDeckResponse, TracksResponse, YouTubeFlashcardsResponse};

pub enum Msg {
    SetUrl(String),
    SetCardCount(String),
    SetLangHint(String),
    ToggleAutoGenerated,
    ToggleCookies,
    ToggleFallback,
    CheckTracks,
    TracksChecked(Result<TracksResponse, PipelineError>),
    Generate,
    Generated(Result<YouTubeFlashcardsResponse, PipelineError>),
    Save,
    Saved(Result<SaveDeckResponse, PipelineError>),
    OpenDeck,
}
