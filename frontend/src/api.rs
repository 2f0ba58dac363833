//! Calls to the proxy's `/api` routes.
//!
//! Every call reads the whole response into a [`RawResponse`] and lets
//! `common::submission` turn it into a typed value or a [`PipelineError`], so
//! the components never look at status codes or headers themselves.

use common::error::PipelineError;
use common::jobs::{JobHandle, StatusReport};
use common::model::flashcard::FlashcardSet;
use common::model::upload::UploadPayload;
use common::model::youtube::{SaveDeckResponse, TracksResponse, YouTubeFlashcardsResponse};
use common::requests::{SaveDeckRequest, YouTubeFlashcardsRequest};
use common::submission::{decode, parse_job_handle, RawResponse, PROXY_ERROR_HEADER};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::{File, FormData};

const NETWORK_ERROR: &str = "Network error or API unavailable.";

async fn read(sent: Result<Response, gloo_net::Error>) -> Result<RawResponse, PipelineError> {
    let response = sent.map_err(|e| {
        gloo_console::warn!("request failed:", e.to_string());
        PipelineError::Transport(format!("{NETWORK_ERROR} ({e})"))
    })?;
    let status = response.status();
    let proxy_error = response.headers().get(PROXY_ERROR_HEADER);
    let body = response
        .text()
        .await
        .map_err(|e| PipelineError::Transport(format!("{NETWORK_ERROR} ({e})")))?;

    let raw = RawResponse::new(status, body);
    Ok(match proxy_error {
        Some(class) => raw.with_proxy_error(class),
        None => raw,
    })
}

fn build_error(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::MalformedResponse(format!("Could not build request: {e}"))
}

/// Validates `file` and posts it as the `file` field of a multipart body.
/// Nothing is sent when validation fails.
pub async fn upload_pdf(file: &File) -> Result<JobHandle, PipelineError> {
    UploadPayload::file(file.name(), file.type_(), file.size() as u64).validate()?;

    let form = FormData::new().map_err(|_| build_error("FormData unavailable"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| build_error("could not attach file"))?;

    let request = Request::post("/api/upload/pdf").body(form).map_err(build_error)?;
    let raw = read(request.send().await).await?;
    parse_job_handle(&raw)
}

pub async fn start_generation(job_id: &str) -> Result<(), PipelineError> {
    let raw = read(Request::post(&format!("/api/generate/{job_id}")).send().await).await?;
    decode::<Value>(&raw).map(|_| ())
}

pub async fn fetch_status(job_id: &str) -> Result<StatusReport, PipelineError> {
    let raw = read(Request::get(&format!("/api/status/{job_id}")).send().await).await?;
    decode(&raw)
}

pub async fn fetch_flashcards(job_id: &str) -> Result<FlashcardSet, PipelineError> {
    let raw = read(Request::get(&format!("/api/flashcards/{job_id}")).send().await).await?;
    decode(&raw)
}

pub async fn check_tracks(url: &str) -> Result<TracksResponse, PipelineError> {
    let raw = read(
        Request::get("/api/youtube/tracks")
            .query([("url", url)])
            .send()
            .await,
    )
    .await?;
    decode(&raw)
}

pub async fn generate_youtube_cards(
    request: &YouTubeFlashcardsRequest,
) -> Result<YouTubeFlashcardsResponse, PipelineError> {
    let request = Request::post("/api/youtube/flashcards")
        .json(request)
        .map_err(build_error)?;
    decode(&read(request.send().await).await?)
}

pub async fn save_youtube_deck(request: &SaveDeckRequest) -> Result<SaveDeckResponse, PipelineError> {
    let request = Request::put("/api/youtube/flashcards")
        .json(request)
        .map_err(build_error)?;
    decode(&read(request.send().await).await?)
}
