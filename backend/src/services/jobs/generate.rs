use super::job_path;
use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};

/// `POST /api/generate/{job_id}`: starts card generation for an uploaded PDF.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    job_id: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let path = job_path("/generate-flashcards", &job_id)?;
    forwarder.forward(ProxyRequest::post(path)).await
}
