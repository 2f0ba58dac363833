use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use common::validation::validate_job_id;

/// `POST /api/summaries/{source_id}/refresh`: the backend answers `202` once
/// the rebuild is queued.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    source_id: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    validate_job_id(&source_id)?;
    forwarder
        .forward(ProxyRequest::post(format!("/summaries/{source_id}/refresh")))
        .await
}
