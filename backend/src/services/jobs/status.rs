use super::job_path;
use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};

/// `GET /api/status/{job_id}`.
///
/// Polled by the client every couple of seconds, so it runs on the shorter
/// status timeout: a slow answer is better retried than waited for.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    job_id: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let path = job_path("/status", &job_id)?;
    let timeout = forwarder.timeouts().status;
    forwarder
        .forward(ProxyRequest::get(path).timeout(timeout))
        .await
}
