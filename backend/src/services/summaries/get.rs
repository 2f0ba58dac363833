use crate::error::API_BASE_HEADER;
use crate::error::ProxyError;
use crate::proxy::forwarder::REQUEST_ID_HEADER;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};
use common::model::summary::Summary;
use common::validation::validate_job_id;

/// `GET /api/summaries/{source_id}`.
///
/// A source the backend does not know yet is shown as having no summary
/// rather than as an error.
pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    source_id: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    validate_job_id(&source_id)?;

    let upstream = forwarder
        .send(ProxyRequest::get(format!("/summaries/{source_id}")))
        .await?;
    if upstream.status != 404 {
        return Ok(upstream.into_http_response());
    }

    Ok(HttpResponse::Ok()
        .insert_header((API_BASE_HEADER, upstream.origin.as_str()))
        .insert_header((REQUEST_ID_HEADER, upstream.request_id.to_string()))
        .json(Summary::empty(source_id.into_inner())))
}
