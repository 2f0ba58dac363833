use super::job_path;
use crate::error::ProxyError;
use crate::proxy::{Forwarder, ProxyRequest};
use actix_web::{web, HttpResponse};

pub(crate) async fn process(
    forwarder: web::Data<Forwarder>,
    job_id: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
    forwarder.origin()?;
    let path = job_path("/flashcards", &job_id)?;
    forwarder.forward(ProxyRequest::get(path)).await
}
