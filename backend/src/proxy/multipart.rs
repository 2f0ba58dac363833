//! Reads an inbound multipart body into owned parts and rebuilds it as a
//! fresh `reqwest` form for the outbound call.
//!
//! The inbound stream is consumed completely before anything is sent, so a
//! client that disconnects mid-upload never produces a half-forwarded body.

use crate::error::ProxyError;
use actix_multipart::Multipart;
use actix_web::web::{Bytes, BytesMut};
use common::error::ValidationError;
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File {
        filename: String,
        media_type: String,
        bytes: Bytes,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

#[cfg(test)]
impl FormPart {
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File {
                filename: filename.into(),
                media_type: media_type.into(),
                bytes: bytes.into(),
            },
        }
    }
}

/// Upper bound on a non-file field.
pub const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;
/// Upper bound on the number of fields in one body.
pub const MAX_PARTS: usize = 16;

/// Collects every field of `payload`. A file field larger than `max_file_bytes`
/// stops the read early with [`ValidationError::TooLarge`]; a text field over
/// [`MAX_TEXT_FIELD_BYTES`] or a body with more than [`MAX_PARTS`] fields stops
/// it with a bad request.
pub async fn collect_parts(
    mut payload: Multipart,
    max_file_bytes: u64,
) -> Result<Vec<FormPart>, ProxyError> {
    let mut parts = Vec::new();

    while let Some(item) = payload.next().await {
        if parts.len() >= MAX_PARTS {
            return Err(ProxyError::BadRequest(format!(
                "Too many form fields (at most {MAX_PARTS})."
            )));
        }
        let mut field = item?;
        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let declared = field.content_type().map(|m| m.essence_str().to_string());

        let mut buf = BytesMut::new();
        while let Some(chunk) = field.next().await {
            buf.extend_from_slice(&chunk?);
            if filename.is_some() && buf.len() as u64 > max_file_bytes {
                return Err(ValidationError::TooLarge {
                    size: buf.len() as u64,
                }
                .into());
            }
            if filename.is_none() && buf.len() > MAX_TEXT_FIELD_BYTES {
                return Err(ProxyError::BadRequest(format!(
                    "Field '{name}' is larger than {} KB.",
                    MAX_TEXT_FIELD_BYTES / 1024
                )));
            }
        }

        let value = match filename {
            Some(filename) => PartValue::File {
                media_type: resolve_media_type(declared.as_deref(), &filename),
                filename,
                bytes: buf.freeze(),
            },
            None => PartValue::Text(
                String::from_utf8(buf.to_vec())
                    .map_err(|_| ProxyError::BadRequest(format!("Field '{name}' is not UTF-8 text.")))?,
            ),
        };
        parts.push(FormPart { name, value });
    }

    Ok(parts)
}

/// Browsers send `application/octet-stream` when they do not know the type;
/// the filename extension is a better guess in that case.
fn resolve_media_type(declared: Option<&str>, filename: &str) -> String {
    match declared {
        Some(media_type) if media_type != "application/octet-stream" => media_type.to_string(),
        _ => mime_guess::from_path(filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

/// Builds the outbound form. `reqwest` picks a new boundary for every form.
///
/// Filenames are written quoted and unescaped, the way browsers send them,
/// so the backend sees exactly the name the user picked.
pub fn into_form(parts: Vec<FormPart>) -> Result<Form, ProxyError> {
    let mut form = Form::new().percent_encode_noop();
    for FormPart { name, value } in parts {
        form = match value {
            PartValue::Text(text) => form.text(name, text),
            PartValue::File {
                filename,
                media_type,
                bytes,
            } => {
                let part = Part::bytes(bytes.to_vec())
                    .file_name(filename)
                    .mime_str(&media_type)
                    .map_err(|e| ProxyError::BadRequest(format!("Invalid media type '{media_type}': {e}")))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::PayloadError;
    use actix_web::http::header::{self, HeaderMap, HeaderValue};
    use futures_util::stream;

    const BOUNDARY: &str = "----FieldsBoundary";

    fn text_fields(fields: &[(&str, String)]) -> Multipart {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&format!("multipart/form-data; boundary={BOUNDARY}")).unwrap(),
        );
        let chunks = stream::iter(vec![Ok::<_, PayloadError>(Bytes::from(body))]);
        Multipart::new(&headers, chunks)
    }

    #[actix_web::test]
    async fn small_text_fields_are_collected() {
        let payload = text_fields(&[("kind", "youtube".into()), ("note", "hi".into())]);
        let parts = collect_parts(payload, 1024).await.unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].value, PartValue::Text("youtube".into()));
    }

    #[actix_web::test]
    async fn oversized_text_field_is_rejected() {
        let payload = text_fields(&[("note", "x".repeat(MAX_TEXT_FIELD_BYTES + 1))]);
        let err = collect_parts(payload, 1024).await.unwrap_err();
        match err {
            ProxyError::BadRequest(detail) => assert!(detail.contains("'note'")),
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn too_many_fields_are_rejected() {
        let fields: Vec<(&str, String)> = (0..=MAX_PARTS).map(|i| ("f", i.to_string())).collect();
        let err = collect_parts(text_fields(&fields), 1024).await.unwrap_err();
        assert!(matches!(err, ProxyError::BadRequest(_)));
    }

    #[test]
    fn octet_stream_falls_back_to_extension() {
        assert_eq!(
            resolve_media_type(Some("application/octet-stream"), "notes.pdf"),
            "application/pdf"
        );
        assert_eq!(resolve_media_type(None, "notes.PDF"), "application/pdf");
        assert_eq!(
            resolve_media_type(Some("text/plain"), "notes.pdf"),
            "text/plain"
        );
    }

    #[test]
    fn form_gets_a_fresh_boundary_each_time() {
        let parts = vec![FormPart::file("file", "a.pdf", "application/pdf", &b"%PDF-1.4"[..])];
        let first = into_form(parts.clone()).unwrap();
        let second = into_form(parts).unwrap();
        assert_ne!(first.boundary(), second.boundary());
    }

    #[test]
    fn bad_media_type_is_a_bad_request() {
        let parts = vec![FormPart::file("file", "a.pdf", "not a mime", &b"x"[..])];
        assert!(matches!(into_form(parts), Err(ProxyError::BadRequest(_))));
    }
}
