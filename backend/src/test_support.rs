//! Helpers shared by the handler tests: a real loopback upstream standing in
//! for the processing backend, and an app wired the same way `main` wires it.

use crate::config::{BackendOrigin, DebugEndpoints, Timeouts};
use crate::proxy::Forwarder;
use crate::services;
use actix_web::{web, App, HttpServer};
use std::time::Duration;

/// Starts an HTTP server on an ephemeral loopback port and returns its origin.
pub async fn spawn_upstream<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind loopback upstream");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// An origin nothing listens on.
pub fn unreachable_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn forwarder_for(base: &str) -> Forwarder {
    let timeouts = Timeouts {
        default: Duration::from_secs(3),
        status: Duration::from_secs(3),
    };
    Forwarder::new(BackendOrigin::parse(Some(base)), timeouts).expect("client builds")
}

/// App configuration identical to the server's, minus static hosting.
pub fn proxy_app(
    forwarder: Forwarder,
    debug: DebugEndpoints,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(forwarder))
            .app_data(web::Data::new(debug))
            .app_data(services::json_config());
        services::configure(cfg);
    }
}

pub const BROWSER_BOUNDARY: &str = "----BrowserBoundary7MA4YWxkTrZu0gW";

/// A single-file multipart body as a browser would send it.
pub fn multipart_body(
    field: &str,
    filename: &str,
    media_type: &str,
    content: &[u8],
) -> (String, Vec<u8>) {
    let mut body = format!(
        "--{BROWSER_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: {media_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BROWSER_BOUNDARY}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={BROWSER_BOUNDARY}"),
        body,
    )
}
