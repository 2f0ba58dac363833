//! # Second Brain gateway
//!
//! Serves the compiled frontend and relays its `/api/...` calls to the
//! external flashcard processing backend.
//!
//! Start-up parses [`config::Args`], validates the backend origin once and
//! shares a single [`proxy::Forwarder`] with every worker. An invalid origin
//! is logged and the server starts anyway; the proxy routes then answer with
//! a configuration error until it is fixed.

mod config;
mod error;
mod proxy;
mod services;
mod static_files;
#[cfg(test)]
mod test_support;

use crate::config::Args;
use crate::proxy::Forwarder;
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let origin = args.origin();
    match &origin {
        Ok(origin) => info!("Proxying /api to {}", origin.as_str()),
        Err(e) => error!("{} Proxy routes will answer 500 until this is fixed.", e),
    }

    let debug = args.debug_endpoints();
    if debug.0 {
        info!("Debug endpoints enabled under /api/_debug");
    }

    let forwarder =
        web::Data::new(Forwarder::new(origin, args.timeouts()).map_err(std::io::Error::other)?);
    let static_dir = args.static_dir.clone();

    info!("Server running at http://{}:{}", args.host, args.port);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(proxy::diagnostics::tag_api_base))
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(forwarder.clone())
            .app_data(web::Data::new(debug))
            .configure(services::configure)
            .service(static_files::service(&static_dir))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}
