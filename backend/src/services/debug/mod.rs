//! # Debug Routes
//!
//! Off unless `ENABLE_DEBUG_ENDPOINTS` is truthy. Meant for checking, from a
//! browser, which backend origin the gateway uses and whether it answers.

mod ping;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/_debug";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/ping", get().to(ping::process))
}
