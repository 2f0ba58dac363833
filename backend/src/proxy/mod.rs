//! Outbound side of the gateway: the [`forwarder::Forwarder`], the multipart
//! re-encoding it relies on, and the diagnostic header every `/api` answer
//! carries.

pub mod diagnostics;
pub mod forwarder;
pub mod multipart;

pub use forwarder::{Forwarder, ProxyRequest, Upstream};
