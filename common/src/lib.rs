//! Shared domain for the Second Brain ingest gateway.
//!
//! Everything here is runtime-agnostic so the same types and state machines
//! back both the actix proxy (`backend`) and the yew client (`frontend`).

pub mod error;
pub mod jobs;
pub mod model;
pub mod poll;
pub mod presenter;
pub mod requests;
pub mod study;
pub mod submission;
pub mod validation;
