//! Networking modules for the lead-search endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `interpret` classifies the reply, and
//! `types` defines the wire schema.

pub mod api;
pub mod interpret;
pub mod types;
