//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared payload
//! schema, including the profile persisted with the session.

pub mod api;
pub mod types;
