//! Networking modules for the product REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies responses, `types` defines
//! the wire schema shared with the backend.

pub mod api;
pub mod types;
