//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and routing helpers are pure; `timer` isolates the browser
//! clock so pages can schedule and cancel delayed actions.

pub mod format;
pub mod routes;
pub mod timer;
