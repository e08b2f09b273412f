//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its signals, issues the REST calls, and maps outcomes to
//! messages through pure helpers that live next to it.

pub mod create;
pub mod edit;
pub mod list;
