//! Reusable UI components for the catalog pages.
//!
//! ARCHITECTURE
//! ============
//! Components receive state and callbacks as props; pages own the signals
//! and the network calls.

pub mod delete_modal;
pub mod message_area;
pub mod product_card;
pub mod product_fields;
pub mod status_badge;
