//! View-model state for the catalog pages.
//!
//! DESIGN
//! ======
//! State modules are plain structs wrapped in `RwSignal` by pages. Keeping
//! them free of reactive types lets every transition be unit tested.

pub mod messages;
pub mod product_form;
pub mod product_list;
