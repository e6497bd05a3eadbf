//! Shared domain logic for the FarmArea platform
//!
//! This crate contains the map core shared between the backend and the
//! browser (via WASM): the percentage coordinate model, the polygon draft
//! builder, the area overlay renderer, and boundary validation for
//! request inputs.

pub mod draft;
pub mod geometry;
pub mod overlay;
pub mod types;
pub mod validation;

pub use draft::*;
pub use geometry::*;
pub use overlay::*;
pub use types::*;
pub use validation::*;
