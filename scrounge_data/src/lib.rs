//! Shared data model for Scrounge game content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_defs};
