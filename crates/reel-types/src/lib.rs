//! Foundation types for the reel player skin workspace.
//!
//! Shared by all reel crates: color parsing and blending, plus the error
//! type used by the configuration layer.

pub mod color;
pub mod error;
