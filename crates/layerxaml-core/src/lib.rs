//! Core types and utilities shared by the layerxaml crates.
//!
//! This crate provides the foundational pieces the generator works with:
//! - The design model handed over by the host application (colors, text
//!   styles, layers, projects)
//! - Hex color formatting
//! - Export options
//! - Error types

pub mod errors;
pub mod options;
pub mod types;

pub use errors::*;
pub use options::*;
pub use types::*;
