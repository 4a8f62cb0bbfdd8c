//! XAML generation from design layers.
//!
//! This crate turns the design model of `layerxaml-core` into Xamarin.Forms
//! markup: color and text style resource dictionaries, plus per-layer
//! snippets (labels, images, frames, stack layouts) with a companion CSS
//! rule. Text style keys come from a [`StyleRegistry`] owned by the caller
//! for the length of one export run.
//!
//! # Example
//!
//! ```ignore
//! use layerxaml_codegen::{DesignExtension, XamlGenerator};
//!
//! let mut generator = XamlGenerator::new(options);
//! let labels = generator.export_text_styles(&ctx)?;
//! println!("{}", labels.code);
//! ```

pub mod color;
pub mod error;
pub mod generator;
pub mod templates;
pub mod xaml;

pub use color::ColorResolver;
pub use error::{CodegenError, Result};
pub use generator::{CodeBlock, DesignExtension, ExportCache, XamlGenerator};
pub use templates::TemplateEngine;

pub use layerxaml_styles::{GeneratedKey, Region, StyleRegistry};
