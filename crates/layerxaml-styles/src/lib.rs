//! Typography classification and text style deduplication.
//!
//! Text styles collected from a design are bucketed into eleven typography
//! regions ([`Region`]), and every visually distinct style within a region is
//! given a sequential key such as `txtHeadline5_2`. Identical styles share a
//! key for as long as the [`StyleRegistry`] that minted it lives.
//!
//! # Example
//!
//! ```
//! use layerxaml_styles::{StyleRegistry, TextStyleDescriptor};
//!
//! let mut registry = StyleRegistry::new(false);
//! let body = TextStyleDescriptor::new(24.0)?
//!     .with_family("Roboto", 400)
//!     .with_color("#FF0000")
//!     .with_align("left");
//! let bold = body.clone().with_family("Roboto", 700);
//!
//! assert_eq!(registry.key_for(&body).to_string(), "txtHeadline5_1");
//! assert_eq!(registry.key_for(&body).to_string(), "txtHeadline5_1");
//! assert_eq!(registry.key_for(&bold).to_string(), "txtHeadline5_2");
//! # Ok::<(), layerxaml_styles::StyleError>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod region;
pub mod registry;

pub use descriptor::{FontAttributes, TextStyleDescriptor};
pub use error::{Result, StyleError};
pub use region::{classify, Region};
pub use registry::{GeneratedKey, RegisteredStyle, StyleRegistry, StyleSignature};
