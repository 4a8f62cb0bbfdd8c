//! Color literals for generated markup.

use layerxaml_core::{Color, ExportOptions, StyleContainer};

use crate::templates::static_resource;

/// Resolves colors to the literal written into markup.
///
/// A color that matches a project color resource is written as a reference
/// to that resource; any other color is written as a hex value.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    project: Option<&'a StyleContainer>,
    options: &'a ExportOptions,
}

impl<'a> ColorResolver<'a> {
    pub fn new(project: Option<&'a StyleContainer>, options: &'a ExportOptions) -> Self {
        Self { project, options }
    }

    /// Uppercase hex literal, `#RRGGBB` or `#AARRGGBB`.
    pub fn hex(&self, color: &Color) -> String {
        color.to_hex()
    }

    /// Resource reference when the project defines an equal color, hex
    /// otherwise.
    pub fn literal(&self, color: &Color) -> String {
        match self
            .project
            .and_then(|project| project.find_color_equal(color))
        {
            Some(named) => static_resource(&self.resource_key(&named.name)),
            None => self.hex(color),
        }
    }

    /// Resource key for a resource name: the duplicate suffix (first
    /// occurrence) and all whitespace removed.
    pub fn resource_key(&self, name: &str) -> String {
        let name = match self.options.duplicate_suffix() {
            Some(suffix) => name.replacen(suffix, "", 1),
            None => name.to_string(),
        };
        name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}
