//! Export options supplied by the host application.

use serde::Deserialize;

use crate::errors::Result;

/// Where text alignment is emitted for generated text styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignmentMode {
    /// Alignment is written into each generated `Style`.
    Style,
    /// Alignment is left out of generated styles.
    #[default]
    None,
}

/// Options controlling an export.
///
/// Keys use the host's camelCase spelling so the option blob can be
/// deserialized as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Leave font family (and with it font weight) out of style signatures
    /// and generated output.
    pub ignore_font_family: bool,
    /// Whether text alignment is part of generated text styles.
    pub text_alignment_mode: TextAlignmentMode,
    /// Resources whose name ends with this suffix are duplicates and get
    /// skipped; the suffix is also stripped from resource keys.
    pub duplicate_suffix: Option<String>,
    /// Sort color resources by name.
    pub sort_resources: bool,
    /// Memoise resource dictionary exports on the generator.
    pub enable_cache: bool,
}

impl ExportOptions {
    /// Create options with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from the host's JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_ignore_font_family(mut self, ignore: bool) -> Self {
        self.ignore_font_family = ignore;
        self
    }

    pub fn with_text_alignment_mode(mut self, mode: TextAlignmentMode) -> Self {
        self.text_alignment_mode = mode;
        self
    }

    pub fn with_duplicate_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.duplicate_suffix = Some(suffix.into());
        self
    }

    pub fn with_sort_resources(mut self, sort: bool) -> Self {
        self.sort_resources = sort;
        self
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// The duplicate suffix, treating an empty string as unset.
    pub fn duplicate_suffix(&self) -> Option<&str> {
        self.duplicate_suffix.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether a resource name marks a duplicate that should be skipped.
    pub fn is_duplicate(&self, name: &str) -> bool {
        self.duplicate_suffix()
            .is_some_and(|suffix| name.ends_with(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::from_json("{}").unwrap();
        assert_eq!(options, ExportOptions::default());
        assert_eq!(options.text_alignment_mode, TextAlignmentMode::None);
    }

    #[test]
    fn test_from_host_json() {
        let options = ExportOptions::from_json(
            r#"{
                "ignoreFontFamily": true,
                "textAlignmentMode": "style",
                "duplicateSuffix": " copy",
                "sortResources": true,
                "enableCache": true
            }"#,
        )
        .unwrap();

        assert!(options.ignore_font_family);
        assert_eq!(options.text_alignment_mode, TextAlignmentMode::Style);
        assert_eq!(options.duplicate_suffix(), Some(" copy"));
        assert!(options.sort_resources);
        assert!(options.enable_cache);
    }

    #[test]
    fn test_unknown_alignment_mode() {
        assert!(ExportOptions::from_json(r#"{"textAlignmentMode": "layer"}"#).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(ExportOptions::from_json("{ignoreFontFamily}").is_err());
    }

    #[test]
    fn test_is_duplicate() {
        let options = ExportOptions::new().with_duplicate_suffix("_dup");
        assert!(options.is_duplicate("primary_dup"));
        assert!(!options.is_duplicate("primary"));

        let empty = ExportOptions::new().with_duplicate_suffix("");
        assert!(!empty.is_duplicate("primary"));
    }
}
