//! Text style descriptors fed into the registry.

use serde::Serialize;

use crate::error::{Result, StyleError};
use crate::region::{classify, Region};

/// Coarse emphasis derived from a numeric font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FontAttributes {
    #[default]
    None,
    Bold,
}

impl FontAttributes {
    /// Only the heavy weights 700, 800, 900 and 950 render bold.
    pub fn from_weight(weight: u16) -> Self {
        match weight {
            700 | 800 | 900 | 950 => Self::Bold,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bold => "Bold",
        }
    }
}

/// The attributes of a text style that decide its identity.
///
/// Colors arrive already resolved to the literal that will be written out
/// (a resource reference or a hex value). A descriptor can only be built
/// with a finite font size whose hundredths fit in an `i64`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyleDescriptor {
    font_family: Option<String>,
    font_weight: u16,
    font_size: f64,
    size_hundredths: i64,
    color: Option<String>,
    text_align: Option<String>,
}

impl TextStyleDescriptor {
    /// Start a descriptor for the given font size.
    pub fn new(font_size: f64) -> Result<Self> {
        let size_hundredths =
            to_hundredths(font_size).ok_or(StyleError::InvalidFontSize { value: font_size })?;
        Ok(Self {
            font_family: None,
            font_weight: 400,
            font_size,
            size_hundredths,
            color: None,
            text_align: None,
        })
    }

    /// Build from a possibly missing font size, naming the style in the
    /// error.
    pub fn from_size(style: &str, font_size: Option<f64>) -> Result<Self> {
        match font_size {
            Some(size) => Self::new(size),
            None => Err(StyleError::MissingFontSize {
                style: style.to_string(),
            }),
        }
    }

    pub fn with_family(mut self, family: impl Into<String>, weight: u16) -> Self {
        self.font_family = Some(family.into());
        self.font_weight = weight;
        self
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.text_align = Some(align.into());
        self
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_weight(&self) -> u16 {
        self.font_weight
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Font size rounded to two decimals, in hundredths.
    pub fn size_hundredths(&self) -> i64 {
        self.size_hundredths
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn text_align(&self) -> Option<&str> {
        self.text_align.as_deref()
    }

    pub fn region(&self) -> Region {
        classify(self.font_size)
    }

    pub fn font_attributes(&self) -> FontAttributes {
        FontAttributes::from_weight(self.font_weight)
    }

    /// `Family#weight`, the way family and weight are written into
    /// generated styles.
    pub fn qualified_family(&self) -> Option<String> {
        self.font_family
            .as_ref()
            .map(|family| format!("{}#{}", family, self.font_weight))
    }
}

/// Round to two decimals by shifting the decimal point textually, so that a
/// size such as 24.005 rounds up instead of falling victim to its binary
/// representation. Halves round towards positive infinity, so -24.005
/// becomes -24.00.
///
/// Returns `None` for sizes that are not finite or whose hundredths do not
/// fit in an `i64`.
fn to_hundredths(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let shifted = format!("{}e2", value)
        .parse::<f64>()
        .unwrap_or(value * 100.0);
    let floor = shifted.floor();
    let rounded = if shifted - floor >= 0.5 { floor + 1.0 } else { floor };
    // i64::MAX as f64 is 2^63, the first value that no longer fits.
    if rounded.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}
