//! The design model handed over by the host application.
//!
//! Field names follow the host's camelCase JSON so a project or a selected
//! layer can be deserialized directly.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A color value with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Uppercase hex literal.
    ///
    /// Opaque colors are written `#RRGGBB`; anything else carries the alpha
    /// channel first, `#AARRGGBB`, the way XAML expects it.
    pub fn to_hex(&self) -> String {
        if self.a == 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha8(),
                self.r,
                self.g,
                self.b
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

/// A named color resource of a project or styleguide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    #[serde(flatten)]
    pub color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

fn regular_weight() -> u16 {
    400
}

/// A text style, either a named project style or a run inside a text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default = "regular_weight")]
    pub font_weight: u16,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_style: Option<String>,
    #[serde(default)]
    pub text_align: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl TextStyle {
    /// Create a text style with the given size and no other attributes.
    pub fn new(font_size: f64) -> Self {
        Self {
            name: None,
            font_family: None,
            font_weight: regular_weight(),
            font_size: Some(font_size),
            font_style: None,
            text_align: None,
            color: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.text_align = Some(align.into());
        self
    }

    /// Name used for duplicate checks; empty for unnamed styles.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Order by name with unnamed styles last.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        match (&self.name, &other.name) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Layer bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// A fill. Gradient fills carry no flat color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(default)]
    pub color: Option<Color>,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self { color: Some(color) }
    }
}

/// A border stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderStroke {
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub fill: Fill,
}

/// A styled run inside a text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerTextStyle {
    pub text_style: TextStyle,
}

/// Layer types known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Text,
    Shape,
    Group,
    Component,
}

/// A single layer of a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub name: String,
    pub rect: Rect,
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub borders: Vec<BorderStroke>,
    #[serde(default)]
    pub border_radius: Option<f64>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub exportable: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub text_styles: Vec<LayerTextStyle>,
}

impl Layer {
    /// Create a layer with no fills, borders or text.
    pub fn new(kind: LayerKind, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            kind,
            name: name.into(),
            rect,
            fills: Vec::new(),
            borders: Vec::new(),
            border_radius: None,
            opacity: None,
            exportable: false,
            content: None,
            text_styles: Vec::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == LayerKind::Text
    }

    /// The first fill, if any.
    pub fn first_fill(&self) -> Option<&Fill> {
        self.fills.first()
    }

    /// The first border, if any.
    pub fn first_border(&self) -> Option<&BorderStroke> {
        self.borders.first()
    }

    /// The text style of the first styled run, if any.
    pub fn first_text_style(&self) -> Option<&TextStyle> {
        self.text_styles.first().map(|run| &run.text_style)
    }
}

/// Colors and text styles of a project or styleguide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleContainer {
    #[serde(default)]
    pub colors: Vec<NamedColor>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

impl StyleContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.push(NamedColor::new(name, color));
    }

    pub fn add_text_style(&mut self, style: TextStyle) {
        self.text_styles.push(style);
    }

    /// Find a color resource equal to `color`.
    pub fn find_color_equal(&self, color: &Color) -> Option<&NamedColor> {
        self.colors.iter().find(|named| named.color == *color)
    }
}

/// What the host exposes for an export: a project, a styleguide, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignContext {
    #[serde(default)]
    pub project: Option<StyleContainer>,
    #[serde(default)]
    pub styleguide: Option<StyleContainer>,
}

impl DesignContext {
    pub fn with_project(project: StyleContainer) -> Self {
        Self {
            project: Some(project),
            styleguide: None,
        }
    }

    pub fn with_styleguide(styleguide: StyleContainer) -> Self {
        Self {
            project: None,
            styleguide: Some(styleguide),
        }
    }

    /// The project if present, otherwise the styleguide.
    pub fn container(&self) -> Option<&StyleContainer> {
        self.project.as_ref().or(self.styleguide.as_ref())
    }
}

/// Format a number for markup output: integral values lose the fractional
/// part, everything else is written in its shortest exact form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
