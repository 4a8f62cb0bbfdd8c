//! Property bags mapping design layers and styles onto templates.
//!
//! Each struct here is the data one template renders. Numbers are carried
//! as preformatted strings so `24.0` is written as `24`.

use convert_case::{Case, Casing};
use layerxaml_core::{
    format_number, ExportOptions, Layer, NamedColor, TextAlignmentMode, TextStyle,
};
use layerxaml_styles::{RegisteredStyle, TextStyleDescriptor};
use serde::Serialize;

use crate::color::ColorResolver;
use crate::error::{CodegenError, Result};

/// A `Color` resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEntry {
    pub key: String,
    pub color: String,
}

impl ColorEntry {
    pub fn from_named(named: &NamedColor, resolver: &ColorResolver) -> Self {
        Self {
            key: resolver.resource_key(&named.name),
            color: resolver.hex(&named.color),
        }
    }
}

/// Build the registry descriptor of a text style.
///
/// `owner` names the style in errors when the style itself is unnamed.
pub fn descriptor_for(
    style: &TextStyle,
    owner: &str,
    resolver: &ColorResolver,
) -> Result<TextStyleDescriptor> {
    let name = style.name.as_deref().unwrap_or(owner);
    let mut descriptor = TextStyleDescriptor::from_size(name, style.font_size)?
        .with_weight(style.font_weight);
    if let Some(family) = &style.font_family {
        descriptor = descriptor.with_family(family.as_str(), style.font_weight);
    }
    if let Some(color) = &style.color {
        descriptor = descriptor.with_color(resolver.literal(color));
    }
    if let Some(align) = &style.text_align {
        descriptor = descriptor.with_align(align.as_str());
    }
    Ok(descriptor)
}

/// A label `Style` resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleProps {
    pub key: String,
    pub font_family: Option<String>,
    pub font_size: String,
    pub font_attributes: &'static str,
    pub text_color: Option<String>,
    pub horizontal_text_alignment: Option<String>,
}

impl TextStyleProps {
    pub fn from_registered(style: &RegisteredStyle, options: &ExportOptions) -> Self {
        let horizontal_text_alignment = match options.text_alignment_mode {
            TextAlignmentMode::Style => style
                .text_align
                .as_deref()
                .filter(|align| !align.is_empty())
                .map(capitalize),
            TextAlignmentMode::None => None,
        };

        Self {
            key: style.key.to_string(),
            font_family: style.font_family.clone(),
            font_size: format_number(style.font_size),
            font_attributes: style.font_attributes.as_str(),
            text_color: style.text_color.clone(),
            horizontal_text_alignment,
        }
    }
}

/// A `Label` element referencing its generated style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelProps {
    pub text: String,
    pub style: String,
}

/// An `Image` element for an exportable layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub width_request: String,
    pub height_request: String,
    pub source: String,
}

impl ImageProps {
    pub fn from_layer(layer: &Layer) -> Self {
        Self {
            width_request: format_number(layer.rect.width),
            height_request: format_number(layer.rect.height),
            source: image_name(&layer.name),
        }
    }
}

/// A `Frame` drawing a layer's background and outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderProps {
    pub width_request: String,
    pub height_request: String,
    pub corner_radius: String,
    pub background_color: Option<String>,
    pub outline_color: Option<String>,
}

impl BorderProps {
    pub fn from_layer(layer: &Layer, resolver: &ColorResolver) -> Self {
        let background_color = layer
            .first_fill()
            .and_then(|fill| fill_color(layer, fill.color.as_ref(), "fill"))
            .map(|color| resolver.literal(color));
        let outline_color = layer
            .first_border()
            .and_then(|border| fill_color(layer, border.fill.color.as_ref(), "border"))
            .map(|color| resolver.literal(color));

        Self {
            width_request: format_number(layer.rect.width),
            height_request: format_number(layer.rect.height),
            corner_radius: format_number(layer.border_radius.unwrap_or(0.0)),
            background_color,
            outline_color,
        }
    }
}

/// A `StackLayout` container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackLayoutProps {
    pub width_request: String,
    pub height_request: String,
    pub background_color: Option<String>,
}

impl StackLayoutProps {
    pub fn from_layer(layer: &Layer, resolver: &ColorResolver) -> Self {
        Self {
            width_request: format_number(layer.rect.width),
            height_request: format_number(layer.rect.height),
            background_color: layer
                .first_fill()
                .and_then(|fill| fill_color(layer, fill.color.as_ref(), "fill"))
                .map(|color| resolver.literal(color)),
        }
    }
}

/// A CSS rule describing a layer. Colors are always raw hex values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProps {
    pub class_name: String,
    pub width: String,
    pub height: String,
    pub opacity: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_style: Option<String>,
    pub text_align: Option<String>,
    pub color: Option<String>,
}

impl CssProps {
    pub fn from_layer(layer: &Layer, resolver: &ColorResolver) -> Self {
        let mut css = Self {
            class_name: image_name(&layer.name),
            width: format_number(layer.rect.width),
            height: format_number(layer.rect.height),
            opacity: layer.opacity.map(format_number),
            ..Self::default()
        };

        if let Some(fill) = layer.first_fill() {
            css.background_color = fill.color.as_ref().map(|c| resolver.hex(c));
        }

        if let Some(border) = layer.first_border() {
            css.border_color = border.fill.color.as_ref().map(|c| resolver.hex(c));
            css.border_width = border.thickness.map(format_number);
        }

        if let Some(style) = layer.first_text_style() {
            css.font_family = style.font_family.clone();
            css.font_size = style.font_size.map(format_number);
            css.font_style = style.font_style.clone();
            css.text_align = style.text_align.clone();
            css.color = style.color.as_ref().map(|c| resolver.hex(c));
        }

        css
    }
}

fn fill_color<'l>(
    layer: &Layer,
    color: Option<&'l layerxaml_core::Color>,
    what: &str,
) -> Option<&'l layerxaml_core::Color> {
    if color.is_none() {
        log::warn!("layer '{}' has a {} without a flat color", layer.name, what);
    }
    color
}

/// Resource name of an image exported from a layer.
///
/// The first underscore counts as a word break; the first word is
/// lowercased and every following word capitalized, e.g. `"Icon_home
/// button"` becomes `"iconHomeButton"`.
pub fn image_name(layer_name: &str) -> String {
    let spaced = layer_name.replacen('_', " ", 1);
    let mut words = spaced.split(' ');
    let mut name = words.next().unwrap_or_default().to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(&chars.as_str().to_lowercase());
        }
    }
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Capitalize a single word: `"center"` becomes `"Center"`.
fn capitalize(word: &str) -> String {
    word.to_case(Case::Title)
}

/// The label for a text layer, keyed by its first text style.
pub fn label_for(layer: &Layer, style_key: String) -> LabelProps {
    LabelProps {
        text: layer.content.clone().unwrap_or_default(),
        style: style_key,
    }
}

/// The text style a label is keyed by.
pub fn label_style(layer: &Layer) -> Result<&TextStyle> {
    layer
        .first_text_style()
        .ok_or_else(|| CodegenError::MissingProperty {
            element: layer.name.clone(),
            property: "textStyles".to_string(),
        })
}
