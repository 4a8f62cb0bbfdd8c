//! Template engine for markup generation.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Resource dictionary wrapping exported colors or text styles.
pub const RESOURCE_DICTIONARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ResourceDictionary xmlns="http://xamarin.com/schemas/2014/forms"
                    xmlns:x="http://schemas.microsoft.com/winfx/2009/xaml">
{{indent resources 4}}
</ResourceDictionary>
"#;

/// One `Color` resource per entry.
pub const COLORS: &str = r#"{{#each colors}}<Color x:Key="{{key}}">{{color}}</Color>
{{/each}}"#;

/// Label styles of one typography region.
pub const TEXT_STYLES: &str = r#"{{#each styles}}<Style x:Key="{{key}}" TargetType="Label">
{{#if fontFamily}}    <Setter Property="FontFamily" Value="{{fontFamily}}" />
{{/if}}    <Setter Property="FontSize" Value="{{fontSize}}" />
    <Setter Property="FontAttributes" Value="{{fontAttributes}}" />
{{#if textColor}}    <Setter Property="TextColor" Value="{{textColor}}" />
{{/if}}{{#if horizontalTextAlignment}}    <Setter Property="HorizontalTextAlignment" Value="{{horizontalTextAlignment}}" />
{{/if}}</Style>
{{/each}}"#;

pub const LABEL: &str = r#"<Label Text="{{text}}" Style="{{static_resource style}}" />
"#;

pub const IMAGE: &str = r#"<Image Source="{{source}}" WidthRequest="{{widthRequest}}" HeightRequest="{{heightRequest}}" />
"#;

pub const BORDER: &str = r#"<Frame WidthRequest="{{widthRequest}}" HeightRequest="{{heightRequest}}" CornerRadius="{{cornerRadius}}"{{#if backgroundColor}} BackgroundColor="{{backgroundColor}}"{{/if}}{{#if outlineColor}} BorderColor="{{outlineColor}}"{{/if}} HasShadow="False" Padding="0" />
"#;

pub const STACK_LAYOUT: &str = r#"<StackLayout WidthRequest="{{widthRequest}}" HeightRequest="{{heightRequest}}"{{#if backgroundColor}} BackgroundColor="{{backgroundColor}}"{{/if}}>
</StackLayout>
"#;

pub const CSS: &str = r#"
<!--
.{{className}} {
    width: {{width}}px;
    height: {{height}}px;
{{#if opacity}}    opacity: {{opacity}};
{{/if}}{{#if backgroundColor}}    background-color: {{backgroundColor}};
{{/if}}{{#if borderColor}}    border-color: {{borderColor}};
{{/if}}{{#if borderWidth}}    border-width: {{borderWidth}}px;
{{/if}}{{#if fontFamily}}    font-family: {{fontFamily}};
{{/if}}{{#if fontSize}}    font-size: {{fontSize}}px;
{{/if}}{{#if fontStyle}}    font-style: {{fontStyle}};
{{/if}}{{#if textAlign}}    text-align: {{textAlign}};
{{/if}}{{#if color}}    color: {{color}};
{{/if}}}
-->
"#;

/// Template engine using Handlebars.
///
/// Values are escaped for XML rather than HTML.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a template engine with no templates registered.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(xml_escape);

        // Register custom helpers
        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Create a template engine with the built-in XAML and CSS templates.
    pub fn with_builtin_templates() -> Result<Self> {
        let mut engine = Self::new();
        for (name, template) in [
            ("resource_dictionary", RESOURCE_DICTIONARY),
            ("colors", COLORS),
            ("text_styles", TEXT_STYLES),
            ("label", LABEL),
            ("image", IMAGE),
            ("border", BORDER),
            ("stack_layout", STACK_LAYOUT),
            ("css", CSS),
        ] {
            engine.register_template(name, template)?;
        }
        Ok(engine)
    }

    /// Register a template, replacing any template of the same name.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // {StaticResource key} reference
        handlebars.register_helper(
            "static_resource",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let key = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&static_resource(&xml_escape(key)))?;
                    Ok(())
                },
            ),
        );

        // Indent helper
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let content = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let spaces = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(4) as usize;
                    out.write(&indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference a shared XAML resource by key.
pub fn static_resource(key: &str) -> String {
    format!("{{StaticResource {}}}", key)
}

/// Indent every non-blank line by `spaces` spaces.
pub fn indent(content: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for use in XML content and attribute values.
pub fn xml_escape(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "Hello, {{name}}!")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_missing_template() {
        let engine = TemplateEngine::new();
        let err = engine.render("nope", &json!({})).unwrap_err();
        assert!(matches!(err, CodegenError::TemplateNotFound(name) if name == "nope"));
    }

    #[test]
    fn test_xml_escaping() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("text", r#"<Label Text="{{text}}" />"#)
            .unwrap();
        let result = engine
            .render("text", &json!({"text": "Fish & \"Chips\" <3"}))
            .unwrap();
        assert_eq!(result, r#"<Label Text="Fish &amp; &quot;Chips&quot; &lt;3" />"#);
    }

    #[test]
    fn test_static_resource_helper() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("style", r#"Style="{{static_resource key}}""#)
            .unwrap();
        let result = engine
            .render("style", &json!({"key": "txtBody1_1"}))
            .unwrap();
        assert_eq!(result, r#"Style="{StaticResource txtBody1_1}""#);
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("<a />\n\n<b />", 4), "    <a />\n\n    <b />");
    }

    #[test]
    fn test_builtin_templates_register() {
        let engine = TemplateEngine::with_builtin_templates().unwrap();
        let result = engine
            .render(
                "colors",
                &json!({"colors": [{"key": "Primary", "color": "#FF0000"}]}),
            )
            .unwrap();
        insta::assert_snapshot!(result.trim_end(), @r#"<Color x:Key="Primary">#FF0000</Color>"#);
    }
}
