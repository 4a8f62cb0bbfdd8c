//! XAML generator for projects, styleguides and layers.

use layerxaml_core::{DesignContext, ExportOptions, Layer, TextStyle};
use layerxaml_styles::{Region, StyleRegistry};
use serde::Serialize;
use serde_json::json;

use crate::color::ColorResolver;
use crate::error::{CodegenError, Result};
use crate::templates::TemplateEngine;
use crate::xaml::{
    descriptor_for, label_for, label_style, BorderProps, ColorEntry, CssProps, ImageProps,
    StackLayoutProps, TextStyleProps,
};

const XML: &str = "xml";

/// A piece of generated code handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl CodeBlock {
    /// An inline XML snippet.
    pub fn xml(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: XML.to_string(),
            filename: None,
        }
    }

    /// A complete XML file.
    pub fn xml_file(code: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: XML.to_string(),
            filename: Some(filename.into()),
        }
    }
}

/// Memoised resource dictionary exports.
#[derive(Debug, Clone, Default)]
pub struct ExportCache {
    colors: Option<CodeBlock>,
    text_styles: Option<CodeBlock>,
}

impl ExportCache {
    pub fn clear(&mut self) {
        self.colors = None;
        self.text_styles = None;
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_none() && self.text_styles.is_none()
    }
}

/// The operations a host design application calls on an extension.
pub trait DesignExtension {
    /// Color resources of the project, or `None` without a project.
    fn colors(&self, ctx: &DesignContext) -> Result<Option<CodeBlock>>;

    /// Text style resources grouped by typography region.
    fn text_styles(&self, ctx: &DesignContext) -> Result<CodeBlock>;

    /// `Colors.xaml` resource dictionary.
    fn export_colors(&mut self, ctx: &DesignContext) -> Result<Option<CodeBlock>>;

    /// `Labels.xaml` resource dictionary.
    fn export_text_styles(&mut self, ctx: &DesignContext) -> Result<CodeBlock>;

    /// Markup for a single layer; labels are keyed through `registry`.
    fn layer(
        &self,
        ctx: &DesignContext,
        registry: &mut StyleRegistry,
        layer: &Layer,
    ) -> Result<CodeBlock>;
}

/// Xamarin.Forms XAML generator.
pub struct XamlGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: ExportOptions,
    cache: ExportCache,
}

impl<'a> XamlGenerator<'a> {
    /// Create a generator with the built-in templates.
    pub fn new(options: ExportOptions) -> Result<Self> {
        Ok(Self::with_engine(
            TemplateEngine::with_builtin_templates()?,
            options,
        ))
    }

    /// Create a generator rendering through a custom engine. The engine must
    /// provide every built-in template name.
    pub fn with_engine(engine: TemplateEngine<'a>, options: ExportOptions) -> Self {
        Self {
            engine,
            options,
            cache: ExportCache::default(),
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// A fresh registry for one export run.
    pub fn begin_run(&self) -> StyleRegistry {
        StyleRegistry::new(self.options.ignore_font_family)
    }

    fn resolver<'c>(&'c self, ctx: &'c DesignContext) -> ColorResolver<'c> {
        ColorResolver::new(ctx.project.as_ref(), &self.options)
    }

    /// Render every region of a registry, in display order, each wrapped in
    /// a `#region` comment block.
    pub fn render_registry(&self, registry: &StyleRegistry) -> Result<String> {
        let mut output = String::new();
        for region in Region::ALL {
            output.push_str(&format!("<!--#region {}-->\n", region));
            if registry.region_len(region) > 0 {
                let styles: Vec<TextStyleProps> = registry
                    .entries(region)
                    .map(|style| TextStyleProps::from_registered(style, &self.options))
                    .collect();
                let rendered = self
                    .engine
                    .render("text_styles", &json!({ "styles": styles }))?;
                output.push_str(rendered.trim());
                output.push('\n');
            }
            output.push_str("<!--#endregion-->\n\n");
        }
        Ok(output.trim().to_string())
    }

    fn resource_dictionary(&self, resources: &str, filename: &str) -> Result<CodeBlock> {
        let code = self
            .engine
            .render("resource_dictionary", &json!({ "resources": resources }))?;
        Ok(CodeBlock::xml_file(code, filename))
    }
}

impl<'a> DesignExtension for XamlGenerator<'a> {
    fn colors(&self, ctx: &DesignContext) -> Result<Option<CodeBlock>> {
        let Some(project) = ctx.project.as_ref() else {
            return Ok(None);
        };
        let resolver = self.resolver(ctx);

        let mut colors: Vec<_> = project
            .colors
            .iter()
            .filter(|color| !self.options.is_duplicate(&color.name))
            .collect();
        if self.options.sort_resources {
            colors.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let entries: Vec<ColorEntry> = colors
            .into_iter()
            .map(|color| ColorEntry::from_named(color, &resolver))
            .collect();
        let code = self.engine.render("colors", &json!({ "colors": entries }))?;
        Ok(Some(CodeBlock::xml(code.trim_end())))
    }

    fn text_styles(&self, ctx: &DesignContext) -> Result<CodeBlock> {
        let container = ctx.container().ok_or(CodegenError::MissingContainer)?;
        let resolver = self.resolver(ctx);

        // Keys follow name order, so sort before anything is registered.
        let mut styles: Vec<&TextStyle> = container
            .text_styles
            .iter()
            .filter(|style| !self.options.is_duplicate(style.display_name()))
            .collect();
        styles.sort_by(|a, b| a.cmp_by_name(b));

        let mut registry = self.begin_run();
        for style in styles {
            let descriptor = descriptor_for(style, style.display_name(), &resolver)?;
            registry.key_for(&descriptor);
        }
        log::debug!("text style export registered {} styles", registry.len());

        Ok(CodeBlock::xml(self.render_registry(&registry)?))
    }

    fn export_colors(&mut self, ctx: &DesignContext) -> Result<Option<CodeBlock>> {
        if self.options.enable_cache {
            if let Some(cached) = &self.cache.colors {
                log::debug!("serving Colors.xaml from cache");
                return Ok(Some(cached.clone()));
            }
        }

        let Some(colors) = self.colors(ctx)? else {
            return Ok(None);
        };
        let file = self.resource_dictionary(&colors.code, "Colors.xaml")?;
        if self.options.enable_cache {
            self.cache.colors = Some(file.clone());
        }
        Ok(Some(file))
    }

    fn export_text_styles(&mut self, ctx: &DesignContext) -> Result<CodeBlock> {
        if self.options.enable_cache {
            if let Some(cached) = &self.cache.text_styles {
                log::debug!("serving Labels.xaml from cache");
                return Ok(cached.clone());
            }
        }

        let styles = self.text_styles(ctx)?;
        let file = self.resource_dictionary(&styles.code, "Labels.xaml")?;
        if self.options.enable_cache {
            self.cache.text_styles = Some(file.clone());
        }
        Ok(file)
    }

    fn layer(
        &self,
        ctx: &DesignContext,
        registry: &mut StyleRegistry,
        layer: &Layer,
    ) -> Result<CodeBlock> {
        let resolver = self.resolver(ctx);

        let code = if layer.is_text() {
            let style = label_style(layer)?;
            let descriptor = descriptor_for(style, &layer.name, &resolver)?;
            let key = registry.key_for(&descriptor);
            let label = label_for(layer, key.to_string());
            let css = CssProps::from_layer(layer, &resolver);
            self.engine.render("label", &label)? + &self.engine.render("css", &css)?
        } else if layer.exportable {
            self.engine.render("image", &ImageProps::from_layer(layer))?
        } else {
            let border = BorderProps::from_layer(layer, &resolver);
            let stack = StackLayoutProps::from_layer(layer, &resolver);
            let css = CssProps::from_layer(layer, &resolver);
            self.engine.render("border", &border)?
                + &self.engine.render("stack_layout", &stack)?
                + &self.engine.render("css", &css)?
        };

        Ok(CodeBlock::xml(code))
    }
}
