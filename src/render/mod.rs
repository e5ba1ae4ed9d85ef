//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod wiki;

use crate::config::TemplateConfig;
use crate::model::Module;
use anyhow::Result;
use serde::Deserialize;

/// Output format, selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// MediaWiki `{{Helper module}}` page
    #[default]
    Wiki,
    /// GitHub-flavored markdown
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
    /// Structured JSON dump
    Json,
}

/// Trait for rendering a Module into a specific output format.
pub trait Renderer {
    fn render(&self, module: &Module) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format.
pub fn create_renderer(format: Format, template: &TemplateConfig) -> Box<dyn Renderer> {
    match format {
        Format::Wiki => Box::new(wiki::WikiRenderer::new(template.clone())),
        Format::Markdown => Box::new(markdown::MarkdownRenderer),
        Format::Json => Box::new(json::JsonRenderer),
    }
}
