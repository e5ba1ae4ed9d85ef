//! Generator configuration.
//!
//! Read from a TOML file (`wikidoc.toml` in the working directory unless
//! `--config` names another); every field has a default and command-line
//! flags override what the file says.

use crate::render::Format;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "wikidoc.toml";

const DEFAULT_LOOKAHEAD: usize = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the Lua modules
    pub source_dir: PathBuf,
    /// Directory the pages are written to
    pub output_dir: PathBuf,
    /// Glob (relative to `source_dir`) selecting modules in batch mode
    pub pattern: String,
    pub format: Format,
    /// Output file extension; the renderer's default when unset
    pub extension: Option<String>,
    /// Lines after a doc comment in which its signature must appear
    pub lookahead: usize,
    pub template: TemplateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("docs"),
            pattern: "*.lua".to_string(),
            format: Format::default(),
            extension: None,
            lookahead: DEFAULT_LOOKAHEAD,
            template: TemplateConfig::default(),
        }
    }
}

/// Wiki page layout. `header`, `example` and `footer` support `${name}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    pub header: String,
    pub example: String,
    pub footer: String,
    pub generic_tag: String,
    pub param_tag: String,
    pub return_tag: String,
    pub line_break: String,
    /// Replacement for literal `|` in user text
    pub pipe_escape: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            header: "{{Documentation}}\n{{Helper module\n|name=${name}".to_string(),
            example: "<syntaxhighlight lang=\"lua\">\nlocal ${name} = require('Module:${name}')\n</syntaxhighlight>".to_string(),
            footer: "}}".to_string(),
            generic_tag: "var".to_string(),
            param_tag: "code".to_string(),
            return_tag: "samp".to_string(),
            line_break: "<br>".to_string(),
            pipe_escape: "&#124;".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] when it exists,
    /// or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.source_dir, PathBuf::from("."));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.pattern, "*.lua");
        assert_eq!(config.format, Format::Wiki);
        assert_eq!(config.lookahead, 3);
        assert_eq!(config.template.pipe_escape, "&#124;");
    }

    #[test]
    fn partial_override() {
        let config = Config::from_toml(
            r#"
source_dir = "lua"
format = "markdown"
extension = "html"

[template]
param_tag = "kbd"
"#,
        )
        .unwrap();
        assert_eq!(config.source_dir, PathBuf::from("lua"));
        assert_eq!(config.format, Format::Markdown);
        assert_eq!(config.extension.as_deref(), Some("html"));
        assert_eq!(config.template.param_tag, "kbd");
        assert_eq!(config.template.return_tag, "samp");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("sourcedir = \"lua\"").is_err());
        assert!(Config::from_toml("[template]\nheadr = \"x\"").is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Config::from_toml("format = \"xml\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/wikidoc.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
