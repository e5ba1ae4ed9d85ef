//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Module model directly, hierarchy included.

use crate::model::Module;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, module: &Module) -> Result<String> {
        let mut out = serde_json::to_string_pretty(module)
            .with_context(|| format!("failed to serialize module {}", module.name))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
