//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::text;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, module: &Module) -> Result<String> {
        let mut output = format!("# {}\n\n", module.name);

        if !module.functions.is_empty() {
            output.push_str("## Index\n\n");
            for func in &module.functions {
                output.push_str(&toc::render_toc_item(&func.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for func in &module.functions {
            output.push_str(&render_function(func));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single function's documentation block.
fn render_function(func: &FunctionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));
    lines.push("```lua".to_string());
    lines.push(format!("{}({})", func.name, func.signature_params.join(", ")));
    lines.push("```".to_string());
    lines.push(String::new());

    if !func.description.is_empty() {
        lines.push(func.description.join("\n"));
        lines.push(String::new());
    }

    if !func.generics.is_empty() {
        lines.push("#### Generics\n".to_string());
        for g in &func.generics {
            lines.push(format!("* **{}**: `{}`", g.name, g.ty));
        }
        lines.push(String::new());
    }

    if !func.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for p in &func.params {
            lines.push(render_param(p));
        }
        lines.push(String::new());
    }

    lines.push("#### Returns\n".to_string());
    if func.returns.description.is_empty() {
        lines.push(format!("* `{}`", func.returns.ty));
    } else {
        lines.push(format!("* `{}`: {}", func.returns.ty, func.returns.description));
    }
    lines.push(String::new());

    if !func.notes.is_empty() {
        for note in &func.notes {
            match note {
                Note::Text(t) => lines.push(t.clone()),
                Note::Code(code) => {
                    lines.push(String::new());
                    lines.push("```lua".to_string());
                    lines.push(text::unindent(code));
                    lines.push("```".to_string());
                }
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `**name** (`type`, optional): description`
fn render_param(p: &Param) -> String {
    let qualifier = if p.optional { ", optional" } else { "" };
    if p.description.is_empty() {
        format!("* **{}** (`{}`{})", p.name, p.ty, qualifier)
    } else {
        format!("* **{}** (`{}`{}): {}", p.name, p.ty, qualifier, p.description)
    }
}
