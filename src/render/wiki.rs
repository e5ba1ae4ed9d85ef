//! MediaWiki renderer for the `{{Documentation}}` / `{{Helper module}}`
//! page layout.
//!
//! Each function becomes three numbered template fields:
//!
//! - `fname<i>`: the call signature inside `<nowiki>`
//! - `ftype<i>`: generics, parameter types and the return type as small tags
//! - `fuse<i>`: description, notes and examples
//!
//! Every literal `|` coming from the source is replaced by the configured
//! escape so it cannot terminate a template field.

use crate::config::TemplateConfig;
use crate::model::*;
use crate::render::Renderer;
use crate::text;
use anyhow::Result;

pub struct WikiRenderer {
    template: TemplateConfig,
}

impl WikiRenderer {
    pub fn new(template: TemplateConfig) -> Self {
        Self { template }
    }

    fn escape(&self, s: &str) -> String {
        text::escape_pipes(s, &self.template.pipe_escape)
    }

    /// `name(&nbsp;a,&nbsp;b&nbsp;)`, or `name()` without parameters.
    fn signature(&self, func: &FunctionRecord) -> String {
        let name = self.escape(&func.simple_name);
        if func.signature_params.is_empty() {
            return format!("{}()", name);
        }
        let params = func
            .signature_params
            .iter()
            .map(|p| self.escape(p))
            .collect::<Vec<_>>()
            .join(",&nbsp;");
        format!("{}(&nbsp;{}&nbsp;)", name, params)
    }

    fn tag(&self, tag: &str, content: &str) -> String {
        let content = self.escape(&text::escape_angles(content));
        format!("<{tag}>{content}</{tag}>")
    }

    fn types(&self, func: &FunctionRecord) -> String {
        let t = &self.template;
        let mut parts: Vec<String> = Vec::new();
        for g in &func.generics {
            parts.push(self.tag(&t.generic_tag, &format!("{}: {}", g.name, g.ty)));
        }
        for p in &func.params {
            parts.push(self.tag(&t.param_tag, &p.ty));
        }
        parts.push(self.tag(&t.return_tag, &func.returns.ty));
        parts.join(&t.line_break)
    }

    /// Markup for one line of prose: pipes escaped, backticks to `<code>`,
    /// markdown bullets to wiki bullets.
    fn prose(&self, line: &str) -> String {
        let line = text::wiki_bullet(line).unwrap_or_else(|| line.to_string());
        text::inline_code(&self.escape(&line))
    }

    fn usage(&self, func: &FunctionRecord) -> String {
        let mut lines: Vec<String> = func.description.iter().map(|l| self.prose(l)).collect();

        for note in &func.notes {
            match note {
                Note::Text(t) => lines.push(self.prose(t)),
                Note::Code(code) => {
                    lines.push("<syntaxhighlight lang=\"lua\">".to_string());
                    lines.push(self.escape(&text::unindent(code)));
                    lines.push("</syntaxhighlight>".to_string());
                }
            }
        }

        for p in func.params.iter().filter(|p| !p.description.is_empty()) {
            lines.push(format!(
                "* <code>{}</code>: {}",
                self.escape(&p.name),
                self.prose(&p.description)
            ));
        }
        if !func.returns.description.is_empty() {
            lines.push(format!("* Returns: {}", self.prose(&func.returns.description)));
        }

        lines.join("\n")
    }
}

impl Renderer for WikiRenderer {
    fn render(&self, module: &Module) -> Result<String> {
        let t = &self.template;
        let mut out = String::new();

        out.push_str(&text::substitute_name(&t.header, &module.name));
        out.push('\n');

        for (i, func) in module.functions.iter().enumerate() {
            let n = i + 1;
            push_field(
                &mut out,
                &format!("fname{n}"),
                &format!("<nowiki>{}</nowiki>", self.signature(func)),
            );
            push_field(&mut out, &format!("ftype{n}"), &self.types(func));
            push_field(&mut out, &format!("fuse{n}"), &self.usage(func));
        }

        if !t.example.is_empty() {
            push_field(&mut out, "example", &text::substitute_name(&t.example, &module.name));
        }

        out.push_str(&text::substitute_name(&t.footer, &module.name));
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "wiki"
    }
}

fn push_field(out: &mut String, key: &str, value: &str) {
    if value.is_empty() {
        out.push_str(&format!("|{} =\n", key));
    } else {
        out.push_str(&format!("|{} = {}\n", key, value));
    }
}
