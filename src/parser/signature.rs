//! Lua function-definition recognition.

use regex::Regex;
use std::sync::LazyLock;

// function Foo.bar(x, y)  /  function Foo:bar(x)
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*function\s+([A-Za-z_][\w.]*(?::[A-Za-z_]\w*)?)\s*\(([^)]*)\)").unwrap()
});

// Foo.bar = function(x, y)
static RE_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][\w.]*)\s*=\s*function\s*\(([^)]*)\)").unwrap()
});

static RE_CONDITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:if|elseif)\b").unwrap());

static RE_THEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bthen\b").unwrap());

/// A recognised public function definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params_raw: String,
    pub params: Vec<String>,
}

/// Extract a function signature from a single source line.
///
/// The parameter list must close on the same line; a signature wrapped
/// across lines is not recognised.
///
/// Returns `None` for non-definitions, definitions inside conditionals and
/// private names (last segment starting with `__`).
pub fn extract(line: &str) -> Option<Signature> {
    if is_conditional(line) {
        return None;
    }

    let caps = RE_FUNCTION
        .captures(line)
        .or_else(|| RE_ASSIGN.captures(line))?;
    let name = caps[1].to_string();
    if is_private(&name) {
        return None;
    }

    let params_raw = caps[2].to_string();
    let params = split_params(&params_raw);
    Some(Signature {
        name,
        params_raw,
        params,
    })
}

/// Last `.`/`:` separated segment of a qualified name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit(|c: char| c == '.' || c == ':').next().unwrap_or(name)
}

fn is_private(name: &str) -> bool {
    simple_name(name).starts_with("__")
}

fn is_conditional(line: &str) -> bool {
    if RE_CONDITIONAL.is_match(line) {
        return true;
    }
    // `then` ahead of the `function` keyword means an inline closure
    let head = line.find("function").map_or(line, |pos| &line[..pos]);
    RE_THEN.is_match(head)
}

fn split_params(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
