//! Small string helpers shared by the parser and the renderers.

use regex::Regex;
use std::sync::LazyLock;

static RE_BACKTICK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").unwrap());

/// Replace every literal `|` with `escape` so user text cannot split
/// template fields.
pub fn escape_pipes(text: &str, escape: &str) -> String {
    text.replace('|', escape)
}

/// Entity-escape angle brackets (used for type expressions like `table<K, V>`).
pub fn escape_angles(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Convert single-backtick spans to `<code>` markup.
pub fn inline_code(text: &str) -> String {
    RE_BACKTICK.replace_all(text, "<code>$1</code>").into_owned()
}

/// Turn a markdown bullet (`- x`, `* x`) into a wiki bullet (`* x`).
/// Returns `None` when the line is not a bullet.
pub fn wiki_bullet(line: &str) -> Option<String> {
    RE_BULLET
        .captures(line)
        .map(|caps| format!("* {}", caps[1].trim_end()))
}

/// Substitute `${name}` placeholders in a template string.
pub fn substitute_name(template: &str, name: &str) -> String {
    template.replace("${name}", name)
}

/// Remove common leading indentation from a multi-line string.
pub fn unindent(text: &str) -> String {
    let min_indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|l| l.get(min_indent..).unwrap_or(l.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipes_are_escaped() {
        assert_eq!(escape_pipes("a|b||c", "&#124;"), "a&#124;b&#124;&#124;c");
    }

    #[test]
    fn angles_are_escaped() {
        assert_eq!(escape_angles("table<K, V>"), "table&lt;K, V&gt;");
    }

    #[test]
    fn backticks_become_code() {
        assert_eq!(
            inline_code("Calls `fn` on `t`."),
            "Calls <code>fn</code> on <code>t</code>."
        );
    }

    #[test]
    fn unmatched_backtick_is_left_alone() {
        assert_eq!(inline_code("a ` b"), "a ` b");
    }

    #[test]
    fn bullets() {
        assert_eq!(wiki_bullet("- item").as_deref(), Some("* item"));
        assert_eq!(wiki_bullet("  * item").as_deref(), Some("* item"));
        assert_eq!(wiki_bullet("*emphasis*"), None);
        assert_eq!(wiki_bullet("plain"), None);
    }

    #[test]
    fn name_substitution() {
        assert_eq!(substitute_name("|name=${name}", "Array"), "|name=Array");
    }

    #[test]
    fn unindent_keeps_relative_indentation() {
        assert_eq!(unindent("  a\n    b\n  c"), "a\n  b\nc");
    }

    #[test]
    fn unindent_ignores_blank_lines() {
        assert_eq!(unindent("    a\n\n    b"), "a\n\nb");
    }
}
