//! GitHub-flavored markdown anchor/slug generation for the markdown index.

/// Generate a table-of-contents link for a function name.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate a TOC list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug generation:
/// - lowercase
/// - drop everything that isn't alphanumeric, space or hyphen
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
        // '.', ':' and '_' are stripped
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_dotted() {
        assert_eq!(github_slug("Array.map"), "arraymap");
    }

    #[test]
    fn slug_method_and_underscore() {
        assert_eq!(github_slug("Stack:push_all"), "stackpushall");
    }

    #[test]
    fn slug_with_spaces() {
        assert_eq!(github_slug("Hello World"), "hello-world");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("Array.fast.map"), "* [Array.fast.map](#arrayfastmap)");
    }
}
