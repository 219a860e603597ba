//! Sanitize-then-render pipeline for the free-text game info field.
//!
//! The order is a security invariant, not a style choice: sanitizing first
//! guarantees that no raw HTML outside the allow-list survives into the
//! rendered output, because the Markdown renderer passes inline HTML through
//! untouched.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use ammonia::Builder;
use pulldown_cmark::{Parser, html};

/// Fixed allow-list of markup tags permitted inside info text.
const ALLOWED_TAGS: [&str; 12] = [
    "a", "abbr", "acronym", "b", "blockquote", "code", "em", "i", "li", "ol", "strong", "ul",
];

static SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::new();
    builder
        .tags(HashSet::from(ALLOWED_TAGS))
        .tag_attributes(HashMap::from([
            ("a", HashSet::from(["href", "title"])),
            ("abbr", HashSet::from(["title"])),
            ("acronym", HashSet::from(["title"])),
        ]))
        .generic_attributes(HashSet::new())
        .link_rel(None);
    builder
});

/// Sanitize `info` against the fixed allow-list, then render it from Markdown
/// to HTML.
pub fn render_info(info: &str) -> String {
    let sanitized = SANITIZER.clean(info).to_string();

    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new(&sanitized));
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_is_rendered() {
        let html = render_info("some **bold** text");
        assert!(html.contains("<strong>bold</strong>"), "got: {html}");
    }

    #[test]
    fn test_allowed_markup_survives() {
        let html = render_info("an <em>emphasised</em> word");
        assert!(html.contains("<em>emphasised</em>"), "got: {html}");
    }

    #[test]
    fn test_script_is_removed_before_rendering() {
        let html = render_info("<script>alert('pwned')</script>hello");
        assert!(!html.contains("<script"), "got: {html}");
        assert!(!html.contains("alert"), "got: {html}");
        assert!(html.contains("hello"), "got: {html}");
    }

    #[test]
    fn test_disallowed_tag_is_stripped() {
        let html = render_info("before <img src=\"x\"> after");
        assert!(!html.contains("<img"), "got: {html}");
    }

    #[test]
    fn test_event_handler_attributes_are_dropped() {
        let html = render_info("<em onclick=\"alert(1)\">click</em>");
        assert!(!html.contains("onclick"), "got: {html}");
        assert!(html.contains("<em>click</em>"), "got: {html}");
    }

    #[test]
    fn test_plain_text_paragraph() {
        let html = render_info("just a sentence");
        assert_eq!(html.trim(), "<p>just a sentence</p>");
    }
}
