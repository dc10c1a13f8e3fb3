//! Markdown Rendering
//!
//! Converts the fixed markdown blocks produced by the section modules into
//! HTML fragments for the page template.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown block to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_list() {
        let html = markdown_to_html("**Name:** Melissa\n\n- one\n- two\n");
        assert!(html.contains("<strong>Name:</strong>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
    }

    #[test]
    fn test_blockquote_callout() {
        let html = markdown_to_html("> note body");
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn test_image() {
        let html = markdown_to_html("![caption](https://example.com/x.jpg)");
        assert!(html.contains("<img src=\"https://example.com/x.jpg\""));
    }
}
