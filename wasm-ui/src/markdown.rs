//! Markdown rendering for the description pane.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render example descriptions to HTML.
///
/// Raw HTML blocks in the source are shown as text rather than injected.
pub fn to_html(source: &str) -> String {
    let events = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdte_playground::{INTRODUCTION, catalog};

    #[test]
    fn test_headings_and_code() {
        let out = to_html("Stream\n======\n\nUses the `stream` module.\n");
        assert!(out.contains("<h1>Stream</h1>"));
        assert!(out.contains("<code>stream</code>"));
    }

    #[test]
    fn test_example_links() {
        let stream = catalog::find("stream").unwrap();
        let out = to_html(stream.description);
        assert!(out.contains(
            r#"<a href="https://www.godoc.org/github.com/DeedleFake/wdte/std/stream">the godocs</a>"#
        ));
    }

    #[test]
    fn test_introduction_sections() {
        let out = to_html(INTRODUCTION);
        assert!(out.contains("<h2>Fun Fact</h2>"));
        assert!(out.contains("<h4>wdteVersion</h4>"));
        // Indented lines are a code block.
        assert!(out.contains("<pre><code>wdteVersion\n</code></pre>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = to_html("hello <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
