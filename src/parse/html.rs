//! HTML page view: visible text and link URLs.
//!
//! Extraction only needs two things from a page: the text a visitor would see
//! and the `href` of every anchor. Both are produced here with `scraper`.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Elements whose text is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start a new line of text when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Derived views of an HTML page, shared between extraction and its caller.
///
/// Pass one to [`crate::parse_handles_from_html`] to reuse a page that was
/// already parsed elsewhere, or to get the derived views back afterwards:
/// fields that are `Some` are used as-is, fields that are `None` are computed
/// from the HTML and stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    /// Visible text content of the page
    pub text: Option<String>,
    /// Trimmed `href` values of all anchors, in document order
    pub link_urls: Option<Vec<String>>,
}

impl PageData {
    /// Builds both views from `html`.
    pub fn from_html(html: &str, max_text_chars: usize) -> Self {
        let mut data = Self::default();
        data.fill_from_html(html, max_text_chars);
        data
    }

    /// Computes whichever views are missing. The HTML is parsed at most once and
    /// not at all when both views are already present.
    pub fn fill_from_html(&mut self, html: &str, max_text_chars: usize) {
        if self.text.is_some() && self.link_urls.is_some() {
            return;
        }
        let document = Html::parse_document(html);
        if self.text.is_none() {
            self.text = Some(extract_visible_text(&document, max_text_chars));
        }
        if self.link_urls.is_none() {
            self.link_urls = Some(extract_link_urls(&document));
        }
    }

    /// Visible text, or `""` if not computed.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Anchor URLs, or an empty slice if not computed.
    pub fn link_urls(&self) -> &[String] {
        self.link_urls.as_deref().unwrap_or_default()
    }
}

/// Extracts the `href` of every anchor, trimmed, skipping empty ones.
pub fn extract_link_urls(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the text a visitor would see.
///
/// Text of `script`, `style` and similar elements is skipped. Block elements and
/// `<br>` are separated by newlines so that text from adjacent blocks never
/// fuses into one token (`<p>Call</p><p>a@b.com</p>` must not become
/// `Calla@b.com`). The result is capped at `max_text_chars` characters.
pub fn extract_visible_text(document: &Html, max_text_chars: usize) -> String {
    let mut text = String::new();
    let mut pending = vec![Step::Enter(document.root_element())];

    // Explicit stack: nesting depth of a page is unbounded
    while let Some(step) = pending.pop() {
        match step {
            Step::Text(chunk) => text.push_str(chunk),
            Step::LineBreak => text.push('\n'),
            Step::Enter(element) => {
                let name = element.value().name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    text.push('\n');
                    continue;
                }
                if BLOCK_ELEMENTS.contains(&name) {
                    text.push('\n');
                    pending.push(Step::LineBreak);
                }
                for child in element.children().rev() {
                    if let Some(chunk) = child.value().as_text() {
                        pending.push(Step::Text(chunk));
                    } else if let Some(child_element) = ElementRef::wrap(child) {
                        pending.push(Step::Enter(child_element));
                    }
                }
            }
        }
    }

    if text.chars().count() > max_text_chars {
        log::debug!(
            "Truncating visible text from {} to {} characters",
            text.chars().count(),
            max_text_chars
        );
        text = text.chars().take(max_text_chars).collect();
    }
    text
}

/// Pending work of the visible text walk.
enum Step<'a> {
    Enter(ElementRef<'a>),
    Text(&'a str),
    LineBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_link_urls() {
        let html = r#"
            <a href="mailto:a@example.com">mail</a>
            <a href="  tel:+1 555 0100 ">call</a>
            <a href="">empty</a>
            <a>no href</a>
            <link href="https://example.com/style.css">
            <a href="/about">about</a>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_link_urls(&document),
            vec!["mailto:a@example.com", "tel:+1 555 0100", "/about"]
        );
    }

    #[test]
    fn test_visible_text_skips_hidden_elements() {
        let html = r#"<html><head><title>T</title><style>.a{}</style></head>
            <body><script>var x = "hidden@example.com";</script>
            <p>shown@example.com</p><noscript>noscript-only@example.com</noscript></body></html>"#;
        let document = Html::parse_document(html);
        let text = extract_visible_text(&document, usize::MAX);
        assert!(text.contains("shown@example.com"));
        assert!(!text.contains("hidden@example.com"));
        assert!(!text.contains("noscript-only@example.com"));
        assert!(!text.contains(".a{}"));
    }

    #[test]
    fn test_visible_text_separates_blocks() {
        let html = "<div>Call</div><div>a@example.com</div>line<br>b@example.com";
        let document = Html::parse_document(html);
        let text = extract_visible_text(&document, usize::MAX);
        assert!(text.contains("Call\n"));
        assert!(text.contains("\na@example.com"));
        assert!(text.contains("line\nb@example.com"));
    }

    #[test]
    fn test_visible_text_keeps_inline_text_together() {
        let html = "<p>write to <b>info</b>@example.com</p>";
        let document = Html::parse_document(html);
        let text = extract_visible_text(&document, usize::MAX);
        assert!(text.contains("write to info@example.com"));
    }

    #[test]
    fn test_visible_text_survives_deep_nesting() {
        let depth = 20_000;
        let html = format!("{}deep@example.com{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let document = Html::parse_document(&html);
        let text = extract_visible_text(&document, usize::MAX);
        assert!(text.contains("\ndeep@example.com\n"));
    }

    #[test]
    fn test_visible_text_keeps_document_order() {
        let html = "<ul><li>one</li><li>two <i>and</i> three</li></ul><p>four</p>";
        let document = Html::parse_document(html);
        let text = extract_visible_text(&document, usize::MAX);
        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(words, vec!["one", "two", "and", "three", "four"]);
    }

    #[test]
    fn test_visible_text_is_capped() {
        let html = "<p>abcdefghij</p>";
        let document = Html::parse_document(html);
        assert_eq!(extract_visible_text(&document, 3).chars().count(), 3);
    }

    #[test]
    fn test_visible_text_decodes_entities() {
        let html = "<p>info&#64;example.com &amp; more</p>";
        let document = Html::parse_document(html);
        let text = extract_visible_text(&document, usize::MAX);
        assert!(text.contains("info@example.com & more"));
    }

    #[test]
    fn test_page_data_only_fills_missing_views() {
        let mut data = PageData {
            text: Some("given text".to_string()),
            link_urls: None,
        };
        data.fill_from_html(r#"<a href="https://twitter.com/apify">t</a>"#, usize::MAX);
        assert_eq!(data.text(), "given text");
        assert_eq!(data.link_urls(), &["https://twitter.com/apify".to_string()]);
    }

    #[test]
    fn test_page_data_from_html() {
        let data = PageData::from_html("<p>hello</p>", usize::MAX);
        assert!(data.text().contains("hello"));
        assert!(data.link_urls().is_empty());
    }

    #[test]
    fn test_page_data_empty_and_malformed_html() {
        let data = PageData::from_html("", usize::MAX);
        assert_eq!(data.text().trim(), "");
        let data = PageData::from_html("<div><p>unclosed <a href='x'", usize::MAX);
        assert!(data.text.is_some());
        assert!(data.link_urls.is_some());
    }
}
