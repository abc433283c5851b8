//! Word tokenization of page content
//!
//! Only visible text is considered: text inside `script`, `style`, `noscript`
//! and `template` elements never produces tokens.

use scraper::{ElementRef, Html, Node};
use unicode_segmentation::UnicodeSegmentation;

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Tokenizes raw page content into lowercase alphabetic words
///
/// Malformed or non-HTML content is handled best effort; content with no
/// visible words yields an empty vector.
///
/// # Example
///
/// ```
/// use crawl_lens::crawler::tokenize;
///
/// let html = b"<p>Hello, World! 42 times</p><script>var x = 1;</script>";
/// assert_eq!(tokenize(html), vec!["hello", "world", "times"]);
/// ```
pub fn tokenize(content: &[u8]) -> Vec<String> {
    let text = visible_text(content);
    tokens(&text).collect()
}

/// Extracts the visible text of a page, one space between text nodes
pub fn visible_text(content: &[u8]) -> String {
    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);

    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    text
}

/// Lazily splits text on Unicode word boundaries, keeping alphabetic words
///
/// Apostrophes also split words, so `student's` yields `student` and `s`.
/// The iterator makes one pass over `text`; each item is lowercased.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words()
        .flat_map(|word| word.split(is_apostrophe))
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            Node::Element(el) => {
                if HIDDEN_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
