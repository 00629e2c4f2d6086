//! Rich text helpers
//!
//! Admin-authored fields arrive from a WYSIWYG editor that wraps inline
//! content in a block element. Subtitles are rendered inside `<h6>`, where a
//! nested `<p>` would be invalid markup, so the single outer wrapper is
//! removed before rendering.

use regex_lite::Regex;
use std::sync::OnceLock;

fn wrapper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)^<(p|div)(?:\s[^>]*)?>(.*)</(p|div)>$")
            .expect("wrapper pattern is a valid regex")
    })
}

/// Remove one outer `<p>…</p>` (or `<div>…</div>`) wrapper spanning the whole value.
///
/// Conservative: the value is returned unchanged unless, ignoring surrounding
/// whitespace, it is exactly one wrapper element. `<p>a</p><p>b</p>` is two
/// paragraphs and is left alone.
pub fn strip_outer_paragraph(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return value;
    }

    let Some(caps) = wrapper_regex().captures(trimmed) else {
        return value;
    };

    let (Some(open), Some(inner), Some(close)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return value;
    };

    let tag = open.as_str().to_ascii_lowercase();
    if !close.as_str().eq_ignore_ascii_case(&tag) {
        return value;
    }

    if !is_balanced(inner.as_str(), &tag) {
        return value;
    }

    inner.as_str()
}

/// True when every `</tag>` inside `inner` closes a `<tag>` opened inside `inner`.
fn is_balanced(inner: &str, tag: &str) -> bool {
    let lower = inner.to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    let mut depth: i32 = 0;
    let mut cursor = 0;
    while let Some(pos) = lower[cursor..].find('<') {
        let at = cursor + pos;
        let rest = &lower[at..];
        if rest.starts_with(&close) && is_tag_boundary(&rest[close.len()..], true) {
            depth -= 1;
            if depth < 0 {
                return false;
            }
        } else if rest.starts_with(&open) && is_tag_boundary(&rest[open.len()..], false) {
            depth += 1;
        }
        cursor = at + 1;
    }

    depth == 0
}

// `<p` must not match `<pre`, `</p` must not match `</param`
fn is_tag_boundary(rest: &str, closing: bool) -> bool {
    match rest.chars().next() {
        Some('>') => true,
        Some(c) if c.is_ascii_whitespace() => true,
        Some('/') => !closing,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_single_wrapper() {
        assert_eq!(strip_outer_paragraph("<p>This is a subtitle</p>"), "This is a subtitle");
    }

    #[test]
    fn test_leaves_inner_html() {
        assert_eq!(
            strip_outer_paragraph("<p><strong>Bold</strong> and <em>em</em></p>"),
            "<strong>Bold</strong> and <em>em</em>"
        );
    }

    #[test]
    fn test_no_change_without_wrapper() {
        assert_eq!(strip_outer_paragraph("Plain subtitle"), "Plain subtitle");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(strip_outer_paragraph(""), "");
        assert_eq!(strip_outer_paragraph("   "), "   ");
    }

    #[test]
    fn test_wrapper_with_attributes_and_whitespace() {
        assert_eq!(
            strip_outer_paragraph("  <P class=\"lead\">Hello</P>\n"),
            "Hello"
        );
        assert_eq!(strip_outer_paragraph("<div id=\"x\">Inner</div>"), "Inner");
    }

    #[test]
    fn test_two_paragraphs_untouched() {
        let value = "<p>first</p><p>second</p>";
        assert_eq!(strip_outer_paragraph(value), value);
    }

    #[test]
    fn test_mismatched_tags_untouched() {
        let value = "<p>text</div>";
        assert_eq!(strip_outer_paragraph(value), value);
    }

    #[test]
    fn test_nested_divs_keep_inner_structure() {
        assert_eq!(
            strip_outer_paragraph("<div><div>a</div><div>b</div></div>"),
            "<div>a</div><div>b</div>"
        );
    }

    #[test]
    fn test_pre_is_not_a_paragraph() {
        assert_eq!(strip_outer_paragraph("<p><pre>code</pre></p>"), "<pre>code</pre>");
        let value = "<pre>code</pre>";
        assert_eq!(strip_outer_paragraph(value), value);
    }
}
