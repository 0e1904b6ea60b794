//! `<head>` rewriting (template string -> template string).
//!
//! Sets the document title and inserts rendered meta tags before `</head>`.
//! Matching is textual; the [`HeadRewriter`] trait keeps it swappable for a
//! DOM-aware implementation without touching metadata resolution.

use crate::debug;
use crate::utils::html::escape;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// First `<title>...</title>`, case-insensitive, lazy, spanning newlines.
static TITLE_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>.*?</title>").unwrap());

const HEAD_CLOSE: &str = "</head>";

/// Insertion points in an HTML document.
///
/// Both methods return `None` when the anchor is missing; the caller keeps
/// the template it already has.
pub trait HeadRewriter {
    /// Replace the first `<title>` element with one containing `title`
    /// (already escaped).
    fn replace_title(&self, template: &str, escaped_title: &str) -> Option<String>;

    /// Insert `html` immediately before the first `</head>`.
    fn insert_before_head_close(&self, template: &str, html: &str) -> Option<String>;
}

/// Regex and substring based rewriter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexHeadRewriter;

impl HeadRewriter for RegexHeadRewriter {
    fn replace_title(&self, template: &str, escaped_title: &str) -> Option<String> {
        if !TITLE_ELEMENT.is_match(template) {
            return None;
        }
        let element = format!("<title>{escaped_title}</title>");
        Some(TITLE_ELEMENT.replace(template, NoExpand(&element)).into_owned())
    }

    fn insert_before_head_close(&self, template: &str, html: &str) -> Option<String> {
        let pos = template.find(HEAD_CLOSE)?;
        let mut out = String::with_capacity(template.len() + html.len());
        out.push_str(&template[..pos]);
        out.push_str(html);
        out.push_str(&template[pos..]);
        Some(out)
    }
}

/// Apply the title and meta tags to `template`, returning the new document.
///
/// - Title: only when `full_title` is non-empty; no `<title>` element means
///   no title is set.
/// - Tags: always attempted; no `</head>` means they are dropped.
pub fn rewrite_template<R: HeadRewriter + ?Sized>(
    rewriter: &R,
    template: &str,
    full_title: &str,
    tags_html: &str,
) -> String {
    let mut doc = template.to_owned();

    if !full_title.is_empty() {
        match rewriter.replace_title(&doc, &escape(full_title)) {
            Some(rewritten) => doc = rewritten,
            None => debug!("inject"; "template has no <title> element, title not set"),
        }
    }

    match rewriter.insert_before_head_close(&doc, tags_html) {
        Some(rewritten) => doc = rewritten,
        None => debug!("inject"; "template has no </head>, meta tags dropped"),
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &str = "<meta property=\"og:type\" content=\"website\">\n";

    mod title {
        use super::*;

        #[test]
        fn replaced() {
            let out = RegexHeadRewriter
                .replace_title("<head><title>Old</title></head>", "New")
                .unwrap();
            assert_eq!(out, "<head><title>New</title></head>");
        }

        #[test]
        fn case_insensitive_and_multiline() {
            let out = RegexHeadRewriter
                .replace_title("<HEAD><TITLE>\n  Old\n</Title></HEAD>", "New")
                .unwrap();
            assert_eq!(out, "<HEAD><title>New</title></HEAD>");
        }

        #[test]
        fn only_first() {
            let out = RegexHeadRewriter
                .replace_title("<title>A</title><svg><title>B</title></svg>", "New")
                .unwrap();
            assert_eq!(out, "<title>New</title><svg><title>B</title></svg>");
        }

        #[test]
        fn dollar_signs_literal() {
            let out = RegexHeadRewriter
                .replace_title("<title>x</title>", "$1 off")
                .unwrap();
            assert_eq!(out, "<title>$1 off</title>");
        }

        #[test]
        fn missing() {
            assert!(RegexHeadRewriter.replace_title("<head></head>", "New").is_none());
        }

        #[test]
        fn attributes_not_matched() {
            assert!(
                RegexHeadRewriter
                    .replace_title("<title lang=\"en\">x</title>", "New")
                    .is_none()
            );
        }
    }

    mod head_close {
        use super::*;

        #[test]
        fn inserted() {
            let out = RegexHeadRewriter
                .insert_before_head_close("<head></head><body></body>", TAGS)
                .unwrap();
            assert_eq!(out, format!("<head>{TAGS}</head><body></body>"));
        }

        #[test]
        fn only_first_occurrence() {
            let out = RegexHeadRewriter
                .insert_before_head_close("</head></head>", "X")
                .unwrap();
            assert_eq!(out, "X</head></head>");
        }

        #[test]
        fn case_sensitive() {
            assert!(
                RegexHeadRewriter
                    .insert_before_head_close("<HEAD></HEAD>", TAGS)
                    .is_none()
            );
        }
    }

    mod rewrite {
        use super::*;

        #[test]
        fn title_and_tags() {
            let out = rewrite_template(
                &RegexHeadRewriter,
                "<html><head><title>x</title></head></html>",
                "A & B",
                TAGS,
            );
            assert_eq!(
                out,
                format!("<html><head><title>A &amp; B</title>{TAGS}</head></html>")
            );
        }

        #[test]
        fn empty_title_leaves_title_element() {
            let out = rewrite_template(
                &RegexHeadRewriter,
                "<head><title>Keep</title></head>",
                "",
                TAGS,
            );
            assert_eq!(out, format!("<head><title>Keep</title>{TAGS}</head>"));
        }

        #[test]
        fn missing_head_close_only_title() {
            let template = "<title>x</title><body>hi</body>";
            let out = rewrite_template(&RegexHeadRewriter, template, "New", TAGS);
            assert_eq!(out, "<title>New</title><body>hi</body>");
        }

        #[test]
        fn missing_everything_unchanged() {
            let template = "<p>fragment</p>";
            assert_eq!(
                rewrite_template(&RegexHeadRewriter, template, "New", TAGS),
                template
            );
        }

        #[test]
        fn custom_rewriter() {
            struct Append;
            impl HeadRewriter for Append {
                fn replace_title(&self, _: &str, _: &str) -> Option<String> {
                    None
                }
                fn insert_before_head_close(&self, template: &str, html: &str) -> Option<String> {
                    Some(format!("{template}{html}"))
                }
            }
            assert_eq!(rewrite_template(&Append, "doc", "T", "<m>"), "doc<m>");
        }
    }
}
