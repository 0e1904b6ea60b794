//! JSON frontmatter in a leading HTML comment.
//!
//! ```text
//! <!-- json
//! { "title": "...", "description": "...", "social_image": "..." }
//! -->
//! # Page body
//! ```
//!
//! Extraction never fails. A missing, malformed, or non-object block yields
//! an empty [`PageMetadata`].

use crate::debug;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Leading `<!-- json ... -->` block. Anchored at the start of the content,
/// lazy so the first `-->` closes it, and `.` spans newlines.
static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A<!--\s*json\s*(.*?)\s*-->").unwrap());

/// Page-level overrides.
///
/// `None` means the key was not given; `Some("")` means it was given empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub social_image: Option<String>,
}

impl PageMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.social_image.is_none()
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            title: field(obj, "title"),
            description: field(obj, "description"),
            social_image: field(obj, "social_image"),
        }
    }
}

/// Scalar JSON values become text; `null`, arrays and objects count as absent.
fn field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".into()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Extract page metadata from the leading frontmatter block of `content`.
///
/// `None` content is treated as empty.
pub fn extract_metadata(content: Option<&str>) -> PageMetadata {
    let content = content.unwrap_or_default();
    let Some(body) = FRONTMATTER.captures(content).and_then(|c| c.get(1)) else {
        return PageMetadata::default();
    };

    match serde_json::from_str::<Value>(body.as_str()) {
        Ok(Value::Object(obj)) => PageMetadata::from_object(&obj),
        Ok(_) => {
            debug!("frontmatter"; "json block is not an object, ignored");
            PageMetadata::default()
        }
        Err(e) => {
            debug!("frontmatter"; "malformed json block ignored: {}", e);
            PageMetadata::default()
        }
    }
}

/// Content with the leading frontmatter block removed.
///
/// Returns `content` unchanged when there is no block.
pub fn strip_frontmatter(content: &str) -> &str {
    match FRONTMATTER.find(content) {
        Some(m) => content[m.end()..].trim_start_matches(['\r', '\n']),
        None => content,
    }
}
