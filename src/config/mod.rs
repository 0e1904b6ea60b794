//! Site-wide SEO settings and their JSON persistence.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error.rs   # SettingsError
//! ├── store.rs   # SettingsStore (load/save seo_settings.json)
//! └── mod.rs     # SiteSettings (this file)
//! ```
//!
//! # File format
//!
//! ```json
//! {
//!   "site_title": "My Website",
//!   "site_description": "",
//!   "title_separator": "-",
//!   "append_site_title": true,
//!   "social_image": ""
//! }
//! ```

mod error;
mod store;

pub use error::SettingsError;
pub use store::SettingsStore;

use crate::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Global SEO defaults edited from the admin form.
///
/// Immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site name, appended to page titles and used when a page has none.
    pub site_title: String,
    /// Fallback meta description.
    pub site_description: String,
    /// Placed between page title and site title.
    pub title_separator: String,
    /// Whether to render `Page | Site` instead of just `Page`.
    pub append_site_title: bool,
    /// Fallback `og:image` / `twitter:image` URL.
    pub social_image: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "My Website".into(),
            site_description: String::new(),
            title_separator: "-".into(),
            append_site_title: true,
            social_image: String::new(),
        }
    }
}

impl SiteSettings {
    /// Overlay stored values onto the defaults, one key at a time.
    ///
    /// Scalars are coerced to the field's type: text fields take numbers as
    /// their JSON text and `null` as empty, and `append_site_title` follows
    /// loose truthiness (`0`, `""`, `"0"`, `null`, `[]` are false). Arrays
    /// and objects in text fields keep the default. Unknown keys are
    /// ignored.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut settings = Self::default();
        overlay_text(map, "site_title", &mut settings.site_title);
        overlay_text(map, "site_description", &mut settings.site_description);
        overlay_text(map, "title_separator", &mut settings.title_separator);
        overlay_text(map, "social_image", &mut settings.social_image);
        if let Some(value) = map.get("append_site_title") {
            settings.append_site_title = truthy(value);
        }
        settings
    }
}

fn overlay_text(map: &Map<String, Value>, key: &str, slot: &mut String) {
    let Some(value) = map.get(key) else {
        return;
    };
    match value {
        Value::String(s) => slot.clone_from(s),
        Value::Number(n) => *slot = n.to_string(),
        Value::Bool(true) => *slot = "1".into(),
        Value::Bool(false) | Value::Null => slot.clear(),
        Value::Array(_) | Value::Object(_) => {
            debug!("settings"; "ignoring `{}`: expected a string", key)
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_defaults() {
        let s = SiteSettings::default();
        assert_eq!(s.site_title, "My Website");
        assert_eq!(s.site_description, "");
        assert_eq!(s.title_separator, "-");
        assert!(s.append_site_title);
        assert_eq!(s.social_image, "");
    }

    #[test]
    fn test_overlay_partial() {
        let s = SiteSettings::from_json_map(&map(json!({
            "site_title": "Fearless",
            "append_site_title": false
        })));
        assert_eq!(s.site_title, "Fearless");
        assert!(!s.append_site_title);
        assert_eq!(s.title_separator, "-");
    }

    #[test]
    fn test_overlay_coerces_scalars() {
        let s = SiteSettings::from_json_map(&map(json!({
            "site_title": 42,
            "site_description": "Kept",
            "title_separator": null,
            "social_image": ["a.png"]
        })));
        assert_eq!(s.site_title, "42");
        assert_eq!(s.site_description, "Kept");
        assert_eq!(s.title_separator, "");
        assert_eq!(s.social_image, "");
    }

    #[test]
    fn test_overlay_null_title_and_zero_flag() {
        let s = SiteSettings::from_json_map(&map(json!({
            "append_site_title": 0,
            "site_title": null
        })));
        assert!(!s.append_site_title);
        assert_eq!(s.site_title, "");
    }

    #[test]
    fn test_overlay_flag_truthiness() {
        let flag = |v: Value| {
            SiteSettings::from_json_map(&map(json!({ "append_site_title": v }))).append_site_title
        };
        assert!(flag(json!(1)));
        assert!(flag(json!("yes")));
        assert!(flag(json!({})));
        assert!(!flag(json!("0")));
        assert!(!flag(json!("")));
        assert!(!flag(json!(0.0)));
        assert!(!flag(json!(null)));
        assert!(!flag(json!([])));
    }

    #[test]
    fn test_overlay_explicit_empty_title() {
        let s = SiteSettings::from_json_map(&map(json!({ "site_title": "" })));
        assert_eq!(s.site_title, "");
    }

    #[test]
    fn test_overlay_ignores_unknown_keys() {
        let s = SiteSettings::from_json_map(&map(json!({ "robots": "noindex" })));
        assert_eq!(s, SiteSettings::default());
    }

    #[test]
    fn test_serialize_keys() {
        let value = serde_json::to_value(SiteSettings::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "site_title",
            "site_description",
            "title_separator",
            "append_site_title",
            "social_image",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 5);
    }
}
