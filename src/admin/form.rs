//! Settings form submission.

use crate::config::{SettingsError, SettingsStore, SiteSettings};
use crate::log;

/// Value of the hidden `action` field that marks a save.
pub const SAVE_ACTION: &str = "save_seo_settings";

/// Shown after a successful save.
pub const SAVED_NOTICE: &str = "SEO settings saved successfully!";

/// A submitted settings form, before normalization.
///
/// Text fields are `None` when the key was absent from the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub action: Option<String>,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub title_separator: Option<String>,
    /// Checkbox: present means checked, whatever its value.
    pub append_site_title: bool,
    pub social_image: Option<String>,
}

impl SettingsForm {
    /// Build from decoded key/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "action" => form.action = Some(value.into()),
                "site_title" => form.site_title = Some(value.into()),
                "site_description" => form.site_description = Some(value.into()),
                "title_separator" => form.title_separator = Some(value.into()),
                "append_site_title" => form.append_site_title = true,
                "social_image" => form.social_image = Some(value.into()),
                _ => {}
            }
        }
        form
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body.as_bytes()))
    }

    /// Whether this submission asks for a save.
    pub fn is_save(&self) -> bool {
        self.action.as_deref() == Some(SAVE_ACTION)
    }

    /// Normalize into settings.
    ///
    /// Text is trimmed. A missing separator becomes `-`; a submitted blank
    /// one stays blank.
    pub fn into_settings(self) -> SiteSettings {
        let text = |v: Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_owned();
        SiteSettings {
            site_title: text(self.site_title),
            site_description: text(self.site_description),
            title_separator: self
                .title_separator
                .as_deref()
                .map_or_else(|| "-".to_owned(), |s| s.trim().to_owned()),
            append_site_title: self.append_site_title,
            social_image: text(self.social_image),
        }
    }
}

/// Save the submission if it is a save action.
///
/// Returns the notice to display, or `None` when nothing was saved.
pub fn handle_submission(
    store: &SettingsStore,
    form: SettingsForm,
) -> Result<Option<&'static str>, SettingsError> {
    if !form.is_save() {
        return Ok(None);
    }

    store.save(&form.into_settings())?;
    log!("admin"; "settings saved to {}", store.path().display());
    Ok(Some(SAVED_NOTICE))
}
