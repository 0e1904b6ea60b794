//! Host CMS integration.
//!
//! The host calls [`RenderHook::before_render`] with the finished template
//! and gets the rewritten one back, and lists [`SeoPlugin::admin_section`]
//! in its admin menu.

use crate::admin::{self, AdminSection, SEO_SECTION, SettingsForm};
use crate::config::{SettingsError, SettingsStore};
use crate::seo::{RenderContext, inject_meta_tags};

/// Hook run on every page render before the response is sent.
pub trait RenderHook {
    fn before_render(&self, template: &str, content: Option<&str>, title: Option<&str>) -> String;
}

/// The SEO plugin, bound to one settings file.
#[derive(Debug, Clone)]
pub struct SeoPlugin {
    store: SettingsStore,
}

impl SeoPlugin {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn admin_section(&self) -> AdminSection {
        SEO_SECTION
    }

    /// Render the admin page, handling `form` first when one was submitted.
    pub fn admin_page(&self, form: Option<SettingsForm>) -> Result<String, SettingsError> {
        let notice = match form {
            Some(form) => admin::handle_submission(&self.store, form)?,
            None => None,
        };
        let settings = self.store.load();
        Ok(admin::render_page(&settings, notice))
    }
}

impl RenderHook for SeoPlugin {
    /// Settings are read once per render.
    fn before_render(&self, template: &str, content: Option<&str>, title: Option<&str>) -> String {
        let settings = self.store.load();
        let ctx = RenderContext {
            content,
            fallback_title: title,
            settings: &settings,
        };
        inject_meta_tags(template, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;
    use tempfile::TempDir;

    fn plugin(dir: &TempDir) -> SeoPlugin {
        SeoPlugin::new(SettingsStore::in_dir(dir.path()))
    }

    #[test]
    fn test_section() {
        let dir = TempDir::new().unwrap();
        let section = plugin(&dir).admin_section();
        assert_eq!(section.label, "SEO");
        assert_eq!(section.menu_order, 30);
    }

    #[test]
    fn test_before_render_with_defaults() {
        let dir = TempDir::new().unwrap();
        let out = plugin(&dir).before_render(
            "<head><title></title></head>",
            Some("body"),
            Some("Blog"),
        );
        assert!(out.starts_with("<head><title>Blog - My Website</title>"));
    }

    #[test]
    fn test_before_render_reads_settings_each_time() {
        let dir = TempDir::new().unwrap();
        let plugin = plugin(&dir);
        let template = "<head><title></title></head>";

        let first = plugin.before_render(template, None, Some("A"));
        plugin
            .store()
            .save(&SiteSettings {
                append_site_title: false,
                ..SiteSettings::default()
            })
            .unwrap();
        let second = plugin.before_render(template, None, Some("A"));

        assert!(first.contains("<title>A - My Website</title>"));
        assert!(second.contains("<title>A</title>"));
    }

    #[test]
    fn test_admin_page_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let plugin = plugin(&dir);
        let form = SettingsForm::from_urlencoded("action=save_seo_settings&site_title=Saved");

        let page = plugin.admin_page(Some(form)).unwrap();
        assert!(page.contains("SEO settings saved successfully!"));
        assert!(page.contains(r#"name="site_title" value="Saved""#));

        let page = plugin.admin_page(None).unwrap();
        assert!(!page.contains("saved successfully"));
    }
}
