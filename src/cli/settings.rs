//! `settings` command: show or update `seo_settings.json`.

use super::{SetArgs, SettingsCommand};
use crate::config::{SettingsStore, SiteSettings};
use crate::log;
use anyhow::{Context, Result};

pub fn run_settings(action: &SettingsCommand, store: &SettingsStore) -> Result<()> {
    match action {
        SettingsCommand::Show { strict } => {
            let settings = if *strict {
                store.try_load()?
            } else {
                store.load()
            };
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        SettingsCommand::Set(args) => {
            let settings = apply(store.load(), args);
            store
                .save(&settings)
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            log!("settings"; "saved {}", store.path().display());
            Ok(())
        }
    }
}

/// Overlay the provided flags onto `settings`, trimming text like the form.
fn apply(mut settings: SiteSettings, args: &SetArgs) -> SiteSettings {
    let trimmed = |v: &String| v.trim().to_owned();

    if let Some(v) = &args.site_title {
        settings.site_title = trimmed(v);
    }
    if let Some(v) = &args.site_description {
        settings.site_description = trimmed(v);
    }
    if let Some(v) = &args.title_separator {
        settings.title_separator = trimmed(v);
    }
    if let Some(v) = args.append_site_title {
        settings.append_site_title = v;
    }
    if let Some(v) = &args.social_image {
        settings.social_image = trimmed(v);
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set_args() -> SetArgs {
        SetArgs {
            site_title: None,
            site_description: None,
            title_separator: None,
            append_site_title: None,
            social_image: None,
        }
    }

    #[test]
    fn test_apply_only_given_fields() {
        let args = SetArgs {
            site_title: Some("  Docs ".into()),
            append_site_title: Some(false),
            ..set_args()
        };
        let settings = apply(SiteSettings::default(), &args);
        assert_eq!(settings.site_title, "Docs");
        assert!(!settings.append_site_title);
        assert_eq!(settings.title_separator, "-");
    }

    #[test]
    fn test_set_merges_with_stored() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::in_dir(dir.path());

        let first = SetArgs {
            site_description: Some("Described".into()),
            ..set_args()
        };
        run_settings(&SettingsCommand::Set(first), &store).unwrap();

        let second = SetArgs {
            social_image: Some("/og.png".into()),
            ..set_args()
        };
        run_settings(&SettingsCommand::Set(second), &store).unwrap();

        let saved = store.try_load().unwrap();
        assert_eq!(saved.site_description, "Described");
        assert_eq!(saved.social_image, "/og.png");
        assert_eq!(saved.site_title, "My Website");
    }

    #[test]
    fn test_show_strict_rejects_malformed() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::in_dir(dir.path());
        std::fs::write(store.path(), "nope").unwrap();

        assert!(run_settings(&SettingsCommand::Show { strict: true }, &store).is_err());
        assert!(run_settings(&SettingsCommand::Show { strict: false }, &store).is_ok());
    }
}
