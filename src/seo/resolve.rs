//! Page overrides + site defaults -> effective metadata.

use super::PageMetadata;
use crate::config::SiteSettings;

/// The values actually emitted into the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveMetadata {
    pub full_title: String,
    pub description: String,
    pub social_image: String,
}

/// Resolve the effective metadata for one render.
///
/// Title: frontmatter `title`, else `fallback_title`, else empty, then
/// composed with the site title. Description and social image: frontmatter
/// value if present (even when empty), else the site default.
pub fn resolve(
    metadata: &PageMetadata,
    fallback_title: Option<&str>,
    settings: &SiteSettings,
) -> EffectiveMetadata {
    let page_title = metadata
        .title
        .as_deref()
        .or(fallback_title)
        .unwrap_or_default();

    EffectiveMetadata {
        full_title: compose_title(page_title, settings),
        description: metadata
            .description
            .clone()
            .unwrap_or_else(|| settings.site_description.clone()),
        social_image: metadata
            .social_image
            .clone()
            .unwrap_or_else(|| settings.social_image.clone()),
    }
}

/// Build the full `<title>` text.
///
/// The append rule is checked first, so a page title with appending turned
/// off stays as is rather than being replaced by the site title.
pub fn compose_title(page_title: &str, settings: &SiteSettings) -> String {
    let site_title = settings.site_title.as_str();

    if settings.append_site_title && !page_title.is_empty() && !site_title.is_empty() {
        format!("{page_title} {} {site_title}", settings.title_separator)
    } else if page_title.is_empty() && !site_title.is_empty() {
        site_title.to_owned()
    } else {
        page_title.to_owned()
    }
}
