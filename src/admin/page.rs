//! Settings form HTML.

use super::form::SAVE_ACTION;
use super::{AdminSection, SEO_SECTION};
use crate::config::SiteSettings;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

const USAGE_EXAMPLE: &str = r#"<!-- json
{
    "title": "Your Page Title",
    "description": "Your page description for search engines",
    "social_image": "https://example.com/image.jpg"
}
-->

# Your Page Content"#;

/// Render the admin settings page as an HTML fragment.
///
/// `notice` is shown above the form when present.
pub fn render_page(settings: &SiteSettings, notice: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);

    if let Some(notice) = notice {
        writeln!(html, r#"<div class="notice notice-success">{}</div>"#, escape(notice)).unwrap();
    }

    writeln!(html, r#"<h2 id="{}">{} Settings</h2>"#, SEO_SECTION.id, SEO_SECTION.label).unwrap();
    writeln!(html, r#"<form method="POST" class="seo-settings">"#).unwrap();
    writeln!(html, r#"<input type="hidden" name="action" value="{SAVE_ACTION}">"#).unwrap();

    text_field(
        &mut html,
        "Site Title",
        "site_title",
        &settings.site_title,
        "The name of your website (used as default title and in meta tags)",
    );

    writeln!(
        html,
        "<div class=\"field\">\n<label for=\"site_description\">Site Description</label>\n\
         <textarea id=\"site_description\" name=\"site_description\" rows=\"3\">{}</textarea>\n\
         <p class=\"help\">A short description of your website (used in meta description)</p>\n</div>",
        escape(&settings.site_description)
    )
    .unwrap();

    text_field(
        &mut html,
        "Title Separator",
        "title_separator",
        &settings.title_separator,
        "Character used between page title and site title",
    );

    let checked = if settings.append_site_title { " checked" } else { "" };
    writeln!(
        html,
        "<div class=\"field\">\n\
         <input type=\"checkbox\" id=\"append_site_title\" name=\"append_site_title\"{checked}>\n\
         <label for=\"append_site_title\">Add site title after page title</label>\n\
         <p class=\"help\">Example: Page Title {} {}</p>\n</div>",
        escape(&settings.title_separator),
        escape(&settings.site_title)
    )
    .unwrap();

    text_field(
        &mut html,
        "Default Social Image URL",
        "social_image",
        &settings.social_image,
        "Image used when sharing on social media (absolute URL recommended)",
    );

    html.push_str("<button type=\"submit\">Save Settings</button>\n</form>\n");

    writeln!(
        html,
        "<div class=\"usage\">\n<h3>How to use SEO in your content</h3>\n\
         <p>Add JSON frontmatter to your markdown files to customize SEO for each page:</p>\n\
         <pre>{}</pre>\n</div>",
        escape(USAGE_EXAMPLE)
    )
    .unwrap();

    html
}

/// Wrap a fragment into a standalone document for the admin server.
pub fn render_document(section: AdminSection, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{} Settings</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        section.label
    )
}

fn text_field(html: &mut String, label: &str, name: &str, value: &str, help: &str) {
    writeln!(
        html,
        "<div class=\"field\">\n<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n\
         <p class=\"help\">{help}</p>\n</div>",
        escape_attr(value)
    )
    .unwrap();
}
