//! Admin section: the SEO settings form.
//!
//! - `form`: parsing and saving a submission
//! - `page`: rendering the form

mod form;
mod page;

pub use form::{SettingsForm, handle_submission};
pub use page::{render_document, render_page};

/// Entry in the host CMS admin menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSection {
    pub id: &'static str,
    pub label: &'static str,
    pub menu_order: u32,
}

/// The SEO settings section.
pub const SEO_SECTION: AdminSection = AdminSection {
    id: "seo",
    label: "SEO",
    menu_order: 30,
};
