//! SEO metadata: frontmatter extraction, resolution, and tag injection.
//!
//! ```text
//! content ──► frontmatter ──► PageMetadata ─┐
//!                                           ├─► resolve ──► EffectiveMetadata ──► og::render_tags
//! fallback title + SiteSettings ────────────┘                     │                      │
//!                                                                 └──── full_title ──────┴─► pipeline::rewrite_template
//! ```
//!
//! None of these steps can fail. Missing or malformed input degrades to
//! "do nothing for that piece".

mod frontmatter;
mod og;
mod resolve;

pub use frontmatter::{PageMetadata, extract_metadata, strip_frontmatter};
pub use og::render_tags;
pub use resolve::{EffectiveMetadata, resolve};

use crate::config::SiteSettings;
use crate::debug;
use crate::pipeline::{HeadRewriter, RegexHeadRewriter, rewrite_template};

/// Everything one render needs, passed explicitly.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Raw page source, possibly with a frontmatter block.
    pub content: Option<&'a str>,
    /// Title supplied by the host when the page has no frontmatter title.
    pub fallback_title: Option<&'a str>,
    pub settings: &'a SiteSettings,
}

impl<'a> RenderContext<'a> {
    pub fn new(settings: &'a SiteSettings) -> Self {
        Self {
            content: None,
            fallback_title: None,
            settings,
        }
    }

    pub fn with_content(mut self, content: &'a str) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_fallback_title(mut self, title: &'a str) -> Self {
        self.fallback_title = Some(title);
        self
    }

    /// Resolve the metadata this context will emit.
    pub fn effective(&self) -> EffectiveMetadata {
        let metadata = extract_metadata(self.content);
        resolve(&metadata, self.fallback_title, self.settings)
    }
}

/// Inject title and meta tags into `template`, returning the new document.
pub fn inject_meta_tags(template: &str, ctx: &RenderContext<'_>) -> String {
    inject_meta_tags_with(&RegexHeadRewriter, template, ctx)
}

/// [`inject_meta_tags`] with a custom template rewriter.
pub fn inject_meta_tags_with<R: HeadRewriter + ?Sized>(
    rewriter: &R,
    template: &str,
    ctx: &RenderContext<'_>,
) -> String {
    let effective = ctx.effective();
    let tags = render_tags(&effective);
    debug!("inject"; "title {:?}, {} meta tags", effective.full_title, tags.len());

    rewrite_template(rewriter, template, &effective.full_title, &tags.to_html())
}
