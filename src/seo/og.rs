//! Description, Open Graph and Twitter Card meta tags.
//!
//! Pure data + rendering. Insertion into the template is handled by
//! `pipeline/transform/head.rs`.

use super::EffectiveMetadata;
use crate::utils::html::escape_attr;
use std::fmt;

const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary_large_image";

/// Which attribute carries the tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name="...">` (description, Twitter).
    Name,
    /// `<meta property="...">` (Open Graph).
    Property,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    /// Unescaped content; escaped on render.
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<meta {}="{}" content="{}">"#,
            self.attr.as_str(),
            self.key,
            escape_attr(&self.content)
        )
    }
}

/// Ordered list of tags for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags(Vec<MetaTag>);

impl MetaTags {
    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated HTML, one tag per line.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn push_if(&mut self, tag: MetaTag) {
        if !tag.content.is_empty() {
            self.0.push(tag);
        }
    }
}

impl fmt::Display for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            writeln!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Build the tag list in its fixed output order.
///
/// `og:type` and `twitter:card` are always present; every other tag only
/// when its value is non-empty.
pub fn render_tags(meta: &EffectiveMetadata) -> MetaTags {
    let mut tags = MetaTags::default();

    tags.push_if(MetaTag::name("description", &meta.description));

    tags.0.push(MetaTag::property("og:type", OG_TYPE));
    tags.push_if(MetaTag::property("og:title", &meta.full_title));
    tags.push_if(MetaTag::property("og:description", &meta.description));
    tags.push_if(MetaTag::property("og:image", &meta.social_image));

    tags.0.push(MetaTag::name("twitter:card", TWITTER_CARD));
    tags.push_if(MetaTag::name("twitter:title", &meta.full_title));
    tags.push_if(MetaTag::name("twitter:description", &meta.description));
    tags.push_if(MetaTag::name("twitter:image", &meta.social_image));

    tags
}
