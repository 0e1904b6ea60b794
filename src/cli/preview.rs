//! `preview` command: show resolved metadata and tags for one page.

use super::PreviewArgs;
use crate::config::SettingsStore;
use crate::seo::{RenderContext, render_tags, strip_frontmatter};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::fs;

pub fn run_preview(args: &PreviewArgs, store: &SettingsStore) -> Result<()> {
    let content = args
        .content
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read content {}", path.display()))
        })
        .transpose()?;

    if args.body {
        print!("{}", strip_frontmatter(content.as_deref().unwrap_or_default()));
        return Ok(());
    }

    let settings = store.load();
    let ctx = RenderContext {
        content: content.as_deref(),
        fallback_title: args.title.as_deref(),
        settings: &settings,
    };
    print!("{}", format_preview(&ctx));
    Ok(())
}

/// Resolved values followed by the tags, one per line.
fn format_preview(ctx: &RenderContext<'_>) -> String {
    let effective = ctx.effective();
    let tags = render_tags(&effective);

    let mut out = String::new();
    writeln!(out, "title:        {}", effective.full_title).unwrap();
    writeln!(out, "description:  {}", effective.description).unwrap();
    writeln!(out, "social_image: {}", effective.social_image).unwrap();
    writeln!(out).unwrap();
    for tag in tags.iter() {
        writeln!(out, "{tag}").unwrap();
    }
    out
}
