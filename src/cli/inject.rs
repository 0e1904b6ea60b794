//! `inject` command: rewrite one rendered page.

use super::InjectArgs;
use crate::config::SettingsStore;
use crate::debug;
use crate::plugin::{RenderHook, SeoPlugin};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

/// Read the template (and content), inject, and write the result.
pub fn run_inject(args: &InjectArgs, store: SettingsStore) -> Result<()> {
    let template = read_template(&args.template)?;
    let content = args
        .content
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read content {}", path.display()))
        })
        .transpose()?;

    let plugin = SeoPlugin::new(store);
    debug!("inject"; "settings from {}", plugin.store().path().display());
    let output = plugin.before_render(&template, content.as_deref(), args.title.as_deref());

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// `-` means stdin.
fn read_template(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read template from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read template {}", path.display()))
}
