//! fcms-seo - SEO meta tags for FearlessCMS pages.

#![allow(dead_code)]

mod admin;
mod cli;
mod config;
mod logger;
mod pipeline;
mod plugin;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{AdminCommand, Cli, Commands};
use config::SettingsStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let store = SettingsStore::in_dir(&cli.config_dir);

    match &cli.command {
        Commands::Inject { args } => cli::inject::run_inject(args, store),
        Commands::Preview { args } => cli::preview::run_preview(args, &store),
        Commands::Settings { action } => cli::settings::run_settings(action, &store),
        Commands::Admin { action } => match action {
            AdminCommand::Render => {
                let page = plugin::SeoPlugin::new(store).admin_page(None)?;
                print!("{page}");
                Ok(())
            }
            AdminCommand::Serve { interface, port } => {
                cli::serve::serve_admin(store, *interface, *port)
            }
        },
    }
}
