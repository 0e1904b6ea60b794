//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// SEO meta tags for FearlessCMS pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Admin config directory holding seo_settings.json
    #[arg(short = 'C', long, global = true, default_value = "admin/config", value_hint = clap::ValueHint::DirPath)]
    pub config_dir: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inject title and meta tags into a rendered page template
    #[command(visible_alias = "i")]
    Inject {
        #[command(flatten)]
        args: InjectArgs,
    },

    /// Print the metadata a page would receive, without a template
    #[command(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        args: PreviewArgs,
    },

    /// Show or change the site-wide SEO settings
    #[command(visible_alias = "s")]
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Render or serve the admin settings form
    #[command(visible_alias = "a")]
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

/// Inject command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InjectArgs {
    /// HTML template to rewrite. Use `-` to read from stdin.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub template: PathBuf,

    /// Page source, possibly starting with a `<!-- json ... -->` block
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Page title used when the content has no frontmatter title
    #[arg(long)]
    pub title: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Preview command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Page source, possibly starting with a `<!-- json ... -->` block
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Page title used when the content has no frontmatter title
    #[arg(long)]
    pub title: Option<String>,

    /// Print the page body with the frontmatter block removed instead
    #[arg(short, long)]
    pub body: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Print the effective settings as JSON
    Show {
        /// Fail on a malformed settings file instead of using defaults
        #[arg(long)]
        strict: bool,
    },

    /// Update one or more settings and save
    Set(SetArgs),
}

/// Values for `settings set`. Omitted flags keep their stored value.
#[derive(clap::Args, Debug, Clone)]
pub struct SetArgs {
    /// The name of your website
    #[arg(long)]
    pub site_title: Option<String>,

    /// Default meta description
    #[arg(long)]
    pub site_description: Option<String>,

    /// Text between page title and site title
    #[arg(long)]
    pub title_separator: Option<String>,

    /// Append the site title after the page title
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub append_site_title: Option<bool>,

    /// Default social image URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub social_image: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommand {
    /// Print the settings form HTML fragment
    Render,

    /// Serve the settings form over HTTP
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long, default_value = "127.0.0.1")]
        interface: std::net::IpAddr,

        /// Port number to listen on
        #[arg(short, long, default_value_t = 5280)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inject() {
        let cli = Cli::parse_from([
            "fcms-seo", "inject", "-t", "page.html", "-c", "page.md", "--title", "Home",
        ]);
        let Commands::Inject { args } = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(args.template, PathBuf::from("page.html"));
        assert_eq!(args.content, Some(PathBuf::from("page.md")));
        assert_eq!(args.title.as_deref(), Some("Home"));
        assert_eq!(cli.config_dir, PathBuf::from("admin/config"));
    }

    #[test]
    fn test_parse_set_flag_without_value() {
        let cli = Cli::parse_from(["fcms-seo", "settings", "set", "--append-site-title"]);
        let Commands::Settings {
            action: SettingsCommand::Set(args),
        } = cli.command
        else {
            panic!("expected settings set");
        };
        assert_eq!(args.append_site_title, Some(true));
        assert_eq!(args.site_title, None);
    }

    #[test]
    fn test_parse_set_flag_false() {
        let cli = Cli::parse_from(["fcms-seo", "s", "set", "--append-site-title", "false"]);
        let Commands::Settings {
            action: SettingsCommand::Set(args),
        } = cli.command
        else {
            panic!("expected settings set");
        };
        assert_eq!(args.append_site_title, Some(false));
    }

    #[test]
    fn test_global_config_dir_after_subcommand() {
        let cli = Cli::parse_from(["fcms-seo", "admin", "render", "-C", "cfg"]);
        assert_eq!(cli.config_dir, PathBuf::from("cfg"));
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommand::Render
            }
        ));
    }

    #[test]
    fn test_parse_preview() {
        let cli = Cli::parse_from(["fcms-seo", "preview", "page.md", "--body"]);
        let Commands::Preview { args } = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.content, Some(PathBuf::from("page.md")));
        assert!(args.body);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
