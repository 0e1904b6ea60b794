//! Command-line interface module.

mod args;
pub mod inject;
pub mod preview;
pub mod serve;
pub mod settings;

pub use args::{AdminCommand, Cli, Commands, InjectArgs, PreviewArgs, SetArgs, SettingsCommand};
