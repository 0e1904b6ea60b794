//! Settings error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the SEO settings file.
///
/// Only the strict paths (`try_load`, `save`) surface these; `load` swallows
/// them and falls back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("settings file `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("settings file `{0}` must contain a JSON object")]
    NotAnObject(PathBuf),
}
