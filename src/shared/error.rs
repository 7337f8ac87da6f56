use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the embed module.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("The {kind} file {url} is not reachable or has an invalid MIME type")]
    AssetUnreachable { kind: String, url: String },

    #[error("Settings field '{field}' is invalid: {reason}")]
    InvalidSettings { field: String, reason: String },

    #[error("Failed to read settings file: {path}\nDetails: {details}")]
    SettingsReadError { path: PathBuf, details: String },

    #[error("Failed to persist settings file: {path}\nDetails: {details}")]
    SettingsWriteError { path: PathBuf, details: String },

    #[error("Failed to render the embed: {details}")]
    RenderError { details: String },
}
