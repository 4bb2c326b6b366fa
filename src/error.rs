//! Error types for markgate.

use thiserror::Error;

/// Result type for markgate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring policies or printing.
///
/// Transforming and sanitizing never fail; only configuration loading and
/// the print path report errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sanitize policy file could not be parsed.
    #[error("Failed to parse policy file: {0}")]
    PolicyParse(#[from] toml::de::Error),

    /// A roadmap payload could not be parsed.
    #[error("Failed to parse roadmap payload: {0}")]
    RoadmapParse(#[from] serde_json::Error),

    /// A policy tried to allow a tag that can never be allow-listed.
    #[error("Tag cannot be allow-listed: {0}")]
    ForbiddenTag(String),

    /// A policy tried to allow an attribute that can never be allow-listed.
    #[error("Attribute cannot be allow-listed: {0}")]
    ForbiddenAttribute(String),

    /// A policy tried to allow an executable or inline-data URL scheme.
    #[error("URL scheme cannot be allow-listed: {0}")]
    ForbiddenScheme(String),

    /// Content source name not recognized.
    #[error("Unknown content source: {0}")]
    UnknownSource(String),

    /// Another print action currently owns the document tree.
    #[error("A print action is already in progress")]
    PrintInFlight,

    /// The host refused to attach the print container.
    #[error("Failed to attach print container: {0}")]
    Attach(String),

    /// The host failed to remove the print container.
    #[error("Failed to detach print container: {0}")]
    Detach(String),

    /// The platform print facility failed or was cancelled.
    #[error("Print failed: {0}")]
    PrintFailed(String),
}
