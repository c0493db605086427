//! Crate-wide error type.
//!
//! Only environment faults live here. Structural problems with a skill are
//! data ([`Defect`](crate::defect::Defect)), not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// A `SKILL.md` exists but could not be read (permissions, bad UTF-8, ...).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory in the skill tree could not be listed.
    #[error("failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
