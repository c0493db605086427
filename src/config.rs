//! Configuration loading.
//!
//! The default configuration file is `skill-census.toml` in the current
//! working directory. Every field has a default, so the file is optional:
//!
//! ```toml
//! # Project root that holds the `skills/` directory.
//! root = "."
//!
//! # Or point straight at the skills directory.
//! skills_dir = "catalog/skills"
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "skill-census.toml";

/// Directory under the root that holds the categories.
pub const SKILLS_DIR_NAME: &str = "skills";

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Project root; the skills directory is `root/skills` unless
    /// [`skills_dir`](Config::skills_dir) is set.
    pub root: PathBuf,
    /// Explicit skills directory, overriding `root/skills`.
    pub skills_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            skills_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skill-census.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for a missing explicit path, and
    /// [`Error::ConfigRead`] / [`Error::ConfigParse`] when the file cannot be
    /// read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(Error::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse { path, source })
    }

    /// The directory whose immediate children are the categories.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use skill_census::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.skills_path(), Path::new("./skills"));
    /// ```
    pub fn skills_path(&self) -> PathBuf {
        self.skills_dir
            .clone()
            .unwrap_or_else(|| self.root.join(SKILLS_DIR_NAME))
    }
}
