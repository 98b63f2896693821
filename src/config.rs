//! Output policy from config files and the environment
//!
//! Programs usually decide quiet/verbose from command-line flags, but the same
//! switches can come from a TOML file or `CHATTER_*` environment variables.
//! [`OutputConfig`] holds whichever values were found; unset fields leave the
//! emitter alone when applied.
//!
//! ```toml
//! [output]
//! quiet = false
//! verbose = true
//! sync = false
//! auto-newline = true
//! ```
//!
//! The keys may also sit at the top level of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::output::Emitter;

pub const QUIET_VAR: &str = "CHATTER_QUIET";
pub const VERBOSE_VAR: &str = "CHATTER_VERBOSE";
pub const SYNC_VAR: &str = "CHATTER_SYNC";
pub const AUTO_NEWLINE_VAR: &str = "CHATTER_AUTO_NEWLINE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid output config")]
    Parse(#[from] toml::de::Error),

    #[error("{key}={value:?} is not a boolean (expected 1/0, true/false, yes/no, on/off)")]
    InvalidBool { key: String, value: String },
}

/// Output switches found in a config source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub sync: Option<bool>,
    pub auto_newline: Option<bool>,
}

impl OutputConfig {
    /// Parse TOML, reading an `[output]` table if present and the top level
    /// otherwise
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(contents)?;
        let config = match table.remove("output") {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        log::debug!("Loaded output config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Read `CHATTER_QUIET`, `CHATTER_VERBOSE`, `CHATTER_SYNC` and
    /// `CHATTER_AUTO_NEWLINE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), with a custom variable lookup
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| -> Result<Option<bool>, ConfigError> {
            lookup(key).map(|value| parse_bool(key, &value)).transpose()
        };
        Ok(Self {
            quiet: read(QUIET_VAR)?,
            verbose: read(VERBOSE_VAR)?,
            sync: read(SYNC_VAR)?,
            auto_newline: read(AUTO_NEWLINE_VAR)?,
        })
    }

    /// Layer `other` on top: fields it sets win
    pub fn merge(self, other: Self) -> Self {
        Self {
            quiet: other.quiet.or(self.quiet),
            verbose: other.verbose.or(self.verbose),
            sync: other.sync.or(self.sync),
            auto_newline: other.auto_newline.or(self.auto_newline),
        }
    }

    /// Write the set values into `emitter`
    ///
    /// Flags are written through the emitter's current handles, so anything
    /// sharing them follows.
    pub fn apply(&self, emitter: &mut Emitter) {
        if let Some(quiet) = self.quiet {
            emitter.set_quiet_flag(None).set(quiet);
        }
        if let Some(verbose) = self.verbose {
            emitter.set_verbose_flag(None).set(verbose);
        }
        if let Some(sync) = self.sync {
            emitter.set_sync_flag(None).set(sync);
        }
        if let Some(auto) = self.auto_newline {
            emitter.set_auto_newline(auto);
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
