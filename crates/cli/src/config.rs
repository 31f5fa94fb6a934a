// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles the optional `detoast.toml` with version validation and
//! unknown key warnings. Only the walk is configurable; the patterns,
//! extensions and parameter keys are fixed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "detoast.toml";

/// Directory walked when neither the CLI nor the config names one.
pub const DEFAULT_ROOT: &str = "src";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "root", "exclude"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    root: Option<PathBuf>,

    #[serde(default)]
    exclude: Option<Vec<String>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Directory to walk, relative to the working directory.
    pub root: PathBuf,

    /// Glob patterns excluded from the walk.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            root: PathBuf::from(DEFAULT_ROOT),
            exclude: Vec::new(),
        }
    }
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Otherwise `detoast.toml` in `cwd` is used
/// when present, and defaults apply when it is not.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                });
            }
            load_with_warnings(path)
        }
        None => {
            let path = cwd.join(CONFIG_FILE);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                load_with_warnings(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown) = parse(content, path)?;
    for key in &unknown {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config, returning it along with any unrecognized top-level keys.
pub fn parse(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let unknown = flexible
        .unknown
        .into_keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();

    let config = Config {
        version,
        root: flexible
            .root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        exclude: flexible.exclude.unwrap_or_default(),
    };

    Ok((config, unknown))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "detoast: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
