//! Configuration file support for tokensmith.
//!
//! Two locations are read:
//! - Global: `~/.tokensmith/config.toml` - User-wide defaults
//! - Project: `tokensmith.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line flags
//! take precedence over both.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codegen::emit::TargetSyntax;
use crate::core::errors::ParseError;
use crate::util::fs::read_to_string;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "tokensmith.toml";

/// tokensmith configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Symbol generation settings
    pub generate: GenerateConfig,

    /// Bundle verification settings
    pub verify: VerifyConfig,

    /// Bundle identity to asset catalog path
    pub bundles: BTreeMap<String, PathBuf>,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateConfig {
    /// Token manifest (`.toml`) or asset catalog (`.xcassets`)
    pub manifest: Option<PathBuf>,

    /// Generated source file
    pub output: Option<PathBuf>,

    /// Output syntax (objc, swift, rust)
    pub target: Option<String>,

    /// Prefix for generated identifiers
    pub namespace: Option<String>,

    /// Bundle identifier written into the generated file
    pub bundle_id: Option<String>,

    /// Asset names emitted with public visibility
    pub public: Vec<String>,
}

/// `[verify]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Also fail on bundle assets that have no symbol
    pub strict: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ParseError::new("config", path, e).into())
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        let generate = other.generate;
        if generate.manifest.is_some() {
            self.generate.manifest = generate.manifest;
        }
        if generate.output.is_some() {
            self.generate.output = generate.output;
        }
        if generate.target.is_some() {
            self.generate.target = generate.target;
        }
        if generate.namespace.is_some() {
            self.generate.namespace = generate.namespace;
        }
        if generate.bundle_id.is_some() {
            self.generate.bundle_id = generate.bundle_id;
        }
        if !generate.public.is_empty() {
            self.generate.public = generate.public;
        }

        if other.verify.strict.is_some() {
            self.verify.strict = other.verify.strict;
        }

        // Bundle paths merge per identity.
        self.bundles.extend(other.bundles);
    }

    /// Parse the configured target syntax.
    pub fn target(&self) -> Result<Option<TargetSyntax>> {
        self.generate
            .target
            .as_deref()
            .map(|s| s.parse().map_err(anyhow::Error::msg))
            .transpose()
            .context("invalid `generate.target` in config")
    }

    /// Path of the catalog registered for a bundle identity.
    pub fn bundle_path(&self, bundle_id: &str) -> Option<&Path> {
        self.bundles.get(bundle_id).map(PathBuf::as_path)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (tokensmith.toml)
/// 2. Global config (~/.tokensmith/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global tokensmith config directory (~/.tokensmith).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".tokensmith"))
}

/// Get the global config path (~/.tokensmith/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}
