//! Configuration System
//!
//! Layered configuration for the contextkit tooling. Sources, lowest to
//! highest precedence:
//! 1. Built-in defaults
//! 2. Global file: `$XDG_CONFIG_HOME/contextkit/config.toml` (or the platform equivalent)
//! 3. Workspace file: `<workspace>/contextkit.toml`
//! 4. Environment: `CONTEXTKIT__SECTION__KEY`, e.g. `CONTEXTKIT__OUTPUT__PRETTY=false`
//!
//! An explicit config file replaces layers 2 and 3.

use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextKitConfig {
    /// Command output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How commands render decoded documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// text or json
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Indent JSON written by `normalize` and `inspect --format json`
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Order siblings by displayOrder in command output
    #[serde(default)]
    pub sort_children: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            pretty: default_true(),
            sort_children: false,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.format != "text" && self.format != "json" {
            return Err(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                self.format
            ));
        }
        Ok(())
    }
}

impl ContextKitConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            self.output.validate().map_err(|e| format!("output: {}", e)),
            self.logging.validate().map_err(|e| format!("logging: {}", e)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`ContextKitConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace directory.
    pub fn load(workspace_root: &Path) -> Result<ContextKitConfig, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), workspace_root)
    }

    /// Load from a single explicit file, plus defaults and environment.
    pub fn load_from_file(path: &Path) -> Result<ContextKitConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        finish(builder)
    }

    /// Default configuration, ignoring all files and the environment.
    pub fn default() -> ContextKitConfig {
        ContextKitConfig::default()
    }

    /// Global config file location, if a home directory can be resolved.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "contextkit").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join("contextkit.toml")
    }

    fn load_layers(
        global_path: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<ContextKitConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!(config_path = %global_path.display(), "Using global configuration");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        let workspace_path = Self::workspace_config_path(workspace_root);
        if workspace_path.exists() {
            debug!(config_path = %workspace_path.display(), "Using workspace configuration");
            builder = builder.add_source(File::from(workspace_path).required(false));
        }

        finish(builder)
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("output.format", default_output_format())?
        .set_default("output.pretty", true)?
        .set_default("output.sort_children", false)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<ContextKitConfig, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("CONTEXTKIT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
