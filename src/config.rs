//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgchart/orgchart.toml`
//! 3. Local config: `<dir>/.orgchart.toml` (usually the working directory)
//! 4. Environment variables: `ORGCHART_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::print::{DEFAULT_COMMITTEE_PREFIX, DEFAULT_INDENT};
use crate::domain::{PrintStyle, DEFAULT_MAX_DEPTH};

/// Unified configuration for orgchart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Committee nesting limit for charts read from files (0 = unlimited).
    ///
    /// Applies to charts nesting committees as `[[...committees]]` tables.
    /// Deeply nested inline tables hit the TOML parser's own recursion limit
    /// first and fail as an invalid definition.
    pub max_depth: usize,
    /// Indentation unit of `print` output
    pub indent: String,
    /// Prefix of committee lines in `print` output
    pub committee_prefix: String,
    /// Chart loaded when no `--chart` is given (sample chart otherwise)
    pub default_chart: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            indent: DEFAULT_INDENT.to_string(),
            committee_prefix: DEFAULT_COMMITTEE_PREFIX.to_string(),
            default_chart: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_depth: Option<usize>,
    pub indent: Option<String>,
    pub committee_prefix: Option<String>,
    pub default_chart: Option<PathBuf>,
}

/// Get the XDG config directory for orgchart.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgchart").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgchart.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".orgchart.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; leaves the input untouched on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Print layout derived from these settings.
    pub fn print_style(&self) -> PrintStyle {
        PrintStyle {
            indent: self.indent.clone(),
            committee_prefix: self.committee_prefix.clone(),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(chart) = &self.default_chart {
            let expanded = expand_env_vars(chart.to_string_lossy().as_ref());
            self.default_chart = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            indent: overlay
                .indent
                .clone()
                .unwrap_or_else(|| self.indent.clone()),
            committee_prefix: overlay
                .committee_prefix
                .clone()
                .unwrap_or_else(|| self.committee_prefix.clone()),
            default_chart: overlay
                .default_chart
                .clone()
                .or_else(|| self.default_chart.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.orgchart.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply ORGCHART_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGCHART")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("max_depth") {
            settings.max_depth = val.parse().map_err(|_| ApplicationError::Config {
                message: format!("ORGCHART_MAX_DEPTH is not a number: {}", val),
            })?;
        }
        if let Ok(val) = config.get_string("indent") {
            settings.indent = val;
        }
        if let Ok(val) = config.get_string("committee_prefix") {
            settings.committee_prefix = val;
        }
        if let Ok(val) = config.get_string("default_chart") {
            settings.default_chart = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Render settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
