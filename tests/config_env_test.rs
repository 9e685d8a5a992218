//! Integration tests for the environment and global layers of Settings.
//!
//! Kept in their own test binary: they change process-wide environment
//! variables, so they hold `ENV_LOCK` and restore variables on drop.

use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use orgchart::application::ApplicationError;
use orgchart::config::{local_config_path, Settings};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets variables for the duration of a test and restores the previous values.
struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut guard = Self {
            saved: Vec::new(),
            _lock: lock,
        };
        for key in [
            "ORGCHART_MAX_DEPTH",
            "ORGCHART_INDENT",
            "ORGCHART_COMMITTEE_PREFIX",
            "ORGCHART_DEFAULT_CHART",
            "XDG_CONFIG_HOME",
        ] {
            guard.remove(key);
        }
        guard
    }

    fn save(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, std::env::var_os(key)));
        }
    }

    fn set(&mut self, key: &'static str, value: impl AsRef<std::ffi::OsStr>) {
        self.save(key);
        std::env::set_var(key, value);
    }

    fn remove(&mut self, key: &'static str) {
        self.save(key);
        std::env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
fn given_env_overrides_over_local_config_when_load_then_env_wins() {
    // Arrange
    let mut env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "max_depth = 7\ncommittee_prefix = \"* \"\nindent = \"..\"\n",
    )
    .unwrap();
    env.set("XDG_CONFIG_HOME", dir.path().join("no-global"));
    env.set("ORGCHART_MAX_DEPTH", "5");
    env.set("ORGCHART_COMMITTEE_PREFIX", "K:");

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.max_depth, 5);
    assert_eq!(settings.committee_prefix, "K:");
    assert_eq!(settings.indent, "..", "local value kept where env is silent");
}

#[test]
fn given_env_default_chart_when_load_then_path_is_expanded() {
    let mut env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    env.set("XDG_CONFIG_HOME", dir.path().join("no-global"));
    env.set("ORGCHART_CHART_ROOT", dir.path());
    env.set("ORGCHART_DEFAULT_CHART", "$ORGCHART_CHART_ROOT/u.toml");

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.default_chart, Some(dir.path().join("u.toml")));
}

#[test]
fn given_non_numeric_env_max_depth_when_load_then_config_error() {
    // Arrange
    let mut env = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    env.set("XDG_CONFIG_HOME", dir.path().join("no-global"));
    env.set("ORGCHART_MAX_DEPTH", "lots");

    // Act
    let result = Settings::load(Some(dir.path()));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("ORGCHART_MAX_DEPTH"), "{message}");
            assert!(message.contains("lots"), "{message}");
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

// `directories` only honours XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn given_global_local_and_env_layers_when_load_then_precedence_is_global_local_env() {
    // Arrange
    let mut env = EnvGuard::new();
    let xdg = TempDir::new().unwrap();
    let global_dir = xdg.path().join("orgchart");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("orgchart.toml"),
        "max_depth = 3\nindent = \"\\t\"\ncommittee_prefix = \"G: \"\n",
    )
    .unwrap();
    let local = TempDir::new().unwrap();
    fs::write(
        local_config_path(local.path()),
        "max_depth = 4\ncommittee_prefix = \"L: \"\n",
    )
    .unwrap();
    env.set("XDG_CONFIG_HOME", xdg.path());
    env.set("ORGCHART_COMMITTEE_PREFIX", "E: ");

    // Act
    let settings = Settings::load(Some(local.path())).expect("load settings");

    // Assert
    assert_eq!(settings.indent, "\t", "global only");
    assert_eq!(settings.max_depth, 4, "local over global");
    assert_eq!(settings.committee_prefix, "E: ", "env over local");
}

#[cfg(target_os = "linux")]
#[test]
fn given_only_global_config_when_load_then_global_values_apply() {
    let mut env = EnvGuard::new();
    let xdg = TempDir::new().unwrap();
    let global_dir = xdg.path().join("orgchart");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(global_dir.join("orgchart.toml"), "max_depth = 0\n").unwrap();
    env.set("XDG_CONFIG_HOME", xdg.path());

    let settings = Settings::load(None).expect("load settings");

    assert_eq!(settings.max_depth, 0);
    assert_eq!(settings.committee_prefix, "C: ");
}
