//! Store locations, the optional settings file and shell selection.
//!
//! Paths may use `~`, which is expanded to the user's home directory.

use std::env;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::shortcut::{Scope, ShortcutName};

/// Name of the store directory in both scopes.
pub const STORE_DIRECTORY: &str = ".command-shortcuts";

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.command-shortcuts/settings.yml";

/// Shell used for the fallback when neither the settings nor `$SHELL` name one.
#[cfg(windows)]
pub const DEFAULT_SHELL: &str = "cmd";
#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Where each scope keeps its shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
    pub local_dir: PathBuf,
    pub global_dir: PathBuf,
}

impl ScopeConfig {
    pub fn new(local_dir: impl Into<PathBuf>, global_dir: impl Into<PathBuf>) -> Self {
        Self {
            local_dir: local_dir.into(),
            global_dir: global_dir.into(),
        }
    }

    /// Local store under the working directory, global store under `~`.
    pub fn from_environment() -> Self {
        let local_dir = Path::new(".").join(STORE_DIRECTORY);
        let global_dir = PathBuf::from(shellexpand::tilde(&format!("~/{STORE_DIRECTORY}")).as_ref());
        debug!(
            "Local store: `{}`, global store: `{}`",
            local_dir.display(),
            global_dir.display()
        );

        Self::new(local_dir, global_dir)
    }

    pub fn dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Local => &self.local_dir,
            Scope::Global => &self.global_dir,
        }
    }

    pub fn shortcut_path(&self, name: &ShortcutName, scope: Scope) -> PathBuf {
        self.dir(scope).join(name.file_name())
    }
}

/// Optional user settings read from YAML.
///
/// ```yaml
/// editor: code --wait
/// shell: /bin/zsh
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub editor: Option<String>,
    pub shell: Option<String>,
}

impl Settings {
    /// Shell for the dispatcher fallback: settings, then `$SHELL`, then [`DEFAULT_SHELL`].
    pub fn shell(&self) -> String {
        if let Some(shell) = self.shell.as_ref().filter(|shell| !shell.is_empty()) {
            return shell.clone();
        }

        match env::var("SHELL") {
            Ok(shell) if !shell.is_empty() => shell,
            _ => DEFAULT_SHELL.to_string(),
        }
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use command_cuts_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/settings.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/settings.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads settings from `config_path`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML.
pub fn load_settings(config_path: &str) -> Result<Settings> {
    let reader = match File::open(config_path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No settings file at `{config_path}`, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(Error::io_error("settings file", config_path, e)),
    };

    let settings: Option<Settings> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    // An empty document deserializes to `None`.
    Ok(settings.unwrap_or_default())
}
