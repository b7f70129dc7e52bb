//! User-configurable settings stored in ~/.config/hypryou/dialogs.toml

use log::warn;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub crash: CrashConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrashConfig {
    /// Executable started by the Restart button
    pub launcher: String,
    /// Where the shell writes crash logs, shown in the dialog body
    pub crash_log_dir: String,
    /// Shortcut hint for opening a terminal
    pub terminal_shortcut: String,
}

impl Default for CrashConfig {
    fn default() -> Self {
        Self {
            launcher: "hypryou-start".to_string(),
            crash_log_dir: "~/.cache/hypryou/crashes".to_string(),
            terminal_shortcut: "Super+K".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 450 }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("hypryou")
        .join("dialogs.toml")
}

impl Config {
    /// Load config from disk, returning defaults for any missing keys or
    /// if the file does not exist.
    pub fn load() -> Self {
        let path = config_path();

        let content = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("{} in {}, using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window.width must be positive, got {}",
                self.window.width
            )));
        }
        if self.crash.launcher.trim().is_empty() {
            return Err(ConfigError::Invalid("crash.launcher is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Config parse error: {e}"),
            Self::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.crash.launcher, "hypryou-start");
        assert_eq!(config.window.width, 450);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
[crash]
launcher = "my-shell"
"#,
        )
        .unwrap();

        assert_eq!(config.crash.launcher, "my-shell");
        assert_eq!(config.crash.terminal_shortcut, "Super+K");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse("[crash\nlauncher = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_values() {
        let err = Config::parse("[window]\nwidth = 0").unwrap_err();
        assert!(err.to_string().contains("window.width"));

        let err = Config::parse("[crash]\nlauncher = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn path_ends_in_hypryou_dir() {
        assert!(config_path().ends_with("hypryou/dialogs.toml"));
    }
}
