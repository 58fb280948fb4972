use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tab_butler_palette::SearchMode;

const CONFIG_FILE: &str = "tab-butler.toml";

/// Application configuration loaded from tab-butler.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Mode the palette opens in when no binding picks one
    #[serde(default)]
    pub default_mode: SearchMode,
    #[serde(default = "default_tabs_file")]
    pub tabs_file: PathBuf,
    /// Every dispatched message is appended here as a JSON line
    #[serde(default)]
    pub command_log: Option<PathBuf>,
}

fn default_tabs_file() -> PathBuf {
    PathBuf::from("tabs.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: SearchMode::default(),
            tabs_file: default_tabs_file(),
            command_log: None,
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        // Try current directory first
        if let Some(config) = Self::read(Path::new(CONFIG_FILE)) {
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Some(config) = Self::read(&home_config) {
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    /// Load an explicitly requested config file
    ///
    /// Unlike [`Config::load`] a missing or malformed file is an error here,
    /// since the user asked for this exact path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn read(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                log::warn!("Ignoring malformed config {}: {}", path.display(), err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tabs_file, PathBuf::from("tabs.json"));
    }

    #[test]
    fn test_all_fields() {
        let config: Config = toml::from_str(
            r#"
            default_mode = "tab-actions"
            tabs_file = "/tmp/window.json"
            command_log = "/tmp/commands.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_mode, SearchMode::TabActions);
        assert_eq!(config.tabs_file, PathBuf::from("/tmp/window.json"));
        assert_eq!(config.command_log, Some(PathBuf::from("/tmp/commands.jsonl")));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(toml::from_str::<Config>(r#"default_mode = "bookmarks""#).is_err());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = Config::load_from(Path::new("/definitely/not/here/tab-butler.toml"));
        assert!(result.is_err());
    }
}
