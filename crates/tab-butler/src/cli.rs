use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tab_butler_palette::SearchMode;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "tab-butler")]
#[command(about = "Keyboard-driven tab search and tab actions palette")]
#[command(version)]
pub struct Cli {
    /// Mode the palette opens in with `p` (tab-search or tab-actions)
    #[arg(long)]
    pub mode: Option<SearchMode>,

    /// JSON file listing the open tabs
    #[arg(long, value_name = "FILE")]
    pub tabs: Option<PathBuf>,

    /// Append every dispatched message to this file as JSON lines
    #[arg(long, value_name = "FILE")]
    pub command_log: Option<PathBuf>,

    /// Use this config file instead of tab-butler.toml lookup
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command line overrides on top
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(mode) = self.mode {
            config.default_mode = mode;
        }
        if let Some(tabs) = self.tabs {
            config.tabs_file = tabs;
        }
        if let Some(command_log) = self.command_log {
            config.command_log = Some(command_log);
        }

        Ok(config)
    }
}
