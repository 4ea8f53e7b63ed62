//! User settings, stored as TOML under `~/.config/alias-d/`.

mod ops;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line added to the startup script when neither it nor the dotfile path is configured.
pub const DEFAULT_SOURCE_LINE: &str = "source ~/.alias-d/dotfile.zsh";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the managed aliases live.
    pub dotfile: DotfileConfig,
    /// How the dotfile is hooked into the shell.
    pub integration: IntegrationConfig,
}

/// Settings for the managed dotfile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DotfileConfig {
    /// Location of the dotfile; `~/.alias-d/dotfile.zsh` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Settings for the startup-script integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Startup script to edit; `~/.zshrc` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_file: Option<PathBuf>,
    /// Line that sources the dotfile. When unset it is derived from the
    /// dotfile location, see [`Config::source_line`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
}
