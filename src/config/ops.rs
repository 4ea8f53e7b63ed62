use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{Config, DEFAULT_SOURCE_LINE};

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

impl Config {
    /// Location of the config file.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        Ok(home_dir()?.join(".config").join("alias-d").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Resolved dotfile location.
    ///
    /// # Errors
    ///
    /// Fails when no path is configured and the home directory is unknown.
    pub fn dotfile_path(&self) -> Result<PathBuf> {
        match &self.dotfile.path {
            Some(path) => Ok(path.clone()),
            None => Ok(home_dir()?.join(".alias-d").join("dotfile.zsh")),
        }
    }

    /// Resolved startup script location.
    ///
    /// # Errors
    ///
    /// Fails when no path is configured and the home directory is unknown.
    pub fn rc_file(&self) -> Result<PathBuf> {
        match &self.integration.rc_file {
            Some(path) => Ok(path.clone()),
            None => Ok(home_dir()?.join(".zshrc")),
        }
    }

    /// Line that sources the dotfile from the startup script.
    ///
    /// An explicit `integration.source_line` wins. Otherwise the line follows
    /// `dotfile.path`, falling back to [`DEFAULT_SOURCE_LINE`] when that is unset.
    pub fn source_line(&self) -> String {
        if let Some(line) = &self.integration.source_line {
            return line.clone();
        }
        match &self.dotfile.path {
            Some(path) => format!("source {}", shell_quote(&path.display().to_string())),
            None => DEFAULT_SOURCE_LINE.to_string(),
        }
    }

    /// Get the effective value for a dot-separated key path, with defaults resolved
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or when the home directory is unknown.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "dotfile.path" => Ok(self.dotfile_path()?.display().to_string()),
            "integration.rc_file" => Ok(self.rc_file()?.display().to_string()),
            "integration.source_line" => Ok(self.source_line()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path. An empty value resets it.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let path_value = || (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            "dotfile.path" => self.dotfile.path = path_value(),
            "integration.rc_file" => self.integration.rc_file = path_value(),
            "integration.source_line" => {
                self.integration.source_line =
                    (!value.trim().is_empty()).then(|| value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

/// Single-quote `s` for the shell unless it only has characters that need no quoting.
fn shell_quote(s: &str) -> String {
    let plain = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/._-+~,:@%".contains(c));
    if plain && !s.is_empty() {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
