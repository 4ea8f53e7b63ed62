//! Wiring the dotfile into the shell's startup script.

mod toggle;


pub use toggle::{check_integration, set_integration};

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Whether the startup script sources the dotfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationStatus {
    /// The source line is present and not commented out.
    Enabled {
        /// Startup script that was inspected.
        path: String,
    },
    /// The startup script exists but does not source the dotfile.
    Disabled {
        /// Startup script that was inspected.
        path: String,
    },
    /// The startup script does not exist.
    Missing {
        /// Startup script that was looked for.
        path: String,
    },
}

impl std::fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled { path } => write!(f, "Enabled in {path}"),
            Self::Disabled { path } => write!(f, "Disabled in {path}"),
            Self::Missing { path } => write!(f, "Not set up ({path} does not exist)"),
        }
    }
}

/// A startup script and the line that sources the dotfile from it.
#[derive(Debug, Clone)]
pub struct Integration {
    rc_file: PathBuf,
    source_line: String,
}

impl Integration {
    /// Build from explicit locations.
    pub fn new(rc_file: impl Into<PathBuf>, source_line: impl Into<String>) -> Self {
        Self {
            rc_file: rc_file.into(),
            source_line: source_line.into(),
        }
    }

    /// Build from the configured startup script and source line.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.rc_file()?, config.source_line()))
    }

    /// Startup script being managed.
    pub fn rc_file(&self) -> &Path {
        &self.rc_file
    }

    /// Line written into the startup script.
    pub fn source_line(&self) -> &str {
        &self.source_line
    }

    /// Inspect the startup script.
    ///
    /// # Errors
    ///
    /// Fails when the startup script exists but cannot be read.
    pub fn status(&self) -> Result<IntegrationStatus> {
        let path = self.rc_file.display().to_string();
        if !self.rc_file.exists() {
            return Ok(IntegrationStatus::Missing { path });
        }
        let script = self.read_script()?;
        if check_integration(&script, &self.source_line) {
            Ok(IntegrationStatus::Enabled { path })
        } else {
            Ok(IntegrationStatus::Disabled { path })
        }
    }

    /// Make the startup script source the dotfile. Returns `true` if the file was rewritten.
    ///
    /// # Errors
    ///
    /// Fails when the startup script cannot be read or written.
    pub fn enable(&self) -> Result<bool> {
        self.apply(true)
    }

    /// Comment out the source line. Returns `true` if the file was rewritten.
    ///
    /// # Errors
    ///
    /// Fails when the startup script cannot be read or written.
    pub fn disable(&self) -> Result<bool> {
        self.apply(false)
    }

    /// Replace this integration's source line with `new_line` in the startup
    /// script, keeping it enabled or disabled as it was. Does nothing when the
    /// script never mentions the current line. Returns `true` if the file was rewritten.
    ///
    /// # Errors
    ///
    /// Fails when `new_line` is blank or the startup script cannot be read or written.
    pub fn switch_to(&self, new_line: &str) -> Result<bool> {
        if new_line.trim().is_empty() {
            bail!("Refusing to switch {} to an empty source line", self.rc_file.display());
        }
        if !self.rc_file.exists() || new_line == self.source_line {
            return Ok(false);
        }
        let script = self.read_script()?;
        if !script.contains(&self.source_line) {
            return Ok(false);
        }
        let enabled = check_integration(&script, &self.source_line);
        let without_old: Vec<&str> = script
            .split('\n')
            .filter(|line| !line.contains(&self.source_line))
            .collect();
        let updated = set_integration(&without_old.join("\n"), new_line, enabled);
        self.write_script(&updated)?;
        tracing::debug!(path = %self.rc_file.display(), from = %self.source_line, to = new_line, "switched source line");
        Ok(true)
    }

    fn apply(&self, enabled: bool) -> Result<bool> {
        if self.source_line.trim().is_empty() {
            bail!("integration.source_line is empty; refusing to rewrite {}", self.rc_file.display());
        }
        let script = if self.rc_file.exists() {
            self.read_script()?
        } else {
            String::new()
        };
        let updated = set_integration(&script, &self.source_line, enabled);
        if updated == script {
            tracing::debug!(path = %self.rc_file.display(), enabled, "startup script already up to date");
            return Ok(false);
        }
        self.write_script(&updated)?;
        tracing::debug!(path = %self.rc_file.display(), enabled, "rewrote startup script");
        Ok(true)
    }

    fn write_script(&self, script: &str) -> Result<()> {
        std::fs::write(&self.rc_file, script)
            .with_context(|| format!("Failed to write {}", self.rc_file.display()))
    }

    fn read_script(&self) -> Result<String> {
        std::fs::read_to_string(&self.rc_file)
            .with_context(|| format!("Failed to read {}", self.rc_file.display()))
    }
}
