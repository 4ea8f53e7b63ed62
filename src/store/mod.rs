//! In-memory owner of the record list between a load and a save.
//!
//! The dotfile is always rewritten as a whole from [`AliasStore::records`];
//! nothing patches it in place.

#[cfg(test)]
mod tests;

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::dotfile;
use crate::record::{AliasRecord, Kind};

/// The records of one dotfile, and where they are saved.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
    records: Vec<AliasRecord>,
}

impl AliasStore {
    /// Load the dotfile at `path`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = read_records(&path)?;
        Ok(Self { path, records })
    }

    /// Load the dotfile named by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the path cannot be resolved or the file cannot be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::load(config.dotfile_path()?)
    }

    /// Re-read the dotfile. On failure the current records are left untouched.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read.
    pub fn reload(&mut self) -> Result<()> {
        self.records = read_records(&self.path)?;
        Ok(())
    }

    /// Write every record back to the dotfile.
    ///
    /// The parent directory is created first. The text goes to a temporary
    /// file in the same directory that is then renamed over the dotfile, so a
    /// failed save leaves the previous contents in place and no temporary file
    /// behind. When the dotfile is a symlink, the file it points to is
    /// replaced and the link is kept.
    ///
    /// # Errors
    ///
    /// Fails when the directory, the temporary file or the rename fails.
    pub fn save(&self) -> Result<()> {
        let target = resolve_symlink(&self.path)?;
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;

        let content = dotfile::serialize(&self.records);
        // Dropping the temp file on any early return deletes it.
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)
            .with_context(|| format!("Failed to create a temporary file in {}", parent.display()))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to set permissions on {}", tmp.path().display()))?;
        }

        tmp.persist(&target)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", target.display()))?;

        tracing::debug!(path = %target.display(), records = self.records.len(), "saved dotfile");
        Ok(())
    }

    /// Dotfile this store reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in file order.
    pub fn records(&self) -> &[AliasRecord] {
        &self.records
    }

    /// Record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&AliasRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first record defining `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == Some(name))
    }

    /// Append a record after checking its body matches its kind.
    ///
    /// # Errors
    ///
    /// Fails when [`AliasRecord::validate`] rejects the record.
    pub fn push(&mut self, record: AliasRecord) -> Result<usize> {
        record.validate()?;
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Remove and return the record at `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<AliasRecord> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Enable or disable the record at `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of range.
    pub fn set_active(&mut self, index: usize, active: bool) -> Result<()> {
        self.record_mut(index)?.active = active;
        Ok(())
    }

    /// Replace the definition text of the record at `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of range or `body` does not fit the record's kind.
    pub fn set_body(&mut self, index: usize, body: impl Into<String>) -> Result<()> {
        let kind = self.record_mut(index)?.kind;
        self.set_definition(index, kind, body)
    }

    /// Change whether the record at `index` is an alias or a function.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of range or the current body does not fit `kind`.
    pub fn set_kind(&mut self, index: usize, kind: Kind) -> Result<()> {
        let body = self.record_mut(index)?.body.clone();
        self.set_definition(index, kind, body)
    }

    /// Replace kind and body of the record at `index` together. The record is
    /// left unchanged when the new pair is rejected.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of range or `body` does not fit `kind`.
    pub fn set_definition(&mut self, index: usize, kind: Kind, body: impl Into<String>) -> Result<()> {
        let record = self.record_mut(index)?;
        let candidate = AliasRecord { active: record.active, kind, body: body.into() };
        candidate.validate()?;
        *record = candidate;
        Ok(())
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut AliasRecord> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            bail!(
                "No entry #{} ({} entries in {})",
                index + 1,
                self.records.len(),
                self.path.display()
            );
        }
        Ok(())
    }
}

/// Follow `path` if it is a symlink, so saving rewrites the linked file.
/// A dangling link resolves to its target path.
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    let is_link = std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(path.to_path_buf());
    }
    if let Ok(resolved) = std::fs::canonicalize(path) {
        return Ok(resolved);
    }
    let link = std::fs::read_link(path)
        .with_context(|| format!("Failed to read symlink {}", path.display()))?;
    Ok(match path.parent() {
        Some(parent) if link.is_relative() => parent.join(link),
        _ => link,
    })
}

fn read_records(path: &Path) -> Result<Vec<AliasRecord>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "dotfile not found; starting empty");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = dotfile::parse(&content);
    tracing::debug!(path = %path.display(), records = records.len(), "loaded dotfile");
    Ok(records)
}
