use super::StorageBackend;
use crate::error::{InnkeepError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const BACKUP_SUFFIX: &str = ".bak";

/// File-based storage rooted at one data directory.
#[derive(Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn backup_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, BACKUP_SUFFIX))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InnkeepError::Io)?;
        }
        Ok(())
    }
}

/// The write sequence: temp file first, then a backup copy of the current
/// target, then rename. Stops at the first failing step.
fn replace_file(tmp: &Path, backup: &Path, target: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    fs::write(tmp, body)?;
    if target.exists() {
        fs::copy(target, backup)?;
    }
    fs::rename(tmp, target)
}

impl StorageBackend for FsBackend {
    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(InnkeepError::Io)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn write_lines(&mut self, name: &str, lines: &[String]) -> Result<()> {
        self.ensure_root()?;

        let target = self.data_path(name);
        let backup = self.backup_path(name);
        let tmp = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

        if let Err(err) = replace_file(&tmp, &backup, &target, lines) {
            let _ = fs::remove_file(&tmp);
            if backup.exists() && fs::copy(&backup, &target).is_ok() {
                warn!(file = name, "write failed, target restored from backup");
            }
            return Err(InnkeepError::Io(err));
        }

        debug!(file = name, records = lines.len(), "data file rewritten");
        Ok(())
    }
}
