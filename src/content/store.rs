//! Loading, backing up and rewriting the content document on disk

use chrono::Utc;
use log::{debug, info};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{FolioError, Result};

use super::model::ContentDocument;

/// Give up after this many consecutive backup name collisions.
const MAX_BACKUP_ATTEMPTS: i64 = 1000;

/// The content document as read: the raw text for the backup, parsed for merging.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub raw: String,
    pub document: ContentDocument,
}

pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<LoadedContent> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FolioError::ContentNotFound(self.path.clone()));
            }
            Err(e) => return Err(FolioError::Io(e)),
        };

        let document = serde_json::from_str(&raw).map_err(|source| FolioError::ContentParse {
            path: self.path.clone(),
            source,
        })?;

        Ok(LoadedContent { raw, document })
    }

    /// `content.json` -> `content.backup.<millis>.json` in the same directory.
    pub fn backup_path(&self, millis: i64) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "content".to_string());
        self.path.with_file_name(format!("{}.backup.{}.json", stem, millis))
    }

    /// Write `raw` to a fresh timestamped backup. Existing backups are never
    /// overwritten; a taken name moves the timestamp forward by a millisecond.
    pub async fn backup(&self, raw: &str) -> Result<PathBuf> {
        self.backup_from(raw, Utc::now().timestamp_millis()).await
    }

    async fn backup_from(&self, raw: &str, start: i64) -> Result<PathBuf> {
        for offset in 0..MAX_BACKUP_ATTEMPTS {
            let path = self.backup_path(start + offset);
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match file {
                Ok(mut file) => {
                    file.write_all(raw.as_bytes()).await?;
                    file.flush().await?;
                    info!("Backup saved at: {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("Backup name taken: {}", path.display());
                }
                Err(e) => return Err(FolioError::Io(e)),
            }
        }

        Err(FolioError::Processing(format!(
            "Could not find a free backup name next to {}",
            self.path.display()
        )))
    }

    /// Replace the content file with `document`. The JSON goes to a temporary
    /// sibling first and is renamed over the target, so readers see either the
    /// old file or the complete new one.
    pub async fn save(&self, document: &ContentDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || replace_file(&path, json.as_bytes()))
            .await
            .map_err(|e| FolioError::Processing(format!("Content write task failed: {}", e)))??;

        info!("Updated {}", self.path.display());
        Ok(())
    }
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    // Temp files are created owner-only; keep the target's mode.
    if let Ok(meta) = std::fs::metadata(path) {
        temp.as_file().set_permissions(meta.permissions())?;
    }

    temp.persist(path).map_err(|e| FolioError::Io(e.error))?;
    Ok(())
}
