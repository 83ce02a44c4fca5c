//! File-backed gallery store.
//!
//! The whole document is written to a sibling `.tmp` file which is then
//! renamed over the target, so a crash mid-write never leaves a truncated
//! gallery behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{GalleryDocument, Result, store::GalleryStore};

/// Stores a gallery document as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileGalleryStore {
    path: PathBuf,
}

impl FileGalleryStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl GalleryStore for FileGalleryStore {
    #[tracing::instrument(skip(self, document), fields(path = %self.path.display()))]
    async fn save(&self, document: &GalleryDocument) -> Result<()> {
        let encoded = document.to_json()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        fs::write(&temp, encoded.as_bytes()).await?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            // Best effort; the original error is the one worth reporting.
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::debug!(bytes = encoded.len(), "gallery document written");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<GalleryDocument>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no gallery document on disk");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(GalleryDocument::from_json(&text)?))
    }
}
