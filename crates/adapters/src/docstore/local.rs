// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed document store.
//!
//! Treats a local directory (typically a mounted share) as the remote
//! store: folders are directories, files are files. Listings are sorted by
//! name so "listing order" is deterministic across filesystems.

use super::{DocStoreAdapter, DocStoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Document store rooted at a local directory.
#[derive(Clone, Debug)]
pub struct LocalDirStore {
    root: PathBuf,
}

impl LocalDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            resolved.push(segment);
        }
        resolved
    }

    async fn list_entries(
        &self,
        path: &str,
        want_dirs: bool,
    ) -> Result<Vec<String>, DocStoreError> {
        let dir = self.resolve(path);
        let mut reader = match tokio::fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DocStoreError::FolderNotFound(path.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let is_dir = entry.file_type().await?.is_dir();
            if is_dir == want_dirs {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl DocStoreAdapter for LocalDirStore {
    async fn list_folders(&self, path: &str) -> Result<Vec<String>, DocStoreError> {
        self.list_entries(path, true).await
    }

    async fn list_files(&self, path: &str) -> Result<Vec<String>, DocStoreError> {
        self.list_entries(path, false).await
    }

    async fn create_folder(&self, parent: &str, name: &str) -> Result<(), DocStoreError> {
        let dir = self.resolve(parent).join(name);
        match tokio::fs::create_dir(&dir).await {
            Ok(()) => {
                tracing::info!(%parent, %name, "created store folder");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Err(DocStoreError::Duplicate(
                format!("{parent}/{name}"),
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(DocStoreError::FolderNotFound(parent.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn upload_file(
        &self,
        folder: &str,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), DocStoreError> {
        let dir = self.resolve(folder);
        if !dir_exists(&dir).await {
            return Err(DocStoreError::FolderNotFound(folder.to_string()));
        }
        tokio::fs::write(dir.join(name), bytes).await?;
        tracing::info!(%folder, %name, size = bytes.len(), "uploaded file to store");
        Ok(())
    }
}

async fn dir_exists(dir: &Path) -> bool {
    tokio::fs::metadata(dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
