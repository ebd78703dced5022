// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake in-memory document store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{join_path, DocStoreAdapter, DocStoreError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocStoreCall {
    ListFolders { path: String },
    ListFiles { path: String },
    CreateFolder { parent: String, name: String },
    UploadFile { folder: String, name: String },
}

#[derive(Default)]
struct FakeDocStoreState {
    /// Folder path -> subfolder names, in insertion (listing) order.
    folders: BTreeMap<String, Vec<String>>,
    /// Folder path -> (file name, bytes), in upload order.
    files: BTreeMap<String, Vec<(String, Vec<u8>)>>,
    calls: Vec<DocStoreCall>,
    fail_uploads: bool,
}

/// Fake document store for testing.
///
/// Folders are seeded with [`FakeDocStore::add_folder`]; listing order is
/// seeding order, which lets tests pin down "first match wins" behavior.
#[derive(Clone, Default)]
pub struct FakeDocStore {
    inner: Arc<Mutex<FakeDocStoreState>>,
}

impl FakeDocStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a subfolder of `parent` without recording a call.
    pub fn add_folder(&self, parent: &str, name: &str) {
        let mut state = self.inner.lock();
        state
            .folders
            .entry(parent.to_string())
            .or_default()
            .push(name.to_string());
        let path = join_path(parent, name);
        state.folders.entry(path.clone()).or_default();
        state.files.entry(path).or_default();
    }

    /// Seed an existing file without recording a call.
    pub fn add_file(&self, folder: &str, name: &str) {
        self.inner
            .lock()
            .files
            .entry(folder.to_string())
            .or_default()
            .push((name.to_string(), Vec::new()));
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DocStoreCall> {
        self.inner.lock().calls.clone()
    }

    /// Names of files uploaded into `folder`, in upload order.
    pub fn uploaded(&self, folder: &str) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                DocStoreCall::UploadFile { folder: f, name } if f == folder => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Make subsequent uploads fail.
    pub fn fail_uploads(&self) {
        self.inner.lock().fail_uploads = true;
    }
}

#[async_trait]
impl DocStoreAdapter for FakeDocStore {
    async fn list_folders(&self, path: &str) -> Result<Vec<String>, DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::ListFolders {
            path: path.to_string(),
        });
        Ok(state.folders.get(path).cloned().unwrap_or_default())
    }

    async fn list_files(&self, path: &str) -> Result<Vec<String>, DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::ListFiles {
            path: path.to_string(),
        });
        Ok(state
            .files
            .get(path)
            .map(|files| files.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default())
    }

    async fn create_folder(&self, parent: &str, name: &str) -> Result<(), DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::CreateFolder {
            parent: parent.to_string(),
            name: name.to_string(),
        });
        let existing = state.folders.entry(parent.to_string()).or_default();
        if existing.iter().any(|n| n == name) {
            return Err(DocStoreError::Duplicate(join_path(parent, name)));
        }
        existing.push(name.to_string());
        let path = join_path(parent, name);
        state.folders.entry(path.clone()).or_default();
        state.files.entry(path).or_default();
        Ok(())
    }

    async fn upload_file(
        &self,
        folder: &str,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::UploadFile {
            folder: folder.to_string(),
            name: name.to_string(),
        });
        if state.fail_uploads {
            return Err(DocStoreError::Rejected("upload quota exceeded".to_string()));
        }
        state
            .files
            .entry(folder.to_string())
            .or_default()
            .push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
