// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote document store adapters
//!
//! The store is a hierarchical folder/file tree addressed by `/`-joined
//! string paths. Listing order is the store's own order and is what the
//! folder resolver's "first match wins" rule refers to.

mod local;

pub use local::LocalDirStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DocStoreCall, FakeDocStore};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from document store operations
#[derive(Debug, Error)]
pub enum DocStoreError {
    #[error("folder not found in store: {0}")]
    FolderNotFound(String),
    #[error("folder already exists: {0}")]
    Duplicate(String),
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store rejected the operation: {0}")]
    Rejected(String),
}

/// Adapter for the shared hierarchical document store.
#[async_trait]
pub trait DocStoreAdapter: Clone + Send + Sync + 'static {
    /// List subfolder names under `path`, in store listing order.
    ///
    /// The complete listing is returned; no pagination.
    async fn list_folders(&self, path: &str) -> Result<Vec<String>, DocStoreError>;

    /// List file names in `path`, in store listing order.
    async fn list_files(&self, path: &str) -> Result<Vec<String>, DocStoreError>;

    /// Create a folder named `name` under `parent`.
    ///
    /// Fails with [`DocStoreError::Duplicate`] when the folder already
    /// exists; the store is the final arbiter of create races.
    async fn create_folder(&self, parent: &str, name: &str) -> Result<(), DocStoreError>;

    /// Write `bytes` as a file named `name` inside `folder`.
    async fn upload_file(&self, folder: &str, name: &str, bytes: &[u8])
        -> Result<(), DocStoreError>;
}

/// Join two store path segments with a single `/`.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}
