// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote folder resolution.
//!
//! Department folders in the document store are named `<prefix> - <label>`;
//! the resolver finds the folder for a configured prefix and makes sure the
//! bot's own subfolder exists inside it.

use regex::Regex;
use thiserror::Error;
use tracing::info;
use warden_adapters::{DocStoreAdapter, DocStoreError};

/// Errors from folder resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no folder matching prefix '{prefix}' under '{root}'")]
    NotFound { prefix: String, root: String },
    #[error("invalid folder prefix pattern: {0}")]
    Pattern(String),
    #[error(transparent)]
    Store(#[from] DocStoreError),
}

/// Resolves prefix-named folders in the document store.
pub struct FolderResolver<D: DocStoreAdapter> {
    store: D,
    root: String,
}

impl<D: DocStoreAdapter> FolderResolver<D> {
    pub fn new(store: D, root: impl Into<String>) -> Self {
        Self {
            store,
            root: root.into(),
        }
    }

    /// Find the folder whose name matches `^<prefix>\s+-` under the root.
    ///
    /// The complete listing is loaded before filtering (the store holds tens
    /// to low hundreds of entries). When several folders match, the first in
    /// listing order wins; there is no secondary sort.
    pub async fn resolve(&self, prefix: &str) -> Result<String, ResolveError> {
        let pattern = Regex::new(&format!(r"^{}\s+-", regex::escape(prefix)))
            .map_err(|e| ResolveError::Pattern(e.to_string()))?;

        let folders = self.store.list_folders(&self.root).await?;
        folders
            .into_iter()
            .find(|name| pattern.is_match(name))
            .ok_or_else(|| ResolveError::NotFound {
                prefix: prefix.to_string(),
                root: self.root.clone(),
            })
    }

    /// Ensure a subfolder named after the bot exists inside `folder`.
    ///
    /// Check-then-create without a transaction: a concurrent run may create
    /// the same subfolder first, in which case the store's duplicate
    /// rejection propagates.
    pub async fn ensure_bot_folder(
        &self,
        folder: &str,
        bot_name: &str,
    ) -> Result<String, ResolveError> {
        let parent = join(&self.root, folder);
        let subfolders = self.store.list_folders(&parent).await?;

        if subfolders.iter().any(|name| name == bot_name) {
            info!(folder, bot_name, "bot subfolder already exists");
        } else {
            self.store.create_folder(&parent, bot_name).await?;
            info!(folder, bot_name, "bot subfolder created");
        }

        Ok(join(&parent, bot_name))
    }
}

/// Join two store path segments with a single `/`.
pub(crate) fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
