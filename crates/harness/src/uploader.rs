// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collision-safe file uploads.
//!
//! Remote names are probed against the target folder's listing, captured
//! once per call, and a numeric suffix is appended until no collision
//! remains. Names assigned earlier in the same batch count as taken, so two
//! identical local names in one call resolve to distinct remote names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use warden_adapters::{DocStoreAdapter, DocStoreError};

/// Errors from uploading a batch of files
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read local file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] DocStoreError),
}

/// Uploads local files into a resolved store folder, renaming on collision.
pub struct Uploader<D: DocStoreAdapter> {
    store: D,
}

impl<D: DocStoreAdapter> Uploader<D> {
    pub fn new(store: D) -> Self {
        Self { store }
    }

    /// Upload `paths` into `folder`, returning the final remote names in
    /// input order.
    ///
    /// The folder listing is captured once for the whole batch; a
    /// concurrent uploader from another process can still race it, and the
    /// store's own rejection is the final consistency check.
    pub async fn upload(
        &self,
        folder: &str,
        paths: &[PathBuf],
    ) -> Result<Vec<String>, UploadError> {
        let existing = self.store.list_files(folder).await?;
        let locals: Vec<String> = paths.iter().map(|p| base_name(p)).collect();
        let finals = plan_names(&existing, &locals);

        for (path, final_name) in paths.iter().zip(&finals) {
            let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
                path: path.clone(),
                source,
            })?;
            self.store.upload_file(folder, final_name, &bytes).await?;
            info!(folder, name = %final_name, "file uploaded");
        }

        Ok(finals)
    }
}

/// Pick collision-free remote names for `locals` against `existing`.
///
/// For each local name in order: keep it if free, otherwise try
/// `name(1)ext`, `name(2)ext`, … Names assigned within the batch are taken
/// for the rest of the batch.
pub fn plan_names(existing: &[String], locals: &[String]) -> Vec<String> {
    let mut taken: HashSet<String> = existing.iter().cloned().collect();
    let mut finals = Vec::with_capacity(locals.len());

    for local in locals {
        let (stem, ext) = split_name(local);
        let mut candidate = local.clone();
        let mut n = 1u32;
        while taken.contains(&candidate) {
            candidate = format!("{stem}({n}){ext}");
            n += 1;
        }
        taken.insert(candidate.clone());
        finals.push(candidate);
    }

    finals
}

/// Split `report.csv` into `("report", ".csv")`; no-extension names keep an
/// empty suffix.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "uploader_tests.rs"]
mod tests;
