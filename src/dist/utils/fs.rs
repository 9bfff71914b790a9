//! File system utilities for distribution.
//!
//! Provides idempotent directory creation and merging copies that never clear
//! the destination, with path-aware error messages.

use crate::{
    bail,
    dist::error::{Error, ErrorExt, Result},
};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists and never touches its contents.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites the destination if it exists. Fails if the source path is a
/// directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from).await.fs_context("reading", from)?;
    if !metadata.is_file() {
        bail!("{} is not a file", from.display());
    }
    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await.fs_context("copying to", to)?;
    Ok(())
}

/// Recursively copies a directory into another one, merging with whatever the
/// destination already contains.
///
/// Files present in both trees are overwritten by the source, files only
/// present in the destination survive. Symlinks are followed and their
/// contents copied, so the destination never holds links into the source.
/// Fails if the source path is not a directory or doesn't exist.
///
/// Returns the destination paths of the copied files.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(from).await.fs_context("reading", from)?;
    if !metadata.is_dir() {
        bail!("{} is not a directory", from.display());
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || merge_tree(&from, &to))
        .await
        .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

fn merge_tree(from: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    std::fs::create_dir_all(to).fs_context("creating directory", to)?;

    for entry in walkdir::WalkDir::new(from).min_depth(1).follow_links(true) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            std::fs::copy(entry.path(), &dest_path).fs_context("copying to", &dest_path)?;
            copied.push(dest_path);
        }
    }

    Ok(copied)
}
