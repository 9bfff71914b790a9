//! Website assembly - static assets plus the favicon.

use crate::dist::{Result, Settings, error::Context, utils::fs};
use std::path::PathBuf;

/// Merge the website asset tree into the output directory and add the favicon.
///
/// Existing files in the output directory that the website does not provide
/// are left alone. A missing asset tree or icon is returned as an error.
///
/// Returns the destination paths of everything copied.
pub async fn assemble(settings: &Settings) -> Result<Vec<PathBuf>> {
    let website = settings.website();

    let mut artifacts = fs::copy_dir(&website.assets_dir, settings.out_dir())
        .await
        .context("copying website assets")?;
    log::debug!(
        "Copied {} website files from {}",
        artifacts.len(),
        website.assets_dir.display()
    );

    let favicon = settings.favicon_output();
    fs::copy_file(&website.icon, &favicon)
        .await
        .context("copying branding icon")?;
    artifacts.push(favicon);

    log::info!("Distributed website to {}", settings.out_dir().display());
    Ok(artifacts)
}
