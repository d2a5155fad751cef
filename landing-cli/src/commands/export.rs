//! Static export of the landing page.

use std::path::{Path, PathBuf};

use anyhow::Context;
use shared::config::LandingConfig;
use tokio::fs;
use tracing::{debug, info};

/// Renders the page and writes `index.html` into `out_dir`.
///
/// # Arguments
/// * `config` - Resolved page configuration.
/// * `out_dir` - Destination directory, created if missing.
///
/// # Returns
/// The path of the written document.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub async fn export_site(config: LandingConfig, out_dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    debug!(brand = %config.brand.name, "rendering landing page");
    let document = web::document::render_document(config).await;

    let index = out_dir.join("index.html");
    fs::write(&index, document.as_bytes())
        .await
        .with_context(|| format!("failed to write {}", index.display()))?;

    info!(path = %index.display(), bytes = document.len(), "exported landing page");
    Ok(index)
}
