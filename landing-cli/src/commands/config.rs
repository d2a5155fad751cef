use std::fs;
use std::path::Path;

use anyhow::Context;
use shared::config::LandingConfig;
use tracing::info;

/// Generates a default configuration in the specified format.
///
/// # Arguments
/// * `format` - The format of the configuration ("yaml" or "json").
/// * `output` - File to write; the configuration is printed when `None`.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(format: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let serialized = LandingConfig::with_defaults().render(format)?;

    match output {
        Some(path) => {
            fs::write(path, serialized.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "configuration file generated");
            println!("Configuration file '{}' generated successfully.", path.display());
        }
        None => print!("{serialized}"),
    }

    Ok(())
}
