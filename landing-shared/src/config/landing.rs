use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use tracing::{debug, warn};

use super::error::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Product identity shown in the hero section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BrandConfig {
    /// Product name rendered as the main heading
    pub name: String,
    /// Short tagline rendered under the product name
    pub tagline: String,
    /// Link target of the logo
    pub homepage: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Inference".to_string(),
            tagline: "developer-friendly vision inference".to_string(),
            homepage: "https://roboflow.com".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogoConfig {
    pub src: String,
    pub alt: String,
    pub width: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            src: "/roboflow_full_logo_color.svg".to_string(),
            alt: "Roboflow Logo".to_string(),
            width: 200,
        }
    }
}

/// A generated web font face: the class that applies it and its CSS values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FontConfig {
    pub class_name: String,
    pub family: String,
    pub style: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            class_name: "__className_829659".to_string(),
            family: "'__Roboto_Mono_829659', '__Roboto_Mono_Fallback_829659'".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontConfig {
    /// CSS rule binding the font class to its family and style.
    ///
    /// `None` when no class name is configured, since `.{...}` is not a valid selector.
    pub fn style_rule(&self) -> Option<String> {
        let class_name = self.class_name.trim();
        if class_name.is_empty() {
            return None;
        }
        Some(format!(
            ".{}{{font-family:{};font-style:{}}}",
            class_name, self.family, self.style
        ))
    }
}

/// Copy for the "enable notebooks" panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InstructionsConfig {
    pub heading: String,
    /// Environment variable that enables the notebook feature
    pub feature_env_var: String,
    /// Flag accepted by the inference CLI
    pub cli_flag: String,
    /// Full CLI invocation using [`InstructionsConfig::cli_flag`]
    pub cli_command: String,
    /// Argument to add to a `docker run` command
    pub docker_argument: String,
}

impl Default for InstructionsConfig {
    fn default() -> Self {
        Self {
            heading: "Jump Into an Inference Enabled Notebook".to_string(),
            feature_env_var: "NOTEBOOK_ENABLED".to_string(),
            cli_flag: "--dev".to_string(),
            cli_command: "inference server start --dev".to_string(),
            docker_argument: "-e NOTEBOOK_ENABLED=true".to_string(),
        }
    }
}

/// The call-to-action link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LaunchConfig {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            label: "Launch Notebook".to_string(),
            href: "notebook/start".to_string(),
            new_tab: true,
        }
    }
}

/// The main configuration structure for the landing page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LandingConfig {
    pub brand: BrandConfig,
    pub logo: LogoConfig,
    pub font: FontConfig,
    pub instructions: InstructionsConfig,
    pub launch: LaunchConfig,

    /// Logging level
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LandingConfig {
    /// Generates a default configuration reproducing the published page.
    pub fn with_defaults() -> Self {
        Self {
            brand: BrandConfig::default(),
            logo: LogoConfig::default(),
            font: FontConfig::default(),
            instructions: InstructionsConfig::default(),
            launch: LaunchConfig::default(),
            log_level: "info".to_string(),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a `.yaml`, `.yml` or `.json` file.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, an
    /// environment override is malformed, or the result fails validation.
    pub fn load_config(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides()?;

        if let Err(errors) = config.validate() {
            return Err(ConfigError::Invalid(errors));
        }

        Ok(config)
    }

    /// Parses a configuration file; missing sections fall back to defaults.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file is unreadable, malformed, or has
    /// an unsupported extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration file");

        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yml::from_str(&content)?),
            "json" => Ok(serde_json::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(extension)),
        }
    }

    /// Fills values still at their defaults from `LANDING_*` variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnv`] if `LANDING_LOGO_WIDTH` is not a number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let defaults = Self::with_defaults();

        if self.brand.name == defaults.brand.name {
            if let Ok(name) = env::var("LANDING_BRAND_NAME") {
                self.brand.name = name;
            }
        }
        if self.brand.tagline == defaults.brand.tagline {
            if let Ok(tagline) = env::var("LANDING_TAGLINE") {
                self.brand.tagline = tagline;
            }
        }
        if self.launch.href == defaults.launch.href {
            if let Ok(href) = env::var("LANDING_LAUNCH_HREF") {
                self.launch.href = href;
            }
        }
        if self.logo.width == defaults.logo.width {
            if let Ok(width) = env::var("LANDING_LOGO_WIDTH") {
                self.logo.width = width.parse().map_err(|_| ConfigError::InvalidEnv {
                    name: "LANDING_LOGO_WIDTH",
                    reason: format!("{width:?} is not a positive integer"),
                })?;
            }
        }
        if self.log_level == defaults.log_level {
            if let Ok(log_level) = env::var("LANDING_LOG_LEVEL") {
                self.log_level = log_level;
            }
        }

        Ok(())
    }

    /// Validate the complete configuration
    ///
    /// # Errors
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.brand.name.trim().is_empty() {
            errors.push("Brand name must not be empty.".to_string());
        }
        if self.logo.width == 0 {
            errors.push("Logo width must be greater than 0.".to_string());
        }
        if self.launch.href.trim().is_empty() {
            errors.push("Launch link must have an href.".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Unknown log level '{}'. Expected one of: {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        if self.font.class_name.trim().is_empty() {
            warn!("font class name is empty; the tagline will use the inherited font");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Serializes the configuration in the requested format.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for anything but `yaml` or `json`.
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" | "yml" => Ok(serde_yml::to_string(self)?),
            "json" => Ok(serde_json::to_string_pretty(self)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}
