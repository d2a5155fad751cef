//! # Configuration
//!
//! Page content and runtime settings for the landing page, loadable from
//! YAML or JSON files with environment variable overrides.

pub mod error;
pub mod landing;

pub use error::ConfigError;
pub use landing::{
    BrandConfig, FontConfig, InstructionsConfig, LandingConfig, LaunchConfig, LogoConfig,
};
