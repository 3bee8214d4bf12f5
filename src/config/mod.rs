pub mod cli;
pub mod manifest;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::core::AssetSpec;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use manifest::AssetManifest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "neon-snake-smoke")]
#[command(about = "Checks that the Neon Snake front-end assets contain their required markers")]
pub struct CliConfig {
    /// Project root the asset paths are resolved against
    #[arg(long, default_value = env!("CARGO_MANIFEST_DIR"))]
    pub root: PathBuf,

    /// TOML manifest replacing the built-in asset table
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Built-in table unless a manifest was given; manifests are validated.
    pub fn load_assets(&self) -> Result<Vec<AssetSpec>> {
        let manifest = match &self.manifest {
            Some(path) => {
                tracing::info!("📁 Loading asset manifest from: {}", path.display());
                AssetManifest::from_file(path)?
            }
            None => AssetManifest::default(),
        };
        manifest.validate()?;
        Ok(manifest.into_assets())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root.to_string_lossy())?;
        if let Some(manifest) = &self.manifest {
            validate_path("manifest", &manifest.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = CliConfig::try_parse_from(["neon-snake-smoke"]).unwrap();
        assert_eq!(config.root, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert!(config.manifest.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
        assert_eq!(config.load_assets().unwrap(), manifest::default_assets());
    }

    #[test]
    fn test_parses_overrides() {
        let config = CliConfig::try_parse_from([
            "neon-snake-smoke",
            "--root",
            "/tmp/game",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/game"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_manifest_file_is_error() {
        let config = CliConfig::try_parse_from([
            "neon-snake-smoke",
            "--manifest",
            "/nonexistent/smoke.toml",
        ])
        .unwrap();
        assert!(config.load_assets().is_err());
    }
}
