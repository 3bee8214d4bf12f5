pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{
    cli::LocalAssetSource,
    manifest::{default_assets, AssetManifest},
    OutputFormat,
};
pub use core::checker::{check_content, AssetChecker};
pub use domain::model::{AssetSpec, CheckReport, Diagnostic, PASS_MESSAGE};
pub use domain::ports::AssetSource;
pub use utils::error::{Result, SmokeError};
