use clap::Parser;
use neon_snake_smoke::utils::{logger, validation::Validate};
use neon_snake_smoke::{AssetChecker, CliConfig, LocalAssetSource, OutputFormat};

/// Exit code for a configuration problem, distinct from a failed check (1).
const CONFIG_ERROR_EXIT: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting neon-snake smoke check");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let assets = match config.validate().and_then(|_| config.load_assets()) {
        Ok(assets) => assets,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(CONFIG_ERROR_EXIT);
        }
    };

    tracing::info!(
        "📁 Checking {} assets under {}",
        assets.len(),
        config.root.display()
    );

    let source = LocalAssetSource::new(config.root.clone());
    let checker = AssetChecker::new(source, assets);
    let report = checker.run().await;

    match config.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.to_json())?),
    }

    if !report.is_success() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}
