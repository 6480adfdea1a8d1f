use anyhow::Context;
use clap::Parser;
use dts_bundler::config::LogFormat;
use dts_bundler::utils::error::ErrorSeverity;
use dts_bundler::utils::logger;
use dts_bundler::{BundleEngine, BundlePipeline, BundleSettings, CliConfig, LocalStorage};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting dts-bundler");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let root = settings.root.clone();
    let storage = LocalStorage::new(root.clone());
    let pipeline = BundlePipeline::new(storage, settings.clone());

    if cli.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be written");
        let plan = pipeline
            .plan()
            .await
            .with_context(|| format!("failed to scan {}", root))?;
        display_plan(&settings, &plan, &pipeline.output_asset());
        return Ok(());
    }

    let engine = BundleEngine::new(pipeline);

    match engine.run().await {
        Ok(output_asset) => {
            let output_path = Path::new(&root).join(output_asset);
            tracing::info!("Bundle saved to: {}", output_path.display());
            println!("✅ Declaration bundle written to {}", output_path.display());
        }
        Err(e) => {
            tracing::error!(
                "Bundling failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_plan(settings: &BundleSettings, plan: &[String], output_asset: &str) {
    println!("📋 Bundle plan:");
    println!("  Module: {}", settings.bundler.module_name());
    println!("  Root: {}", settings.root);
    println!("  Output: {}", output_asset);

    if let Some(references) = settings.bundler.excluded_references() {
        println!("  Excluded references: {}", references.join(", "));
    }
    if settings.remove_fragments {
        println!("  Merged fragments will be removed");
    }

    println!();
    println!("  {} declaration fragments:", plan.len());
    for name in plan {
        println!("    {}", name);
    }
}
