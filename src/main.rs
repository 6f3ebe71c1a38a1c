use clap::Parser;
use std::time::Duration;
use tickerlens::application::simulation::SimulationConfig;
use tickerlens::cli::commands::{Cli, Commands};
use tickerlens::infrastructure::catalog::ScreenshotCatalog;
use tickerlens::{build_extractor, TickerLens};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Run {
            steps,
            interval_ms,
            initial_balance,
            notional,
            extractor,
        } => {
            let config = SimulationConfig {
                interval: Duration::from_millis(interval_ms),
                initial_balance,
                trade_notional: notional,
                ..SimulationConfig::default()
            };
            let mut lens = TickerLens::new(extractor.as_deref(), config)?;
            lens.run(steps).await;
            if let Some(err) = lens.last_error() {
                eprintln!("{err}");
            }
            println!("{}", serde_json::to_string_pretty(&lens.snapshot())?);
        }
        Commands::Step { extractor } => {
            let mut lens = TickerLens::new(extractor.as_deref(), SimulationConfig::default())?;
            lens.step().await;
            if let Some(err) = lens.last_error() {
                eprintln!("{err}");
            }
            println!("{}", serde_json::to_string_pretty(&lens.snapshot())?);
        }
        Commands::Extract { name, extractor } => {
            let extractor = build_extractor(extractor.as_deref())?;
            let quote = extractor.extract(&name).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Commands::Catalog => {
            for shot in ScreenshotCatalog::builtin().iter() {
                println!("{}", shot.name);
            }
        }
    }
    Ok(())
}
