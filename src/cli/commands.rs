use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tickerlens", about = "Simulated trading core driven by OCR-style screenshot extraction")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drive the polling loop over the built-in screenshot catalog
    Run {
        /// Number of steps to run; omit to run until paused
        #[arg(long)]
        steps: Option<usize>,
        /// Milliseconds between polling ticks
        #[arg(long, default_value = "4000")]
        interval_ms: u64,
        /// Starting cash balance
        #[arg(long, default_value = "100000")]
        initial_balance: f64,
        /// Fixed dollar amount sizing every buy/sell decision
        #[arg(long, default_value = "1000")]
        notional: f64,
        /// Extractor backend (gemini, filename)
        #[arg(long)]
        extractor: Option<String>,
    },
    /// Run one simulation step and print the snapshot
    Step {
        /// Extractor backend (gemini, filename)
        #[arg(long)]
        extractor: Option<String>,
    },
    /// Extract a quote from a single screenshot name
    Extract {
        /// Screenshot name (SYMBOL_DIRECTION_PRICE)
        name: String,
        /// Extractor backend (gemini, filename)
        #[arg(long)]
        extractor: Option<String>,
    },
    /// List the built-in screenshot catalog
    Catalog,
}
