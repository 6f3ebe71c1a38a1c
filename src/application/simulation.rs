//! Simulation driver: the single actor that owns the ledger and derived
//! views, fed by a fixed-interval polling loop.
//!
//! One step is one fetch/apply cycle. The only suspension point is the
//! extractor call; every mutation happens synchronously after it resolves,
//! and the loop awaits each step before the next tick, so no two cycles
//! ever overlap.

use crate::domain::entities::quote::Quote;
use crate::domain::ports::quote_extractor::QuoteExtractor;
use crate::domain::values::ledger::Ledger;
use crate::domain::values::price_history::PriceHistory;
use crate::domain::values::summary::PortfolioSummary;
use crate::domain::values::trade_log::TradeLog;
use crate::infrastructure::catalog::{Screenshot, ScreenshotCatalog};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Driver phase. A failed step lands in `Paused` with the error message
/// retained; only an explicit resume leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Paused,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub interval: Duration,
    pub initial_balance: f64,
    pub trade_notional: f64,
    pub trade_log_capacity: usize,
    pub price_history_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(4000),
            initial_balance: 100_000.0,
            trade_notional: 1000.0,
            trade_log_capacity: 50,
            price_history_capacity: 30,
        }
    }
}

pub struct SimulationDriver {
    extractor: Arc<dyn QuoteExtractor>,
    catalog: ScreenshotCatalog,
    config: SimulationConfig,
    ledger: Ledger,
    trades: TradeLog,
    history: PriceHistory,
    current_quote: Option<Quote>,
    current_screenshot: Option<Screenshot>,
    phase: Phase,
    last_error: Option<String>,
}

impl SimulationDriver {
    pub fn new(
        extractor: Arc<dyn QuoteExtractor>,
        catalog: ScreenshotCatalog,
        config: SimulationConfig,
    ) -> Self {
        let ledger = Ledger::new(config.initial_balance);
        let trades = TradeLog::new(config.trade_log_capacity);
        let history = PriceHistory::new(config.price_history_capacity);
        Self {
            extractor,
            catalog,
            config,
            ledger,
            trades,
            history,
            current_quote: None,
            current_screenshot: None,
            phase: Phase::Idle,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn trades(&self) -> &TradeLog {
        &self.trades
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.current_quote.as_ref()
    }

    pub fn current_screenshot(&self) -> Option<&Screenshot> {
        self.current_screenshot.as_ref()
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::compute(&self.ledger, &self.history)
    }

    /// One fetch/apply cycle against the screenshot under the cursor.
    ///
    /// On success the quote is ingested and the cursor advances. On any
    /// extractor failure the driver pauses with the message retained, the
    /// ledger untouched, and the cursor left in place so the same
    /// screenshot is retried on resume.
    pub async fn step(&mut self) {
        self.phase = Phase::Loading;
        self.last_error = None;

        let shot = self.catalog.current().clone();
        self.current_screenshot = Some(shot.clone());

        match self.extractor.extract(&shot.name).await {
            Ok(quote) => {
                self.ingest(quote);
                self.catalog.advance();
                self.phase = Phase::Idle;
            }
            Err(e) => {
                warn!(screenshot = %shot.name, error = %e, "extraction failed, pausing");
                self.last_error = Some(format!(
                    "Failed to process screenshot {}: {e}. Pausing simulation.",
                    shot.name
                ));
                self.phase = Phase::Paused;
            }
        }
    }

    fn ingest(&mut self, quote: Quote) {
        // Chart data records every observation, traded or not.
        self.history.push(&quote);

        match self.ledger.apply_quote(&quote, self.config.trade_notional) {
            Some(trade) => {
                info!(
                    symbol = %trade.symbol,
                    side = %trade.side,
                    quantity = trade.quantity,
                    price = trade.price,
                    cash = self.ledger.cash(),
                    "executed simulated trade"
                );
                self.trades.record(trade);
            }
            None => {
                debug!(symbol = %quote.symbol, direction = %quote.direction, "no trade");
            }
        }

        self.current_quote = Some(quote);
    }

    /// Stop the loop before any further step executes. The retained error,
    /// if any, stays visible until the next step clears it.
    pub fn pause(&mut self) {
        self.phase = Phase::Paused;
    }

    /// Leave `Paused` and perform one immediate step, mirroring the
    /// start-up behavior. No-op unless paused.
    pub async fn resume(&mut self) {
        if self.phase != Phase::Paused {
            return;
        }
        self.phase = Phase::Idle;
        self.step().await;
    }

    /// The single command the presentation boundary issues.
    pub async fn toggle_resume(&mut self) {
        if self.is_paused() {
            self.resume().await;
        } else {
            self.pause();
        }
    }

    /// Drive the polling loop: one immediate step, then one per interval
    /// tick, each awaited to completion before the next. Returns once the
    /// driver is paused (error or external pause) or `max_steps` cycles
    /// have run.
    pub async fn run(&mut self, max_steps: Option<usize>) {
        let mut ticker = tokio::time::interval(self.config.interval);
        let mut steps = 0usize;

        loop {
            if max_steps.is_some_and(|max| steps >= max) {
                return;
            }
            if self.is_paused() {
                return;
            }
            // First tick completes immediately.
            ticker.tick().await;
            self.step().await;
            steps += 1;
        }
    }
}
