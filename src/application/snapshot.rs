use crate::application::simulation::SimulationDriver;
use crate::domain::entities::quote::Quote;
use crate::domain::entities::trade::Trade;
use crate::domain::values::position::Position;
use crate::domain::values::price_history::PricePoint;
use crate::domain::values::summary::PortfolioSummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the presentation layer reads, captured at one instant.
/// Carries no business logic; the CLI prints it as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub summary: PortfolioSummary,
    /// Sorted by symbol for stable output.
    pub positions: Vec<Position>,
    /// Most recent first, capped by the trade log.
    pub trades: Vec<Trade>,
    pub price_history: BTreeMap<String, Vec<PricePoint>>,
    pub current_quote: Option<Quote>,
    pub current_screenshot: Option<String>,
    pub is_loading: bool,
    pub is_paused: bool,
    pub error: Option<String>,
}

impl DashboardSnapshot {
    pub fn capture(driver: &SimulationDriver) -> Self {
        let mut positions: Vec<Position> =
            driver.ledger().positions().values().cloned().collect();
        positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        let price_history = driver
            .history()
            .symbols()
            .map(|symbol| {
                (
                    symbol.to_string(),
                    driver.history().points(symbol).cloned().collect(),
                )
            })
            .collect();

        Self {
            summary: driver.summary(),
            positions,
            trades: driver.trades().iter().cloned().collect(),
            price_history,
            current_quote: driver.current_quote().cloned(),
            current_screenshot: driver.current_screenshot().map(|s| s.name.clone()),
            is_loading: driver.is_loading(),
            is_paused: driver.is_paused(),
            error: driver.last_error().map(str::to_string),
        }
    }
}
