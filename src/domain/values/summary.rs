use crate::domain::values::ledger::Ledger;
use crate::domain::values::price_history::PriceHistory;
use serde::Serialize;

/// Headline dashboard numbers derived from the ledger and the freshest
/// known prices. Purely a read model.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub cash: f64,
    /// Open positions marked at the latest seen price (entry price when
    /// no price has been observed yet).
    pub market_value: f64,
    pub total_value: f64,
    pub unrealized_pnl: f64,
}

impl PortfolioSummary {
    pub fn compute(ledger: &Ledger, history: &PriceHistory) -> Self {
        let market_value = ledger.market_value(|symbol| history.latest_price(symbol));
        Self {
            cash: ledger.cash(),
            market_value,
            total_value: ledger.cash() + market_value,
            unrealized_pnl: market_value - ledger.cost_basis(),
        }
    }
}
