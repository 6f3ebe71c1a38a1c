use crate::domain::values::trade_side::TradeSide;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One executed simulated fill. Trades are append-only; the driver keeps
/// them in a bounded most-recent-first log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

impl Trade {
    pub fn new(
        symbol: String,
        side: TradeSide,
        quantity: f64,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            symbol,
            side,
            quantity,
            price,
            timestamp,
        }
    }

    /// Cash moved by this fill.
    pub fn notional_value(&self) -> f64 {
        self.quantity * self.price
    }
}
