use crate::domain::values::direction::Direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One simulated price observation for a symbol, produced by the quote
/// extractor once per polling cycle. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Build a validated quote. The symbol must be non-empty and the
    /// price strictly positive.
    pub fn new(
        symbol: String,
        price: f64,
        direction: Direction,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Quote symbol must not be empty".to_string());
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(format!("Quote price must be positive, got {price}"));
        }
        Ok(Self {
            symbol,
            price,
            direction,
            timestamp,
        })
    }
}
