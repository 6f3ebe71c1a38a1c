use crate::domain::entities::quote::Quote;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::VecDeque;

/// One charted observation: the display label is the quote's wall-clock
/// time, which is what the dashboard plots along the x axis.
#[derive(Debug, Clone, Serialize)]
pub struct PricePoint {
    pub symbol: String,
    pub label: String,
    pub price: f64,
}

/// Per-symbol bounded ring of chart points. Not authoritative state:
/// the ledger never reads it back except for latest-price marks.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    capacity: usize,
    series: HashMap<String, VecDeque<PricePoint>>,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            series: HashMap::new(),
        }
    }

    /// Append one observation, evicting the oldest point for that symbol
    /// once the ring is full.
    pub fn push(&mut self, quote: &Quote) {
        let capacity = self.capacity;
        let ring = self
            .series
            .entry(quote.symbol.clone())
            .or_insert_with(|| VecDeque::with_capacity(capacity));
        if ring.len() == self.capacity {
            ring.pop_front();
        }
        ring.push_back(PricePoint {
            symbol: quote.symbol.clone(),
            label: quote.timestamp.format("%H:%M:%S").to_string(),
            price: quote.price,
        });
    }

    pub fn points(&self, symbol: &str) -> impl Iterator<Item = &PricePoint> {
        self.series.get(symbol).into_iter().flatten()
    }

    pub fn len(&self, symbol: &str) -> usize {
        self.series.get(symbol).map_or(0, |r| r.len())
    }

    pub fn latest_price(&self, symbol: &str) -> Option<f64> {
        self.series
            .get(symbol)
            .and_then(|r| r.back())
            .map(|p| p.price)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}
