//! Simulated portfolio accounting.
//!
//! The ledger holds the cash balance and open positions, and applies one
//! incoming quote at a time. Each application emits exactly zero or one
//! trade; all edge cases (insufficient cash, no position to sell, clamped
//! quantities) are silent no-ops rather than errors, so `apply_quote` is
//! total over its input domain.

use crate::domain::entities::quote::Quote;
use crate::domain::entities::trade::Trade;
use crate::domain::values::direction::Direction;
use crate::domain::values::position::Position;
use crate::domain::values::trade_side::TradeSide;
use serde::Serialize;
use std::collections::HashMap;

/// Quantity below which a position counts as fully closed and is removed.
pub const POSITION_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    cash: f64,
    positions: HashMap<String, Position>,
}

impl Ledger {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            positions: HashMap::new(),
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn positions(&self) -> &HashMap<String, Position> {
        &self.positions
    }

    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(symbol)
    }

    /// Total cash spent on the open positions at their weighted entry.
    pub fn cost_basis(&self) -> f64 {
        self.positions.values().map(|p| p.cost_basis()).sum()
    }

    /// Mark the open positions with the freshest known price per symbol,
    /// falling back to the entry price when no price has been seen.
    pub fn market_value<F>(&self, latest_price: F) -> f64
    where
        F: Fn(&str) -> Option<f64>,
    {
        self.positions
            .values()
            .map(|p| p.quantity * latest_price(&p.symbol).unwrap_or(p.entry_price))
            .sum()
    }

    /// Apply one quote to the ledger, sizing every decision by the fixed
    /// trade notional:
    /// - `up`: buy `notional / price` worth, if cash covers the notional;
    /// - `down`: sell up to `notional / price`, clamped to the held
    ///   quantity, if a position is open;
    /// - anything else: no change.
    pub fn apply_quote(&mut self, quote: &Quote, notional: f64) -> Option<Trade> {
        match quote.direction {
            Direction::Up => self.try_buy(quote, notional),
            Direction::Down => self.try_sell(quote, notional),
            Direction::Flat => None,
        }
    }

    fn try_buy(&mut self, quote: &Quote, notional: f64) -> Option<Trade> {
        if self.cash < notional {
            // Rejected outright, never partially filled.
            return None;
        }

        let buy_qty = notional / quote.price;
        self.cash -= notional;
        match self.positions.get_mut(&quote.symbol) {
            Some(pos) => pos.add(buy_qty, notional),
            None => {
                self.positions.insert(
                    quote.symbol.clone(),
                    Position::open(quote.symbol.clone(), buy_qty, quote.price),
                );
            }
        }

        Some(Trade::new(
            quote.symbol.clone(),
            TradeSide::Buy,
            buy_qty,
            quote.price,
            quote.timestamp,
        ))
    }

    fn try_sell(&mut self, quote: &Quote, notional: f64) -> Option<Trade> {
        let pos = self.positions.get_mut(&quote.symbol)?;
        if pos.quantity <= 0.0 {
            return None;
        }

        let sell_qty = pos.quantity.min(notional / quote.price);
        self.cash += sell_qty * quote.price;
        pos.reduce(sell_qty);
        if pos.quantity < POSITION_EPSILON {
            self.positions.remove(&quote.symbol);
        }

        Some(Trade::new(
            quote.symbol.clone(),
            TradeSide::Sell,
            sell_qty,
            quote.price,
            quote.timestamp,
        ))
    }
}
