pub mod direction;
pub mod ledger;
pub mod position;
pub mod price_history;
pub mod summary;
pub mod trade_log;
pub mod trade_side;
