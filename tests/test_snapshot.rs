mod common;

use common::{catalog, setup, test_config, FailingExtractor};
use std::sync::Arc;
use tickerlens::TickerLens;

#[tokio::test]
async fn test_snapshot_reflects_positions_and_summary() {
    let mut lens = setup(&["GOOG_UP_200.00", "AAPL_UP_100.00"]);
    lens.step().await;
    lens.step().await;

    let snap = lens.snapshot();
    // Sorted by symbol regardless of fill order.
    let symbols: Vec<_> = snap.positions.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "GOOG"]);

    assert!((snap.summary.cash - 98_000.0).abs() < 1e-9);
    // Both marks equal their entries, so no unrealized P&L yet.
    assert!((snap.summary.market_value - 2000.0).abs() < 1e-9);
    assert!((snap.summary.total_value - 100_000.0).abs() < 1e-9);
    assert!(snap.summary.unrealized_pnl.abs() < 1e-9);

    assert_eq!(snap.trades.len(), 2);
    // Most recent first.
    assert_eq!(snap.trades[0].symbol, "AAPL");
    assert_eq!(snap.price_history["GOOG"].len(), 1);
    assert!(!snap.is_paused);
    assert!(snap.error.is_none());
}

#[tokio::test]
async fn test_snapshot_surfaces_error_state() {
    let mut lens = TickerLens::with_extractor(
        Arc::new(FailingExtractor),
        catalog(&["AAPL_UP_100.00"]),
        test_config(),
    );
    lens.step().await;

    let snap = lens.snapshot();
    assert!(snap.is_paused);
    assert!(!snap.is_loading);
    assert!(snap.error.as_deref().unwrap().contains("Pausing simulation"));
    assert_eq!(snap.current_screenshot.as_deref(), Some("AAPL_UP_100.00"));
    assert!(snap.positions.is_empty());
    assert!(snap.trades.is_empty());
}

#[tokio::test]
async fn test_snapshot_serializes_to_json() {
    let mut lens = setup(&["AAPL_UP_100.00"]);
    lens.step().await;

    let json = serde_json::to_value(lens.snapshot()).unwrap();
    assert_eq!(json["trades"][0]["side"], "BUY");
    assert_eq!(json["current_quote"]["direction"], "up");
    assert_eq!(json["summary"]["cash"], 99_000.0);
}
