use std::sync::Arc;
use tickerlens::domain::ports::quote_extractor::{ExtractError, QuoteExtractor};
use tickerlens::domain::values::direction::Direction;
use tickerlens::infrastructure::extractors::filename::FilenameExtractor;

fn extractor() -> Arc<dyn QuoteExtractor> {
    Arc::new(FilenameExtractor)
}

#[tokio::test]
async fn test_extracts_quote_from_name() {
    let quote = extractor().extract("AAPL_UP_182.50").await.unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.direction, Direction::Up);
    assert!((quote.price - 182.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_direction_is_case_insensitive() {
    let quote = extractor().extract("goog_Down_175.30").await.unwrap();
    assert_eq!(quote.direction, Direction::Down);
}

#[tokio::test]
async fn test_malformed_name_is_validation_failure() {
    let err = extractor().extract("not-a-screenshot").await.unwrap_err();
    assert!(matches!(err, ExtractError::Validation(_)));
    assert!(err.to_string().contains("SYMBOL_DIRECTION_PRICE"));
}

#[tokio::test]
async fn test_zero_price_is_rejected() {
    let err = extractor().extract("AAPL_UP_0.00").await.unwrap_err();
    assert!(matches!(err, ExtractError::Validation(_)));
}
