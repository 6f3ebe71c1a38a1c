use crate::domain::entities::quote::Quote;
use async_trait::async_trait;

/// OCR-style quote extraction port — the only failable edge of the core.
///
/// Given an opaque screenshot identifier (a filename-like string), an
/// extractor asynchronously produces a structured quote. The driver treats
/// both failure kinds identically: abort the step, surface the message,
/// pause the simulation.
#[async_trait]
pub trait QuoteExtractor: Send + Sync {
    /// Extractor name for logging.
    fn name(&self) -> &str;

    async fn extract(&self, screenshot_name: &str) -> Result<Quote, ExtractError>;
}

#[derive(Debug)]
pub enum ExtractError {
    /// The extraction call itself failed (network, service unavailable).
    Retrieval(String),
    /// The response was empty, unparsable, or violated the quote schema.
    Validation(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Retrieval(msg) => write!(f, "Retrieval error: {msg}"),
            ExtractError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}
