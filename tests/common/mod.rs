//! Shared test helpers.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tickerlens::application::simulation::SimulationConfig;
use tickerlens::domain::entities::quote::Quote;
use tickerlens::domain::ports::quote_extractor::{ExtractError, QuoteExtractor};
use tickerlens::infrastructure::catalog::{Screenshot, ScreenshotCatalog};
use tickerlens::infrastructure::extractors::filename::FilenameExtractor;
use tickerlens::TickerLens;

pub fn catalog(names: &[&str]) -> ScreenshotCatalog {
    let shots = names
        .iter()
        .map(|name| Screenshot {
            name: name.to_string(),
            image: String::new(),
        })
        .collect();
    ScreenshotCatalog::new(shots).unwrap()
}

/// Test config: default balances, but a 1ms tick so loop tests run fast.
pub fn test_config() -> SimulationConfig {
    SimulationConfig {
        interval: Duration::from_millis(1),
        ..SimulationConfig::default()
    }
}

pub fn setup(names: &[&str]) -> TickerLens {
    TickerLens::with_extractor(Arc::new(FilenameExtractor), catalog(names), test_config())
}

/// Extractor that always fails with a retrieval error.
pub struct FailingExtractor;

#[async_trait]
impl QuoteExtractor for FailingExtractor {
    fn name(&self) -> &str {
        "failing"
    }

    async fn extract(&self, _screenshot_name: &str) -> Result<Quote, ExtractError> {
        Err(ExtractError::Retrieval("connection refused".to_string()))
    }
}

/// Extractor that fails a fixed number of times, then behaves like the
/// filename parser.
pub struct FlakyExtractor {
    remaining_failures: AtomicUsize,
}

impl FlakyExtractor {
    pub fn new(failures: usize) -> Self {
        Self {
            remaining_failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl QuoteExtractor for FlakyExtractor {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn extract(&self, screenshot_name: &str) -> Result<Quote, ExtractError> {
        if self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ExtractError::Retrieval("transient outage".to_string()));
        }
        FilenameExtractor.extract(screenshot_name).await
    }
}
