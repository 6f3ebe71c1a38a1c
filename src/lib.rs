pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::simulation::{SimulationConfig, SimulationDriver};
use crate::application::snapshot::DashboardSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_extractor::QuoteExtractor;
use crate::domain::values::summary::PortfolioSummary;
use crate::infrastructure::catalog::ScreenshotCatalog;
use crate::infrastructure::extractors::filename::FilenameExtractor;
use crate::infrastructure::extractors::gemini::GeminiExtractor;
use std::sync::Arc;

/// Resolve an extractor backend by name, falling back to the
/// `TICKERLENS_EXTRACTOR` env var and then to the offline filename parser.
pub fn build_extractor(kind: Option<&str>) -> Result<Arc<dyn QuoteExtractor>, DomainError> {
    let kind = match kind {
        Some(k) => k.to_string(),
        None => std::env::var("TICKERLENS_EXTRACTOR").unwrap_or_else(|_| "filename".into()),
    };

    let extractor: Arc<dyn QuoteExtractor> = match kind.as_str() {
        "filename" => Arc::new(FilenameExtractor),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
                DomainError::Config("GEMINI_API_KEY is required for the gemini extractor".into())
            })?;
            let model = std::env::var("TICKERLENS_GEMINI_MODEL").ok();
            Arc::new(GeminiExtractor::new(api_key, model))
        }
        other => {
            return Err(DomainError::Config(format!(
                "Unknown extractor: {other} (expected gemini or filename)"
            )))
        }
    };
    Ok(extractor)
}

/// Facade over the simulation: one instance per session owns all state.
pub struct TickerLens {
    driver: SimulationDriver,
}

impl TickerLens {
    pub fn new(extractor: Option<&str>, config: SimulationConfig) -> Result<Self, DomainError> {
        let extractor = build_extractor(extractor)?;
        Ok(Self::with_extractor(
            extractor,
            ScreenshotCatalog::builtin(),
            config,
        ))
    }

    pub fn with_extractor(
        extractor: Arc<dyn QuoteExtractor>,
        catalog: ScreenshotCatalog,
        config: SimulationConfig,
    ) -> Self {
        Self {
            driver: SimulationDriver::new(extractor, catalog, config),
        }
    }

    // Delegating methods
    pub async fn step(&mut self) {
        self.driver.step().await;
    }

    pub async fn run(&mut self, max_steps: Option<usize>) {
        self.driver.run(max_steps).await;
    }

    pub fn pause(&mut self) {
        self.driver.pause();
    }

    pub async fn resume(&mut self) {
        self.driver.resume().await;
    }

    pub async fn toggle_resume(&mut self) {
        self.driver.toggle_resume().await;
    }

    pub fn is_paused(&self) -> bool {
        self.driver.is_paused()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.driver.last_error()
    }

    pub fn summary(&self) -> PortfolioSummary {
        self.driver.summary()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::capture(&self.driver)
    }

    pub fn driver(&self) -> &SimulationDriver {
        &self.driver
    }
}
