use crate::domain::entities::quote::Quote;
use crate::domain::ports::quote_extractor::{ExtractError, QuoteExtractor};
use crate::domain::values::direction::Direction;
use async_trait::async_trait;
use chrono::Utc;

/// Offline extractor that parses the SYMBOL_DIRECTION_PRICE encoding
/// directly, with no external service. This is the default adapter and
/// the one the test suite runs against.
pub struct FilenameExtractor;

const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

#[async_trait]
impl QuoteExtractor for FilenameExtractor {
    fn name(&self) -> &str {
        "filename"
    }

    async fn extract(&self, screenshot_name: &str) -> Result<Quote, ExtractError> {
        parse_name(screenshot_name)
    }
}

fn parse_name(name: &str) -> Result<Quote, ExtractError> {
    let mut stem = name.trim();
    for ext in IMAGE_EXTENSIONS {
        if stem.to_lowercase().ends_with(ext) {
            stem = &stem[..stem.len() - ext.len()];
            break;
        }
    }

    let mut parts = stem.splitn(3, '_');
    let (symbol, direction, price) = match (parts.next(), parts.next(), parts.next()) {
        (Some(s), Some(d), Some(p)) => (s, d, p),
        _ => {
            return Err(ExtractError::Validation(format!(
                "Screenshot name {name:?} does not match SYMBOL_DIRECTION_PRICE"
            )))
        }
    };

    let direction: Direction = direction
        .parse()
        .map_err(ExtractError::Validation)?;
    let price: f64 = price
        .parse()
        .map_err(|_| ExtractError::Validation(format!("Invalid price in {name:?}: {price}")))?;

    Quote::new(symbol.to_string(), price, direction, Utc::now())
        .map_err(ExtractError::Validation)
}
