use crate::domain::entities::quote::Quote;
use crate::domain::ports::quote_extractor::{ExtractError, QuoteExtractor};
use crate::domain::values::direction::Direction;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Upper bound on one extraction call. A hung model call surfaces as a
/// retrieval failure and pauses the simulation instead of leaving the
/// driver stuck in loading.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini `generateContent` extractor. The model is asked to read the
/// screenshot filename (format SYMBOL_DIRECTION_PRICE) and answer with a
/// schema-constrained JSON quote; no image bytes are sent.
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Shape the model is constrained to answer with.
#[derive(Deserialize)]
struct ExtractedQuote {
    symbol: String,
    price: f64,
    direction: Direction,
}

impl GeminiExtractor {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self::with_timeout(api_key, model, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_key: String, model: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn prompt(screenshot_name: &str) -> String {
        format!(
            "You are an OCR model for a financial app. Analyze the provided filename. \
             The filename is: \"{screenshot_name}\". \
             The filename format is SYMBOL_DIRECTION_PRICE. \
             From this filename, extract the stock symbol, its price, and its direction \
             ('up', 'down', or 'flat'). \
             Rely entirely on the filename to generate the JSON response. \
             For example, for a file named \"AAPL_UP_182.50\", the symbol is \"AAPL\", \
             direction is \"up\", and price is 182.50."
        )
    }

    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "symbol": {
                    "type": "STRING",
                    "description": "The stock ticker symbol, e.g., AAPL, GOOG.",
                },
                "price": {
                    "type": "NUMBER",
                    "description": "The current price of the stock.",
                },
                "direction": {
                    "type": "STRING",
                    "enum": ["up", "down", "flat"],
                    "description": "The price trend direction: up, down, or flat.",
                },
            },
            "required": ["symbol", "price", "direction"],
        })
    }
}

#[async_trait]
impl QuoteExtractor for GeminiExtractor {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn extract(&self, screenshot_name: &str) -> Result<Quote, ExtractError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(screenshot_name),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::response_schema(),
            },
        };

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractError::Retrieval(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractError::Retrieval(format!("Gemini API {status}: {body}")));
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ExtractError::Validation(format!("Malformed Gemini response: {e}")))?;

        let text = data
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ExtractError::Validation(
                "Empty response from Gemini API".to_string(),
            ));
        }

        let extracted: ExtractedQuote = serde_json::from_str(text)
            .map_err(|e| ExtractError::Validation(format!("Invalid JSON from Gemini: {e}")))?;

        Quote::new(
            extracted.symbol,
            extracted.price,
            extracted.direction,
            Utc::now(),
        )
        .map_err(ExtractError::Validation)
    }
}
