use serde::Serialize;

/// One mock screenshot: a filename-encoded quote plus a base64 image
/// payload for the dashboard preview pane.
#[derive(Debug, Clone, Serialize)]
pub struct Screenshot {
    pub name: String,
    pub image: String,
}

/// 1x1 transparent PNG used as the image payload for the built-in set.
const PLACEHOLDER_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

/// Ordered screenshot list consumed round-robin by the simulation driver.
///
/// The cursor is advanced by the driver only after a successful step, so a
/// screenshot whose extraction failed is retried on resume.
#[derive(Debug, Clone)]
pub struct ScreenshotCatalog {
    shots: Vec<Screenshot>,
    cursor: usize,
}

impl ScreenshotCatalog {
    pub fn new(shots: Vec<Screenshot>) -> Result<Self, String> {
        if shots.is_empty() {
            return Err("Screenshot catalog must not be empty".to_string());
        }
        Ok(Self { shots, cursor: 0 })
    }

    /// The default mock set: filenames follow SYMBOL_DIRECTION_PRICE.
    pub fn builtin() -> Self {
        let names = [
            "AAPL_UP_182.50",
            "GOOG_UP_175.30",
            "TSLA_DOWN_245.80",
            "AAPL_UP_184.10",
            "MSFT_FLAT_410.00",
            "GOOG_DOWN_173.90",
            "NVDA_UP_122.40",
            "AAPL_DOWN_181.20",
            "TSLA_UP_251.00",
            "NVDA_DOWN_119.75",
        ];
        let shots = names
            .iter()
            .map(|name| Screenshot {
                name: (*name).to_string(),
                image: PLACEHOLDER_PNG.to_string(),
            })
            .collect();
        Self { shots, cursor: 0 }
    }

    pub fn current(&self) -> &Screenshot {
        &self.shots[self.cursor]
    }

    /// Step the cursor round-robin, wrapping at the end of the list.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.shots.len();
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Screenshot> {
        self.shots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(name: &str) -> Screenshot {
        Screenshot {
            name: name.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(ScreenshotCatalog::new(vec![]).is_err());
    }

    #[test]
    fn test_round_robin_wraps() {
        let mut catalog = ScreenshotCatalog::new(vec![shot("A"), shot("B"), shot("C")]).unwrap();
        assert_eq!(catalog.current().name, "A");
        catalog.advance();
        catalog.advance();
        assert_eq!(catalog.current().name, "C");
        catalog.advance();
        assert_eq!(catalog.current().name, "A");
    }

    #[test]
    fn test_builtin_names_parse_shape() {
        let catalog = ScreenshotCatalog::builtin();
        assert!(catalog.len() > 0);
        for shot in catalog.iter() {
            // SYMBOL_DIRECTION_PRICE
            assert_eq!(shot.name.splitn(3, '_').count(), 3, "bad name {}", shot.name);
        }
    }
}
