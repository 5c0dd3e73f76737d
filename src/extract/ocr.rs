//! OCR fallback for pages where layout signals find nothing.
//!
//! Triggered only for `normal` pages whose layout pass produced zero
//! headings — typically scanned or image-only pages. Recovered lines
//! carry no geometry, so they pass a reduced validity check and default
//! to a single configured level.

use std::path::Path;

use crate::classify::{FragmentNormalizer, HeadingValidator, HeuristicConfig};
use crate::provider::{OcrEngine, PageRasterizer};

/// Requests rasterized text for barren pages and re-validates it with
/// the reduced heuristic.
pub struct OcrFallback {
    rasterizer: Box<dyn PageRasterizer>,
    engine: Box<dyn OcrEngine>,
}

impl OcrFallback {
    /// Create a fallback over the given providers.
    pub fn new(rasterizer: Box<dyn PageRasterizer>, engine: Box<dyn OcrEngine>) -> Self {
        Self { rasterizer, engine }
    }

    /// Recover heading-like lines for one page.
    ///
    /// Rasterizer or OCR failure is never fatal: the page is skipped
    /// with a warning and an empty result.
    pub fn recover(
        &self,
        path: &Path,
        page: u32,
        normalizer: &FragmentNormalizer,
        config: &HeuristicConfig,
    ) -> Vec<String> {
        let image = match self.rasterizer.rasterize(path, page) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("skipping OCR for page {}: rasterization failed: {}", page, e);
                return Vec::new();
            }
        };

        let text = match self.engine.recognize(&image, &config.ocr_lang) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("skipping OCR for page {}: recognition failed: {}", page, e);
                return Vec::new();
            }
        };

        let validator = HeadingValidator::new(config);
        text.lines()
            .map(|line| normalizer.clean(line))
            .filter(|line| !line.is_empty() && validator.is_ocr_heading(line))
            .collect()
    }
}

impl std::fmt::Debug for OcrFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrFallback").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::provider::RasterImage;

    struct FixedOcr {
        text: String,
    }

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _image: &RasterImage, _lang: &str) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    struct BlankRasterizer;

    impl PageRasterizer for BlankRasterizer {
        fn rasterize(&self, _path: &Path, _page: u32) -> Result<RasterImage> {
            Ok(RasterImage {
                width: 1,
                height: 1,
                pixels: vec![0],
            })
        }
    }

    struct FailingRasterizer;

    impl PageRasterizer for FailingRasterizer {
        fn rasterize(&self, _path: &Path, page: u32) -> Result<RasterImage> {
            Err(Error::Ocr {
                page,
                reason: "renderer crashed".to_string(),
            })
        }
    }

    #[test]
    fn test_recover_filters_lines() {
        let fallback = OcrFallback::new(
            Box::new(BlankRasterizer),
            Box::new(FixedOcr {
                text: "Safety instructions\n\nab\n404 404\nPage 3\nMaintenance schedule"
                    .to_string(),
            }),
        );
        let config = HeuristicConfig::default();
        let normalizer = FragmentNormalizer::new();
        let lines = fallback.recover(Path::new("doc.json"), 2, &normalizer, &config);
        assert_eq!(lines, vec!["Safety instructions", "Maintenance schedule"]);
    }

    #[test]
    fn test_rasterizer_failure_is_not_fatal() {
        let fallback = OcrFallback::new(
            Box::new(FailingRasterizer),
            Box::new(FixedOcr {
                text: String::new(),
            }),
        );
        let config = HeuristicConfig::default();
        let normalizer = FragmentNormalizer::new();
        let lines = fallback.recover(Path::new("doc.json"), 2, &normalizer, &config);
        assert!(lines.is_empty());
    }
}
