//! Per-document extraction pipeline.
//!
//! [`OutlineExtractor`] wires the classification core to the external
//! providers: layout pages in, a well-formed [`DocumentResult`] out.
//! Every failure degrades — `extract` never returns an error.

mod assemble;
mod ocr;

pub use assemble::{jaccard, OutlineAssembler};
pub use ocr::OcrFallback;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::classify::{
    classify_level, CleanFragment, FragmentNormalizer, HeadingValidator, HeuristicConfig,
    PageClassifier, TitleSelector,
};
use crate::error::Result;
use crate::model::{reading_order, DocumentResult, Page, PageClass, RunReport};
use crate::provider::{LayoutProvider, OcrEngine, PageRasterizer};

/// Filename stem used for title and degradation fallbacks. Owned by the
/// caller conceptually; computed here from the path it hands in.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// The per-document extraction pipeline.
///
/// Processing is strictly sequential within a document: pages in
/// document order, fragments in reading order. Nothing is shared across
/// runs, so one extractor can serve many documents, in parallel via
/// [`OutlineExtractor::extract_batch`].
pub struct OutlineExtractor<L: LayoutProvider> {
    provider: L,
    config: HeuristicConfig,
    normalizer: FragmentNormalizer,
    ocr: Option<OcrFallback>,
}

impl<L: LayoutProvider> OutlineExtractor<L> {
    /// Create an extractor over a layout provider with default
    /// configuration and no OCR fallback.
    pub fn new(provider: L) -> Self {
        Self {
            provider,
            config: HeuristicConfig::default(),
            normalizer: FragmentNormalizer::new(),
            ocr: None,
        }
    }

    /// Replace the heuristic configuration.
    pub fn with_config(mut self, config: HeuristicConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable the OCR fallback with the given providers.
    pub fn with_ocr(
        mut self,
        rasterizer: Box<dyn PageRasterizer>,
        engine: Box<dyn OcrEngine>,
    ) -> Self {
        self.ocr = Some(OcrFallback::new(rasterizer, engine));
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Extract the outline for one document. Never fails: any error
    /// degrades to the minimal valid result for the path's stem.
    pub fn extract(&self, path: &Path) -> DocumentResult {
        self.extract_with_report(path).0
    }

    /// Extract with a diagnostics report attached.
    pub fn extract_with_report(&self, path: &Path) -> (DocumentResult, RunReport) {
        match self.try_extract(path) {
            Ok((result, ocr_pages)) => (result, RunReport::completed(ocr_pages)),
            Err(e) => {
                log::warn!("degrading {}: {}", path.display(), e);
                let stem = file_stem(path);
                (DocumentResult::fallback(stem), RunReport::degraded(e.to_string()))
            }
        }
    }

    /// Extract outlines for many documents in parallel. Each document
    /// degrades independently; the output order matches the input order.
    pub fn extract_batch(&self, paths: &[PathBuf]) -> Vec<DocumentResult> {
        paths.par_iter().map(|path| self.extract(path)).collect()
    }

    /// The fallible inner pipeline wrapped by [`Self::extract`].
    fn try_extract(&self, path: &Path) -> Result<(DocumentResult, Vec<u32>)> {
        let mut pages = self.provider.pages(path)?;
        let stem = file_stem(path);

        let cleaned: Vec<Vec<CleanFragment>> =
            pages.iter().map(|page| self.clean_page(page)).collect();

        let selected = cleaned
            .first()
            .map(|fragments| TitleSelector::new(&self.config).select(fragments))
            .unwrap_or_default();
        let title = if selected.is_empty() { stem } else { selected };

        let classifier = PageClassifier::new(&self.config);
        let validator = HeadingValidator::new(&self.config);
        let mut assembler = OutlineAssembler::new();
        let mut ocr_pages = Vec::new();

        for (page, fragments) in pages.iter_mut().zip(&cleaned) {
            let class = classifier.classify(page, fragments);
            page.classification = Some(class);
            if class != PageClass::Normal {
                log::debug!("page {}: {:?}, skipping extraction", page.number, class);
                continue;
            }

            let mut produced = 0usize;
            for fragment in fragments {
                if fragment.words > self.config.max_fragment_words {
                    continue;
                }
                if validator.is_heading(fragment) {
                    produced += 1;
                    let level = classify_level(fragment, &self.config);
                    assembler.push(level, &fragment.text, page.number);
                }
            }

            if produced == 0 {
                if let Some(ocr) = &self.ocr {
                    let lines = ocr.recover(path, page.number, &self.normalizer, &self.config);
                    if !lines.is_empty() {
                        ocr_pages.push(page.number);
                    }
                    for line in lines {
                        assembler.push(self.config.ocr_level, &line, page.number);
                    }
                }
            }
        }

        log::debug!("{}: {} outline entries", path.display(), assembler.len());
        Ok((assembler.finish(&title), ocr_pages))
    }

    /// Clean one page's text fragments, in reading order.
    fn clean_page(&self, page: &Page) -> Vec<CleanFragment> {
        reading_order(&page.fragments)
            .into_iter()
            .map(|i| &page.fragments[i])
            .filter_map(|f| CleanFragment::from_fragment(f, page.width, &self.normalizer))
            .collect()
    }
}

impl<L: LayoutProvider> std::fmt::Debug for OutlineExtractor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineExtractor")
            .field("ocr", &self.ocr.is_some())
            .finish_non_exhaustive()
    }
}
