//! # doctoc
//!
//! Heuristic document outline extraction for Rust.
//!
//! This library turns a document's positioned text fragments (geometry,
//! font metrics, page numbers) into a hierarchical outline: a document
//! title plus an ordered list of H1/H2/H3 heading entries with page
//! numbers. It serves tools that need structural navigation — tables of
//! contents, search indices — for documents without native bookmark
//! data.
//!
//! Byte-level parsing, layout geometry, rasterization, and OCR are
//! external: the pipeline consumes them through the [`provider`] traits
//! and works with any implementation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctoc::{JsonLayoutProvider, OutlineExtractor};
//! use std::path::Path;
//!
//! let extractor = OutlineExtractor::new(JsonLayoutProvider::new());
//! let result = extractor.extract(Path::new("report.json"));
//! for entry in &result.outline {
//!     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - `extract` never fails: any provider or structural error degrades to
//!   a minimal valid result built from the filename stem.
//! - `title` and `outline` are never empty; every page number is >= 1.
//! - The pipeline is deterministic: identical provider data yields
//!   byte-identical output.
//! - No two outline entries share identical normalized text.

pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod provider;
pub mod render;

// Re-export commonly used types
pub use classify::{
    classify_level, CleanFragment, FragmentNormalizer, HeadingValidator, HeuristicConfig,
    PageClassifier, TitleSelector,
};
pub use error::{Error, Result};
pub use extract::{file_stem, jaccard, OcrFallback, OutlineAssembler, OutlineExtractor};
pub use model::{
    BoundingBox, DocumentResult, FragmentKind, HeadingLevel, OutlineEntry, Page, PageClass,
    RunReport, TextFragment,
};
pub use provider::{JsonLayoutProvider, LayoutProvider, OcrEngine, PageRasterizer, RasterImage};
pub use render::{sanitize, to_json, JsonFormat};

use std::path::{Path, PathBuf};

/// Extract the outline for one document with default configuration.
///
/// # Example
///
/// ```no_run
/// use doctoc::{extract_outline, JsonLayoutProvider};
/// use std::path::Path;
///
/// let result = extract_outline(&JsonLayoutProvider::new(), Path::new("report.json"));
/// assert!(!result.outline.is_empty());
/// ```
pub fn extract_outline<L: LayoutProvider>(provider: &L, path: &Path) -> DocumentResult {
    OutlineExtractor::new(provider).extract(path)
}

/// Extract the outline for one document with a custom configuration.
pub fn extract_outline_with_config<L: LayoutProvider>(
    provider: &L,
    path: &Path,
    config: HeuristicConfig,
) -> DocumentResult {
    OutlineExtractor::new(provider).with_config(config).extract(path)
}

/// Extract outlines for many documents in parallel.
///
/// Documents share no state, so batches parallelize freely; output
/// order matches input order and each document degrades independently.
pub fn extract_batch<L: LayoutProvider>(provider: &L, paths: &[PathBuf]) -> Vec<DocumentResult> {
    OutlineExtractor::new(provider).extract_batch(paths)
}
