//! External collaborator interfaces.
//!
//! Byte-level document parsing, layout geometry, rasterization, and OCR
//! are all external concerns. The pipeline consumes them through the
//! traits defined here and works with any implementation the caller
//! plugs in.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Page;

/// Produces positioned pages for a document.
///
/// Implementations must be deterministic for a given input: two calls
/// with the same path must yield identical fragment data. The pipeline's
/// idempotence guarantee rests on this.
pub trait LayoutProvider: Send + Sync {
    /// Yield the document's pages in order.
    fn pages(&self, path: &Path) -> Result<Vec<Page>>;
}

impl<T: LayoutProvider + ?Sized> LayoutProvider for &T {
    fn pages(&self, path: &Path) -> Result<Vec<Page>> {
        (**self).pages(path)
    }
}

/// A rasterized page image handed to the OCR engine.
///
/// Plain 8-bit grayscale, row-major. The core never looks inside the
/// pixel buffer; it only carries it between providers.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Row-major pixel data
    pub pixels: Vec<u8>,
}

/// Renders a single page of a document to an image.
pub trait PageRasterizer: Send + Sync {
    /// Rasterize the given 1-based page of the document at `path`.
    fn rasterize(&self, path: &Path, page: u32) -> Result<RasterImage>;
}

/// Recognizes plain text in a page image.
///
/// Returned text preserves line breaks; no font or position metadata is
/// available on this path.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in `image` using the given language code.
    fn recognize(&self, image: &RasterImage, lang: &str) -> Result<String>;
}

/// Layout provider that reads a serialized page dump.
///
/// The dump is a JSON array of [`Page`] values as produced by any
/// upstream layout tool. This is the concrete provider the CLI ships
/// with; it keeps byte-level parsing out of the core while giving the
/// batch driver something real to run on.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutProvider;

impl JsonLayoutProvider {
    /// Create a new JSON layout provider.
    pub fn new() -> Self {
        Self
    }
}

impl LayoutProvider for JsonLayoutProvider {
    fn pages(&self, path: &Path) -> Result<Vec<Page>> {
        let file = File::open(path)?;
        let pages: Vec<Page> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Layout(format!("invalid page dump {}: {}", path.display(), e)))?;
        Ok(pages)
    }
}
