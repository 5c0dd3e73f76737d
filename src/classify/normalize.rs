//! Fragment text normalization.
//!
//! Raw provider text arrives with bullets, stray symbols, and uneven
//! whitespace. Everything downstream (page gating, validation, title
//! selection, dedup) operates on the cleaned form produced here.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::config::HeuristicConfig;
use crate::model::TextFragment;

/// Cleans raw fragment text: NFC normalization, bullet stripping,
/// charset filtering, whitespace collapse.
#[derive(Debug, Clone)]
pub struct FragmentNormalizer {
    bullets: Regex,
    disallowed: Regex,
    whitespace: Regex,
}

impl FragmentNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            bullets: Regex::new("[\u{2022}\u{2023}\u{25E6}\u{2043}\u{2219}\u{25AA}]").unwrap(),
            // Keep letters, digits, whitespace, basic punctuation, dashes,
            // and the copyright sign (the validator blacklists on it).
            disallowed: Regex::new(r"[^\w\s\-.,:;()\u{2013}\u{2014}\u{00A9}]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize raw fragment text.
    pub fn clean(&self, raw: &str) -> String {
        let text: String = raw.nfc().collect();
        let text = self.bullets.replace_all(&text, " ");
        let text = self.disallowed.replace_all(&text, "");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for FragmentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A fragment's cleaned view, as consumed by the classifiers.
#[derive(Debug, Clone)]
pub struct CleanFragment {
    /// Normalized text
    pub text: String,
    /// Word count of the normalized text
    pub words: usize,
    /// Average font size in points
    pub font_size: f32,
    /// Whether the dominant font appears bold
    pub bold: bool,
    /// Distance of the fragment's horizontal center from the page center
    pub center_offset: f32,
    /// Line breaks in the raw text, before whitespace collapse
    pub line_breaks: usize,
    /// 1-based page number
    pub page: u32,
}

impl CleanFragment {
    /// Build the cleaned view of a text fragment. Returns `None` when
    /// nothing survives normalization.
    pub fn from_fragment(
        fragment: &TextFragment,
        page_width: f32,
        normalizer: &FragmentNormalizer,
    ) -> Option<Self> {
        if !fragment.is_text() {
            return None;
        }
        let text = normalizer.clean(&fragment.text);
        if text.is_empty() {
            return None;
        }
        let words = text.split_whitespace().count();
        Some(Self {
            text,
            words,
            font_size: fragment.font_size,
            bold: fragment.bold,
            center_offset: (fragment.bbox.center_x() - page_width / 2.0).abs(),
            line_breaks: fragment.text.matches('\n').count(),
            page: fragment.page,
        })
    }

    /// Whether the fragment counts as centered under the given tolerance.
    pub fn is_centered(&self, tolerance: f32) -> bool {
        self.center_offset < tolerance
    }

    /// Whether the fragment counts as centered under the configured
    /// fragment tolerance.
    pub fn centered(&self, config: &HeuristicConfig) -> bool {
        self.is_centered(config.center_tolerance)
    }
}
