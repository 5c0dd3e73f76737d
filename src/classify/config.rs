//! Tunable thresholds for the classification heuristics.
//!
//! Every numeric threshold and keyword list used by the page gate, the
//! heading validator, the level classifier, and the title selector lives
//! here. The rule tables read only from this configuration, so
//! calibrating against a labeled corpus never requires code changes.

use regex::Regex;

use crate::model::HeadingLevel;

/// Shared regex patterns, compiled once per configuration.
#[derive(Debug, Clone)]
pub struct HeadingPatterns {
    /// Leading `N.` or `N)` numbering
    pub numbering: Regex,
    /// Two-level numbering prefix, e.g. "1.1 Introduction"
    pub two_level: Regex,
    /// Three-level numbering prefix, e.g. "1.1.1 Details"
    pub three_level: Regex,
    /// Two or more whitespace-separated bare numbers and nothing else
    pub repeated_numbers: Regex,
    /// An unbroken run of six or more digits
    pub long_digits: Regex,
}

impl HeadingPatterns {
    fn compile() -> Self {
        Self {
            numbering: Regex::new(r"^\d+[.)]").unwrap(),
            two_level: Regex::new(r"^\d+\.\d+\s").unwrap(),
            three_level: Regex::new(r"^\d+\.\d+\.\d+\s").unwrap(),
            repeated_numbers: Regex::new(r"^\d+(?:\s+\d+)+$").unwrap(),
            long_digits: Regex::new(r"\d{6,}").unwrap(),
        }
    }
}

/// Configuration for the heuristic classification pipeline.
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    // --- Page classification ---
    /// Pages with less visible text than this are card candidates
    pub card_text_threshold: usize,
    /// Keywords marking invitation/flyer layouts (matched against
    /// lowercase cleaned text)
    pub card_keywords: Vec<String>,
    /// Distance from page center (in page units) for the card-layout
    /// centering test
    pub card_center_tolerance: f32,
    /// Graphic-primitive count above which a page is a tabular candidate
    pub tabular_graphic_threshold: usize,
    /// Fragments shorter than this many characters count as table cells
    pub tabular_cell_max_len: usize,
    /// Short-fragment count above which a page is tabular
    pub tabular_cell_threshold: usize,

    // --- Heading validity ---
    /// Minimum cleaned text length for a heading candidate
    pub min_heading_len: usize,
    /// Maximum word count for a heading candidate
    pub max_heading_words: usize,
    /// Fragments longer than this many words are never candidates
    pub max_fragment_words: usize,
    /// Maximum word count for the all-uppercase acceptance rule
    pub max_upper_words: usize,
    /// Minimum font size for the bold acceptance rule (exclusive)
    pub bold_min_size: f32,
    /// Minimum font size for the centered acceptance rule (exclusive)
    pub centered_min_size: f32,
    /// Distance from page center (in page units) for a fragment to count
    /// as centered
    pub center_tolerance: f32,
    /// Substrings that disqualify a fragment (matched against lowercase
    /// cleaned text)
    pub blacklist: Vec<String>,
    /// Leading keywords that mark structural headings
    pub structural_keywords: Vec<String>,

    // --- Level assignment ---
    /// Font size at or above which bold text is H1
    pub h1_min_size: f32,
    /// Leading keywords that force H1
    pub h1_keywords: Vec<String>,
    /// Font size at or above which text is H2
    pub h2_min_size: f32,

    // --- Title selection ---
    /// Word-count range for the primary title strategy
    pub title_primary_words: (usize, usize),
    /// Minimum font size for the primary title strategy (exclusive)
    pub title_primary_min_size: f32,
    /// Minimum font size for the secondary (bold) title strategy
    /// (exclusive)
    pub title_secondary_min_size: f32,
    /// Minimum word count for the secondary and last-resort strategies
    pub title_min_words: usize,

    // --- OCR fallback ---
    /// Minimum cleaned line length on the OCR path
    pub ocr_min_len: usize,
    /// Level assigned to OCR-recovered lines (no geometry to rank them)
    pub ocr_level: HeadingLevel,
    /// Language code passed to the OCR engine
    pub ocr_lang: String,

    /// Compiled regex patterns
    pub patterns: HeadingPatterns,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            card_text_threshold: 300,
            card_keywords: [
                "rsvp",
                "you're invited",
                "youre invited",
                "party",
                "hope to see",
            ]
            .map(String::from)
            .to_vec(),
            card_center_tolerance: 50.0,
            tabular_graphic_threshold: 20,
            tabular_cell_max_len: 20,
            tabular_cell_threshold: 10,

            min_heading_len: 3,
            max_heading_words: 12,
            max_fragment_words: 30,
            max_upper_words: 5,
            bold_min_size: 11.0,
            centered_min_size: 12.0,
            center_tolerance: 20.0,
            blacklist: ["page", "continued", "copyright", "©", "http", "www."]
                .map(String::from)
                .to_vec(),
            structural_keywords: ["section", "chapter", "part", "clause"]
                .map(String::from)
                .to_vec(),

            h1_min_size: 16.0,
            h1_keywords: ["chapter", "part"].map(String::from).to_vec(),
            h2_min_size: 12.0,

            title_primary_words: (3, 10),
            title_primary_min_size: 14.0,
            title_secondary_min_size: 12.0,
            title_min_words: 2,

            ocr_min_len: 5,
            ocr_level: HeadingLevel::H2,
            ocr_lang: "eng".to_string(),

            patterns: HeadingPatterns::compile(),
        }
    }
}

impl HeuristicConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum word count for heading candidates.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the minimum font size for the bold acceptance rule.
    pub fn with_bold_min_size(mut self, size: f32) -> Self {
        self.bold_min_size = size;
        self
    }

    /// Set the minimum font size for the centered acceptance rule.
    pub fn with_centered_min_size(mut self, size: f32) -> Self {
        self.centered_min_size = size;
        self
    }

    /// Set the centering tolerance for fragments.
    pub fn with_center_tolerance(mut self, tolerance: f32) -> Self {
        self.center_tolerance = tolerance;
        self
    }

    /// Set the H1 font size threshold.
    pub fn with_h1_min_size(mut self, size: f32) -> Self {
        self.h1_min_size = size;
        self
    }

    /// Set the H2 font size threshold.
    pub fn with_h2_min_size(mut self, size: f32) -> Self {
        self.h2_min_size = size;
        self
    }

    /// Set the visible-text threshold for card-page detection.
    pub fn with_card_text_threshold(mut self, chars: usize) -> Self {
        self.card_text_threshold = chars;
        self
    }

    /// Replace the card keyword list.
    pub fn with_card_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.card_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the blacklist.
    pub fn with_blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the level assigned to OCR-recovered lines.
    pub fn with_ocr_level(mut self, level: HeadingLevel) -> Self {
        self.ocr_level = level;
        self
    }

    /// Set the OCR language code.
    pub fn with_ocr_lang(mut self, lang: impl Into<String>) -> Self {
        self.ocr_lang = lang.into();
        self
    }
}
