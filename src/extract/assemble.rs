//! Outline assembly: ordering, de-duplication, and post-processing.

use std::collections::HashSet;

use crate::model::{DocumentResult, HeadingLevel, OutlineEntry};

/// Jaccard word-set similarity between two texts: intersection of
/// lowercase word sets over their union, 0 when the union is empty.
pub fn jaccard(a: &str, b: &str) -> f32 {
    let words_a: HashSet<String> = a.split_whitespace().map(|w| w.to_lowercase()).collect();
    let words_b: HashSet<String> = b.split_whitespace().map(|w| w.to_lowercase()).collect();
    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    words_a.intersection(&words_b).count() as f32 / union as f32
}

/// Accumulates candidate headings into the final outline.
///
/// Keeps one "seen normalized text" set for the whole document; a text
/// that already appeared is dropped, so no two entries in one outline
/// share identical normalized text.
#[derive(Debug, Default)]
pub struct OutlineAssembler {
    entries: Vec<OutlineEntry>,
    seen: HashSet<String>,
}

/// Similarity above which the leading entry is treated as a duplicate of
/// the title and rewritten to match it exactly.
const TITLE_MERGE_THRESHOLD: f32 = 0.7;

impl OutlineAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading unless its normalized text was already seen.
    /// Returns whether the entry was added.
    pub fn push(&mut self, level: HeadingLevel, text: &str, page: u32) -> bool {
        if text.is_empty() || self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string());
        self.entries.push(OutlineEntry::new(level, text, page));
        true
    }

    /// Number of entries accumulated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish assembly: collapse a leading near-duplicate of the title,
    /// and synthesize the single-entry fallback when nothing was found.
    pub fn finish(mut self, title: &str) -> DocumentResult {
        if let Some(first) = self.entries.first_mut() {
            if jaccard(title, &first.text) > TITLE_MERGE_THRESHOLD {
                first.text = title.to_string();
            }
        }
        if self.entries.is_empty() {
            return DocumentResult::fallback(title);
        }
        DocumentResult::new(title, self.entries)
    }
}
