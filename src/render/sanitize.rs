//! Result sanitization before persistence.
//!
//! The extractor upholds the output invariants itself; this collaborator
//! re-checks them at the persistence boundary so a hand-built or
//! round-tripped result can never be written in a malformed shape.

use crate::model::{DocumentResult, HeadingLevel, OutlineEntry};

/// Titles longer than this many words are implausible and replaced by
/// the filename stem.
const MAX_TITLE_WORDS: usize = 20;

/// Normalize a result in place: fix the title, drop malformed entries,
/// and substitute the single-entry fallback when nothing remains.
pub fn sanitize(result: &mut DocumentResult, stem: &str) {
    let title_words = result.title.split_whitespace().count();
    if result.title.trim().is_empty() || title_words > MAX_TITLE_WORDS {
        result.title = stem.to_string();
    }

    let before = result.outline.len();
    result
        .outline
        .retain(|entry| !entry.text.trim().is_empty() && entry.page >= 1);
    let dropped = before - result.outline.len();
    if dropped > 0 {
        log::debug!("sanitize: dropped {} malformed outline entries", dropped);
    }

    if result.outline.is_empty() {
        result
            .outline
            .push(OutlineEntry::new(HeadingLevel::H1, result.title.clone(), 1));
    }
}
