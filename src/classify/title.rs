//! Document title selection.

use std::cmp::Ordering;

use super::config::HeuristicConfig;
use super::normalize::CleanFragment;

/// Picks the document title from the first page's cleaned fragments
/// using an ordered set of fallback strategies.
#[derive(Debug)]
pub struct TitleSelector<'a> {
    config: &'a HeuristicConfig,
}

impl<'a> TitleSelector<'a> {
    /// Create a selector over the given configuration.
    pub fn new(config: &'a HeuristicConfig) -> Self {
        Self { config }
    }

    /// Select a title from the first page's fragments, given in reading
    /// order. Returns an empty string when no strategy yields a
    /// candidate; the caller substitutes the filename stem.
    pub fn select(&self, fragments: &[CleanFragment]) -> String {
        let c = self.config;
        let strategies: [&dyn Fn(&CleanFragment) -> bool; 3] = [
            &|f| {
                (c.title_primary_words.0..=c.title_primary_words.1).contains(&f.words)
                    && f.font_size > c.title_primary_min_size
                    && f.centered(c)
            },
            &|f| f.words >= c.title_min_words && f.font_size > c.title_secondary_min_size && f.bold,
            &|f| f.words >= c.title_min_words,
        ];

        for qualifies in strategies {
            let mut candidates: Vec<&CleanFragment> =
                fragments.iter().filter(|f| qualifies(f)).collect();
            if candidates.is_empty() {
                continue;
            }
            // Stable sort: reading order breaks any remaining ties
            candidates.sort_by(|a, b| self.rank(a, b));
            return candidates[0].text.clone();
        }

        String::new()
    }

    /// Tie-break between candidates at the same strategy level: larger
    /// font, then bold, then centered, then fewer internal line breaks.
    fn rank(&self, a: &CleanFragment, b: &CleanFragment) -> Ordering {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(Ordering::Equal)
            .then(b.bold.cmp(&a.bold))
            .then(b.centered(self.config).cmp(&a.centered(self.config)))
            .then(a.line_breaks.cmp(&b.line_breaks))
    }
}
