//! Page-type classification.
//!
//! Invitation/flyer layouts and dense tables produce many false-positive
//! headings under font and centering heuristics. Rather than filtering
//! per fragment, the page gate suppresses extraction on such pages
//! entirely.

use super::config::HeuristicConfig;
use super::normalize::CleanFragment;
use crate::model::{Page, PageClass};

/// Labels a page `normal`, `card`, or `tabular` from aggregate text
/// volume, keyword signals, and graphic-primitive density.
#[derive(Debug)]
pub struct PageClassifier<'a> {
    config: &'a HeuristicConfig,
}

impl<'a> PageClassifier<'a> {
    /// Create a classifier over the given configuration.
    pub fn new(config: &'a HeuristicConfig) -> Self {
        Self { config }
    }

    /// Classify a page. Rules are checked in order; first match wins.
    pub fn classify(&self, page: &Page, fragments: &[CleanFragment]) -> PageClass {
        if self.is_card(fragments) {
            return PageClass::Card;
        }
        if self.is_tabular(page, fragments) {
            return PageClass::Tabular;
        }
        PageClass::Normal
    }

    fn is_card(&self, fragments: &[CleanFragment]) -> bool {
        let total_text: usize = fragments.iter().map(|f| f.text.chars().count()).sum();
        if total_text >= self.config.card_text_threshold {
            return false;
        }

        let has_keyword = fragments.iter().any(|f| {
            let lower = f.text.to_lowercase();
            self.config.card_keywords.iter().any(|k| lower.contains(k.as_str()))
        });
        let has_centered = fragments
            .iter()
            .any(|f| f.is_centered(self.config.card_center_tolerance));

        has_keyword || has_centered
    }

    fn is_tabular(&self, page: &Page, fragments: &[CleanFragment]) -> bool {
        if page.graphic_count() <= self.config.tabular_graphic_threshold {
            return false;
        }
        let short_cells = fragments
            .iter()
            .filter(|f| f.text.chars().count() < self.config.tabular_cell_max_len)
            .count();
        short_cells > self.config.tabular_cell_threshold
    }
}
