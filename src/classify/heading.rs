//! Heading validity and level classification.
//!
//! Both decisions are expressed as ordered rule tables over the cleaned
//! fragment: an explicit sequence of (predicate, outcome) pairs reading
//! their thresholds from [`HeuristicConfig`]. First match wins, and the
//! same fragment always yields the same answer.

use super::config::HeuristicConfig;
use super::normalize::CleanFragment;
use crate::model::HeadingLevel;

/// Whether the text has at least one letter and every letter is
/// uppercase.
fn is_uppercase(text: &str) -> bool {
    let mut has_letter = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        has_letter = true;
    }
    has_letter
}

/// Whether `text` starts with `word` followed by a word boundary,
/// case-insensitively. `word` is expected in lowercase.
fn starts_with_word(text: &str, word: &str) -> bool {
    let lower = text.to_lowercase();
    match lower.strip_prefix(word) {
        Some(rest) => rest.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    }
}

/// An accept rule: a named predicate over the cleaned fragment.
pub struct AcceptRule {
    /// Rule name, for diagnostics
    pub name: &'static str,
    /// Predicate
    pub applies: fn(&CleanFragment, &HeuristicConfig) -> bool,
}

/// Ordered acceptance rules for heading validity. A fragment that clears
/// the reject filters is a heading if ANY of these match.
pub const ACCEPT_RULES: &[AcceptRule] = &[
    AcceptRule {
        name: "uppercase",
        applies: |f, c| is_uppercase(&f.text) && f.words <= c.max_upper_words,
    },
    AcceptRule {
        name: "bold",
        applies: |f, c| f.bold && f.font_size > c.bold_min_size,
    },
    AcceptRule {
        name: "centered",
        applies: |f, c| f.centered(c) && f.font_size > c.centered_min_size,
    },
    AcceptRule {
        name: "numbering",
        applies: |f, c| c.patterns.numbering.is_match(&f.text),
    },
    AcceptRule {
        name: "structural-keyword",
        applies: |f, c| {
            c.structural_keywords
                .iter()
                .any(|k| starts_with_word(&f.text, k))
        },
    },
];

/// Multi-signal predicate deciding whether a cleaned fragment is
/// heading-like. Pure: no side effects, no state.
#[derive(Debug)]
pub struct HeadingValidator<'a> {
    config: &'a HeuristicConfig,
}

impl<'a> HeadingValidator<'a> {
    /// Create a validator over the given configuration.
    pub fn new(config: &'a HeuristicConfig) -> Self {
        Self { config }
    }

    /// Whether the fragment should be considered a heading.
    pub fn is_heading(&self, fragment: &CleanFragment) -> bool {
        if self.is_rejected(&fragment.text, fragment.words) {
            return false;
        }
        ACCEPT_RULES
            .iter()
            .any(|rule| (rule.applies)(fragment, self.config))
    }

    /// Immediate-reject filters.
    fn is_rejected(&self, text: &str, words: usize) -> bool {
        let c = self.config;
        if text.chars().count() < c.min_heading_len {
            return true;
        }
        if words > c.max_heading_words {
            return true;
        }
        // Punctuation/dash/bullet-only runs carry no heading text
        if !text.chars().any(|ch| ch.is_alphanumeric()) {
            return true;
        }
        if c.patterns.repeated_numbers.is_match(text) {
            return true;
        }
        if c.patterns.long_digits.is_match(text) {
            return true;
        }
        let lower = text.to_lowercase();
        c.blacklist.iter().any(|b| lower.contains(b.as_str()))
    }

    /// Reduced validity check for OCR-recovered lines, where no font,
    /// bold, or centering signal exists.
    pub fn is_ocr_heading(&self, text: &str) -> bool {
        let c = self.config;
        if text.chars().count() < c.ocr_min_len {
            return false;
        }
        let words = text.split_whitespace().count();
        if words > c.max_heading_words {
            return false;
        }
        // Punctuation/digit-only runs are noise on this path too
        if !text.chars().any(|ch| ch.is_alphabetic()) {
            return false;
        }
        let lower = text.to_lowercase();
        !c.blacklist.iter().any(|b| lower.contains(b.as_str()))
    }
}

/// A level rule: a named predicate paired with its outcome.
pub struct LevelRule {
    /// Rule name, for diagnostics
    pub name: &'static str,
    /// Assigned level when the predicate matches
    pub level: HeadingLevel,
    /// Predicate
    pub matches: fn(&CleanFragment, &HeuristicConfig) -> bool,
}

/// Ordered level-assignment rules. The final rule is a catch-all, so
/// every validated fragment gets a level.
pub const LEVEL_RULES: &[LevelRule] = &[
    LevelRule {
        name: "h1-large-bold",
        level: HeadingLevel::H1,
        matches: |f, c| f.font_size >= c.h1_min_size && f.bold,
    },
    LevelRule {
        name: "h1-uppercase",
        level: HeadingLevel::H1,
        matches: |f, _| is_uppercase(&f.text),
    },
    LevelRule {
        name: "h1-keyword",
        level: HeadingLevel::H1,
        matches: |f, c| c.h1_keywords.iter().any(|k| starts_with_word(&f.text, k)),
    },
    LevelRule {
        name: "h2-numbering",
        level: HeadingLevel::H2,
        matches: |f, c| c.patterns.two_level.is_match(&f.text),
    },
    LevelRule {
        name: "h2-size-or-bold",
        level: HeadingLevel::H2,
        matches: |f, c| f.font_size >= c.h2_min_size || f.bold,
    },
    LevelRule {
        name: "h3-colon",
        level: HeadingLevel::H3,
        matches: |f, _| f.text.ends_with(':'),
    },
    LevelRule {
        name: "h3-numbering",
        level: HeadingLevel::H3,
        matches: |f, c| c.patterns.three_level.is_match(&f.text),
    },
    LevelRule {
        name: "h3-default",
        level: HeadingLevel::H3,
        matches: |_, _| true,
    },
];

/// Maps a validated fragment to H1/H2/H3. Deterministic: first matching
/// rule in [`LEVEL_RULES`] wins.
pub fn classify_level(fragment: &CleanFragment, config: &HeuristicConfig) -> HeadingLevel {
    LEVEL_RULES
        .iter()
        .find(|rule| (rule.matches)(fragment, config))
        .map(|rule| rule.level)
        .unwrap_or(HeadingLevel::H3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, font_size: f32, bold: bool, center_offset: f32) -> CleanFragment {
        CleanFragment {
            text: text.to_string(),
            words: text.split_whitespace().count(),
            font_size,
            bold,
            center_offset,
            line_breaks: 0,
            page: 1,
        }
    }

    #[test]
    fn test_reject_filters() {
        let config = HeuristicConfig::default();
        let v = HeadingValidator::new(&config);

        assert!(!v.is_heading(&frag("ab", 18.0, true, 0.0))); // too short
        assert!(!v.is_heading(&frag(
            "one two three four five six seven eight nine ten eleven twelve thirteen",
            18.0,
            true,
            0.0
        ))); // too many words
        assert!(!v.is_heading(&frag("-- -- --", 18.0, true, 0.0))); // punctuation run
        assert!(!v.is_heading(&frag("12 12 12", 18.0, true, 0.0))); // repeated numbers
        assert!(!v.is_heading(&frag("Order 1234567", 18.0, true, 0.0))); // long digit run
        assert!(!v.is_heading(&frag("Page 4 of 12", 18.0, true, 0.0))); // blacklist
        assert!(!v.is_heading(&frag("continued from previous", 18.0, true, 0.0)));
    }

    #[test]
    fn test_accept_rules() {
        let config = HeuristicConfig::default();
        let v = HeadingValidator::new(&config);

        // Uppercase, few words, small font
        assert!(v.is_heading(&frag("EXECUTIVE SUMMARY", 9.0, false, 300.0)));
        // Uppercase but too many words
        assert!(!v.is_heading(&frag("THIS IS A VERY LONG SHOUTED SENTENCE", 9.0, false, 300.0)));
        // Bold and large enough
        assert!(v.is_heading(&frag("Background and scope", 12.0, true, 300.0)));
        // Bold but at the threshold (exclusive)
        assert!(!v.is_heading(&frag("Background and scope", 11.0, true, 300.0)));
        // Centered and large enough
        assert!(v.is_heading(&frag("Closing remarks", 13.0, false, 5.0)));
        // Numbered
        assert!(v.is_heading(&frag("1. Scope", 9.0, false, 300.0)));
        assert!(v.is_heading(&frag("2) Definitions", 9.0, false, 300.0)));
        // Structural keyword
        assert!(v.is_heading(&frag("Clause 12 remedies", 9.0, false, 300.0)));
        // Keyword must sit on a word boundary
        assert!(!v.is_heading(&frag("Partnership overview text", 9.0, false, 300.0)));
        // Nothing applies
        assert!(!v.is_heading(&frag("ordinary body text here", 9.0, false, 300.0)));
    }

    #[test]
    fn test_level_chapter_is_h1() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("Chapter 1", 10.0, false, 300.0), &config),
            HeadingLevel::H1
        );
    }

    #[test]
    fn test_level_uppercase_dominates_font_size() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("RISK FACTORS OVERVIEW", 10.0, false, 300.0), &config),
            HeadingLevel::H1
        );
    }

    #[test]
    fn test_level_two_level_numbering_is_h2() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("1.1 Introduction", 11.0, false, 300.0), &config),
            HeadingLevel::H2
        );
    }

    #[test]
    fn test_level_three_level_numbering_is_h3() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("1.1.1 Details", 11.0, false, 300.0), &config),
            HeadingLevel::H3
        );
    }

    #[test]
    fn test_level_colon_is_h3() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("Eligibility:", 10.0, false, 300.0), &config),
            HeadingLevel::H3
        );
    }

    #[test]
    fn test_level_size_and_bold() {
        let config = HeuristicConfig::default();
        assert_eq!(
            classify_level(&frag("Quarterly results", 17.0, true, 300.0), &config),
            HeadingLevel::H1
        );
        assert_eq!(
            classify_level(&frag("Quarterly results", 12.5, false, 300.0), &config),
            HeadingLevel::H2
        );
        assert_eq!(
            classify_level(&frag("Quarterly results", 10.0, true, 300.0), &config),
            HeadingLevel::H2
        );
        assert_eq!(
            classify_level(&frag("Quarterly results", 10.0, false, 300.0), &config),
            HeadingLevel::H3
        );
    }

    #[test]
    fn test_rule_table_shape() {
        // The level table must end in a catch-all so every validated
        // fragment gets a level
        assert_eq!(LEVEL_RULES.last().unwrap().name, "h3-default");
        assert_eq!(LEVEL_RULES.last().unwrap().level, HeadingLevel::H3);
        assert_eq!(ACCEPT_RULES.len(), 5);
    }

    #[test]
    fn test_ocr_reduced_check() {
        let config = HeuristicConfig::default();
        let v = HeadingValidator::new(&config);

        assert!(v.is_ocr_heading("Safety instructions"));
        assert!(!v.is_ocr_heading("Hi")); // too short
        assert!(!v.is_ocr_heading("41 22 98 17")); // digits only
        assert!(!v.is_ocr_heading("copyright 2019 acme inc")); // blacklist
        assert!(!v.is_ocr_heading(
            "this recovered line has far too many words to pass for a heading anywhere"
        ));
    }
}
