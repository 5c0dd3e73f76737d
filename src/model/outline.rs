//! Outline result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Heading level of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// One heading record: level, normalized text, page number.
///
/// The text is always the cleaned fragment text, never raw provider
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Normalized heading text (non-empty)
    pub text: String,

    /// 1-based page number
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The extraction result for one document.
///
/// Invariants: `title` is never empty and `outline` is never empty — a
/// synthesized fallback entry is injected when extraction yields nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Document title
    pub title: String,

    /// Ordered outline entries
    pub outline: Vec<OutlineEntry>,
}

impl DocumentResult {
    /// Create a result with the given title and outline.
    pub fn new(title: impl Into<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// The minimal valid result for a document: a single H1 entry on
    /// page 1 carrying the title.
    pub fn fallback(title: impl Into<String>) -> Self {
        let title = title.into();
        let entry = OutlineEntry::new(HeadingLevel::H1, title.clone(), 1);
        Self {
            title,
            outline: vec![entry],
        }
    }
}

/// Per-run diagnostics record.
///
/// Not part of the output schema; callers that want to know whether a
/// result was degraded (and why) read this instead of parsing logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Whether the document degraded to the fallback result
    pub degraded: bool,

    /// Failure reason when degraded
    pub failure: Option<String>,

    /// Pages that went through the OCR fallback
    pub ocr_pages: Vec<u32>,

    /// When the run finished
    pub completed_at: DateTime<Utc>,
}

impl RunReport {
    /// Report for a run that completed through the normal pipeline.
    pub fn completed(ocr_pages: Vec<u32>) -> Self {
        Self {
            degraded: false,
            failure: None,
            ocr_pages,
            completed_at: Utc::now(),
        }
    }

    /// Report for a run that degraded to the fallback result.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            degraded: true,
            failure: Some(reason.into()),
            ocr_pages: Vec::new(),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serialization() {
        assert_eq!(serde_json::to_string(&HeadingLevel::H1).unwrap(), "\"H1\"");
        assert_eq!(serde_json::to_string(&HeadingLevel::H3).unwrap(), "\"H3\"");
        assert_eq!(HeadingLevel::H2.to_string(), "H2");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = OutlineEntry::new(HeadingLevel::H2, "1.1 Introduction", 4);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "H2");
        assert_eq!(json["text"], "1.1 Introduction");
        assert_eq!(json["page"], 4);
    }

    #[test]
    fn test_fallback_result() {
        let result = DocumentResult::fallback("report");
        assert_eq!(result.title, "report");
        assert_eq!(result.outline.len(), 1);
        assert_eq!(result.outline[0].level, HeadingLevel::H1);
        assert_eq!(result.outline[0].text, "report");
        assert_eq!(result.outline[0].page, 1);
    }

    #[test]
    fn test_run_report() {
        let report = RunReport::degraded("broken xref");
        assert!(report.degraded);
        assert_eq!(report.failure.as_deref(), Some("broken xref"));

        let report = RunReport::completed(vec![2, 5]);
        assert!(!report.degraded);
        assert_eq!(report.ocr_pages, vec![2, 5]);
    }
}
