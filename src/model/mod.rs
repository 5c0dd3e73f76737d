//! Data model: fragments, pages, and outline results.

mod fragment;
mod outline;

pub use fragment::{reading_order, BoundingBox, FragmentKind, Page, PageClass, TextFragment};
pub use outline::{DocumentResult, HeadingLevel, OutlineEntry, RunReport};
