//! Page and fragment types produced by layout providers.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in page coordinates.
///
/// Coordinates follow the usual layout convention: the origin is the
/// bottom-left corner of the page, so `y1` is the top edge of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Bottom edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Kind tag for a fragment, supplied by the layout-provider adapter.
///
/// The core never inspects provider-specific types; it only matches on
/// this tag. `Line` and `Rect` are the graphic primitives counted by the
/// page classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// A positioned run of text
    Text,
    /// A stroked line
    Line,
    /// A filled or stroked rectangle
    Rect,
}

/// One positioned unit on a page: a run of text or a graphic primitive.
///
/// Fragments are immutable once read from the layout provider. Text
/// fragments carry the raw (uncleaned) text; the normalizer produces the
/// cleaned form consumed by the classifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// Fragment kind tag
    pub kind: FragmentKind,

    /// Raw text content (empty for graphic primitives)
    #[serde(default)]
    pub text: String,

    /// Bounding box in page coordinates
    pub bbox: BoundingBox,

    /// Average font size in points (0.0 for graphic primitives)
    #[serde(default)]
    pub font_size: f32,

    /// Whether the dominant font appears bold
    #[serde(default)]
    pub bold: bool,

    /// 1-based page number this fragment belongs to
    pub page: u32,
}

impl TextFragment {
    /// Create a text fragment.
    pub fn text(
        text: impl Into<String>,
        bbox: BoundingBox,
        font_size: f32,
        bold: bool,
        page: u32,
    ) -> Self {
        Self {
            kind: FragmentKind::Text,
            text: text.into(),
            bbox,
            font_size,
            bold,
            page,
        }
    }

    /// Create a graphic-primitive fragment.
    pub fn graphic(kind: FragmentKind, bbox: BoundingBox, page: u32) -> Self {
        Self {
            kind,
            text: String::new(),
            bbox,
            font_size: 0.0,
            bold: false,
            page,
        }
    }

    /// Whether this fragment carries text.
    pub fn is_text(&self) -> bool {
        self.kind == FragmentKind::Text
    }

    /// Whether this fragment is a graphic primitive (line or rectangle).
    pub fn is_graphic(&self) -> bool {
        matches!(self.kind, FragmentKind::Line | FragmentKind::Rect)
    }

    /// Whether the fragment's horizontal center lies within `tolerance`
    /// units of the page's horizontal center.
    pub fn is_centered(&self, page_width: f32, tolerance: f32) -> bool {
        (self.bbox.center_x() - page_width / 2.0).abs() < tolerance
    }
}

/// Coarse page label assigned once by the page classifier.
///
/// Extraction is gated on this label: `Card` and `Tabular` pages
/// contribute no outline entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageClass {
    /// Regular content page
    Normal,
    /// Invitation/flyer layout (sparse, centered, keyword-bearing)
    Card,
    /// Dense table layout (many graphics, many short cells)
    Tabular,
}

/// A single page: ordered fragments plus page geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Fragments on the page, in provider order
    pub fragments: Vec<TextFragment>,

    /// Classification label, assigned once by the page classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<PageClass>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            fragments: Vec::new(),
            classification: None,
        }
    }

    /// Add a fragment to the page.
    pub fn add_fragment(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Iterate over text fragments only.
    pub fn text_fragments(&self) -> impl Iterator<Item = &TextFragment> {
        self.fragments.iter().filter(|f| f.is_text())
    }

    /// Count of graphic primitives (lines and rectangles) on the page.
    pub fn graphic_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_graphic()).count()
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Sort fragment indices into reading order: top-to-bottom, then
/// left-to-right (decreasing top coordinate, then increasing left).
pub fn reading_order(fragments: &[TextFragment]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fragments.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = &fragments[a].bbox;
        let fb = &fragments[b].bbox;
        fb.y1
            .partial_cmp(&fa.y1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                fa.x0
                    .partial_cmp(&fb.x0)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag_at(y1: f32, x0: f32) -> TextFragment {
        TextFragment::text("t", BoundingBox::new(x0, y1 - 10.0, x0 + 50.0, y1), 10.0, false, 1)
    }

    #[test]
    fn test_bbox_center() {
        let bbox = BoundingBox::new(100.0, 700.0, 200.0, 720.0);
        assert_eq!(bbox.center_x(), 150.0);
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 20.0);
    }

    #[test]
    fn test_centered() {
        let frag = TextFragment::text(
            "Title",
            BoundingBox::new(250.0, 700.0, 350.0, 720.0),
            14.0,
            false,
            1,
        );
        // Page width 612: center 306, fragment center 300
        assert!(frag.is_centered(612.0, 20.0));
        assert!(!frag.is_centered(612.0, 5.0));
    }

    #[test]
    fn test_graphic_count() {
        let mut page = Page::new(1, 612.0, 792.0);
        page.add_fragment(frag_at(700.0, 50.0));
        page.add_fragment(TextFragment::graphic(
            FragmentKind::Line,
            BoundingBox::new(0.0, 0.0, 612.0, 1.0),
            1,
        ));
        page.add_fragment(TextFragment::graphic(
            FragmentKind::Rect,
            BoundingBox::new(10.0, 10.0, 20.0, 20.0),
            1,
        ));
        assert_eq!(page.graphic_count(), 2);
        assert_eq!(page.text_fragments().count(), 1);
    }

    #[test]
    fn test_reading_order() {
        // Two fragments on the same line plus one below
        let frags = vec![frag_at(700.0, 300.0), frag_at(650.0, 50.0), frag_at(700.0, 50.0)];
        let order = reading_order(&frags);
        assert_eq!(order, vec![2, 0, 1]);
    }
}
