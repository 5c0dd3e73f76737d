//! Benchmarks for the classification hot path.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the validator and level classifier over
//! synthetic fragment data, plus the full per-document pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

use doctoc::error::Result;
use doctoc::{
    classify_level, BoundingBox, CleanFragment, FragmentNormalizer, HeadingValidator,
    HeuristicConfig, LayoutProvider, OutlineExtractor, Page, TextFragment,
};

fn synthetic_fragments(count: usize) -> Vec<CleanFragment> {
    let samples = [
        ("EXECUTIVE SUMMARY", 10.0, false, 300.0),
        ("1.1 Introduction", 11.0, false, 300.0),
        ("ordinary body text that no rule should ever accept", 10.0, false, 300.0),
        ("Chapter 4", 14.0, true, 300.0),
        ("Eligibility:", 10.0, false, 5.0),
        ("-- -- --", 10.0, false, 300.0),
    ];
    (0..count)
        .map(|i| {
            let (text, size, bold, offset) = samples[i % samples.len()];
            CleanFragment {
                text: text.to_string(),
                words: text.split_whitespace().count(),
                font_size: size,
                bold,
                center_offset: offset,
                line_breaks: 0,
                page: (i / 40 + 1) as u32,
            }
        })
        .collect()
}

fn synthetic_pages(page_count: usize) -> Vec<Page> {
    (1..=page_count as u32)
        .map(|number| {
            let mut page = Page::new(number, 612.0, 792.0);
            for i in 0..30 {
                let y = 760.0 - i as f32 * 24.0;
                let text = if i == 0 {
                    format!("Section {} overview", number)
                } else {
                    "plain paragraph text filling the page with enough words to look real"
                        .to_string()
                };
                page.add_fragment(TextFragment::text(
                    text,
                    BoundingBox::new(72.0, y - 12.0, 400.0, y),
                    if i == 0 { 14.0 } else { 10.0 },
                    i == 0,
                    number,
                ));
            }
            page
        })
        .collect()
}

struct BenchLayout {
    pages: Vec<Page>,
}

impl LayoutProvider for BenchLayout {
    fn pages(&self, _path: &Path) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }
}

fn bench_validator(c: &mut Criterion) {
    let config = HeuristicConfig::default();
    let validator = HeadingValidator::new(&config);
    let fragments = synthetic_fragments(600);

    c.bench_function("validate_600_fragments", |b| {
        b.iter(|| {
            let mut accepted = 0usize;
            for fragment in &fragments {
                if validator.is_heading(black_box(fragment)) {
                    accepted += 1;
                }
            }
            black_box(accepted)
        })
    });
}

fn bench_level_classifier(c: &mut Criterion) {
    let config = HeuristicConfig::default();
    let fragments = synthetic_fragments(600);

    c.bench_function("classify_600_fragments", |b| {
        b.iter(|| {
            for fragment in &fragments {
                black_box(classify_level(black_box(fragment), &config));
            }
        })
    });
}

fn bench_normalizer(c: &mut Criterion) {
    let normalizer = FragmentNormalizer::new();
    let raw = "\u{2022}  Mixed   content \u{2013} with bullets,\nbreaks\tand symbols \u{20AC}";

    c.bench_function("normalize_fragment", |b| {
        b.iter(|| black_box(normalizer.clean(black_box(raw))))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let extractor = OutlineExtractor::new(BenchLayout {
        pages: synthetic_pages(20),
    });
    let path = Path::new("bench-document.json");

    c.bench_function("extract_20_page_document", |b| {
        b.iter(|| black_box(extractor.extract(black_box(path))))
    });
}

criterion_group!(
    benches,
    bench_validator,
    bench_level_classifier,
    bench_normalizer,
    bench_full_pipeline
);
criterion_main!(benches);
