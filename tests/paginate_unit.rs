mod common;
use card_pager::{CardDeck, LayoutMetrics, PageBreakConfig, paginate};
use common::{numbered_lines, sample_content};

fn cfg(size: f64) -> PageBreakConfig {
    PageBreakConfig::new(size)
}

#[test]
fn break_marker_splits_into_two_pages() {
    let pages = paginate("a\n---\nb", &cfg(16.0));
    assert_eq!(pages, vec!["a", "b"]);
    assert!(pages.iter().all(|p| !p.contains("---")));
}

#[test]
fn redundant_breaks_collapse() {
    assert_eq!(paginate("---\n---\na", &cfg(16.0)), vec!["a"]);
}

#[test]
fn empty_input_yields_single_empty_page() {
    assert_eq!(paginate("", &cfg(16.0)), vec![""]);
}

#[test]
fn larger_font_needs_more_pages() {
    let body = numbered_lines(60);
    let small = paginate(&body, &cfg(12.0)).len();
    let large = paginate(&body, &cfg(24.0)).len();
    // 25 lines per page at 12px, 12 at 24px
    assert_eq!(small, 3);
    assert_eq!(large, 5);
}

#[test]
fn oversize_line_sits_alone() {
    let long = "字".repeat(44 * 30);
    let body = format!("before\n{long}\nafter");
    let pages = paginate(&body, &cfg(12.0));
    assert_eq!(pages, vec!["before".to_string(), long, "after".to_string()]);
}

#[test]
fn heading_shifts_the_split_point() {
    // 24 filler lines leave one free line at 12px (capacity 25)
    let filler = numbered_lines(24);
    let as_text = paginate(&format!("{filler}\n#  Heading"), &cfg(12.0));
    let as_heading = paginate(&format!("{filler}\n## Heading"), &cfg(12.0));
    assert_eq!(as_text.len(), 1);
    assert_eq!(as_heading.len(), 2);
    assert_eq!(as_heading[1], "## Heading");
}

#[test]
fn recalibrated_metrics_change_capacity() {
    let metrics = LayoutMetrics {
        page_height_px: 48.0,
        ..LayoutMetrics::default()
    };
    // 48 / (16 * 1.5) = 2 lines per page
    let config = cfg(16.0).with_metrics(metrics);
    assert_eq!(paginate("a\nb\nc", &config), vec!["a\nb", "c"]);
}

#[test]
fn deck_prepends_cover_outside_pagination() {
    let deck = CardDeck::build(sample_content("a\n---\nb"), cfg(16.0));
    assert_eq!(deck.pages(), paginate("a\n---\nb", &cfg(16.0)).as_slice());
    assert_eq!(deck.card_count(), 3);
    assert!(deck.card(0).unwrap().is_cover());
}
