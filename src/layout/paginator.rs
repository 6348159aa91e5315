// Page builder: line-structured, capacity-bounded
use crate::layout::estimate::LineKind;
use crate::layout::types::PageBreakConfig;

/// Estimated load of one produced page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub raw_lines: usize,
    pub visual_lines: usize,
    /// A single line that alone exceeds the page capacity
    pub overflow: bool,
}

/// Splits `body` into card pages that each fit the estimated capacity.
///
/// Never fails and never returns an empty vector: blank input, or input
/// made only of break markers, yields `[""]`.
pub fn paginate(
    body: &str,
    config: &PageBreakConfig,
) -> Vec<String> {
    paginate_with_stats(body, config)
        .into_iter()
        .map(|(page, _)| page)
        .collect()
}

/// Same as [`paginate`], with the estimated load of every page.
pub fn paginate_with_stats(
    body: &str,
    config: &PageBreakConfig,
) -> Vec<(String, PageStats)> {
    let metrics = &config.metrics;
    let chars_per_line = config.chars_per_line();
    let lines_per_page = config.lines_per_page();

    let mut pages = Vec::<(String, PageStats)>::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_lines = 0usize;
    let mut raw_count = 0usize;

    // Helper to flush the current chunk if non-empty, resetting the count
    let mut push_page = |chunk: &mut Vec<&str>, lines: &mut usize| {
        if chunk.is_empty() {
            return;
        }
        let stats = PageStats {
            raw_lines: chunk.len(),
            visual_lines: *lines,
            overflow: chunk.len() == 1 && *lines > lines_per_page,
        };
        tracing::trace!(
            page = pages.len(),
            raw_lines = stats.raw_lines,
            visual_lines = stats.visual_lines,
            "flush page"
        );
        pages.push((chunk.join("\n"), stats));
        chunk.clear();
        *lines = 0;
    };

    for line in body.split('\n') {
        raw_count += 1;
        let kind = LineKind::classify(line);

        // forced break: marker is dropped, redundant markers emit nothing
        if kind == LineKind::Break {
            push_page(&mut current, &mut current_lines);
            continue;
        }

        let visual = metrics.visual_lines_for(kind, line, chars_per_line);

        // does not fit: close the page and open a new one with this line.
        // an oversize line lands alone on a fresh page, never split
        if current_lines.saturating_add(visual) > lines_per_page && !current.is_empty() {
            push_page(&mut current, &mut current_lines);
        }
        current.push(line);
        current_lines = current_lines.saturating_add(visual);
    }

    // push final page
    push_page(&mut current, &mut current_lines);

    tracing::debug!(
        raw_lines = raw_count,
        chars_per_line,
        lines_per_page,
        pages = pages.len(),
        "paginated body"
    );

    if pages.is_empty() {
        pages.push((
            String::new(),
            PageStats {
                raw_lines: 0,
                visual_lines: 0,
                overflow: false,
            },
        ));
    }
    pages
}
