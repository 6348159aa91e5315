// Visual-line estimation: a capacity heuristic, not real text measurement
use crate::constants::{
    CHAR_WIDTH_FACTOR, CONTAINER_WIDTH_PX, HEADING_VISUAL_LINES, LINE_HEIGHT_FACTOR,
    PAGE_HEIGHT_PX,
};

const BREAK_MARKERS: [&str; 2] = ["---", "***"];
const HEADING_PREFIX: &str = "## ";

/// Classification of one `\n`-delimited input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `---` or `***` after trimming: forced page break, never rendered
    Break,
    Empty,
    /// `## ` prefixed line, fixed height regardless of length
    Heading,
    Text,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if BREAK_MARKERS.contains(&trimmed) {
            LineKind::Break
        } else if line.is_empty() {
            LineKind::Empty
        } else if line.starts_with(HEADING_PREFIX) {
            LineKind::Heading
        } else {
            LineKind::Text
        }
    }
}

/// Pixel constants of the card body box.
///
/// Everything the paginator knows about geometry lives here, so the
/// heuristic can be recalibrated without touching the algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub container_width_px: f64,
    /// Average glyph advance as a fraction of the font size
    pub char_width_factor: f64,
    pub page_height_px: f64,
    pub line_height_factor: f64,
    pub heading_visual_lines: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            container_width_px: CONTAINER_WIDTH_PX,
            char_width_factor: CHAR_WIDTH_FACTOR,
            page_height_px: PAGE_HEIGHT_PX,
            line_height_factor: LINE_HEIGHT_FACTOR,
            heading_visual_lines: HEADING_VISUAL_LINES,
        }
    }
}

impl LayoutMetrics {
    /// Estimated glyphs per rendered line, never below 1.
    pub fn chars_per_line(
        &self,
        font_size: f64,
    ) -> usize {
        floor_at_one(self.container_width_px / (font_size * self.char_width_factor))
    }

    /// Rendered lines that fit in one card body, never below 1.
    pub fn lines_per_page(
        &self,
        font_size: f64,
    ) -> usize {
        floor_at_one(self.page_height_px / (font_size * self.line_height_factor))
    }

    /// Rendered lines one input line is expected to occupy.
    ///
    /// Break markers cost nothing; the paginator consumes them before
    /// asking for a cost.
    pub fn visual_lines(
        &self,
        line: &str,
        font_size: f64,
    ) -> usize {
        self.visual_lines_for(LineKind::classify(line), line, self.chars_per_line(font_size))
    }

    pub(crate) fn visual_lines_for(
        &self,
        kind: LineKind,
        line: &str,
        chars_per_line: usize,
    ) -> usize {
        match kind {
            LineKind::Break => 0,
            LineKind::Empty => 1,
            LineKind::Heading => self.heading_visual_lines,
            LineKind::Text => line.chars().count().div_ceil(chars_per_line).max(1),
        }
    }
}

// NaN and negative ratios cast to 0, infinity saturates
fn floor_at_one(ratio: f64) -> usize {
    (ratio.floor() as usize).max(1)
}
