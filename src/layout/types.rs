use crate::layout::estimate::LayoutMetrics;

/// Editable content of one card deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentData {
    pub title: String,
    /// Shown as date / volume line
    pub subtitle: String,
    /// Shown as author / tag badge
    pub tag: String,
    pub body: String,
}

/// Parameters of a single pagination run.
///
/// `body_font_size` must be positive; callers clamp it to the UI range
/// (see `constants::MIN_BODY_FONT_SIZE`).
#[derive(Debug, Clone, PartialEq)]
pub struct PageBreakConfig {
    pub body_font_size: f64,
    /// Only used by the cover card, never by the text paginator.
    pub title_font_size: Option<f64>,
    pub metrics: LayoutMetrics,
}

impl PageBreakConfig {
    pub fn new(body_font_size: f64) -> Self {
        Self {
            body_font_size,
            title_font_size: None,
            metrics: LayoutMetrics::default(),
        }
    }

    pub fn with_title_font_size(
        mut self,
        size: f64,
    ) -> Self {
        self.title_font_size = Some(size);
        self
    }

    pub fn with_metrics(
        mut self,
        metrics: LayoutMetrics,
    ) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn chars_per_line(&self) -> usize {
        self.metrics.chars_per_line(self.body_font_size)
    }

    pub fn lines_per_page(&self) -> usize {
        self.metrics.lines_per_page(self.body_font_size)
    }
}
