use crate::deck::CardDeck;
use crate::io::export::{DirectorySink, ExportReport, TextRasterizer, export_deck};
use crate::layout::{ContentData, PageBreakConfig};
use crate::output;
use anyhow::{Result, anyhow};
use chrono::Utc;
use std::fmt::Write;
use std::path::Path;
use tracing::warn;

/// Pipeline from raw content to printable / exportable cards.
#[derive(Default)]
pub struct Pipeline {
    deck: Option<CardDeck>,
    xml_output: Option<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paginate the body and build the cover + content cards.
    pub fn build_deck(
        &mut self,
        content: ContentData,
        config: PageBreakConfig,
    ) {
        let deck = CardDeck::build(content, config);
        let overflow = deck.stats().iter().filter(|s| s.overflow).count();
        if overflow > 0 {
            warn!(
                "{overflow} page(s) hold a single line longer than one card; it will be clipped when rendered"
            );
        }
        self.deck = Some(deck);
        self.xml_output = None;
    }

    pub fn deck(&self) -> Result<&CardDeck> {
        self.deck
            .as_ref()
            .ok_or_else(|| anyhow!("deck has not been built"))
    }

    pub fn xml_output(&self) -> Option<&str> {
        self.xml_output.as_deref()
    }

    /// Full document, or one page when `page` is set.
    pub fn build_xml(
        &mut self,
        prefix: &str,
        escape_xml: bool,
        page: Option<usize>,
    ) -> Result<()> {
        let deck = self.deck()?;
        let xml = match page {
            Some(idx) => output::format_page_snippet(deck, idx, prefix, escape_xml)?,
            None => output::build_deck_xml(deck, prefix, escape_xml, Utc::now()),
        };
        self.xml_output = Some(xml);
        Ok(())
    }

    /// Write one text preview per card into `dir`.
    pub fn export_to_dir(
        &self,
        dir: &Path,
        prefix: &str,
    ) -> Result<ExportReport> {
        let deck = self.deck()?;
        let mut sink = DirectorySink::create(dir)?;
        let mut rasterizer = TextRasterizer {
            width: 40,
            chars_per_line: deck.config().chars_per_line(),
        };
        export_deck(deck, prefix, &mut rasterizer, &mut sink)
    }

    /// One line per page: visual lines used out of capacity.
    pub fn stats_report(&self) -> Result<String> {
        let deck = self.deck()?;
        let capacity = deck.config().lines_per_page();
        let mut s = String::new();
        writeln!(
            &mut s,
            "{} pages, {} chars/line, {} lines/page",
            deck.total_pages(),
            deck.config().chars_per_line(),
            capacity
        )?;
        for (i, st) in deck.stats().iter().enumerate() {
            let flag = if st.overflow { " (overflow)" } else { "" };
            writeln!(
                &mut s,
                "  page {}: {}/{} lines, {} raw{}",
                i + 1,
                st.visual_lines,
                capacity,
                st.raw_lines,
                flag
            )?;
        }
        Ok(s)
    }
}
