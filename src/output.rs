use crate::constants::DECK_FORMAT_VERSION;
use crate::deck::{CardDeck, export_name};
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;
use std::fmt::Write;

/// Requested content page does not exist
#[derive(Debug)]
pub struct PageOutOfRange {
    pub requested: usize,
    pub total: usize,
}

impl std::fmt::Display for PageOutOfRange {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "page {} is out of range (deck has {} content pages)",
            self.requested, self.total
        )
    }
}

impl std::error::Error for PageOutOfRange {}

pub fn maybe_escape_text(
    text: &str,
    escape: bool,
) -> Cow<'_, str> {
    if !escape || !text.contains(['<', '>', '&']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

// Attributes are always escaped, a stray quote would end the value
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(text);
    }
    let escaped = maybe_escape_text(text, true).replace('"', "&quot;");
    Cow::Owned(escaped)
}

/// Builds the whole deck: cover element, then one element per content page.
pub fn build_deck_xml(
    deck: &CardDeck,
    prefix: &str,
    escape_xml: bool,
    generated_at: DateTime<Utc>,
) -> String {
    let ts = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let content = deck.content();
    let mut xml = String::new();
    writeln!(
        &mut xml,
        "<card-deck version=\"{DECK_FORMAT_VERSION}\" total-pages=\"{}\" body-font-size=\"{}\" generated-at=\"{ts}\">",
        deck.total_pages(),
        deck.config().body_font_size,
    )
    .unwrap();
    let title_size = deck
        .config()
        .title_font_size
        .map(|size| format!(" title-size=\"{size}\""))
        .unwrap_or_default();
    writeln!(
        &mut xml,
        "  <cover file=\"{}\"{title_size} title=\"{}\" subtitle=\"{}\" tag=\"{}\"/>",
        export_name(prefix, 1, "png"),
        escape_attr(&content.title),
        escape_attr(&content.subtitle),
        escape_attr(&content.tag),
    )
    .unwrap();
    for idx in 1..=deck.total_pages() {
        xml.push_str(&page_block(deck, idx, prefix, escape_xml));
    }
    xml.push_str("</card-deck>\n");
    xml
}

/// A single content page (1-based), as printed by `--page`.
pub fn format_page_snippet(
    deck: &CardDeck,
    page: usize,
    prefix: &str,
    escape_xml: bool,
) -> anyhow::Result<String> {
    let total = deck.total_pages();
    if page == 0 || page > total {
        return Err(anyhow::anyhow!(PageOutOfRange {
            requested: page,
            total,
        }));
    }
    let mut s = page_block(deck, page, prefix, escape_xml);
    let rem = total - page;
    if rem > 0 {
        s.push_str(&format!("<more remaining=\"{rem}\"/>\n"));
    }
    Ok(s)
}

fn page_block(
    deck: &CardDeck,
    page: usize,
    prefix: &str,
    escape_xml: bool,
) -> String {
    let text = &deck.pages()[page - 1];
    let stats = &deck.stats()[page - 1];
    let overflow = if stats.overflow { " overflow=\"true\"" } else { "" };
    format!(
        "  <page index=\"{page}\" of=\"{total}\" file=\"{file}\" lines=\"{lines}\"{overflow}>\n{body}\n  </page>\n",
        total = deck.total_pages(),
        file = export_name(prefix, page + 1, "png"),
        lines = stats.visual_lines,
        body = maybe_escape_text(text, escape_xml),
    )
}
