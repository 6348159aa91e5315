// Card deck: cover card followed by one card per paginated page
use crate::layout::{ContentData, PageBreakConfig, PageStats, paginate_with_stats};

/// One fixed-size rendered unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card<'a> {
    Cover {
        title: &'a str,
        subtitle: &'a str,
        tag: &'a str,
    },
    Content {
        /// 1-based, cover excluded
        index: usize,
        /// Content pages only, cover excluded
        total: usize,
        title: &'a str,
        subtitle: &'a str,
        tag: &'a str,
        text: &'a str,
    },
}

impl Card<'_> {
    pub fn is_cover(&self) -> bool {
        matches!(self, Card::Cover { .. })
    }
}

/// Content plus its pagination, rebuilt wholesale on every edit
#[derive(Debug, Clone)]
pub struct CardDeck {
    content: ContentData,
    config: PageBreakConfig,
    pages: Vec<String>,
    stats: Vec<PageStats>,
}

impl CardDeck {
    pub fn build(
        content: ContentData,
        config: PageBreakConfig,
    ) -> Self {
        let (pages, stats): (Vec<String>, Vec<PageStats>) = paginate_with_stats(&content.body, &config)
            .into_iter()
            .unzip();
        Self {
            content,
            config,
            pages,
            stats,
        }
    }

    pub fn content(&self) -> &ContentData {
        &self.content
    }

    pub fn config(&self) -> &PageBreakConfig {
        &self.config
    }

    /// Content pages, never empty
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn stats(&self) -> &[PageStats] {
        &self.stats
    }

    /// Number of content pages (cover excluded)
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Number of cards including the cover
    pub fn card_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Card at 0-based position; position 0 is the cover.
    pub fn card(
        &self,
        position: usize,
    ) -> Option<Card<'_>> {
        let c = &self.content;
        if position == 0 {
            return Some(Card::Cover {
                title: &c.title,
                subtitle: &c.subtitle,
                tag: &c.tag,
            });
        }
        self.pages.get(position - 1).map(|text| Card::Content {
            index: position,
            total: self.pages.len(),
            title: &c.title,
            subtitle: &c.subtitle,
            tag: &c.tag,
            text: text.as_str(),
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> + '_ {
        (0..self.card_count()).filter_map(move |pos| self.card(pos))
    }

    /// Archive entry names, `<prefix>-<n>.<ext>` with `n` 1-based over all
    /// cards, cover first.
    pub fn export_names(
        &self,
        prefix: &str,
        ext: &str,
    ) -> Vec<String> {
        (1..=self.card_count())
            .map(|n| export_name(prefix, n, ext))
            .collect()
    }
}

pub fn export_name(
    prefix: &str,
    n: usize,
    ext: &str,
) -> String {
    format!("{prefix}-{n}.{ext}")
}
