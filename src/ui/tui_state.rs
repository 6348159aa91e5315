use crate::deck::{Card, CardDeck};

/// Shared UI state for the card preview TUI
pub struct UiState<'a> {
    pub deck: &'a CardDeck,
    /// 0-based card position, 0 is the cover
    pub position: usize,
}

impl<'a> UiState<'a> {
    pub fn new(deck: &'a CardDeck) -> Self {
        Self { deck, position: 0 }
    }

    pub fn current(&self) -> Option<Card<'a>> {
        self.deck.card(self.position)
    }

    pub fn next(&mut self) {
        if self.position + 1 < self.deck.card_count() {
            self.position += 1;
        }
    }

    pub fn prev(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.position = 0;
    }

    pub fn last(&mut self) {
        self.position = self.deck.card_count().saturating_sub(1);
    }

    /// "COVER" or "PAGE k/N" for the title bar
    pub fn label(&self) -> String {
        if self.position == 0 {
            "COVER".to_string()
        } else {
            format!("PAGE {}/{}", self.position, self.deck.total_pages())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ContentData, PageBreakConfig};

    #[test]
    fn navigation_is_clamped() {
        let deck = CardDeck::build(
            ContentData {
                body: "a\n---\nb".into(),
                ..Default::default()
            },
            PageBreakConfig::new(16.0),
        );
        let mut state = UiState::new(&deck);
        state.prev();
        assert_eq!(state.position, 0);
        assert_eq!(state.label(), "COVER");
        state.next();
        state.next();
        state.next();
        assert_eq!(state.position, 2);
        assert_eq!(state.label(), "PAGE 2/2");
        state.first();
        assert!(state.current().is_some_and(|c| c.is_cover()));
        state.last();
        assert_eq!(state.position, 2);
    }
}
