use crate::render::render_card_lines;
use crate::ui::tui_state::UiState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the TUI given the current state.
pub fn render(
    frame: &mut Frame<'_>,
    state: &UiState<'_>,
) {
    // Layout: card area, then help bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let area = chunks[0];
    let width = area.width.saturating_sub(2) as usize;
    let chars_per_line = state.deck.config().chars_per_line();
    let lines: Vec<Line<'_>> = state
        .current()
        .map(|card| render_card_lines(&card, width, chars_per_line))
        .unwrap_or_default()
        .into_iter()
        .map(Line::from)
        .collect();
    let title = format!(
        "{} ({} cards, body {}px)",
        state.label(),
        state.deck.card_count(),
        state.deck.config().body_font_size
    );
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(card, area);

    // Help bar at bottom
    let help_text = vec![
        Span::styled("←/→: Page  ", Style::default().fg(Color::Yellow)),
        Span::styled("Home/End: Jump  ", Style::default().fg(Color::Yellow)),
        Span::styled("q: Quit", Style::default().fg(Color::Yellow)),
    ];
    let help_bar =
        Paragraph::new(Line::from(help_text)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help_bar, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardDeck;
    use crate::layout::{ContentData, PageBreakConfig};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_current_card_and_label() {
        let deck = CardDeck::build(
            ContentData {
                title: "Hello".into(),
                body: "first page\n---\nsecond page".into(),
                ..Default::default()
            },
            PageBreakConfig::new(16.0),
        );
        let mut state = UiState::new(&deck);
        state.next();
        let mut terminal = Terminal::new(TestBackend::new(50, 24)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("PAGE 1/2"), "{screen}");
        assert!(screen.contains("first page"), "{screen}");
        assert!(!screen.contains("second page"), "{screen}");
    }
}
