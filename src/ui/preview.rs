use std::{
    panic::{self, PanicHookInfo},
    sync::Arc,
};

use crate::deck::CardDeck;
use crate::ui::{tui_events, tui_render, tui_state};
use anyhow::Result;
use crossterm::{
    event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Panic hook that restores the terminal first; the previous hook comes
/// back when this guard drops.
struct HookGuard {
    previous: Arc<PanicHook>,
}

impl HookGuard {
    fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        // hooks cannot be swapped while unwinding
        if std::thread::panicking() {
            return;
        }
        drop(panic::take_hook());
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

/// Browse the cover and content cards until the user quits.
pub fn preview_deck_tui(deck: &CardDeck) -> Result<()> {
    let _hook = HookGuard::install();

    if std::env::var_os("CARD_PAGER_TEST_AUTOQUIT").is_some() {
        return Ok(());
    }

    // Initialize UI state
    let mut state = tui_state::UiState::new(deck);

    // Setup terminal; raw mode is undone if any later step fails
    enable_raw_mode()?;
    let mut terminal = or_restore(
        || {
            execute!(std::io::stdout(), EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
        },
        || {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    // Main event loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| tui_render::render(f, &state)) {
            break Err(e.into());
        }
        let evt = match event::read() {
            Ok(evt) => evt,
            Err(e) => break Err(e.into()),
        };
        if tui_events::handle_event(&mut state, evt) == Some(tui_events::UiMsg::Quit) {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

/// Runs `step`; on failure runs `restore` before handing the error back.
fn or_restore<T>(
    step: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    step().inspect_err(|_| restore())
}
