use cli_clipboard::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};

/// Puts the deck on the system clipboard. A missing clipboard (headless
/// session, no display server) is reported and otherwise ignored; the
/// return value says whether the copy happened.
pub fn copy_to_clipboard(text: &str) -> bool {
    match ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(text.to_owned())) {
        Ok(()) => {
            debug!(bytes = text.len(), "copied deck to clipboard");
            true
        }
        Err(e) => {
            warn!("clipboard unavailable, output not copied: {e}");
            false
        }
    }
}
