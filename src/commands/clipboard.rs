//! @acp:module "Clipboard"
//! @acp:summary "Copy text to the clipboard through the terminal (OSC 52)"
//! @acp:domain cli
//! @acp:layer output
//!
//! Terminals that support OSC 52 place the payload on the system
//! clipboard. Anything else ignores the sequence, so a failed copy is
//! silent by nature.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use console::Term;

/// Escape sequence asking the terminal to set the clipboard to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}

/// Try to copy `text`; returns whether the sequence reached a terminal
pub fn copy_to_clipboard(text: &str) -> bool {
    let mut term = Term::stdout();
    if !term.is_term() {
        tracing::debug!("stdout is not a terminal, skipping clipboard copy");
        return false;
    }

    match term
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|_| term.flush())
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("clipboard copy failed: {}", e);
            false
        }
    }
}
