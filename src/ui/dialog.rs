//! Blocking confirm/alert dialogs.

use std::io::{BufRead, Write};
use tracing::warn;

/// Native-style modal dialogs.
pub trait Dialogs: Send + Sync {
    /// Asks a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user has to dismiss.
    fn alert(&self, message: &str);
}

/// Terminal dialogs: alerts go to stdout, confirms read `y`/`yes` from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDialogs;

impl Dialogs for ConsoleDialogs {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{message} [y/N]").and_then(|()| stdout.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut answer) {
            warn!("Could not read confirmation: {}", e);
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "c" | "có")
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }
}
