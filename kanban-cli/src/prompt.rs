//! Terminal confirmation prompts

use dialoguer::{theme::ColorfulTheme, Confirm as ConfirmPrompt};
use kanban_board::Confirm;
use std::io::{self, IsTerminal};

/// Asks on the terminal, or answers for the user when `--yes` was given.
///
/// Without a terminal to ask on, destructive actions are declined.
pub struct TerminalConfirm {
    assume_yes: bool,
    non_interactive: bool,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            non_interactive: !io::stdin().is_terminal(),
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if self.non_interactive {
            tracing::warn!(prompt = message, "no terminal to confirm on, pass --yes to proceed");
            return false;
        }

        ConfirmPrompt::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut confirm = TerminalConfirm {
            assume_yes: true,
            non_interactive: true,
        };
        assert!(confirm.confirm("Delete task?"));
    }

    #[test]
    fn test_non_interactive_declines() {
        let mut confirm = TerminalConfirm {
            assume_yes: false,
            non_interactive: true,
        };
        assert!(!confirm.confirm("Delete task?"));
    }
}
