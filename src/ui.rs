// Caller-facing collaborators: confirmation prompts and notices

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Yes/no gate consulted before destructive bulk operations
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// One-way notice surfacing rejected input to the user
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// Interactive y/N prompt on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => {
                let answer = line.trim();
                answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
            }
            Err(_) => false,
        }
    }
}

/// Always-affirmative gate for non-interactive runs
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Notice printed to stderr
#[derive(Debug, Default)]
pub struct TerminalNotice;

impl Notify for TerminalNotice {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}

/// Strip control characters from user text before terminal rendering
///
/// Task text is arbitrary user input; embedded escape sequences must not reach
/// the terminal. Tabs are kept.
pub fn sanitize_text(text: &str) -> String {
    text.chars().filter(|c| !c.is_control() || *c == '\t').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_text("safe \x1b[31mred\x1b[0m text"), "safe [31mred[0m text");
    }

    #[test]
    fn test_sanitize_strips_newlines_keeps_tabs() {
        assert_eq!(sanitize_text("a\nb\r\tc"), "ab\tc");
    }

    #[test]
    fn test_sanitize_passes_plain_text_through() {
        assert_eq!(sanitize_text("Buy milk (2%)"), "Buy milk (2%)");
        assert_eq!(sanitize_text("café ☕"), "café ☕");
    }

    #[test]
    fn test_assume_yes_always_confirms() {
        assert!(AssumeYes.confirm("delete everything?"));
    }
}
