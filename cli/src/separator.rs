//! Horizontal rule drawn under the interactive banner.

use crate::colors::{DIM, RESET};
use crossterm::terminal;

/// Width assumed when the terminal size cannot be queried.
const FALLBACK_WIDTH: u16 = 80;

/// Widest rule the banner will draw.
const MAX_WIDTH: u16 = 60;

/// Generate the dimmed rule printed beneath the banner.
///
/// # Returns
///
/// A rule sized to the terminal width, capped at [`MAX_WIDTH`] columns so it
/// reads as part of the banner rather than a full-screen divider.
#[must_use]
pub fn separator() -> String {
    let (width, _) = terminal::size().unwrap_or((FALLBACK_WIDTH, 24));
    let width = width.min(MAX_WIDTH);

    format!("{DIM}{}{RESET}\n", "─".repeat(width as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_dimmed() {
        let sep = separator();
        assert!(sep.starts_with("\x1b[2m"));
        assert!(sep.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_separator_width_is_capped() {
        let rule_chars = separator().chars().filter(|c| *c == '─').count();
        assert!(rule_chars > 0);
        assert!(rule_chars <= MAX_WIDTH as usize);
    }
}
