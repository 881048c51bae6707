//! General-purpose console printers.
//!
//! Every operation is stateless: it writes one line and retains nothing, so
//! repeated calls produce independent identical lines. Each printer comes in
//! two forms, an infallible stdout function and a fallible `write_*` variant
//! over a [`Console`] for callers that need to pick the sink or observe
//! write failures.

use crate::output::{self, Console, OutputError};
use std::io::Write;

/// The fixed greeting line.
pub const GREETING: &str = "Hi Akhila";

/// Print the fixed greeting to stdout.
pub fn show_greeting() {
    output::println(format_args!("{GREETING}"));
}

/// Print arbitrary text to stdout, unmodified.
///
/// No length or encoding constraint is enforced; the message is emitted
/// verbatim followed by a line terminator.
pub fn show_text(message: &str) {
    output::println(format_args!("{message}"));
}

/// Print a numeric value to stdout using its default rendering.
///
/// Accepts every representable `f64`, including the infinities and NaN.
pub fn show_number(value: f64) {
    output::println(format_args!("{value}"));
}

/// Write the fixed greeting to a console.
///
/// # Errors
///
/// Returns [`OutputError`] if the console's sink rejects the write.
pub fn write_greeting<W: Write>(console: &mut Console<W>) -> Result<(), OutputError> {
    console.line(format_args!("{GREETING}"))
}

/// Write arbitrary text to a console, unmodified.
///
/// # Errors
///
/// Returns [`OutputError`] if the console's sink rejects the write.
pub fn write_text<W: Write>(console: &mut Console<W>, message: &str) -> Result<(), OutputError> {
    console.line(format_args!("{message}"))
}

/// Write a numeric value to a console using its default rendering.
///
/// # Errors
///
/// Returns [`OutputError`] if the console's sink rejects the write.
pub fn write_number<W: Write>(console: &mut Console<W>, value: f64) -> Result<(), OutputError> {
    console.line(format_args!("{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(run: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
        let mut console = Console::new(Vec::new());
        run(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_greeting_is_exact() {
        let out = captured(|c| write_greeting(c).unwrap());
        assert_eq!(out, "Hi Akhila\n");
    }

    #[test]
    fn test_text_is_verbatim() {
        let out = captured(|c| write_text(c, "hello").unwrap());
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_text_empty_line() {
        let out = captured(|c| write_text(c, "").unwrap());
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_text_non_ascii() {
        let out = captured(|c| write_text(c, "héllo wörld ✓").unwrap());
        assert_eq!(out, "héllo wörld ✓\n");
    }

    #[test]
    fn test_text_preserves_interior_whitespace() {
        let out = captured(|c| write_text(c, "  spaced\tout  ").unwrap());
        assert_eq!(out, "  spaced\tout  \n");
    }

    #[test]
    fn test_number_default_rendering() {
        let out = captured(|c| write_number(c, 3.14).unwrap());
        assert_eq!(out, "3.14\n");
    }

    #[test]
    fn test_number_integral_value() {
        let out = captured(|c| write_number(c, 42.0).unwrap());
        assert_eq!(out, "42\n");
    }

    #[test]
    fn test_number_special_values() {
        let out = captured(|c| {
            write_number(c, f64::INFINITY).unwrap();
            write_number(c, f64::NEG_INFINITY).unwrap();
            write_number(c, f64::NAN).unwrap();
        });
        assert_eq!(out, "inf\n-inf\nNaN\n");
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let out = captured(|c| {
            write_greeting(c).unwrap();
            write_greeting(c).unwrap();
        });
        assert_eq!(out, "Hi Akhila\nHi Akhila\n");
    }
}
