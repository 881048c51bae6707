//! LED indicator stub.
//!
//! Independent of [`crate::basic`]. The automation target this grouping was
//! named for never materialized, so the indicator reports status on the
//! console and performs no hardware I/O.

use crate::output::{self, Console, OutputError};
use std::io::Write;

/// Status line reported by [`on`].
pub const ON_MESSAGE: &str = "LED is ON";

/// Print the on-indicator status line to stdout.
pub fn on() {
    output::println(format_args!("{ON_MESSAGE}"));
}

/// Write the on-indicator status line to a console.
///
/// # Errors
///
/// Returns [`OutputError`] if the console's sink rejects the write.
pub fn write_on<W: Write>(console: &mut Console<W>) -> Result<(), OutputError> {
    console.line(format_args!("{ON_MESSAGE}"))
}
