//! Console writer shared by every output primitive.
//!
//! All writes to standard output funnel through this module; the rest of the
//! workspace denies `print_stdout`.

use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// Error raised when a console write is rejected by the underlying sink.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The sink failed mid-write, e.g. stdout was closed by the consumer.
    #[error("console write failed: {0}")]
    Io(#[from] io::Error),
}

/// A line-oriented writer over an arbitrary sink.
///
/// Production code wraps [`io::Stdout`] via [`stdout`]; tests wrap a
/// `Vec<u8>` and inspect the captured bytes through [`Console::into_inner`].
#[derive(Debug)]
pub struct Console<W: Write> {
    /// The wrapped sink.
    writer: W,
}

impl<W: Write> Console<W> {
    /// Wrap a sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write formatted arguments followed by a line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the sink rejects the write.
    pub fn line(&mut self, args: fmt::Arguments<'_>) -> Result<(), OutputError> {
        self.writer.write_fmt(args)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Recover the wrapped sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Console over the process standard output.
#[must_use]
pub fn stdout() -> Console<io::Stdout> {
    Console::new(io::stdout())
}

/// Print formatted arguments to stdout.
pub fn print(args: fmt::Arguments<'_>) {
    let _ = io::stdout().write_fmt(args);
}

/// Print formatted arguments to stdout with newline.
pub fn println(args: fmt::Arguments<'_>) {
    let _ = io::stdout().write_fmt(args);
    let _ = io::stdout().write_all(b"\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that rejects every write.
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_appends_terminator() {
        let mut console = Console::new(Vec::new());
        console.line(format_args!("hello")).unwrap();
        assert_eq!(console.into_inner(), b"hello\n");
    }

    #[test]
    fn test_line_formats_arguments() {
        let mut console = Console::new(Vec::new());
        console.line(format_args!("{} + {}", 1, 2)).unwrap();
        assert_eq!(console.into_inner(), b"1 + 2\n");
    }

    #[test]
    fn test_closed_sink_reports_io_error() {
        let mut console = Console::new(Closed);
        let err = console.line(format_args!("hello")).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
