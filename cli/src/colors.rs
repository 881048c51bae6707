//! Terminal attributes used by the interactive banner.

use crossterm::style::Attribute;

/// Reset all formatting
pub const RESET: Attribute = Attribute::Reset;
/// Bold text
pub const BOLD: Attribute = Attribute::Bold;
/// Dim text
pub const DIM: Attribute = Attribute::Dim;
