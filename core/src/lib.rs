//! conshow core library
//!
//! Provides the console output primitives: the general-purpose printers, the
//! LED indicator stub, the writer they share, and configuration management.
//!
//! This library serves as the entry point for the whole application,
//! re-exporting all major public types and modules.

pub mod basic;
pub mod config;
pub mod indicator;
pub mod output;

pub use basic::{show_greeting, show_number, show_text};

pub use config::{AppConfig, Config, OutputConfig};

pub use output::{Console, OutputError};
