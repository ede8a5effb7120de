//! Sine lookup table generation: evenly spaced angles over a half-open
//! range, rounded integer samples, text/C/JSON rendering, a terminal plot
//! and clipboard export.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod plot;
pub mod session;
pub mod table;
pub mod ui;
pub mod utils;

pub use error::{Result, SineError};
pub use table::{SineTable, TableParams, generate_sine_table};
