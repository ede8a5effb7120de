use thiserror::Error;

use crate::utils::consts::{MAX_ENTRIES, VALUES_PER_LINE_MIN};

#[derive(Debug, Error)]
pub enum SineError {
    #[error("{field}: {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("entry count {0} exceeds the maximum of {max}", max = MAX_ENTRIES)]
    TooManyEntries(i64),

    #[error("amplitude {amplitude} and offset {offset} overflow a 64-bit table")]
    OutOfRange { amplitude: f64, offset: f64 },

    #[error("values per line must be at least {min}", min = VALUES_PER_LINE_MIN)]
    ZeroValuesPerLine,

    #[error("no parameter at column {0}")]
    UnknownField(usize),

    #[error("{0:?} is not a valid C identifier")]
    InvalidArrayName(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SineError>;
