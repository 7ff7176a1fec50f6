use thiserror::Error;

use super::ELEMENT_COUNT;

/// Lookup failure: the requested element is not defined in the table.
///
/// Raised when the atomic number is outside the table range, the slot for an
/// in-range number was never populated, or the symbol is unknown. Lookup
/// misses are caller errors and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementNotDefined {
    #[error("no element defined for atomic number {0}")]
    Number(u8),

    #[error("no element defined for symbol '{0}'")]
    Symbol(String),
}

/// Errors while reading or applying an element dataset.
///
/// Malformed records are a construction-time failure; the table never skips
/// or defaults a bad record.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse element dataset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "atomic number {number} for '{symbol}' is outside the periodic table (1..={max})",
        max = ELEMENT_COUNT
    )]
    NumberOutOfRange { number: u8, symbol: String },
}
