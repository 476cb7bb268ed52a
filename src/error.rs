//! Error types for address and prefix parsing.

use thiserror::Error;

/// Validation failure while reading an address or CIDR prefix.
///
/// Every variant aborts the calculation; there are no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong segment count, illegal character or octet outside 0-255.
    #[error("Illegal address format: {0}")]
    InvalidAddressFormat(String),
    /// Prefix parsed as a number but is not in 0..=32.
    #[error("CIDR prefix out of bounds (0-32): {0}")]
    CidrOutOfRange(i64),
    /// Prefix segment present but not a number.
    #[error("CIDR prefix must be a number: '{0}'")]
    CidrNotNumeric(String),
}

/// Invalid value in the environment or `.env`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color choice '{0}', expected auto, always or never")]
    InvalidColor(String),
}
