//! Error types for engine configuration.
//!
//! Conversion itself never errors — "not a timestamp" is an expected outcome
//! signaled by an empty result sequence, not an error. The only fallible
//! surface is building a [`FormatConfig`](crate::FormatConfig) from
//! caller-supplied input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
