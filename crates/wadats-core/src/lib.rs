//! # wadats-core
//!
//! **Wadats — what's that timestamp?** A timestamp recognition and
//! conversion engine: given an arbitrary short text string, decide which
//! timestamp representation (if any) it encodes, and produce an ordered list
//! of equivalent representations in other common formats.
//!
//! Classification uses a strict-priority heuristic cascade rather than a
//! format tag: numeric magnitude first (unix seconds / milliseconds /
//! microseconds / nanoseconds, split at the "past 2001" thresholds), then
//! ISO 8601, then a fixed list of human-readable date grammars.
//!
//! ## Quick start
//!
//! ```rust
//! use wadats_core::{classify, convert, FormatConfig, SourceVariant};
//!
//! let results = convert("1700000000");
//! assert_eq!(results[0].label, "Milliseconds");
//! assert_eq!(results[0].value, "1700000000000");
//! assert_eq!(results[2].label, "ISO 8601");
//! assert_eq!(results[2].value, "2023-11-14T22:13:20.000Z");
//!
//! assert_eq!(
//!     classify("2023-11-14T22:13:20Z", &FormatConfig::new()),
//!     SourceVariant::Iso8601,
//! );
//!
//! // Not a timestamp: empty result list, never an error.
//! assert!(convert("hello").is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`detect`] — input classification cascade
//! - [`convert`](mod@convert) — per-variant conversion dispatch
//! - [`format`] — calendar/relative formatting and the shared [`FormatConfig`]
//! - [`instant`] — the opaque point-in-time type
//! - [`types`] — [`SourceVariant`] and [`ConversionResult`]
//! - [`error`] — configuration error types

pub mod convert;
pub mod detect;
pub mod error;
pub mod format;
pub mod instant;
pub mod types;

pub use convert::{convert, convert_at, convert_with, dispatch};
pub use detect::classify;
pub use error::ConvertError;
pub use format::{default_config, format_relative, FormatConfig};
pub use instant::Instant;
pub use types::{ConversionResult, SourceVariant};
