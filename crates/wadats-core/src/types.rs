//! Core types: the detected source variant and the conversion result record.

use serde::Serialize;
use std::fmt;

/// Which timestamp representation an input string was classified as.
///
/// Exactly one variant is assigned per input. [`Unrecognized`](Self::Unrecognized)
/// means no grammar matched; it carries no instant and converts to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceVariant {
    UnixSeconds,
    UnixMilliseconds,
    UnixMicroseconds,
    UnixNanoseconds,
    Iso8601,
    HumanReadableDate,
    Unrecognized,
}

impl SourceVariant {
    /// Kebab-case name, matching the `Serialize` representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnixSeconds => "unix-seconds",
            Self::UnixMilliseconds => "unix-milliseconds",
            Self::UnixMicroseconds => "unix-microseconds",
            Self::UnixNanoseconds => "unix-nanoseconds",
            Self::Iso8601 => "iso8601",
            Self::HumanReadableDate => "human-readable-date",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// True for every variant except [`Unrecognized`](Self::Unrecognized).
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for SourceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formatted alternative representation of a recognized timestamp.
///
/// Immutable once produced; a conversion call returns an ordered `Vec` of
/// these, built fresh every time. `id` is the record's position within its
/// sequence — a tracking token for consumers (e.g., "which row is selected"),
/// with no semantic bearing on the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub id: usize,
    /// Target representation name, e.g. "Milliseconds" or "ISO 8601".
    pub label: String,
    /// The formatted value in the target representation.
    pub value: String,
    /// Human-readable description of the target representation.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_are_kebab_case() {
        assert_eq!(SourceVariant::UnixSeconds.as_str(), "unix-seconds");
        assert_eq!(SourceVariant::Iso8601.to_string(), "iso8601");
        assert_eq!(
            SourceVariant::HumanReadableDate.as_str(),
            "human-readable-date"
        );
    }

    #[test]
    fn variant_serializes_like_display() {
        let json = serde_json::to_string(&SourceVariant::UnixMilliseconds).unwrap();
        assert_eq!(json, "\"unix-milliseconds\"");
    }

    #[test]
    fn only_unrecognized_is_not_recognized() {
        assert!(SourceVariant::UnixNanoseconds.is_recognized());
        assert!(SourceVariant::HumanReadableDate.is_recognized());
        assert!(!SourceVariant::Unrecognized.is_recognized());
    }
}
