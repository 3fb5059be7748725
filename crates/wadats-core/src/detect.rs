//! Input classification: decide which timestamp representation a string
//! encodes.
//!
//! The detector is a strict-priority cascade — an ordered list of heuristics
//! where the first match wins and later entries are never consulted. It
//! never errors; anything no heuristic claims is [`Unrecognized`].
//!
//! [`Unrecognized`]: SourceVariant::Unrecognized

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::format::{FormatConfig, LONG_PARSE_FORMAT, SHORT_FORMAT};
use crate::types::SourceVariant;

// Numeric magnitude thresholds: the count of each unit that corresponds to
// September 2001. A value above a threshold is already "past 2001" at that
// precision, which is what disambiguates seconds from milliseconds from
// microseconds from nanoseconds. Comparisons are strict `>`: a value exactly
// at a threshold is not claimed at that precision.
const NANOS_PAST_2001: f64 = 1e18;
const MICROS_PAST_2001: f64 = 1e15;
const MILLIS_PAST_2001: f64 = 1e12;
const SECONDS_PAST_2001: f64 = 1e9;

type Heuristic = fn(&str, &FormatConfig) -> Option<SourceVariant>;

/// The detection cascade, in priority order.
const CASCADE: [Heuristic; 3] = [numeric_magnitude, iso8601, human_readable];

/// Classify a trimmed input string as exactly one [`SourceVariant`].
///
/// The caller is responsible for trimming; empty input should be rejected
/// before classification (the engine's `convert` does both).
pub fn classify(trimmed: &str, config: &FormatConfig) -> SourceVariant {
    CASCADE
        .iter()
        .find_map(|heuristic| heuristic(trimmed, config))
        .unwrap_or(SourceVariant::Unrecognized)
}

/// Heuristic 1: the whole string parses as a base-10 float; classify by
/// magnitude. At or below one billion the rule abstains — too small to
/// disambiguate a precision confidently — and the string falls through the
/// rest of the cascade.
fn numeric_magnitude(input: &str, _config: &FormatConfig) -> Option<SourceVariant> {
    let value: f64 = input.parse().ok()?;
    if value > NANOS_PAST_2001 {
        Some(SourceVariant::UnixNanoseconds)
    } else if value > MICROS_PAST_2001 {
        Some(SourceVariant::UnixMicroseconds)
    } else if value > MILLIS_PAST_2001 {
        Some(SourceVariant::UnixMilliseconds)
    } else if value > SECONDS_PAST_2001 {
        Some(SourceVariant::UnixSeconds)
    } else {
        None
    }
}

/// Heuristic 2: ISO 8601 / RFC 3339 with an offset designator, fractional
/// seconds optional.
fn iso8601(input: &str, _config: &FormatConfig) -> Option<SourceVariant> {
    parse_iso8601(input).map(|_| SourceVariant::Iso8601)
}

/// Heuristic 3: the fixed human-readable grammar list.
fn human_readable(input: &str, config: &FormatConfig) -> Option<SourceVariant> {
    parse_human_readable(input, config).map(|_| SourceVariant::HumanReadableDate)
}

pub(crate) fn parse_iso8601(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The human-readable grammar list, in priority order. The bool marks
/// grammars that include a time of day; date-only grammars mean local
/// midnight. Month-first forms come before day-first forms, so an ambiguous
/// string like "03/04/2024" always resolves month-first — list order is the
/// only ambiguity resolution.
const HUMAN_GRAMMARS: [(&str, bool); 12] = [
    (LONG_PARSE_FORMAT, true),
    (SHORT_FORMAT, true),
    ("%Y-%m-%d %H:%M:%S", true),
    ("%Y-%m-%d", false),
    ("%m/%d/%Y %H:%M:%S", true),
    ("%m/%d/%Y", false),
    ("%d/%m/%Y %H:%M:%S", true),
    ("%d/%m/%Y", false),
    ("%b %d, %Y %H:%M:%S", true),
    ("%b %d, %Y", false),
    ("%B %d, %Y %H:%M:%S", true),
    ("%B %d, %Y", false),
];

/// Try each grammar in order; interpret the first match in the config's
/// calendar timezone. Returns `None` when no grammar matches or the local
/// time does not exist in that timezone (DST gap).
pub(crate) fn parse_human_readable(input: &str, config: &FormatConfig) -> Option<DateTime<Utc>> {
    for (grammar, has_time) in HUMAN_GRAMMARS {
        let naive = if has_time {
            NaiveDateTime::parse_from_str(input, grammar).ok()
        } else {
            NaiveDate::parse_from_str(input, grammar)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        };
        if let Some(naive) = naive {
            if let Some(local) = config.timezone().from_local_datetime(&naive).single() {
                return Some(local.with_timezone(&Utc));
            }
        }
    }
    None
}
