//! Conversion dispatch: recover an instant from a classified input and emit
//! the fixed, variant-specific list of target representations.
//!
//! Each recognized variant re-parses the original string with the same
//! formula the detector implied — no detector state is threaded through —
//! and produces an ordered result list that always excludes the source
//! representation itself. Decimal precision of numeric targets follows the
//! source granularity, so a seconds input never presents fake sub-second
//! digits and a nanoseconds input keeps all nine.

use chrono::{DateTime, Utc};

use crate::detect::{classify, parse_human_readable, parse_iso8601};
use crate::format::{default_config, format_relative, FormatConfig};
use crate::instant::Instant;
use crate::types::{ConversionResult, SourceVariant};

/// Convert candidate text into an ordered list of equivalent timestamp
/// representations, using the wall clock and the process-wide default
/// calendar conventions.
///
/// Returns an empty list when the input is empty, whitespace-only, or not a
/// recognizable timestamp — "not a timestamp" is an expected outcome, not an
/// error.
pub fn convert(text: &str) -> Vec<ConversionResult> {
    convert_with(text, Utc::now(), default_config())
}

/// Like [`convert`], but with an injected "now" for the relative-time
/// output. Same input and same `now` always produce identical results.
pub fn convert_at(text: &str, now: DateTime<Utc>) -> Vec<ConversionResult> {
    convert_with(text, now, default_config())
}

/// Fully injected form: both the clock and the calendar conventions are
/// supplied by the caller.
pub fn convert_with(
    text: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let variant = classify(trimmed, config);
    dispatch(trimmed, variant, now, config)
}

/// Produce the target list for an already-classified input.
///
/// Returns an empty list for [`Unrecognized`](SourceVariant::Unrecognized)
/// and whenever instant recovery fails despite the classification (numeric
/// overflow, non-finite value, local-time gap) — never a partial list.
pub fn dispatch(
    original: &str,
    variant: SourceVariant,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    match variant {
        SourceVariant::UnixSeconds => from_unix_seconds(original, now, config),
        SourceVariant::UnixMilliseconds => from_unix_millis(original, now, config),
        SourceVariant::UnixMicroseconds => from_unix_micros(original, now, config),
        SourceVariant::UnixNanoseconds => from_unix_nanos(original, now, config),
        SourceVariant::Iso8601 => from_iso8601(original, now, config),
        SourceVariant::HumanReadableDate => from_human_readable(original, now, config),
        SourceVariant::Unrecognized => Vec::new(),
    }
}

/// Ordered result accumulator; assigns each record its sequence ordinal.
struct ResultList {
    items: Vec<ConversionResult>,
}

impl ResultList {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn push(&mut self, label: &str, value: String, description: &str) {
        self.items.push(ConversionResult {
            id: self.items.len(),
            label: label.to_string(),
            value,
            description: description.to_string(),
        });
    }

    fn into_vec(self) -> Vec<ConversionResult> {
        self.items
    }
}

fn from_unix_seconds(
    input: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let Ok(seconds) = input.parse::<f64>() else {
        return Vec::new();
    };
    let Some(date) = Instant::from_unix_seconds(seconds).to_datetime() else {
        return Vec::new();
    };

    let mut out = ResultList::new();
    out.push(
        "Milliseconds",
        format!("{:.0}", seconds * 1_000.0),
        "Unix timestamp in milliseconds",
    );
    out.push(
        "Microseconds",
        format!("{:.0}", seconds * 1_000_000.0),
        "Unix timestamp in microseconds",
    );
    out.push(
        "ISO 8601",
        config.iso8601(&date),
        "ISO 8601 format with timezone",
    );
    out.push(
        "Human Readable",
        config.long(&date),
        "Long date and time format",
    );
    out.push("Short Format", config.short(&date), "Short date and time");
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}

fn from_unix_millis(
    input: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let Ok(millis) = input.parse::<f64>() else {
        return Vec::new();
    };
    let instant = Instant::from_unix_millis(millis);
    let Some(date) = instant.to_datetime() else {
        return Vec::new();
    };

    let mut out = ResultList::new();
    out.push(
        "Seconds",
        format!("{:.3}", instant.seconds()),
        "Unix timestamp in seconds",
    );
    out.push(
        "Microseconds",
        format!("{:.0}", millis * 1_000.0),
        "Unix timestamp in microseconds",
    );
    out.push(
        "ISO 8601",
        config.iso8601(&date),
        "ISO 8601 format with timezone",
    );
    out.push(
        "Human Readable",
        config.long(&date),
        "Long date and time format",
    );
    out.push("Short Format", config.short(&date), "Short date and time");
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}

fn from_unix_micros(
    input: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let Ok(micros) = input.parse::<f64>() else {
        return Vec::new();
    };
    let instant = Instant::from_unix_micros(micros);
    let Some(date) = instant.to_datetime() else {
        return Vec::new();
    };

    let mut out = ResultList::new();
    out.push(
        "Seconds",
        format!("{:.6}", instant.seconds()),
        "Unix timestamp in seconds",
    );
    out.push(
        "Milliseconds",
        format!("{:.3}", micros / 1_000.0),
        "Unix timestamp in milliseconds",
    );
    out.push(
        "ISO 8601",
        config.iso8601(&date),
        "ISO 8601 format with timezone",
    );
    out.push(
        "Human Readable",
        config.long(&date),
        "Long date and time format",
    );
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}

fn from_unix_nanos(
    input: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let Ok(nanos) = input.parse::<f64>() else {
        return Vec::new();
    };
    let instant = Instant::from_unix_nanos(nanos);
    let Some(date) = instant.to_datetime() else {
        return Vec::new();
    };

    let mut out = ResultList::new();
    out.push(
        "Seconds",
        format!("{:.9}", instant.seconds()),
        "Unix timestamp in seconds",
    );
    out.push(
        "Milliseconds",
        format!("{:.6}", nanos / 1_000_000.0),
        "Unix timestamp in milliseconds",
    );
    out.push(
        "ISO 8601",
        config.iso8601(&date),
        "ISO 8601 format with timezone",
    );
    out.push(
        "Human Readable",
        config.long(&date),
        "Long date and time format",
    );
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}

fn from_iso8601(input: &str, now: DateTime<Utc>, config: &FormatConfig) -> Vec<ConversionResult> {
    let Some(date) = parse_iso8601(input) else {
        return Vec::new();
    };
    let seconds = Instant::from_datetime(&date).seconds();

    let mut out = ResultList::new();
    out.push(
        "Unix Seconds",
        format!("{:.0}", seconds),
        "Unix timestamp in seconds",
    );
    out.push(
        "Unix Milliseconds",
        format!("{:.0}", seconds * 1_000.0),
        "Unix timestamp in milliseconds",
    );
    out.push(
        "Human Readable",
        config.long(&date),
        "Long date and time format",
    );
    out.push("Short Format", config.short(&date), "Short date and time");
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}

fn from_human_readable(
    input: &str,
    now: DateTime<Utc>,
    config: &FormatConfig,
) -> Vec<ConversionResult> {
    let Some(date) = parse_human_readable(input, config) else {
        return Vec::new();
    };
    let seconds = Instant::from_datetime(&date).seconds();

    let mut out = ResultList::new();
    out.push(
        "Unix Seconds",
        format!("{:.0}", seconds),
        "Unix timestamp in seconds",
    );
    out.push(
        "Unix Milliseconds",
        format!("{:.0}", seconds * 1_000.0),
        "Unix timestamp in milliseconds",
    );
    out.push(
        "ISO 8601",
        config.iso8601(&date),
        "ISO 8601 format with timezone",
    );
    out.push("Short Format", config.short(&date), "Short date and time");
    out.push(
        "Relative",
        format_relative(&date, &now),
        "Time relative to now",
    );
    out.into_vec()
}
