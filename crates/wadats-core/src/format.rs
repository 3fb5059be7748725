//! Shared formatting configuration and calendar/relative formatting.
//!
//! Formatting state is an explicit [`FormatConfig`] that callers construct
//! once and inject, plus a process-wide default behind a `OnceLock` for the
//! convenience entry points. The config is immutable after construction, so
//! sharing it across threads needs no locking.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use std::sync::OnceLock;

use crate::error::{ConvertError, Result};

/// Long calendar style for output, e.g. "November 14, 2023 at 10:13:20 PM UTC".
const LONG_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p %Z";

/// The long style as a parse grammar. `%Z` is format-only in chrono, so the
/// detector accepts the long style without the trailing zone name.
pub(crate) const LONG_PARSE_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p";

/// Short calendar style, e.g. "11/14/23, 10:13 PM". Used for both output
/// and detection.
pub(crate) const SHORT_FORMAT: &str = "%-m/%-d/%y, %-I:%M %p";

/// Calendar conventions for human-readable output and for interpreting
/// naive (zone-less) date strings.
///
/// Chrono carries no locale database, so the conventions are US-English
/// patterns plus an injectable IANA timezone; the timezone is the
/// substitutable "calendar provider" seam.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    tz: Tz,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

impl FormatConfig {
    /// UTC calendar conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calendar conventions in the given IANA timezone (e.g.
    /// "America/New_York").
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidTimezone`] if the name is not a valid
    /// IANA identifier.
    pub fn with_timezone(name: &str) -> Result<Self> {
        let tz = name
            .parse::<Tz>()
            .map_err(|_| ConvertError::InvalidTimezone(name.to_string()))?;
        Ok(Self { tz })
    }

    /// The timezone naive date strings are interpreted in and calendar
    /// output is rendered in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// ISO 8601 with `Z` designator and millisecond fraction, e.g.
    /// "2023-11-14T22:13:20.000Z". Always UTC regardless of the calendar
    /// timezone.
    pub fn iso8601(&self, dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Long date and time in the calendar timezone.
    pub fn long(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz).format(LONG_FORMAT).to_string()
    }

    /// Short date and time in the calendar timezone.
    pub fn short(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz).format(SHORT_FORMAT).to_string()
    }
}

/// The process-wide default config, built on first use.
pub fn default_config() -> &'static FormatConfig {
    static CONFIG: OnceLock<FormatConfig> = OnceLock::new();
    CONFIG.get_or_init(FormatConfig::default)
}

const MINUTE: u64 = 60;
const HOUR: u64 = 3_600;
const DAY: u64 = 86_400;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Express `dt`'s distance from `now` in natural units: "in 3 days",
/// "2 hours ago", or "now" within the same second.
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = dt.signed_duration_since(*now).num_seconds();
    if delta == 0 {
        return "now".to_string();
    }
    let abs = delta.unsigned_abs();
    let (quantity, unit) = if abs >= YEAR {
        (abs / YEAR, "year")
    } else if abs >= MONTH {
        (abs / MONTH, "month")
    } else if abs >= WEEK {
        (abs / WEEK, "week")
    } else if abs >= DAY {
        (abs / DAY, "day")
    } else if abs >= HOUR {
        (abs / HOUR, "hour")
    } else if abs >= MINUTE {
        (abs / MINUTE, "minute")
    } else {
        (abs, "second")
    };
    let plural = if quantity == 1 { "" } else { "s" };
    if delta > 0 {
        format!("in {} {}{}", quantity, unit, plural)
    } else {
        format!("{} {}{} ago", quantity, unit, plural)
    }
}
