//! The opaque point-in-time type shared by the detector and converter.

use chrono::{DateTime, Utc};

/// A point in time: seconds (with sub-second fraction) since
/// 1970-01-01T00:00:00Z.
///
/// Constructed only through the unit conversion formulas below — one per
/// recognized source representation — never from arbitrary values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    seconds: f64,
}

impl Instant {
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn from_unix_millis(millis: f64) -> Self {
        Self {
            seconds: millis / 1_000.0,
        }
    }

    pub fn from_unix_micros(micros: f64) -> Self {
        Self {
            seconds: micros / 1_000_000.0,
        }
    }

    pub fn from_unix_nanos(nanos: f64) -> Self {
        Self {
            seconds: nanos / 1_000_000_000.0,
        }
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9,
        }
    }

    /// Seconds since the Unix epoch, fraction included.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Convert to a calendar datetime.
    ///
    /// Returns `None` for non-finite values and for instants outside the
    /// range `chrono` can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.seconds.is_finite() {
            return None;
        }
        let whole = self.seconds.floor();
        // Guard the cast: an out-of-range f64 → i64 cast saturates silently.
        if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
            return None;
        }
        let mut secs = whole as i64;
        let mut nanos = ((self.seconds - whole) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            secs = secs.checked_add(1)?;
            nanos = 0;
        }
        DateTime::from_timestamp(secs, nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seconds_roundtrip_through_datetime() {
        let dt = Instant::from_unix_seconds(1_700_000_000.0)
            .to_datetime()
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
        assert_eq!(Instant::from_datetime(&dt).seconds(), 1_700_000_000.0);
    }

    #[test]
    fn unit_formulas_agree() {
        let from_ms = Instant::from_unix_millis(1_700_000_000_500.0);
        assert_eq!(from_ms.seconds(), 1_700_000_000.5);
        let from_us = Instant::from_unix_micros(1_700_000_000_000_000.0);
        assert_eq!(from_us.seconds(), 1_700_000_000.0);
        let from_ns = Instant::from_unix_nanos(2_000_000_000_000_000_000.0);
        assert_eq!(from_ns.seconds(), 2_000_000_000.0);
    }

    #[test]
    fn subsecond_fraction_survives() {
        let dt = Instant::from_unix_seconds(1_700_000_000.5)
            .to_datetime()
            .unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn pre_epoch_instants_work() {
        let dt = Instant::from_unix_seconds(-1.0).to_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn non_finite_and_out_of_range_are_rejected() {
        assert!(Instant::from_unix_seconds(f64::INFINITY)
            .to_datetime()
            .is_none());
        assert!(Instant::from_unix_seconds(f64::NAN).to_datetime().is_none());
        assert!(Instant::from_unix_seconds(1e30).to_datetime().is_none());
    }
}
