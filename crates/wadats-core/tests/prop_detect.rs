//! Property tests for the classification cascade and the conversion
//! contract.

use chrono::DateTime;
use proptest::prelude::*;
use wadats_core::{classify, convert_at, FormatConfig, SourceVariant};

fn fixed_now() -> DateTime<chrono::Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

proptest! {
    /// Integer seconds above the 1e9 threshold (and at most the 1e12
    /// threshold) always classify as unix seconds, and the milliseconds
    /// target is exactly `s * 1000` with no decimals.
    #[test]
    fn seconds_classify_and_scale_to_millis(s in 1_000_000_001i64..=1_000_000_000_000i64) {
        let input = s.to_string();
        prop_assert_eq!(
            classify(&input, &FormatConfig::new()),
            SourceVariant::UnixSeconds
        );

        let results = convert_at(&input, fixed_now());
        prop_assert_eq!(&results[0].label, "Milliseconds");
        prop_assert_eq!(&results[0].value, &(s * 1000).to_string());
    }

    /// Integer milliseconds strictly between the 1e12 and 1e15 thresholds
    /// classify as unix milliseconds.
    #[test]
    fn millis_classify(ms in 1_000_000_000_001i64..=1_000_000_000_000_000i64) {
        prop_assert_eq!(
            classify(&ms.to_string(), &FormatConfig::new()),
            SourceVariant::UnixMilliseconds
        );
    }

    /// Values at or below the seconds threshold are never claimed by the
    /// numeric rule, and a bare number matches no other grammar.
    #[test]
    fn small_numbers_fall_through(s in 0i64..=1_000_000_000i64) {
        let input = s.to_string();
        prop_assert_eq!(
            classify(&input, &FormatConfig::new()),
            SourceVariant::Unrecognized
        );
        prop_assert!(convert_at(&input, fixed_now()).is_empty());
    }

    /// Alphabetic strings never produce results (even the handful that
    /// parse as non-finite floats fail at instant recovery).
    #[test]
    fn alphabetic_garbage_yields_nothing(input in "[a-z]{1,10}") {
        prop_assert!(convert_at(&input, fixed_now()).is_empty());
    }

    /// Trimming is the engine's job: surrounding whitespace never changes
    /// the outcome.
    #[test]
    fn whitespace_is_irrelevant(s in 1_000_000_001i64..=2_000_000_000i64) {
        let now = fixed_now();
        let bare = convert_at(&s.to_string(), now);
        let padded = convert_at(&format!("  {}\n", s), now);
        prop_assert_eq!(bare, padded);
    }

    /// Conversion with a fixed clock is a pure function: two calls agree
    /// byte for byte.
    #[test]
    fn conversion_is_deterministic(s in 1_000_000_001i64..=1_000_000_000_000i64) {
        let now = fixed_now();
        let input = s.to_string();
        prop_assert_eq!(convert_at(&input, now), convert_at(&input, now));
    }
}
