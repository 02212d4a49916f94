use chrono::{DateTime, TimeZone, Utc};

/// Wall-clock capability used for auto-generated timestamps.
///
/// The encoder takes this as an explicit dependency so that tests can
/// substitute a fixed instant. See [`Point::encode_with_clock`].
///
/// [`Point::encode_with_clock`]: crate::line::Point::encode_with_clock
pub trait Clock {
    /// Current instant as nanoseconds since the Unix epoch, UTC.
    fn now_nanos(&self) -> i64;
}

/// The real wall clock, reading `chrono::Utc::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        utc_now_nanos()
    }
}

/// Current UTC time as a nano unix timestamp.
pub fn utc_now_nanos() -> i64 {
    // In i64 range until the year 2262
    Utc::now().timestamp_nanos_opt().unwrap()
}

/// Converts a timezone-aware datetime to a nano unix timestamp.
pub fn datetime_to_nano_timestamp<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.with_timezone(&Utc).timestamp_nanos_opt().unwrap()
}

#[cfg(test)]
mod test_util {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::datetime_to_nano_timestamp;

    #[test]
    fn test_datetime_to_nano_timestamp() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(datetime_to_nano_timestamp(&dt), 1_577_836_800_000_000_000);
    }

    #[test]
    fn test_datetime_to_nano_timestamp_with_offset() {
        // 2020-01-01T01:00:00+01:00 is the same instant as midnight UTC
        let tz = FixedOffset::east_opt(3600).unwrap();
        let dt = tz.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(datetime_to_nano_timestamp(&dt), 1_577_836_800_000_000_000);
    }
}
