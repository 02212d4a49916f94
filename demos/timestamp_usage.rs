//! Shows the two timestamp modes: appending the current time and
//! converting an existing timezone-aware datetime.

use chrono::{DateTime, TimeZone, Utc};
use telegraf_plug::{line::Point, util::datetime_to_nano_timestamp, PlugResult};

/// Prints a line like:
///
/// ```text
/// timestamp_add,color=green value=123 1598903300806018048
/// ```
fn timestamp_add() -> PlugResult<()> {
    let line = Point::new("timestamp_add")
        .tag("color", "green")
        .field_integer("value", 123)
        .current_timestamp()
        .encode()?;
    println!("{line}");

    Ok(())
}

/// Prints:
///
/// ```text
/// timestamp_convert,color=green value=123 1577836800000000000
/// ```
fn timestamp_convert(datetime_tz: &DateTime<Utc>) -> PlugResult<()> {
    let line = Point::new("timestamp_convert")
        .tag("color", "green")
        .field_integer("value", 123)
        .timestamp_nanos(datetime_to_nano_timestamp(datetime_tz))
        .encode()?;
    println!("{line}");

    Ok(())
}

fn main() -> PlugResult<()> {
    timestamp_add()?;
    timestamp_convert(&Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())?;

    Ok(())
}
