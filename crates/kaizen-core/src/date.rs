//! Calendar-day and timestamp helpers. Calendar days travel as `time::Date`
//! and serialize as `YYYY-MM-DD`; instants are RFC3339 strings.

use time::format_description;
use time::{Date, OffsetDateTime};

const DAY_FORMAT: &str = "[year]-[month]-[day]";

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_day(date: Date) -> String {
    let format = format_description::parse(DAY_FORMAT).expect("day format is valid");
    date.format(&format).expect("day formatting should not fail")
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_day(s: &str) -> Result<Date, time::error::Parse> {
    let format = format_description::parse(DAY_FORMAT).expect("day format is valid");
    Date::parse(s, &format)
}

/// Current instant as an RFC3339 string.
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&format_description::well_known::Rfc3339)
        .expect("RFC3339 formatting should not fail")
}

/// Parse an RFC3339 timestamp.
pub fn parse_rfc3339(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(s, &format_description::well_known::Rfc3339)
}

/// Today's calendar day in the device-local timezone, falling back to UTC
/// when the local offset cannot be determined.
pub fn today_local() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Serde adapter for `Date` fields stored as `YYYY-MM-DD`.
pub mod day {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_day(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_day(&s).map_err(de::Error::custom)
    }
}
