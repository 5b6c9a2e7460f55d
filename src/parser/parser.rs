use chrono::{DateTime, Timelike};

use crate::models::{BucketKey, ParsedInstant};

/// Strict `strptime`-style layout of an access log timestamp.
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub fn parse_timestamp(raw: &str) -> Option<ParsedInstant> {
    let datetime = DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()?;

    // chrono reads second 60 as a leap second; access logs never carry one
    if datetime.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(ParsedInstant::new(datetime))
}

/// Maps a raw timestamp to its hour bucket, or `None` when it does not parse.
pub fn normalize(raw: &str) -> Option<BucketKey> {
    parse_timestamp(raw).map(|instant| instant.bucket_key())
}
