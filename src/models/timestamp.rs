use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Render format of an hour bucket: `DD/Mon/YYYY:HH`.
pub const BUCKET_FORMAT: &str = "%d/%b/%Y:%H";

/// Substring lifted out of a log line by the extractor. Not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTimestamp(String);

impl RawTimestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        RawTimestamp(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A timestamp that survived strict parsing, offset preserved as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInstant(DateTime<FixedOffset>);

impl ParsedInstant {
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        ParsedInstant(datetime)
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    pub fn bucket_key(&self) -> BucketKey {
        BucketKey(self.0.format(BUCKET_FORMAT).to_string())
    }
}

/// One calendar hour at the source timestamp's own offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BucketKey {
    fn from(key: &str) -> Self {
        BucketKey(key.to_string())
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: BucketKey,
    pub count: u64,
}
