mod timestamp;

pub use timestamp::{BucketKey, ParsedInstant, RankedEntry, RawTimestamp, BUCKET_FORMAT};
