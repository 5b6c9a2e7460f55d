mod extractor;
mod parser;

pub use extractor::{TimestampExtractor, TIMESTAMP_PATTERN};
pub use parser::{normalize, parse_timestamp};
