//! Extractor → normalizer → aggregator → reporter, in one pass over the log.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::aggregate::AggregateTable;
use crate::error::{Error, Result};
use crate::parser::{normalize, TimestampExtractor};
use crate::report::Report;

const READ_BUFFER_SIZE: usize = 16384;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines: u64,
    pub matched: u64,
    pub discarded: u64,
}

/// Folds every parsable timestamp in `reader` into an hour table.
pub fn analyze_reader<R: BufRead>(reader: R) -> io::Result<(AggregateTable, PipelineStats)> {
    let mut extractor = TimestampExtractor::new(reader);
    let mut discarded = 0u64;

    let table = extractor
        .by_ref()
        .try_fold(AggregateTable::new(), |table, raw| {
            let raw = raw?;
            Ok::<_, io::Error>(match normalize(raw.as_str()) {
                Some(key) => table.record(key),
                None => {
                    tracing::debug!(timestamp = %raw, "discarding unparsable timestamp");
                    discarded += 1;
                    table
                }
            })
        })?;

    let stats = PipelineStats {
        lines: extractor.lines_read(),
        matched: extractor.matches(),
        discarded,
    };
    Ok((table, stats))
}

pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    let path = path.as_ref();
    let source_unavailable = |source: io::Error| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(source_unavailable)?;
    tracing::info!(path = %path.display(), "reading access log");

    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let (table, stats) = analyze_reader(reader).map_err(source_unavailable)?;

    tracing::info!(
        lines = stats.lines,
        matched = stats.matched,
        discarded = stats.discarded,
        hours = table.len(),
        "access log aggregated"
    );

    Report::from_table(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BucketKey;
    use std::io::Cursor;

    #[test]
    fn aggregates_by_hour_and_skips_lines_without_timestamps() {
        let log = "\
127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET / HTTP/1.1\" 200 512
127.0.0.1 - - [10/Oct/2023:13:57:01 -0700] \"GET /a HTTP/1.1\" 200 128
garbage line without any date
127.0.0.1 - - [10/Oct/2023:14:02:10 -0700] \"GET /b HTTP/1.1\" 404 0
";

        let (table, stats) = analyze_reader(Cursor::new(log)).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&BucketKey::from("10/Oct/2023:13")), Some(2));
        assert_eq!(table.get(&BucketKey::from("10/Oct/2023:14")), Some(1));
        assert_eq!(
            stats,
            PipelineStats {
                lines: 4,
                matched: 3,
                discarded: 0,
            }
        );
    }

    #[test]
    fn unparsable_matches_are_counted_not_aggregated() {
        let log = "32/Zzz/2024:10:00:00 +0000\n01/Jan/2024:00:00:00 +0000\n";

        let (table, stats) = analyze_reader(Cursor::new(log)).unwrap();

        assert_eq!(table.total(), 1);
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.discarded, 1);
    }
}
