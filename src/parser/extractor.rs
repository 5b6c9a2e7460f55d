use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead};
use std::iter::FusedIterator;

use crate::models::RawTimestamp;

/// `DD/Mon/YYYY:HH:MM:SS ±ZZZZ`, unanchored so it matches anywhere in a line.
pub const TIMESTAMP_PATTERN: &str =
    r"[0-9]{2}/[A-Za-z]{3}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4}";

static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// Lazily pulls timestamp-shaped substrings out of a line-oriented reader.
///
/// Only the current line is held in memory. Matches come out in line order and
/// left to right within a line. A read error is yielded once, after which the
/// extractor is exhausted.
pub struct TimestampExtractor<R> {
    reader: R,
    buffer: Vec<u8>,
    line: String,
    cursor: usize,
    lines_read: u64,
    matches: u64,
    done: bool,
}

impl<R: BufRead> TimestampExtractor<R> {
    pub fn new(reader: R) -> Self {
        TimestampExtractor {
            reader,
            buffer: Vec::with_capacity(1024),
            line: String::new(),
            cursor: 0,
            lines_read: 0,
            matches: 0,
            done: false,
        }
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn matches(&self) -> u64 {
        self.matches
    }

    fn advance_line(&mut self) -> io::Result<bool> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(false);
        }

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        // the pattern is pure ASCII, so lossy decoding never hides a match
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.buffer));
        self.cursor = 0;
        self.lines_read += 1;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TimestampExtractor<R> {
    type Item = io::Result<RawTimestamp>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(m) = TIMESTAMP_REGEX.find_at(&self.line, self.cursor) {
                self.cursor = m.end();
                self.matches += 1;
                return Some(Ok(RawTimestamp::new(m.as_str())));
            }

            match self.advance_line() {
                Ok(true) => continue,
                Ok(false) => self.done = true,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for TimestampExtractor<R> {}
