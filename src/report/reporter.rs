use std::io::{self, Write};

use crate::aggregate::AggregateTable;
use crate::error::{Error, Result};
use crate::models::RankedEntry;

const COLUMN_HEADER: &str = "Date and hour ---  accesses made";

/// Ranked view over a finished aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    ranked: Vec<RankedEntry>,
    total: u64,
    mean: f64,
}

impl Report {
    /// Ranks buckets by count, busiest first. Equal counts keep the table's
    /// iteration order.
    pub fn from_table(table: &AggregateTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyAggregate);
        }

        let mut ranked: Vec<RankedEntry> = table
            .iter()
            .map(|(key, count)| RankedEntry {
                key: key.clone(),
                count,
            })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        let total = table.total();
        let mean = round_to_cents(total as f64 / ranked.len() as f64);

        Ok(Report {
            ranked,
            total,
            mean,
        })
    }

    pub fn ranked(&self) -> &[RankedEntry] {
        &self.ranked
    }

    pub fn most_active(&self, n: usize) -> &[RankedEntry] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Tail of the ranking, so the quietest bucket comes last.
    pub fn least_active(&self, n: usize) -> &[RankedEntry] {
        &self.ranked[self.ranked.len().saturating_sub(n)..]
    }

    pub fn distinct_hours(&self) -> usize {
        self.ranked.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Mean requests per bucket, rounded half away from zero to 2 decimals.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn render<W: Write>(&self, out: &mut W, n: usize) -> io::Result<()> {
        writeln!(out, "The {n} most active hours on the server:")?;
        writeln!(out)?;
        writeln!(out, "{COLUMN_HEADER}")?;
        write_entries(out, self.most_active(n))?;

        writeln!(out, "The {n} least active hours:")?;
        writeln!(out)?;
        writeln!(out, "{COLUMN_HEADER}")?;
        write_entries(out, self.least_active(n))?;

        writeln!(out)?;
        writeln!(out, "Average accesses per hour: {:.2}", self.mean)?;
        Ok(())
    }
}

fn write_entries<W: Write>(out: &mut W, entries: &[RankedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{} --- {}", entry.key, entry.count)?;
    }
    Ok(())
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
