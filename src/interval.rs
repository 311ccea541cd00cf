//! Core interval types for labelled genomic regions.

use std::fmt;

/// A genomic interval with chromosome, start, and end positions.
/// Uses 0-based, half-open coordinates (BED format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
        }
    }

    /// Bounding span of two coordinate pairs: `(min start, max end)`.
    ///
    /// Order-independent, so folding records in any order yields the same
    /// span.
    #[inline]
    pub fn span(current: (u64, u64), next: (u64, u64)) -> (u64, u64) {
        (current.0.min(next.0), current.1.max(next.1))
    }

    /// Pad both sides by `buffer` bases. The start is floored at 0 and the
    /// end saturates rather than wrapping.
    #[inline]
    pub fn padded(&self, buffer: u64) -> Interval {
        Interval {
            chrom: self.chrom.clone(),
            start: self.start.saturating_sub(buffer),
            end: self.end.saturating_add(buffer),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}

/// One parsed input line: an interval plus its grouping label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    pub interval: Interval,
    pub label: String,
}

impl LabeledRecord {
    pub fn new(chrom: impl Into<String>, start: u64, end: u64, label: impl Into<String>) -> Self {
        Self {
            interval: Interval::new(chrom, start, end),
            label: label.into(),
        }
    }

    /// Get the chromosome.
    #[inline]
    pub fn chrom(&self) -> &str {
        &self.interval.chrom
    }

    /// Get the start position.
    #[inline]
    pub fn start(&self) -> u64 {
        self.interval.start
    }

    /// Get the end position.
    #[inline]
    pub fn end(&self) -> u64 {
        self.interval.end
    }
}

/// The bounding region of every record seen so far for one label.
///
/// The chromosome is fixed by the first record and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedInterval {
    pub interval: Interval,
    pub label: String,
    /// Number of records folded into this region.
    pub count: usize,
}

impl MergedInterval {
    /// Start a merged region from the first record carrying its label.
    pub fn from_record(record: LabeledRecord) -> Self {
        Self {
            interval: record.interval,
            label: record.label,
            count: 1,
        }
    }

    /// Widen the bounds to cover `start..end`.
    #[inline]
    pub fn absorb(&mut self, start: u64, end: u64) {
        let (start, end) = Interval::span((self.interval.start, self.interval.end), (start, end));
        self.interval.start = start;
        self.interval.end = end;
        self.count += 1;
    }

    #[inline]
    pub fn chrom(&self) -> &str {
        &self.interval.chrom
    }

    #[inline]
    pub fn start(&self) -> u64 {
        self.interval.start
    }

    #[inline]
    pub fn end(&self) -> u64 {
        self.interval.end
    }

    /// The output form of this region, padded by `buffer` on both sides.
    pub fn padded(&self, buffer: u64) -> MergedInterval {
        MergedInterval {
            interval: self.interval.padded(buffer),
            label: self.label.clone(),
            count: self.count,
        }
    }
}

impl fmt::Display for MergedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.interval, self.label)
    }
}
