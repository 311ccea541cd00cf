//! Streaming reader for labelled BED files.
//!
//! Each data line holds `chrom start end label`, separated by any run of
//! whitespace. Columns past the label are ignored.

use crate::interval::LabeledRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while collapsing a BED file.
#[derive(Error, Debug)]
pub enum BedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(
        "Chromosome mismatch at line {line}: label '{label}' is on {expected}, record is on {found}"
    )]
    ChromMismatch {
        line: usize,
        label: String,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, BedError>;

/// Minimum number of columns in a data line.
const REQUIRED_FIELDS: usize = 4;

/// A streaming labelled-BED reader.
pub struct BedReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    skipped: usize,
    buffer: String,
}

impl BedReader<File> {
    /// Open a BED file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> BedReader<R> {
    /// Create a new BED reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            skipped: 0,
            buffer: String::with_capacity(256),
        }
    }

    /// Number of lines consumed so far, including comments.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of comment lines skipped so far.
    #[inline]
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Read the next record, skipping comment lines.
    ///
    /// A blank line is not a comment and fails with a parse error.
    pub fn read_record(&mut self) -> Result<Option<LabeledRecord>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buffer.trim_end();
            if line.starts_with('#') {
                self.skipped += 1;
                continue;
            }

            return parse_line(line, self.line_number).map(Some);
        }
    }

    /// Get an iterator over all records.
    pub fn records(self) -> BedRecordIter<R> {
        BedRecordIter { reader: self }
    }
}

/// Parse a single data line.
pub fn parse_line(line: &str, line_number: usize) -> Result<LabeledRecord> {
    let mut fields = line.split_whitespace();
    let (Some(chrom), Some(start), Some(end), Some(label)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(BedError::Parse {
            line: line_number,
            message: format!(
                "Expected at least {} fields, got {}",
                REQUIRED_FIELDS,
                line.split_whitespace().count()
            ),
        });
    };

    let start = parse_position(start, "start", line_number)?;
    let end = parse_position(end, "end", line_number)?;

    Ok(LabeledRecord::new(chrom, start, end, label))
}

fn parse_position(s: &str, field_name: &str, line_number: usize) -> Result<u64> {
    s.parse().map_err(|_| BedError::Parse {
        line: line_number,
        message: format!("Invalid {} position: '{}'", field_name, s),
    })
}

/// Iterator over labelled BED records.
pub struct BedRecordIter<R: Read> {
    reader: BedReader<R>,
}

impl<R: Read> Iterator for BedRecordIter<R> {
    type Item = Result<LabeledRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

/// Read all labelled records from a file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledRecord>> {
    let reader = BedReader::from_path(path)?;
    reader.records().collect()
}

/// Parse records from a string (useful for testing).
pub fn parse_records(content: &str) -> Result<Vec<LabeledRecord>> {
    let reader = BedReader::new(content.as_bytes());
    reader.records().collect()
}
