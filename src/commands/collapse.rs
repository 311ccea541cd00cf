//! Collapse command implementation.
//!
//! Merges every record sharing a label into one region spanning the
//! minimum start and maximum end of that label, then pads each region by
//! a fixed buffer. Labels are emitted in first-seen order.
//!
//! All input is consumed before anything is written, so a malformed line
//! produces an error and no output.
//!
//! Memory: O(labels).

use crate::accumulator::{AddOutcome, LabelAccumulator};
use crate::bed::{BedReader, Result};
use crate::config::{ChromPolicy, CollapseConfig};
use crate::interval::{LabeledRecord, MergedInterval};
use crate::output::MergedWriter;
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Collapse command configuration.
#[derive(Debug, Clone, Default)]
pub struct CollapseCommand {
    pub config: CollapseConfig,
}

impl CollapseCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(mut self, buffer: u64) -> Self {
        self.config.buffer = buffer;
        self
    }

    pub fn with_chrom_policy(mut self, policy: ChromPolicy) -> Self {
        self.config.chrom_policy = policy;
        self
    }

    /// Collapse an in-memory sequence of records.
    ///
    /// Returns padded regions in first-seen label order. Errors in the
    /// input sequence are propagated as-is; line numbers in strict-mode
    /// mismatch errors are record ordinals.
    pub fn collapse_records<I>(&self, records: I) -> Result<Vec<MergedInterval>>
    where
        I: IntoIterator<Item = Result<LabeledRecord>>,
    {
        let mut acc = LabelAccumulator::new();
        let mut stats = CollapseStats::default();

        for (i, record) in records.into_iter().enumerate() {
            self.fold(&mut acc, record?, i + 1, &mut stats)?;
        }

        Ok(self.finish(acc))
    }

    /// Collapse every record from a BED reader.
    pub fn collapse_reader<R: Read>(
        &self,
        mut reader: BedReader<R>,
    ) -> Result<(Vec<MergedInterval>, CollapseStats)> {
        let mut acc = LabelAccumulator::new();
        let mut stats = CollapseStats::default();

        while let Some(record) = reader.read_record()? {
            let line = reader.line_number();
            self.fold(&mut acc, record, line, &mut stats)?;
        }

        stats.lines_read = reader.line_number();
        stats.lines_skipped = reader.skipped_lines();

        let regions = self.finish(acc);
        stats.labels_written = regions.len();
        Ok((regions, stats))
    }

    /// Run collapse on a file.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_path: P,
        output: &mut W,
    ) -> Result<CollapseStats> {
        let file = File::open(input_path.as_ref())?;
        debug!("Reading {}", input_path.as_ref().display());
        self.run_reader(file, output)
    }

    /// Run collapse from stdin.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<CollapseStats> {
        let stdin = io::stdin();
        self.run_reader(stdin.lock(), output)
    }

    /// Collapse any readable source and write the regions to `output`.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<CollapseStats> {
        let (regions, stats) = self.collapse_reader(BedReader::new(reader))?;

        let mut writer = MergedWriter::new(output);
        for region in &regions {
            writer.write_region(region)?;
        }
        writer.flush()?;

        info!("{}", stats);
        Ok(stats)
    }

    fn fold(
        &self,
        acc: &mut LabelAccumulator,
        record: LabeledRecord,
        line: usize,
        stats: &mut CollapseStats,
    ) -> Result<()> {
        stats.records_read += 1;
        if let AddOutcome::ChromMismatch { expected, found } =
            acc.add(record, self.config.chrom_policy, line)?
        {
            stats.chrom_mismatches += 1;
            debug!("line {}: record on {}, label kept on {}", line, found, expected);
        }
        Ok(())
    }

    fn finish(&self, acc: LabelAccumulator) -> Vec<MergedInterval> {
        let buffer = self.config.buffer;
        acc.into_regions()
            .iter()
            .map(|region| region.padded(buffer))
            .collect()
    }
}

/// Statistics from a collapse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseStats {
    pub lines_read: usize,
    /// Comment lines.
    pub lines_skipped: usize,
    pub records_read: usize,
    pub labels_written: usize,
    /// Records whose chromosome differed from their label's first record.
    pub chrom_mismatches: usize,
}

impl CollapseStats {
    /// Average number of records folded into each label.
    pub fn compression_ratio(&self) -> f64 {
        if self.labels_written == 0 {
            0.0
        } else {
            self.records_read as f64 / self.labels_written as f64
        }
    }
}

impl std::fmt::Display for CollapseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lines: {}, Skipped: {}, Records: {}, Labels: {}, Chrom mismatches: {}, Compression: {:.2}x",
            self.lines_read,
            self.lines_skipped,
            self.records_read,
            self.labels_written,
            self.chrom_mismatches,
            self.compression_ratio()
        )
    }
}
