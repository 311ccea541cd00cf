//! Per-run label accumulator.
//!
//! Merged regions live in a `Vec` in first-seen order; a hash index maps
//! each label to its slot. The accumulator is created per run and consumed
//! when the regions are emitted.

use crate::bed::{BedError, Result};
use crate::config::ChromPolicy;
use crate::interval::{LabeledRecord, MergedInterval};
use log::debug;
use rustc_hash::FxHashMap;

/// What happened to a record folded into the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// First record for its label.
    Registered,
    /// Bounds of an existing label were widened (or left unchanged).
    Extended,
    /// Label already lives on another chromosome; coordinates were folded
    /// in and the recorded chromosome kept.
    ChromMismatch { expected: String, found: String },
}

#[derive(Debug, Default)]
pub struct LabelAccumulator {
    index: FxHashMap<String, usize>,
    regions: Vec<MergedInterval>,
}

impl LabelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct labels seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Look up the merged region for a label.
    pub fn get(&self, label: &str) -> Option<&MergedInterval> {
        self.index.get(label).map(|&slot| &self.regions[slot])
    }

    /// Fold one record into its label's region.
    ///
    /// `line` is the input line number, used for diagnostics.
    pub fn add(
        &mut self,
        record: LabeledRecord,
        policy: ChromPolicy,
        line: usize,
    ) -> Result<AddOutcome> {
        let Some(&slot) = self.index.get(record.label.as_str()) else {
            debug!("line {}: new label {}", line, record.label);
            self.index.insert(record.label.clone(), self.regions.len());
            self.regions.push(MergedInterval::from_record(record));
            return Ok(AddOutcome::Registered);
        };

        let region = &mut self.regions[slot];
        let outcome = if region.chrom() == record.chrom() {
            AddOutcome::Extended
        } else {
            if policy == ChromPolicy::Strict {
                return Err(BedError::ChromMismatch {
                    line,
                    label: record.label,
                    expected: region.chrom().to_string(),
                    found: record.interval.chrom,
                });
            }
            AddOutcome::ChromMismatch {
                expected: region.chrom().to_string(),
                found: record.chrom().to_string(),
            }
        };

        region.absorb(record.start(), record.end());
        Ok(outcome)
    }

    /// Consume the accumulator, yielding regions in first-seen label order.
    pub fn into_regions(self) -> Vec<MergedInterval> {
        self.regions
    }
}
