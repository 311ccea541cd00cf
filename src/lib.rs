//! Label-based collapsing of BED intervals.
//!
//! Every record sharing a label (typically a gene name) is merged into one
//! region spanning the smallest start and largest end seen for that label,
//! optionally padded on both sides. Unlike overlap-based merging, records
//! need not touch or be sorted.
//!
//! # Example
//!
//! ```rust
//! use bed_label_merge::{bed::BedReader, commands::CollapseCommand};
//!
//! let input = "chr1 1000 2000 GENE_A\nchr1 3000 4000 GENE_A\n";
//! let cmd = CollapseCommand::new().with_buffer(100);
//! let (regions, _stats) = cmd.collapse_reader(BedReader::new(input.as_bytes())).unwrap();
//!
//! assert_eq!(regions[0].to_string(), "chr1\t900\t4100\tGENE_A");
//! ```

pub mod accumulator;
pub mod bed;
pub mod commands;
pub mod config;
pub mod interval;
pub mod output;

// Re-export commonly used types
pub use bed::{read_records, BedError, BedReader};
pub use interval::{Interval, LabeledRecord, MergedInterval};
