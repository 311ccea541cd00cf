//! Run configuration and logging setup.
//!
//! Settings are built once from the command line and passed by value into
//! the collapse command. Nothing here is process-global except the logger.

use log::LevelFilter;

/// How to treat a record whose chromosome differs from the one already
/// recorded for its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromPolicy {
    /// Keep the first-seen chromosome and fold the coordinates in anyway.
    #[default]
    Keep,
    /// Fail the run with `BedError::ChromMismatch`.
    Strict,
}

/// Settings for a single collapse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapseConfig {
    /// Bases added to both sides of each merged region at output time.
    pub buffer: u64,
    pub chrom_policy: ChromPolicy,
}

/// Initialize the logger.
///
/// Warnings and errors are always shown; `debug` raises the level to
/// `Debug`. `RUST_LOG` filters are applied on top when set.
pub fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed when embedded as a library.
    builder.try_init().ok();
}
