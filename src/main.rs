//! merge-bed-regions: collapse BED intervals sharing a label.
//!
//! Usage: merge-bed-regions [OPTIONS] <BED_FILE>

use clap::Parser;
use log::debug;
use std::io;
use std::path::PathBuf;
use std::process;

use bed_label_merge::bed::BedError;
use bed_label_merge::commands::CollapseCommand;
use bed_label_merge::config::{self, ChromPolicy};

#[derive(Parser)]
#[command(name = "merge-bed-regions")]
#[command(version)]
#[command(
    about = "Collapse all BED regions sharing a label into a single region",
    long_about = "Collapse all BED regions sharing a label (4th column) into a single region \
                  spanning the smallest start and largest end of that label. Unlike overlap \
                  merging, regions need not touch. Output keeps first-seen label order."
)]
struct Cli {
    /// BED file to merge (use - for stdin)
    bed_file: PathBuf,

    /// Add a buffer upstream and downstream of the merged regions
    #[arg(short, long, default_value = "0")]
    buffer: u64,

    /// Output debugging messages. May be very verbose.
    #[arg(short, long)]
    debug: bool,

    /// Fail when a label appears on more than one chromosome
    #[arg(long)]
    strict_chrom: bool,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();
    config::init_logging(cli.debug);

    if let Err(e) = run_collapse(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_collapse(cli: Cli) -> Result<(), BedError> {
    let policy = if cli.strict_chrom {
        ChromPolicy::Strict
    } else {
        ChromPolicy::Keep
    };
    let cmd = CollapseCommand::new()
        .with_buffer(cli.buffer)
        .with_chrom_policy(policy);
    debug!("Collapse settings: {:?}", cmd.config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let stats = if cli.bed_file.to_string_lossy() == "-" {
        cmd.run_stdin(&mut handle)?
    } else {
        cmd.run(&cli.bed_file, &mut handle)?
    };

    if cli.stats {
        eprintln!("Collapse stats: {}", stats);
    }

    Ok(())
}
