//! Dump the license record embedded in an IDA database.
//!
//! Every database carries the owning user's license record under the
//! `$ original user` netnode. This binary takes that netnode's raw value as
//! a file (exported ahead of time; opening the container itself is the
//! database layer's job), runs the recovery pipeline, and prints the record.
//!
//! Usage:
//!   idbkit-dump user.blob
//!   idbkit-dump --hex --json user.blob.hex

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use idbkit_dump::{load_blob, render_json, render_plain};
use idbkit_license::recover_record;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "idbkit-dump")]
#[command(about = "Dump the license record embedded in an IDA database user blob")]
struct Args {
    /// Path to the raw user blob (the `$ original user` netnode value)
    blob: PathBuf,

    /// Treat the input file as hex text instead of raw bytes
    #[arg(long)]
    hex: bool,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable all output but errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let raw = load_blob(&args.blob, args.hex)?;
    debug!(len = raw.len(), "loaded user blob");
    let record = recover_record(&raw)?;

    if args.json {
        println!("{}", render_json(&record)?);
    } else {
        print!("{}", render_plain(&record));
    }
    Ok(())
}
