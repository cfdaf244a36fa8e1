//! Benchmark CLI for the dynamic bit vector and BP tree.
//!
//! Reads a query file, executes every query against the chosen structure,
//! writes one result per line to the output file and prints a single
//! tab-separated RESULT summary line to stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod queries;
mod runner;

#[derive(Debug, Parser)]
#[command(name = "dynbits")]
#[command(about = "Dynamic succinct bit vector and BP tree benchmarks", long_about = None)]
#[command(version)]
struct Cli {
    /// Benchmark to run
    #[arg(value_enum)]
    mode: Mode,

    /// Query file to execute
    input_file: PathBuf,

    /// Result file to write (truncated on open)
    output_file: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Dynamic bit vector queries (insert/delete/flip/rank/select)
    Bv,
    /// Dynamic BP tree queries (deletenode/insertchild/child/subtree_size/parent)
    Bp,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.mode {
        Mode::Bv => runner::run_bv(&cli.input_file, &cli.output_file),
        Mode::Bp => runner::run_bp(&cli.input_file, &cli.output_file),
    }
}
