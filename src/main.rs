//! CLI entry point for the Itamaracá sequence generator

use clap::Parser;
use itamaraca::io::cli::{Cli, SequenceRunner};

fn main() -> itamaraca::Result<()> {
    let cli = Cli::parse();
    let mut runner = SequenceRunner::new(cli);
    runner.run()?;
    Ok(())
}
