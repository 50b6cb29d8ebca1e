//! CLI entry point for autotile table generation and sheet conversion

use autotile_combos::io::cli::{Cli, run};
use clap::Parser;

fn main() -> autotile_combos::Result<()> {
    run(Cli::parse())
}
