//! MENACE CLI - play noughts and crosses against a learning pile of matchboxes
//!
//! Without `--learn` the program plays interactively on the terminal; with
//! `--learn N` it trains against a random opponent for N games. Either way the
//! matchboxes and the win/loss/draw record are saved on exit.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use menace::cli::{Args, run};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
