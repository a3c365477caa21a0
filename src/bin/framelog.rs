//! `framelog` binary.
//!
//! Usage:
//!   framelog "disk almost full" -l warn -t DISK
//!   framelog --json '{"id":1}'
//!   cat feed.xml | framelog --xml -m 2 --file

use clap::Parser;
use framelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("framelog: {e}");
            ExitCode::FAILURE
        }
    }
}
