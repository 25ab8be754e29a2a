use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

mod hash;
mod merge;
mod salt;
mod session;

/// Interactive generator for legacy `password{salt}` digests
#[derive(Debug, Parser)]
#[command(author, about, version)]
struct Args {}

fn main() -> ExitCode {
    env_logger::init();
    Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session::run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
