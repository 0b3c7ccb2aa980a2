//! Sugiru CLI: interactive interpreter
//!
//! The `sugiru` binary reads source from standard input line by line and,
//! depending on the flags, prints the tokens, the parsed program or the
//! evaluated value of each line. See `sugiru --help`.

mod config;
mod repl;

use clap::Parser;
use config::{Cli, Config};
use repl::Repl;
use std::io;
use std::process::ExitCode;
use sugiru_log::{error, info};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    sugiru_log::set_level(config.log_level);
    info!("starting in {} mode", config.mode);

    let mut repl = Repl::new(&config);
    match repl.run(io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("i/o failure: {}", err);
            ExitCode::FAILURE
        }
    }
}
