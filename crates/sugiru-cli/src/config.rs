//! Command-line configuration.
//!
//! Settings are layered: built-in defaults, then the `SUGIRU_LOG`
//! environment variable, then command-line flags. [`Cli`] is the raw
//! command line as `clap` sees it; [`Config`] is what the rest of the binary
//! works with.

use clap::{Args, Parser};
use std::fmt;
use sugiru_log::Level;

/// What the loop does with each line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dump tokens
    Tokens,
    /// Print the parsed program
    Ast,
    /// Evaluate and print the result
    #[default]
    Eval,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Tokens => "tokens",
            Mode::Ast => "ast",
            Mode::Eval => "eval",
        })
    }
}

/// Interactive interpreter for the Sugiru language.
///
/// Reads Sugiru source from standard input, one line at a time.
#[derive(Debug, Parser)]
#[command(name = "sugiru", version)]
pub struct Cli {
    #[command(flatten)]
    mode: ModeArgs,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", env = sugiru_log::DEFAULT_ENV_VAR, default_value_t = Level::Warn)]
    log: Level,

    /// Do not print the banner and prompt
    #[arg(long)]
    no_prompt: bool,
}

/// The per-line modes; at most one may be given.
#[derive(Debug, Clone, Copy, Args)]
#[group(multiple = false)]
struct ModeArgs {
    /// Print the token stream of each line
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program of each line
    #[arg(long)]
    ast: bool,

    /// Evaluate each line and print its value (default)
    #[arg(long)]
    eval: bool,
}

impl ModeArgs {
    fn mode(self) -> Mode {
        if self.tokens {
            Mode::Tokens
        } else if self.ast {
            Mode::Ast
        } else {
            Mode::Eval
        }
    }
}

/// Resolved settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Per-line behaviour
    pub mode: Mode,
    /// Minimum level of log records written to stderr
    pub log_level: Level,
    /// Whether to print the banner and the `>> ` prompt
    pub prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            log_level: Level::Warn,
            prompt: true,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            mode: cli.mode.mode(),
            log_level: cli.log,
            prompt: !cli.no_prompt,
        }
    }
}
