//! Command-line argument surface (§6, External Interfaces).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A small line-oriented scripting language and its tree-walking interpreter.
#[derive(Debug, Parser)]
#[command(name = "gnd", version, about)]
pub struct Cli {
    /// Path to the script to run.
    pub script_path: PathBuf,

    /// Raise the log level to DEBUG. Equivalent to `--log-level debug`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimum log level to emit. Defaults to the config file's setting, or
    /// `error` if neither is given.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Seed the anonymous slot `_` with this text instead of reading stdin.
    #[arg(long, conflicts_with = "interactive")]
    pub input: Option<String>,

    /// Read one line from stdin into `_` instead of consuming all of stdin.
    #[arg(long)]
    pub interactive: bool,
}

/// The `--log-level` values, in the order the logging sink (§6) defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

impl Cli {
    /// The effective log level: `--verbose` wins over `--log-level`, which
    /// wins over `fallback` (typically the config file's default, or `error`).
    pub fn effective_log_level(&self, fallback: log::LevelFilter) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            self.log_level.map(LogLevel::to_filter).unwrap_or(fallback)
        }
    }
}
