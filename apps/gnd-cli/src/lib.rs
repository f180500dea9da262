//! The `gnd` command-line front-end: flag parsing, stdin intake, and
//! exit-status mapping around [`gnd_runtime::Interpreter`] (§6).

pub mod cli;
pub mod config;

use clap::Parser;
use cli::Cli;
use gnd_runtime::interpreter::BlockOutcome;
use gnd_runtime::{Interpreter, Value};
use gnd_syntax::parse_script;
use is_terminal::IsTerminal;
use std::io::{BufRead, Read};

/// Parses arguments, runs the script, and returns the process exit code.
pub fn run_cli() -> i32 {
    let cli = Cli::parse();
    let config = config::Config::load();
    let fallback = config
        .log_level
        .as_deref()
        .and_then(parse_level_name)
        .unwrap_or(log::LevelFilter::Error);
    gnd_runtime::logger::init(cli.effective_log_level(fallback));

    match run(&cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{message}");
            1
        }
    }
}

fn parse_level_name(name: &str) -> Option<log::LevelFilter> {
    match name.to_lowercase().as_str() {
        "error" => Some(log::LevelFilter::Error),
        "warn" => Some(log::LevelFilter::Warn),
        "info" => Some(log::LevelFilter::Info),
        "debug" => Some(log::LevelFilter::Debug),
        _ => None,
    }
}

fn run(cli: &Cli) -> Result<i32, String> {
    let text = std::fs::read_to_string(&cli.script_path)
        .map_err(|e| format!("cannot read script {}: {e}", cli.script_path.display()))?;

    let input = take_input(cli)?;

    let source = cli.script_path.display().to_string();
    let instructions = parse_script(&source, &text)?;

    let script_dir = cli
        .script_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let interpreter = Interpreter::new(script_dir);

    match interpreter.run(&source, &instructions, input) {
        Ok(BlockOutcome::Value(_)) => Ok(0),
        Ok(BlockOutcome::Exit(code)) => Ok(code),
        Err(e) => Err(e.to_string()),
    }
}

/// Stdin intake rules (§6): `--input` wins outright; `--interactive` reads
/// one line; otherwise, if stdin is not a tty, the whole of it (trailing
/// LF trimmed) seeds `_` — a tty with neither flag is an error.
fn take_input(cli: &Cli) -> Result<Value, String> {
    if let Some(text) = &cli.input {
        return Ok(Value::Str(text.clone()));
    }

    let stdin = std::io::stdin();
    if cli.interactive {
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("reading stdin: {e}"))?;
        let line = line.strip_suffix('\n').unwrap_or(&line).to_string();
        return Ok(Value::Str(line));
    }

    if stdin.is_terminal() {
        return Err("stdin is a tty; pass --input or --interactive".to_string());
    }

    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .map_err(|e| format!("reading stdin: {e}"))?;
    let buf = buf.strip_suffix('\n').unwrap_or(&buf).to_string();
    Ok(Value::Str(buf))
}
