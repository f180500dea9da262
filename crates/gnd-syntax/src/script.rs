//! Stage 3: split a script blob into instructions.
//!
//! Splits on LF, assigns 1-based line numbers for diagnostics, and wraps
//! any lex/parse error with `source:line` context before surfacing it.

use crate::instruction::{parse_line, Instruction};
use gnd_base::SpannedError;

/// Parses a full script's text into its list of instructions.
///
/// `source` names the script for error messages (typically its path, or
/// `"<stdin>"`/a subroutine name for embedded/loaded scripts). CR is
/// tolerated and dropped so CRLF-terminated files parse identically to
/// LF-terminated ones; a leading UTF-8 BOM is stripped before splitting.
pub fn parse_script(source: &str, text: &str) -> Result<Vec<Instruction>, String> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut instructions = Vec::new();
    for (idx, raw_line) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        match parse_line(line, line_no) {
            Ok(Some(instr)) => instructions.push(instr),
            Ok(None) => {}
            Err(e) => return Err(decorate(source, line_no, &e)),
        }
    }
    Ok(instructions)
}

fn decorate(source: &str, line_no: usize, err: &SpannedError) -> String {
    format!("{}:{}: {}", source, line_no, err.message)
}
