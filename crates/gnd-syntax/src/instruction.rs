//! Stage 2: turn a tokenized line into an [`Instruction`].
//!
//! An argument in source position may be a literal, a property reference,
//! or a nested array of either — collectively an [`Arg`]. Unlike [`Token`],
//! `Arg` owns its data so an `Instruction` can outlive the per-line arena
//! the tokenizer used.

use crate::token::{tokenize, Token};
use gnd_base::{Arena, Span, SpannedError};

/// An unresolved argument as written in source.
///
/// Resolution against a scope (turning `PropertyRef` into a bound runtime
/// value) happens in the interpreter, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A literal string (from a quoted form or a bare non-`$` token).
    Literal(String),
    /// A `$name` reference to a scope slot.
    PropertyRef(String),
    /// A `[ ... ]` group of arguments.
    List(Vec<Arg>),
}

impl Arg {
    /// The default implicit argument used when a line supplies none: `$_`.
    pub fn implicit() -> Self {
        Arg::PropertyRef("_".to_string())
    }
}

fn detach(token: &Token<'_>) -> Arg {
    match token {
        Token::Literal(s) => Arg::Literal(s.clone()),
        Token::PropertyRef(name) => Arg::PropertyRef(name.clone()),
        Token::Array(items) => Arg::List(items.iter().map(detach).collect()),
    }
}

/// The anonymous slot name, used as the default destination and default argument.
pub const ANONYMOUS_SLOT: &str = "_";

/// A single parsed instruction: opcode, destination slot, and arguments.
///
/// Immutable after parsing. Line numbers are 1-based and only used for
/// diagnostics; they do not affect execution semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Opcode as written: a bare identifier or a slashed path like `/gnd/let`.
    pub opcode: String,
    /// Destination slot name; defaults to [`ANONYMOUS_SLOT`] when the line omits one.
    pub destination: String,
    /// Ordered, unresolved argument list.
    pub args: Vec<Arg>,
    /// 1-based source line number, for error decoration.
    pub line: usize,
}

/// Parses one already-tokenized line into an `Instruction`.
///
/// Returns `Ok(None)` for blank lines and full-line comments (an empty
/// token list). Returns an error if the opcode position is not a bare
/// literal, or if the destination position is a `PropertyRef` but the
/// following token is missing or not an opcode.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Instruction>, SpannedError> {
    let arena: Arena<Token<'_>> = Arena::new();
    let tokens = tokenize(line, &arena)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    parse_tokens(&tokens, line_no).map(Some)
}

fn parse_tokens(tokens: &[Token<'_>], line_no: usize) -> Result<Instruction, SpannedError> {
    if tokens.is_empty() {
        return Err(SpannedError::new(
            "empty instruction",
            Span::new(0, 0),
        ));
    }

    let (destination, opcode_idx) = match &tokens[0] {
        Token::PropertyRef(name) => (name.clone(), 1),
        _ => (ANONYMOUS_SLOT.to_string(), 0),
    };

    let opcode_token = tokens.get(opcode_idx).ok_or_else(|| {
        SpannedError::new("missing opcode after destination", Span::new(0, 0))
    })?;

    let opcode = match opcode_token {
        Token::Literal(s) => s.clone(),
        _ => {
            return Err(SpannedError::new(
                "opcode must be a bare identifier, not a property reference or array",
                Span::new(0, 0),
            ))
        }
    };

    let mut args: Vec<Arg> = tokens[opcode_idx + 1..].iter().map(detach).collect();
    if args.is_empty() {
        args.push(Arg::implicit());
    }

    Ok(Instruction {
        opcode,
        destination,
        args,
        line: line_no,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_parses_to_none() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("   ", 1).unwrap(), None);
        assert_eq!(parse_line("# comment", 1).unwrap(), None);
    }

    #[test]
    fn bare_opcode_defaults_destination_to_anonymous() {
        let instr = parse_line("print \"hi\"", 5).unwrap().unwrap();
        assert_eq!(instr.destination, "_");
        assert_eq!(instr.opcode, "print");
        assert_eq!(instr.args, vec![Arg::Literal("hi".into())]);
        assert_eq!(instr.line, 5);
    }

    #[test]
    fn explicit_destination_is_captured() {
        let instr = parse_line("$x let 3", 1).unwrap().unwrap();
        assert_eq!(instr.destination, "x");
        assert_eq!(instr.opcode, "let");
        assert_eq!(instr.args, vec![Arg::Literal("3".into())]);
    }

    #[test]
    fn no_arguments_synthesizes_implicit_underscore() {
        let instr = parse_line("$y print", 1).unwrap().unwrap();
        assert_eq!(instr.args, vec![Arg::PropertyRef("_".into())]);
    }

    #[test]
    fn property_ref_as_opcode_is_an_error() {
        assert!(parse_line("$x $y", 1).is_err());
    }

    #[test]
    fn missing_opcode_after_destination_is_an_error() {
        assert!(parse_line("$x", 1).is_err());
    }

    #[test]
    fn nested_arrays_become_arg_lists() {
        let instr = parse_line("$x let [1 2 $z]", 1).unwrap().unwrap();
        assert_eq!(
            instr.args,
            vec![Arg::List(vec![
                Arg::Literal("1".into()),
                Arg::Literal("2".into()),
                Arg::PropertyRef("z".into()),
            ])]
        );
    }
}
