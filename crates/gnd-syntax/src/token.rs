//! Stage 1: turn one physical line into a flat sequence of tokens.
//!
//! Tokens are allocated out of a [`gnd_base::Arena`] so that nested arrays
//! can hold slices of sibling tokens without reference counting. The arena
//! is owned by the caller (typically the instruction parser) and can be
//! [`reset`](gnd_base::Arena::reset) between lines for REPL-style reuse.

use gnd_base::{Arena, Span, SpannedError};

/// A single lexical token produced from one line of source.
///
/// `Literal` covers both quoted strings and bare identifiers — the
/// instruction parser decides which bare token plays which grammatical
/// role (opcode, destination, argument).
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A quoted string (escapes already decoded) or a bare word.
    Literal(String),
    /// A `$name` reference to a scope slot.
    PropertyRef(String),
    /// A bracketed `[ ... ]` group, tokenized recursively.
    Array(&'a [Token<'a>]),
}

/// Tokenizes one line of source into a flat token sequence.
///
/// Returns an empty vector for blank lines and full-line comments (a `#`
/// as the first non-whitespace character).
pub fn tokenize<'a>(line: &str, arena: &'a Arena<Token<'a>>) -> Result<Vec<Token<'a>>, SpannedError> {
    if line.trim_start().starts_with('#') {
        return Ok(Vec::new());
    }
    let chars: Vec<char> = line.chars().collect();
    let mut cursor = Cursor {
        chars: &chars,
        pos: 0,
    };
    let tokens = cursor.tokenize_until(arena, None)?;
    Ok(tokens)
}

struct Cursor<'src> {
    chars: &'src [char],
    pos: usize,
}

impl<'src> Cursor<'src> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Tokenizes until end of input, or until the closing bracket of an
    /// enclosing array (`closing` is `Some(']')` in that case).
    fn tokenize_until<'a>(
        &mut self,
        arena: &'a Arena<Token<'a>>,
        closing: Option<char>,
    ) -> Result<Vec<Token<'a>>, SpannedError> {
        let mut tokens = Vec::new();
        loop {
            match self.peek() {
                None => {
                    if closing.is_some() {
                        return Err(SpannedError::new(
                            "unterminated array: missing ']'",
                            Span::new(self.pos, self.pos),
                        ));
                    }
                    return Ok(tokens);
                }
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some(']') => {
                    if closing == Some(']') {
                        self.bump();
                        return Ok(tokens);
                    }
                    return Err(SpannedError::new(
                        "unmatched ']'",
                        Span::new(self.pos, self.pos + 1),
                    ));
                }
                Some('[') => {
                    let start = self.pos;
                    self.bump();
                    let inner = self.tokenize_until(arena, Some(']'))?;
                    let slice = arena.alloc_slice(inner);
                    tokens.push(Token::Array(slice));
                    let _ = start;
                }
                Some('"') => {
                    let start = self.pos;
                    self.bump();
                    let s = self.read_quoted(start)?;
                    tokens.push(Token::Literal(s));
                }
                Some('$') => {
                    let start = self.pos;
                    self.bump();
                    let name = self.read_bare();
                    if name.is_empty() {
                        return Err(SpannedError::new(
                            "property reference has no name after '$'",
                            Span::new(start, self.pos),
                        ));
                    }
                    tokens.push(Token::PropertyRef(name));
                }
                Some(_) => {
                    let bare = self.read_bare();
                    tokens.push(Token::Literal(bare));
                }
            }
        }
    }

    /// Reads the body of a quoted string; `self.pos` is just past the opening `"`.
    fn read_quoted(&mut self, start: usize) -> Result<String, SpannedError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(SpannedError::new(
                        "unterminated string literal",
                        Span::new(start, self.pos),
                    ));
                }
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => {
                        return Err(SpannedError::new(
                            "unterminated escape sequence",
                            Span::new(start, self.pos),
                        ));
                    }
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// Reads a maximal run of characters that aren't whitespace, quotes, or brackets.
    fn read_bare(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '"' || c == '[' || c == ']' {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks<'a>(line: &str, arena: &'a Arena<Token<'a>>) -> Vec<Token<'a>> {
        tokenize(line, arena).expect("tokenize")
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        let arena = Arena::new();
        assert_eq!(toks("", &arena), vec![]);
        assert_eq!(toks("   ", &arena), vec![]);
    }

    #[test]
    fn comment_line_yields_no_tokens() {
        let arena = Arena::new();
        assert_eq!(toks("# a comment", &arena), vec![]);
        assert_eq!(toks("   # indented comment", &arena), vec![]);
    }

    #[test]
    fn bare_words_become_literals() {
        let arena = Arena::new();
        assert_eq!(
            toks("let 3", &arena),
            vec![Token::Literal("let".into()), Token::Literal("3".into())]
        );
    }

    #[test]
    fn dollar_prefix_is_property_ref() {
        let arena = Arena::new();
        assert_eq!(
            toks("$x let 3", &arena),
            vec![
                Token::PropertyRef("x".into()),
                Token::Literal("let".into()),
                Token::Literal("3".into())
            ]
        );
    }

    #[test]
    fn quoted_string_decodes_escapes() {
        let arena = Arena::new();
        assert_eq!(
            toks(r#"print "a\nb\t\"c\"""#, &arena),
            vec![
                Token::Literal("print".into()),
                Token::Literal("a\nb\t\"c\"".into())
            ]
        );
    }

    #[test]
    fn unknown_escape_keeps_backslash() {
        let arena = Arena::new();
        assert_eq!(toks(r#""\q""#, &arena), vec![Token::Literal("\\q".into())]);
    }

    #[test]
    fn unterminated_string_is_lex_error() {
        let arena = Arena::new();
        assert!(tokenize(r#"print "oops"#, &arena).is_err());
    }

    #[test]
    fn bare_dollar_with_no_name_is_lex_error() {
        let arena = Arena::new();
        assert!(tokenize("print $", &arena).is_err());
        assert!(tokenize("$ let 1", &arena).is_err());
    }

    #[test]
    fn bare_dollar_before_bracket_is_lex_error() {
        let arena = Arena::new();
        assert!(tokenize("let [$ 1]", &arena).is_err());
    }

    #[test]
    fn nested_array_tokenizes_recursively() {
        let arena = Arena::new();
        let result = toks(r#"$x let [1 2 "three"]"#, &arena);
        match &result[2] {
            Token::Array(inner) => {
                assert_eq!(
                    inner,
                    &[
                        Token::Literal("1".into()),
                        Token::Literal("2".into()),
                        Token::Literal("three".into())
                    ]
                );
            }
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn deeply_nested_arrays_work() {
        let arena = Arena::new();
        let result = toks("let [[1 2] [3 4]]", &arena);
        match &result[1] {
            Token::Array(outer) => {
                assert_eq!(outer.len(), 2);
                for t in *outer {
                    assert!(matches!(t, Token::Array(_)));
                }
            }
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_bracket_is_lex_error() {
        let arena = Arena::new();
        assert!(tokenize("let [1 2", &arena).is_err());
        assert!(tokenize("let 1]", &arena).is_err());
    }
}
