//! Error taxonomy and `[source]: context: inner` decoration.
//!
//! Control-flow (`return`/`exit`) is modeled as [`crate::value::Value`]
//! sentinels, not as an error kind here — only genuine failures travel
//! through `Result`.

use std::fmt;

/// The kind of a runtime error, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Binding,
    Dispatch,
    Arity,
    Type,
    Io,
    UserThrow,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Lex => "LexError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Binding => "BindingError",
            ErrorKind::Dispatch => "DispatchError",
            ErrorKind::Arity => "ArityError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Io => "IOError",
            ErrorKind::UserThrow => "UserThrow",
        }
    }
}

/// A runtime error, decorated with the call frames it unwound through.
///
/// Each frame that forwards an error calls [`RunError::wrap`], prepending
/// `[<source>]: <context>:` to the message — innermost context first.
#[derive(Debug, Clone)]
pub struct RunError {
    pub kind: ErrorKind,
    message: String,
}

impl RunError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn lex(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lex, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn binding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Binding, message)
    }

    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Dispatch, message)
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Arity, message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn user_throw(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserThrow, message)
    }

    /// Prepends `[<source>]: <context>: ` to this error's message, keeping its kind.
    pub fn wrap(self, source: &str, context: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("[{source}]: {context}: {}", self.message),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RunError {}

impl RunError {
    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

pub type Result<T> = std::result::Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_prepends_source_and_context() {
        let err = RunError::type_error("not a number").wrap("/gnd/add", "Dispatch");
        assert_eq!(err.to_string(), "[/gnd/add]: Dispatch: not a number");
    }

    #[test]
    fn wrap_is_additive_innermost_first() {
        let err = RunError::io("file not found")
            .wrap("greet", "LoadSubroutine")
            .wrap("main.gnd", "Dispatch");
        assert_eq!(
            err.to_string(),
            "[main.gnd]: Dispatch: [greet]: LoadSubroutine: file not found"
        );
    }

    #[test]
    fn kind_is_preserved_through_wrapping() {
        let err = RunError::arity("wrong arity").wrap("x", "y");
        assert_eq!(err.kind, ErrorKind::Arity);
    }
}
