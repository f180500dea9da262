//! The untyped runtime datum every slot, argument, and primitive result shares.
//!
//! `Value` also carries the four control-flow sentinels (`Return`, `Exit`,
//! `Code`, `Exec`) as ordinary variants rather than as distinct error types.
//! The dispatch loop in [`crate::interpreter`] inspects the tag on every
//! primitive result and decides whether to store it in a slot or act on it;
//! a sentinel is never stored raw (invariant I5 of the block execution
//! model — see [`crate::interpreter::run_block`]).

use gnd_syntax::Instruction;
use std::fmt;
use std::rc::Rc;

/// The runtime value type.
///
/// `Routine` holds a first-class instruction list — produced by `code`,
/// `exec`, or the subroutine loader — as a reference-counted slice so it
/// can be freely cloned into slots without re-parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
    /// String-keyed map, in insertion order (the language leaves iteration
    /// order unspecified; insertion order is the simplest implementation).
    Map(Vec<(String, Value)>),
    /// A first-class instruction list.
    Routine(Rc<[Instruction]>),
    /// Sentinel produced by `return`; consumed by the enclosing block.
    Return(Box<Value>),
    /// Sentinel produced by `exit`; propagates through every frame.
    Exit(i32),
    /// Sentinel produced by `code`; its targets are resolved by
    /// [`crate::interpreter::handle_code_result`].
    Code(Vec<Value>),
    /// Sentinel produced by `exec`; carries the routine to invoke and its
    /// already-resolved arguments.
    Exec(Box<Value>, Vec<Value>),
}

impl Value {
    /// A short name for this value's runtime shape, used in type-error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Routine(_) => "routine",
            Value::Return(_) => "return-sentinel",
            Value::Exit(_) => "exit-sentinel",
            Value::Code(_) => "code-sentinel",
            Value::Exec(..) => "exec-sentinel",
        }
    }

    /// `true` for any of the four control-flow sentinels.
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Value::Return(_) | Value::Exit(_) | Value::Code(_) | Value::Exec(..)
        )
    }
}

impl fmt::Display for Value {
    /// Stringify rules shared by `print`, `log`/`debug`/`info`/`warn`/`error`,
    /// and anywhere a value must be joined into text:
    ///
    /// - `nil` → `"nil"`
    /// - scalars → canonical base-10 / `true`/`false` form
    /// - lists → `[ e1 e2 ... ]`, quoting any element whose rendering contains whitespace
    /// - maps → `{ k1 v1 k2 v2 ... }`, same quoting rule
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for item in items {
                    write!(f, " {}", quote_if_needed(&item.to_string()))?;
                }
                write!(f, " ]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (k, v) in entries {
                    write!(f, " {} {}", quote_if_needed(k), quote_if_needed(&v.to_string()))?;
                }
                write!(f, " }}")
            }
            Value::Routine(_) => write!(f, "<routine>"),
            Value::Return(_) | Value::Exit(_) | Value::Code(_) | Value::Exec(..) => {
                write!(f, "<{}>", self.type_name())
            }
        }
    }
}

/// Formats a float per the `add` normalization rule: always base-10,
/// omitting a trailing `.0` when the value is integral.
pub fn format_float(x: f64) -> String {
    if x.fract() == 0.0 && x.is_finite() {
        format!("{}", x as i64)
    } else {
        format!("{x}")
    }
}

fn quote_if_needed(s: &str) -> String {
    if s.chars().any(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}
