//! Number parsing (§4.8, Number parsing rules) and the `add` primitive.

use crate::error::RunError;
use crate::registry::Primitive;
use crate::value::{format_float, Value};

/// A parsed number: either an integer or a float, depending on which
/// syntax the source text used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }
}

/// Parses a number per the rules: optional leading sign; a `0x`/`0X`
/// prefix selects base-16 integer parsing; a `.` or an exponent forces
/// floating point; leading zeros are accepted; an empty string is an error.
pub fn parse_number_text(text: &str) -> Result<Number, RunError> {
    if text.is_empty() {
        return Err(RunError::type_error("empty string is not a number"));
    }

    let (sign, rest) = match text.as_bytes()[0] {
        b'+' => (1i64, &text[1..]),
        b'-' => (-1i64, &text[1..]),
        _ => (1i64, text),
    };

    if rest.is_empty() {
        return Err(RunError::type_error(format!("not a number: {text}")));
    }

    if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        let n = i64::from_str_radix(hex, 16)
            .map_err(|_| RunError::type_error(format!("not a number: {text}")))?;
        return Ok(Number::Int(sign * n));
    }

    let is_float = rest.contains('.') || rest.contains('e') || rest.contains('E');
    if is_float {
        let x: f64 = rest
            .parse()
            .map_err(|_| RunError::type_error(format!("not a number: {text}")))?;
        Ok(Number::Float(sign as f64 * x))
    } else {
        let n: i64 = rest
            .parse()
            .map_err(|_| RunError::type_error(format!("not a number: {text}")))?;
        Ok(Number::Int(sign * n))
    }
}

pub struct Add;
impl Primitive for Add {
    fn name(&self) -> &str {
        "/gnd/add"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        let [a, b] = args.as_slice() else {
            return Err(RunError::arity("add requires exactly 2 arguments"));
        };
        let x = parse_number_text(&a.to_string())?;
        let y = parse_number_text(&b.to_string())?;
        Ok(Value::Float(x.as_f64() + y.as_f64()))
    }
}
