//! The primitives that drive control flow: `let`, `return`, `exit`,
//! `throw`, `code`, `exec`. Each yields either a plain `Value` or one of
//! the four sentinel variants the dispatch loop (see
//! [`crate::interpreter`]) interprets specially.

use crate::error::RunError;
use crate::primitives::math::{parse_number_text, Number};
use crate::registry::Primitive;
use crate::value::Value;

pub struct Let;
impl Primitive for Let {
    fn name(&self) -> &str {
        "/gnd/let"
    }
    fn execute(&self, mut args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Err(RunError::arity("let requires at least 1 argument"));
        }
        Ok(args.remove(0))
    }
}

pub struct Return;
impl Primitive for Return {
    fn name(&self) -> &str {
        "/gnd/return"
    }
    fn execute(&self, mut args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Err(RunError::arity("return requires exactly 1 argument"));
        }
        if args.len() > 1 {
            log::warn!("return: ignoring {} extra argument(s)", args.len() - 1);
        }
        Ok(Value::Return(Box::new(args.remove(0))))
    }
}

pub struct Exit;
impl Primitive for Exit {
    fn name(&self) -> &str {
        "/gnd/exit"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        match args.as_slice() {
            [] => Ok(Value::Exit(1)),
            [code] => {
                let n = parse_number_text(&code.to_string())
                    .map_err(|_| RunError::type_error(format!("exit: not an integer: {code}")))?;
                match n {
                    Number::Int(i) => Ok(Value::Exit(i as i32)),
                    Number::Float(_) => Err(RunError::type_error(format!(
                        "exit: not an integer: {code}"
                    ))),
                }
            }
            _ => Err(RunError::arity("exit takes at most 1 argument")),
        }
    }
}

pub struct Throw;
impl Primitive for Throw {
    fn name(&self) -> &str {
        "/gnd/throw"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Err(RunError::arity("throw requires at least 1 argument"));
        }
        let message = args
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Err(RunError::user_throw(message))
    }
}

pub struct Code;
impl Primitive for Code {
    fn name(&self) -> &str {
        "/gnd/code"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Ok(Value::Code(vec![Value::Str("@".to_string())]));
        }
        for arg in &args {
            match arg {
                Value::Str(_) | Value::Routine(_) => {}
                other => {
                    return Err(RunError::type_error(format!(
                        "code: invalid target type: {}",
                        other.type_name()
                    )))
                }
            }
        }
        Ok(Value::Code(args))
    }
}

pub struct Exec;
impl Primitive for Exec {
    fn name(&self) -> &str {
        "/gnd/exec"
    }
    fn execute(&self, mut args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Err(RunError::arity("exec requires at least 1 argument"));
        }
        let routine = args.remove(0);
        match &routine {
            Value::Str(_) | Value::Routine(_) => Ok(Value::Exec(Box::new(routine), args)),
            other => Err(RunError::type_error(format!(
                "exec: first argument must be a routine or subroutine name, got {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn let_returns_first_argument() {
        let result = Let.execute(vec![Value::Int(1), Value::Int(2)]).unwrap();
        assert_eq!(result, Value::Int(1));
    }

    #[test]
    fn let_with_no_args_is_arity_error() {
        assert!(Let.execute(vec![]).is_err());
    }

    #[test]
    fn return_wraps_value_in_sentinel() {
        let result = Return.execute(vec![Value::Str("done".into())]).unwrap();
        assert_eq!(result, Value::Return(Box::new(Value::Str("done".into()))));
    }

    #[test]
    fn return_with_no_args_is_arity_error() {
        assert!(Return.execute(vec![]).is_err());
    }

    #[test]
    fn exit_with_no_args_defaults_to_one() {
        assert_eq!(Exit.execute(vec![]).unwrap(), Value::Exit(1));
    }

    #[test]
    fn exit_parses_integer_argument() {
        assert_eq!(
            Exit.execute(vec![Value::Str("2".into())]).unwrap(),
            Value::Exit(2)
        );
    }

    #[test]
    fn exit_rejects_non_integer_argument() {
        assert!(Exit.execute(vec![Value::Str("nope".into())]).is_err());
    }

    #[test]
    fn exit_rejects_fractional_argument() {
        assert!(Exit.execute(vec![Value::Str("2.5".into())]).is_err());
    }

    #[test]
    fn exit_rejects_exponent_argument() {
        assert!(Exit.execute(vec![Value::Str("1e3".into())]).is_err());
    }

    #[test]
    fn throw_joins_args_with_spaces() {
        let err = Throw
            .execute(vec![Value::Str("bad".into()), Value::Str("value".into())])
            .unwrap_err();
        assert_eq!(err.to_string(), "bad value");
    }

    #[test]
    fn code_with_no_args_targets_self() {
        assert_eq!(
            Code.execute(vec![]).unwrap(),
            Value::Code(vec![Value::Str("@".into())])
        );
    }

    #[test]
    fn code_rejects_invalid_target_type() {
        assert!(Code.execute(vec![Value::Int(1)]).is_err());
    }

    #[test]
    fn exec_packages_routine_and_remaining_args() {
        let result = Exec
            .execute(vec![Value::Str("greet".into()), Value::Str("World".into())])
            .unwrap();
        assert_eq!(
            result,
            Value::Exec(
                Box::new(Value::Str("greet".into())),
                vec![Value::Str("World".into())]
            )
        );
    }

    #[test]
    fn exec_rejects_non_routine_first_argument() {
        assert!(Exec.execute(vec![Value::Int(1)]).is_err());
    }
}
