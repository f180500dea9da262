//! Output primitives: `print` and the `log`/`debug`/`info`/`warn`/`error` family.

use crate::error::RunError;
use crate::registry::Primitive;
use crate::value::Value;
use std::io::Write;

pub struct Print;
impl Primitive for Print {
    fn name(&self) -> &str {
        "/gnd/print"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        let text = args.iter().map(|v| v.to_string()).collect::<String>();
        print!("{text}");
        std::io::stdout().flush().ok();
        Ok(Value::Str(text))
    }
}

fn join_message(parts: &[Value]) -> String {
    parts
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit(level: log::Level, message: &str) {
    log::log!(level, "{}", message);
}

fn parse_level(name: &str) -> Result<log::Level, RunError> {
    match name.to_lowercase().as_str() {
        "debug" => Ok(log::Level::Debug),
        "info" => Ok(log::Level::Info),
        "warn" | "warning" => Ok(log::Level::Warn),
        "error" => Ok(log::Level::Error),
        other => Err(RunError::type_error(format!("log: unknown level: {other}"))),
    }
}

pub struct Log;
impl Primitive for Log {
    fn name(&self) -> &str {
        "/gnd/log"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        if args.len() < 2 {
            return Err(RunError::arity("log requires at least 2 arguments"));
        }
        let level = parse_level(&args[0].to_string())?;
        let message = join_message(&args[1..]);
        emit(level, &message);
        Ok(Value::Str(message))
    }
}

macro_rules! leveled_primitive {
    ($struct_name:ident, $path:literal, $level:expr) => {
        pub struct $struct_name;
        impl Primitive for $struct_name {
            fn name(&self) -> &str {
                $path
            }
            fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
                if args.is_empty() {
                    return Err(RunError::arity(concat!(
                        stringify!($struct_name),
                        " requires at least 1 argument"
                    )));
                }
                let message = join_message(&args);
                emit($level, &message);
                Ok(Value::Str(message))
            }
        }
    };
}

leveled_primitive!(Debug, "/gnd/debug", log::Level::Debug);
leveled_primitive!(Info, "/gnd/info", log::Level::Info);
leveled_primitive!(Warn, "/gnd/warn", log::Level::Warn);
leveled_primitive!(Error, "/gnd/error", log::Level::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_concatenates_without_separator() {
        let result = Print
            .execute(vec![Value::Str("foo".into()), Value::Str("bar".into())])
            .unwrap();
        assert_eq!(result, Value::Str("foobar".into()));
    }

    #[test]
    fn log_requires_level_and_message() {
        assert!(Log.execute(vec![Value::Str("info".into())]).is_err());
    }

    #[test]
    fn log_rejects_unknown_level() {
        assert!(Log
            .execute(vec![Value::Str("verbose".into()), Value::Str("hi".into())])
            .is_err());
    }

    #[test]
    fn log_joins_message_parts_with_spaces() {
        let result = Log
            .execute(vec![
                Value::Str("info".into()),
                Value::Str("a".into()),
                Value::Str("b".into()),
            ])
            .unwrap();
        assert_eq!(result, Value::Str("a b".into()));
    }

    #[test]
    fn warn_returns_joined_message() {
        let result = Warn
            .execute(vec![Value::Str("careful".into()), Value::Str("now".into())])
            .unwrap();
        assert_eq!(result, Value::Str("careful now".into()));
    }

    #[test]
    fn debug_requires_at_least_one_argument() {
        assert!(Debug.execute(vec![]).is_err());
    }
}
