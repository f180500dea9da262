//! Single-argument string transforms: `lowercase`, `uppercase`, `trim`.

use crate::error::RunError;
use crate::registry::Primitive;
use crate::value::Value;

macro_rules! string_transform {
    ($struct_name:ident, $path:literal, $transform:expr) => {
        pub struct $struct_name;
        impl Primitive for $struct_name {
            fn name(&self) -> &str {
                $path
            }
            fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
                let [value] = args.as_slice() else {
                    return Err(RunError::arity(concat!(
                        stringify!($struct_name),
                        " requires exactly 1 argument"
                    )));
                };
                let transform: fn(&str) -> String = $transform;
                Ok(Value::Str(transform(&value.to_string())))
            }
        }
    };
}

string_transform!(Lowercase, "/gnd/lowercase", |s| s.to_lowercase());
string_transform!(Uppercase, "/gnd/uppercase", |s| s.to_uppercase());
string_transform!(Trim, "/gnd/trim", |s| s.trim().to_string());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_lowers_case() {
        assert_eq!(
            Lowercase.execute(vec![Value::Str("FOO".into())]).unwrap(),
            Value::Str("foo".into())
        );
    }

    #[test]
    fn uppercase_uppers_case() {
        assert_eq!(
            Uppercase.execute(vec![Value::Str("foo".into())]).unwrap(),
            Value::Str("FOO".into())
        );
    }

    #[test]
    fn trim_strips_surrounding_whitespace() {
        assert_eq!(
            Trim.execute(vec![Value::Str("  foo  ".into())]).unwrap(),
            Value::Str("foo".into())
        );
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert!(Lowercase.execute(vec![]).is_err());
        assert!(Uppercase
            .execute(vec![Value::Int(1), Value::Int(2)])
            .is_err());
    }
}
