//! The structural primitives: `concat`, `eq`, `first`.

use crate::error::RunError;
use crate::registry::Primitive;
use crate::value::Value;

pub struct Concat;
impl Primitive for Concat {
    fn name(&self) -> &str {
        "/gnd/concat"
    }
    fn execute(&self, mut args: Vec<Value>) -> Result<Value, RunError> {
        if args.is_empty() {
            return Err(RunError::arity("concat requires at least 1 argument"));
        }
        if args.len() == 1 {
            return Ok(args.remove(0));
        }
        if matches!(args[0], Value::List(_)) {
            let mut flat = Vec::new();
            for arg in args {
                match arg {
                    Value::List(items) => flat.extend(items),
                    scalar => flat.push(scalar),
                }
            }
            Ok(Value::List(flat))
        } else {
            let joined = args.iter().map(|v| v.to_string()).collect::<String>();
            Ok(Value::Str(joined))
        }
    }
}

pub struct Eq;
impl Primitive for Eq {
    fn name(&self) -> &str {
        "/gnd/eq"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        if args.len() < 2 {
            return Err(RunError::arity("eq requires at least 2 arguments"));
        }
        let all_equal = args.windows(2).all(|pair| pair[0] == pair[1]);
        Ok(Value::Bool(all_equal))
    }
}

pub struct First;
impl Primitive for First {
    fn name(&self) -> &str {
        "/gnd/first"
    }
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError> {
        let Some(first) = args.into_iter().next() else {
            return Err(RunError::arity("first requires at least 1 argument"));
        };
        match first {
            Value::List(items) => items
                .into_iter()
                .next()
                .ok_or_else(|| RunError::type_error("first: list is empty")),
            scalar => Ok(scalar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_single_argument_is_unchanged() {
        assert_eq!(
            Concat.execute(vec![Value::Int(5)]).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn concat_strings_joins_stringified_args() {
        let result = Concat
            .execute(vec![Value::Str("foo".into()), Value::Str("bar".into())])
            .unwrap();
        assert_eq!(result, Value::Str("foobar".into()));
    }

    #[test]
    fn concat_lists_flattens_scalars_and_lists() {
        let result = Concat
            .execute(vec![
                Value::List(vec![Value::Int(1)]),
                Value::Int(2),
                Value::List(vec![Value::Int(3), Value::Int(4)]),
            ])
            .unwrap();
        assert_eq!(
            result,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)])
        );
    }

    #[test]
    fn eq_is_reflexive_symmetric_and_nary() {
        assert_eq!(
            Eq.execute(vec![Value::Int(1), Value::Int(1), Value::Int(1)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            Eq.execute(vec![Value::Int(1), Value::Int(2)]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn eq_requires_at_least_two_arguments() {
        assert!(Eq.execute(vec![Value::Int(1)]).is_err());
    }

    #[test]
    fn first_on_nonempty_list_returns_first_element() {
        let result = First
            .execute(vec![Value::List(vec![Value::Int(1), Value::Int(2)])])
            .unwrap();
        assert_eq!(result, Value::Int(1));
    }

    #[test]
    fn first_on_empty_list_is_an_error() {
        assert!(First.execute(vec![Value::List(vec![])]).is_err());
    }

    #[test]
    fn first_on_scalar_returns_it_unchanged() {
        assert_eq!(First.execute(vec![Value::Int(9)]).unwrap(), Value::Int(9));
    }
}
