//! Property-reference resolution (§4.4): turn an unresolved [`Arg`] tree
//! into a fully-resolved [`Value`] tree against a [`Scope`].
//!
//! The tokenizer never interprets a bare token numerically, so every
//! `Arg::Literal` resolves to `Value::Str`; primitives that expect numbers
//! parse the string themselves (see [`crate::primitives::math`]).

use crate::error::RunError;
use crate::scope::Scope;
use crate::value::Value;
use gnd_syntax::Arg;

/// Resolves a single argument against `scope`.
///
/// Scalars pass through unchanged as strings; a `PropertyRef` resolves to
/// its binding or fails with a binding error; lists resolve element-wise,
/// bottom-up, and a failure in any element propagates. The result never
/// contains a `PropertyRef` anywhere in its structure.
pub fn resolve_arg(arg: &Arg, scope: &Scope) -> Result<Value, RunError> {
    match arg {
        Arg::Literal(s) => Ok(Value::Str(s.clone())),
        Arg::PropertyRef(name) => scope
            .get(name)
            .cloned()
            .ok_or_else(|| RunError::binding(format!("undefined property: {name}"))),
        Arg::List(items) => {
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                resolved.push(resolve_arg(item, scope)?);
            }
            Ok(Value::List(resolved))
        }
    }
}

/// Resolves an entire argument list against `scope`, in source order.
pub fn resolve_args(args: &[Arg], scope: &Scope) -> Result<Vec<Value>, RunError> {
    args.iter().map(|a| resolve_arg(a, scope)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_resolves_to_string_verbatim() {
        let scope = Scope::new();
        assert_eq!(
            resolve_arg(&Arg::Literal("3".into()), &scope).unwrap(),
            Value::Str("3".into())
        );
    }

    #[test]
    fn property_ref_resolves_to_binding() {
        let mut scope = Scope::new();
        scope.set("x", Value::Int(42));
        assert_eq!(
            resolve_arg(&Arg::PropertyRef("x".into()), &scope).unwrap(),
            Value::Int(42)
        );
    }

    #[test]
    fn unbound_property_ref_is_binding_error() {
        let scope = Scope::new();
        let err = resolve_arg(&Arg::PropertyRef("missing".into()), &scope).unwrap_err();
        assert!(err.to_string().contains("undefined property: missing"));
    }

    #[test]
    fn nested_list_resolves_bottom_up() {
        let mut scope = Scope::new();
        scope.set("z", Value::Bool(true));
        let arg = Arg::List(vec![
            Arg::Literal("1".into()),
            Arg::List(vec![Arg::PropertyRef("z".into())]),
        ]);
        let resolved = resolve_arg(&arg, &scope).unwrap();
        assert_eq!(
            resolved,
            Value::List(vec![
                Value::Str("1".into()),
                Value::List(vec![Value::Bool(true)])
            ])
        );
    }

    #[test]
    fn failure_in_nested_element_propagates() {
        let scope = Scope::new();
        let arg = Arg::List(vec![Arg::PropertyRef("nope".into())]);
        assert!(resolve_arg(&arg, &scope).is_err());
    }
}
