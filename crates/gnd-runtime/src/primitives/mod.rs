//! The core primitive set (§4.8): control flow, structural, output,
//! arithmetic, and string transforms.

pub mod control;
pub mod data;
pub mod io;
pub mod math;
pub mod strings;

use crate::registry::Registry;
use std::rc::Rc;

/// Builds a registry with every core primitive registered.
pub fn build_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(Rc::new(control::Let));
    registry.register(Rc::new(control::Return));
    registry.register(Rc::new(control::Exit));
    registry.register(Rc::new(control::Throw));
    registry.register(Rc::new(control::Code));
    registry.register(Rc::new(control::Exec));
    registry.register(Rc::new(data::Concat));
    registry.register(Rc::new(data::Eq));
    registry.register(Rc::new(data::First));
    registry.register(Rc::new(io::Print));
    registry.register(Rc::new(io::Log));
    registry.register(Rc::new(io::Debug));
    registry.register(Rc::new(io::Info));
    registry.register(Rc::new(io::Warn));
    registry.register(Rc::new(io::Error));
    registry.register(Rc::new(math::Add));
    registry.register(Rc::new(strings::Lowercase));
    registry.register(Rc::new(strings::Uppercase));
    registry.register(Rc::new(strings::Trim));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_every_core_alias() {
        let registry = build_registry();
        for alias in [
            "let", "return", "exit", "throw", "code", "exec", "concat", "eq", "first", "print",
            "log", "debug", "info", "warn", "error", "add", "lowercase", "uppercase", "trim",
        ] {
            assert!(registry.lookup(alias).is_some(), "missing alias: {alias}");
        }
    }

    #[test]
    fn registry_resolves_full_paths() {
        let registry = build_registry();
        assert!(registry.lookup("/gnd/let").is_some());
        assert!(registry.lookup("/gnd/add").is_some());
    }
}
