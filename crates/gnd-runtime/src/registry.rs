//! The primitive registry (§4.5): opcode path → [`Primitive`], with
//! short-name aliasing.
//!
//! Every primitive is registered under its full path (e.g. `/gnd/let`)
//! and additionally aliased under the final path segment (`let`). Lookup
//! order against the registry itself is exact-path first, then alias;
//! falling through to the subroutine loader is the dispatch loop's job
//! (see [`crate::interpreter`]).

use crate::error::RunError;
use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// A built-in operation.
pub trait Primitive {
    /// The primitive's full opcode path, e.g. `/gnd/let`.
    fn name(&self) -> &str;

    /// Executes the primitive against already-resolved arguments.
    fn execute(&self, args: Vec<Value>) -> Result<Value, RunError>;
}

/// Maps opcode paths to primitives, with a short-name alias table.
pub struct Registry {
    by_path: HashMap<String, Rc<dyn Primitive>>,
    aliases: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            by_path: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Registers a primitive under its full path, aliasing the final
    /// path segment (the part after the last `/`) to that path.
    pub fn register(&mut self, primitive: Rc<dyn Primitive>) {
        let path = primitive.name().to_string();
        let short = path.rsplit('/').next().unwrap_or(&path).to_string();
        self.aliases.entry(short).or_insert_with(|| path.clone());
        self.by_path.insert(path, primitive);
    }

    /// Resolves an opcode (full path or short alias) to its registered
    /// primitive, if any.
    pub fn lookup(&self, opcode: &str) -> Option<&Rc<dyn Primitive>> {
        if let Some(p) = self.by_path.get(opcode) {
            return Some(p);
        }
        let full = self.aliases.get(opcode)?;
        self.by_path.get(full)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
