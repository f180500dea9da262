//! Subroutine loading and caching (§4.6).
//!
//! Given a bare name, locates a `.gnd` file relative to the script
//! directory, falling back to the embedded standard library, parses it
//! once, and caches the resulting instruction list for the life of the
//! interpreter.

use crate::embedded;
use crate::error::RunError;
use gnd_syntax::{parse_script, Instruction};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Resolves and caches `.gnd` subroutines by name.
pub struct Loader {
    script_dir: PathBuf,
    cache: RefCell<HashMap<String, Rc<[Instruction]>>>,
}

impl Loader {
    /// Subroutines are looked up relative to `script_dir`, falling back to
    /// the embedded standard library.
    pub fn new(script_dir: impl Into<PathBuf>) -> Self {
        Loader {
            script_dir: script_dir.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Loads (or returns the cached) instruction list for subroutine `name`.
    pub fn load(&self, name: &str) -> Result<Rc<[Instruction]>, RunError> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return Ok(Rc::clone(cached));
        }

        let on_disk = self.script_dir.join(format!("{name}.gnd"));
        let instructions = if let Ok(text) = std::fs::read_to_string(&on_disk) {
            self.parse(&on_disk.display().to_string(), &text)?
        } else if let Some(text) = embedded::lookup(name) {
            self.parse(&format!("<embedded>/{name}.gnd"), text)?
        } else {
            return Err(RunError::io(format!(
                "subroutine not found: {name} (checked {} and embedded asset {name}.gnd)",
                on_disk.display()
            )));
        };

        let rc: Rc<[Instruction]> = Rc::from(instructions.into_boxed_slice());
        self.cache.borrow_mut().insert(name.to_string(), Rc::clone(&rc));
        Ok(rc)
    }

    fn parse(&self, source: &str, text: &str) -> Result<Vec<Instruction>, RunError> {
        parse_script(source, text).map_err(RunError::parse)
    }

    /// The directory on-disk subroutines are resolved relative to.
    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_caches_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greet.gnd");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "$m concat \"Hello, \" $_").unwrap();
        writeln!(file, "return $m").unwrap();

        let loader = Loader::new(dir.path());
        let first = loader.load("greet").unwrap();
        let second = loader.load("greet").unwrap();
        assert_eq!(first.len(), 2);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn falls_back_to_embedded_stdlib() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::new(dir.path());
        let instrs = loader.load("identity").unwrap();
        assert_eq!(instrs.len(), 1);
    }

    #[test]
    fn missing_subroutine_reports_both_probed_locations() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::new(dir.path());
        let err = loader.load("nowhere").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nowhere.gnd"));
        assert!(msg.contains("embedded"));
    }
}
