//! The embedded-asset filesystem: a small bundled standard library of
//! `.gnd` subroutines, compiled into the binary so scripts can reference
//! them even when the script's own directory has no matching file.

use include_dir::{include_dir, Dir};

/// The embedded standard-library subroutine set.
pub static STDLIB: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../../assets/stdlib");

/// Looks up `<name>.gnd` in the embedded asset set, returning its source text.
pub fn lookup(name: &str) -> Option<&'static str> {
    let filename = format!("{name}.gnd");
    STDLIB.get_file(&filename).and_then(|f| f.contents_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_bundled() {
        assert!(lookup("identity").is_some());
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(lookup("does-not-exist-anywhere").is_none());
    }
}
