#![cfg_attr(docsrs, feature(doc_cfg))]

//! # gnd-runtime
//!
//! The tree-walking interpreter for the gnd language: runtime values,
//! scope binding, property-reference resolution, the primitive registry,
//! the subroutine loader, the dispatch loop, and the logging sink.
//!
//! ## Module map
//!
//! - [`value`] — the untyped runtime [`Value`](value::Value), including
//!   the four control-flow sentinels
//! - [`scope`] — the per-frame binding map
//! - [`resolve`] — property-reference resolution against a scope
//! - [`registry`] — the primitive registry and short-name aliasing
//! - [`primitives`] — the core primitive set (`let`, `return`, `exit`,
//!   `code`, `exec`, `concat`, `eq`, `first`, `print`, the logging
//!   family, `add`, and the string transforms)
//! - [`subroutine`] — the `.gnd` subroutine loader and cache
//! - [`embedded`] — the bundled standard-library asset set
//! - [`interpreter`] — the dispatch loop and `HandleCodeResult`
//! - [`logger`] — the process-wide `[<LEVEL>]: <message>` sink
//! - [`error`] — the error taxonomy and `[source]: context: inner` decoration

pub mod embedded;
pub mod error;
pub mod interpreter;
pub mod logger;
pub mod primitives;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod subroutine;
pub mod value;

pub use error::{ErrorKind, RunError};
pub use interpreter::{BlockOutcome, Interpreter};
pub use scope::Scope;
pub use value::Value;
