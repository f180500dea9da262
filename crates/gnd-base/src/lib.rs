#![cfg_attr(docsrs, feature(doc_cfg))]

//! # gnd-base
//!
//! Pure structural atoms shared by the rest of the gnd workspace.
//!
//! This crate provides the foundational types the lexer, parser, and
//! interpreter build on:
//!
//! - [`Arena`] — bump allocation for tokens produced while parsing a line
//! - [`Interner`]/[`Symbol`] — string interning for O(1) slot-name comparison
//! - [`Span`] — source location tracking
//! - [`SpannedError`]/[`Result`] — errors with source positions
//!
//! # Design Principles
//!
//! This crate knows nothing about the language's grammar, opcode dispatch,
//! or runtime values. It provides only generic, reusable infrastructure
//! that higher-level crates build upon.

pub mod arena;
pub mod error;
pub mod intern;
pub mod span;

pub use arena::Arena;
pub use error::{Result, SpannedError};
pub use intern::{Interner, Symbol, SymbolEq};
pub use span::Span;
