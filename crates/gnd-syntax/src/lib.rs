#![cfg_attr(docsrs, feature(doc_cfg))]

//! # gnd-syntax
//!
//! Lexer, instruction parser, and script parser for the gnd language.
//!
//! Three stages, leaves first:
//!
//! - [`token`] — turns one line into a flat token sequence (quoted
//!   strings, bare identifiers, property references, nested arrays)
//! - [`instruction`] — turns a token sequence into an [`Instruction`]
//!   (opcode, destination slot, argument list)
//! - [`script`] — splits a script blob by line and assembles the full
//!   instruction list, with `source:line` error decoration
//!
//! This crate has no knowledge of runtime values, primitive dispatch, or
//! scope binding — it only knows how to turn text into `Instruction`s.

pub mod instruction;
pub mod script;
pub mod token;

pub use instruction::{parse_line, Arg, Instruction, ANONYMOUS_SLOT};
pub use script::parse_script;
pub use token::{tokenize, Token};
