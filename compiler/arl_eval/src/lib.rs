//! Arl Eval - Interpreter for the Arlang scripting language.
//!
//! This crate provides the line-oriented interpreter for Arlang
//! scripts: expressions are parsed and evaluated in a single pass over
//! the source characters, with no tokenizer and no syntax tree.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Script` / `Interpreter`: Program-counter execution of statement lines
//! - `evaluate`: Single-pass precedence-climbing expression evaluation
//! - `Environment`: Flat global variable store
//! - `arithmetic` / `compare`: Direct enum-based operator dispatch
//! - `Value`: Dynamically typed runtime values with `Heap`-shared
//!   strings and tables
//!
//! Malformed input never aborts a run: unparseable expressions evaluate to
//! `Nil`, and type mismatches degrade with a warning on the
//! `DiagnosticSink`.

mod cursor;
mod diagnostics;
mod environment;
mod eval;
mod interpreter;
mod operators;
mod print_handler;
pub mod value;

pub use cursor::Cursor;
pub use diagnostics::{BufferSink, DiagnosticSink, StderrSink};
pub use environment::Environment;
pub use eval::evaluate;
pub use interpreter::{Interpreter, Script};
pub use operators::{arithmetic, compare, ArithOp, CompareOp};
pub use print_handler::{BufferPrintHandler, PrintHandlerImpl, StdoutPrintHandler};
pub use value::{Heap, Value};

#[cfg(test)]
mod tests;
