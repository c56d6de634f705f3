//! CLI command implementations.

mod run;

pub use run::{run_file, run_source};
