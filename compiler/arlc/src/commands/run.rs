//! The `run` command: load an Arlang script file and execute it.

use arl_eval::{Interpreter, Script};

/// Run an Arlang script file against stdout/stderr.
///
/// An unreadable file reports `Error: Could not open <path>` and returns
/// without running anything; it is not a process failure. Runtime
/// warnings (type mismatches in arithmetic) go to stderr and never stop
/// the run.
pub fn run_file(path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!(target: "arlc", %path, %err, "script open failed");
            println!("Error: Could not open {path}");
            return;
        }
    };
    run_source(&source);
}

/// Execute script text against stdout/stderr.
pub fn run_source(source: &str) {
    let script = Script::from_source(source);
    tracing::debug!(target: "arlc", lines = script.len(), "executing script");
    Interpreter::new().run(&script);
}
