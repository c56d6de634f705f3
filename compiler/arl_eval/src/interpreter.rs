//! Statement executor and block-matching control flow.
//!
//! Scripts execute one line at a time against a program counter; there is
//! no control-flow graph. `if`/`while` locate their matching `else`/`end`
//! by scanning forward on demand, and a stack of loop-start line indices
//! decides whether an `end` rewinds execution (while) or simply pops (if).

use crate::diagnostics::DiagnosticSink;
use crate::environment::Environment;
use crate::eval::evaluate;
use crate::print_handler::PrintHandlerImpl;

/// An ordered, immutable-during-execution sequence of raw script lines.
#[derive(Debug)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// Split source text into lines.
    pub fn from_source(source: &str) -> Self {
        Script {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// Build a script from already-separated lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Script { lines }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The raw text of one line.
    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

/// First whitespace-delimited token of a line; empty for blank lines.
fn leading_keyword(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// The rest of a line after its leading keyword, ready for evaluation.
fn after_keyword<'a>(line: &'a str, keyword: &str) -> &'a str {
    let trimmed = line.trim_start();
    &trimmed[keyword.len()..]
}

/// Find the line index matching the `if`/`while`/`else` opener at
/// `start_pc`.
///
/// Forward scan with a nesting depth starting at 1: a line whose keyword
/// equals the opener's increments depth (a nested block of the *same*
/// kind), `end` decrements and matches at depth 0, and — for `if` openers
/// only — an `else` at depth exactly 1 matches immediately. Nested blocks
/// of the other kind are not depth-counted; an `else` never terminates a
/// `while` scan. An unmatched opener degrades to the last line index
/// (silent best-effort termination, never an error).
fn find_match(script: &Script, start_pc: usize) -> usize {
    let opener = leading_keyword(script.line(start_pc));
    let mut depth = 1usize;
    let mut pc = start_pc + 1;

    while pc < script.len() {
        let keyword = leading_keyword(script.line(pc));
        if keyword == opener {
            depth += 1;
        } else if keyword == "end" {
            depth -= 1;
            if depth == 0 {
                return pc;
            }
        } else if opener == "if" && keyword == "else" && depth == 1 {
            return pc;
        }
        pc += 1;
    }
    pc.saturating_sub(1)
}

/// Statement executor for one script run.
///
/// Owns the variable store, the output handler, the diagnostic sink, and
/// the loop bookkeeping stack. Execution is single-threaded and
/// synchronous; a script that loops forever runs forever.
pub struct Interpreter {
    env: Environment,
    printer: PrintHandlerImpl,
    sink: DiagnosticSink,
    /// Line indices of active `while` loops, innermost on top.
    loop_starts: Vec<usize>,
}

impl Interpreter {
    /// Interpreter wired to stdout and stderr.
    pub fn new() -> Self {
        Self::with_handlers(PrintHandlerImpl::stdout(), DiagnosticSink::stderr())
    }

    /// Interpreter with explicit output and diagnostic destinations.
    pub fn with_handlers(printer: PrintHandlerImpl, sink: DiagnosticSink) -> Self {
        Interpreter {
            env: Environment::new(),
            printer,
            sink,
            loop_starts: Vec::new(),
        }
    }

    /// The variable store (inspection after a run).
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The output handler (capture inspection after a run).
    pub fn printer(&self) -> &PrintHandlerImpl {
        &self.printer
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    /// Execute the script from line 0 to the end.
    ///
    /// The program counter advances by one after each statement unless a
    /// control-flow keyword redirects it. Blank lines and unrecognized
    /// keywords are skipped.
    pub fn run(&mut self, script: &Script) {
        let mut pc = 0usize;

        while pc < script.len() {
            let line = script.line(pc);
            match leading_keyword(line) {
                "print" => {
                    let val = evaluate(after_keyword(line, "print"), &self.env, &self.sink);
                    self.printer.println(&val.display_value());
                }
                "var" => {
                    let rest = after_keyword(line, "var");
                    if let Some((name_part, expr)) = rest.split_once('=') {
                        let name = name_part.trim();
                        if !name.is_empty() {
                            let val = evaluate(expr, &self.env, &self.sink);
                            self.env.set(name, val);
                        }
                    }
                }
                "if" => {
                    let cond = evaluate(after_keyword(line, "if"), &self.env, &self.sink);
                    if !cond.is_truthy() {
                        // Jump to the matching else (taken branch) or end.
                        pc = find_match(script, pc);
                    }
                }
                "else" => {
                    // Reached by falling off a truthy if-branch: skip over
                    // the else-branch to this block's end.
                    pc = find_match(script, pc);
                }
                "while" => {
                    // One stack entry per active loop: re-arrival via the
                    // rewind from `end` must not push a duplicate.
                    if self.loop_starts.last() != Some(&pc) {
                        self.loop_starts.push(pc);
                    }
                    let cond = evaluate(after_keyword(line, "while"), &self.env, &self.sink);
                    if !cond.is_truthy() {
                        pc = find_match(script, pc);
                        self.loop_starts.pop();
                    }
                }
                "end" => {
                    if let Some(&top) = self.loop_starts.last() {
                        if leading_keyword(script.line(top)) == "while" {
                            // Rewind so the guard is re-evaluated. The top
                            // entry is trusted to be the block being
                            // closed: an `if` nested inside a `while` also
                            // lands here and restarts the loop early.
                            pc = top;
                            continue;
                        }
                        self.loop_starts.pop();
                    }
                }
                _ => {}
            }
            pc += 1;
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(lines: &[&str]) -> Script {
        Script::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn keyword_extraction_ignores_leading_whitespace() {
        assert_eq!(leading_keyword("  print x"), "print");
        assert_eq!(leading_keyword(""), "");
        assert_eq!(after_keyword("   print 1 + 2", "print"), " 1 + 2");
    }

    #[test]
    fn find_match_locates_else_and_end() {
        let s = script(&["if x", "print 1", "else", "print 2", "end"]);
        assert_eq!(find_match(&s, 0), 2);
        assert_eq!(find_match(&s, 2), 4);
    }

    #[test]
    fn find_match_counts_same_kind_nesting() {
        let s = script(&[
            "while a", // 0
            "while b", // 1
            "end",     // 2 (matches 1)
            "end",     // 3 (matches 0)
        ]);
        assert_eq!(find_match(&s, 0), 3);
        assert_eq!(find_match(&s, 1), 2);
    }

    #[test]
    fn find_match_else_never_ends_a_while_scan() {
        let s = script(&["while a", "else", "end"]);
        assert_eq!(find_match(&s, 0), 2);
    }

    #[test]
    fn find_match_degrades_to_last_line_when_unmatched() {
        let s = script(&["if x", "print 1"]);
        assert_eq!(find_match(&s, 0), 1);
    }

    #[test]
    fn nested_if_at_depth_one_only() {
        let s = script(&[
            "if a",    // 0
            "if b",    // 1
            "else",    // 2 (inner match for 1)
            "end",     // 3
            "else",    // 4 (outer match for 0)
            "end",     // 5
        ]);
        assert_eq!(find_match(&s, 1), 2);
        // The inner if increments depth, so the inner else is skipped.
        assert_eq!(find_match(&s, 0), 4);
    }
}
