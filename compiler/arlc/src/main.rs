//! Arlang Interpreter CLI
//!
//! Line-oriented script interpreter.

use arlc::commands::run_file;

fn main() {
    arlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: arl run <file.arl>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Arlang Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a script path, run it directly
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("arl"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Arlang Interpreter");
    println!();
    println!("Usage: arl <file.arl>");
    println!("       arl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.arl>    Run an Arlang script");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  arl run main.arl");
    println!("  arl main.arl");
}
