//! Command-line entry point for the Lox front end.

use std::path::Path;
use std::process::exit;

use loxc::commands;

fn main() {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        commands::repl();
        return;
    }

    let command = args[1].as_str();

    match command {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lox run <file.lox>");
                exit(64);
            }
            commands::run_file(&args[2]);
        }
        "tokenize" => {
            if args.len() < 3 {
                eprintln!("Usage: lox tokenize <file.lox>");
                exit(64);
            }
            commands::tokenize_file(&args[2]);
        }
        "repl" => {
            commands::repl();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path works as a command: `lox script.lox`.
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lox"))
            {
                commands::run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                exit(64);
            }
        }
    }
}

fn print_usage() {
    println!("Lox front end");
    println!();
    println!("Usage: lox [command] [arguments]");
    println!();
    println!("Commands:");
    println!("  run <file.lox>       Scan a script and report lexical errors");
    println!("  tokenize <file.lox>  Dump the token stream for a script");
    println!("  repl                 Start an interactive prompt");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Examples:");
    println!("  lox                  # no arguments starts the prompt");
    println!("  lox script.lox       # a bare path runs as a script");
    println!("  lox tokenize script.lox");
}
