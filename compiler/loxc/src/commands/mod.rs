//! Command implementations for the `lox` binary.
//!
//! Each command reads input, hands it to `lox_lexer`, and turns the result
//! into process output and an exit code. Exit codes follow the sysexits
//! convention:
//!
//! - `0`  clean scan
//! - `64` usage error (handled in `main`)
//! - `65` source had lexical errors
//! - `74` input file could not be read

mod repl;
mod run;
mod tokenize;

pub use repl::repl;
pub use run::run_file;
pub use tokenize::tokenize_file;

use std::io::ErrorKind;
use std::process::exit;

/// Read a source file for a command, exiting with an I/O code on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            match err.kind() {
                ErrorKind::NotFound => eprintln!("error: cannot find file '{path}'"),
                ErrorKind::PermissionDenied => {
                    eprintln!("error: permission denied reading '{path}'");
                }
                ErrorKind::InvalidData => {
                    eprintln!("error: '{path}' is not valid UTF-8");
                }
                _ => eprintln!("error: cannot read '{path}': {err}"),
            }
            exit(74);
        }
    }
}
