//! Interactive prompt.
//!
//! Each line scans independently: no state leaks between lines, and a
//! lexical error never ends the session.

use std::io::{self, BufRead, Write};

use lox_lexer::scan;

use crate::reporting;

pub fn repl() {
    println!("lox {} interactive prompt", env!("CARGO_PKG_VERSION"));
    println!("Enter source text to see its tokens; Ctrl-D exits.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: cannot read input: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = scan(&line);
        for tok in &result.tokens {
            println!("{tok:?}");
        }
        reporting::report_errors(&result.errors);
    }
    println!();
}
