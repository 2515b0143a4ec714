//! CLI tool to evaluate arithmetic expressions line by line.

use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!("Usage: mathexpr [files...]");
        eprintln!();
        eprintln!("Evaluates one arithmetic expression per input line and");
        eprintln!("prints each result. With no files, reads standard input.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  echo '(2 + 3) * 4' | mathexpr");
        eprintln!("  mathexpr expressions.txt");
        return ExitCode::from(2);
    }

    let files = &args[1..];

    if files.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("stdin: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(code) = eval_line(&line) {
                return code;
            }
        }
        return ExitCode::SUCCESS;
    }

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        };

        for line in content.lines() {
            if let Err(code) = eval_line(line) {
                return code;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Evaluate one input line and print the result. Empty lines are
/// skipped; the first malformed line aborts the whole run.
fn eval_line(line: &str) -> Result<(), ExitCode> {
    if line.is_empty() {
        return Ok(());
    }

    match mathexpr_rs::eval_str(line) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}
