//! Document validation CLI.
//!
//! Provides the `passport` binary: reads a blank-line-separated batch
//! of documents from standard input (or a file) and prints the number
//! of structurally valid ones followed by a newline.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use passport_check::{count_valid, Document};

/// Document validation tool.
#[derive(Parser)]
#[command(name = "passport", about = "Counts valid documents in a batch")]
struct Cli {
    /// Input file (defaults to standard input).
    input: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

/// Execute the tool.
///
/// Returns exit code: 0 = success, 1 = malformed input, 3 = I/O error.
fn run(cli: &Cli) -> i32 {
    let input = match read_input(cli.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return 3;
        }
    };

    let documents = match Document::parse_batch(&input) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!("{}", count_valid(&documents));
    0
}

/// Reads the batch text from `path`, or standard input when absent.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
