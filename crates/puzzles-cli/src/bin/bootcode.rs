//! Boot-code repair and execution CLI.
//!
//! Provides the `bootcode` binary. By default it reads a boot-code
//! program from standard input (or a file), repairs the single
//! corrupted instruction when the program loops, runs the result to
//! completion, and prints the final accumulator value followed by a
//! newline. A program that already halts is executed untouched.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use bootcode_analysis::{find_repair_candidate, Interpreter, InterpreterConfig, RunOutcome};
use bootcode_core::Program;

/// Boot-code repair and execution tool.
#[derive(Parser)]
#[command(name = "bootcode", about = "Repairs and runs boot-code programs")]
struct Cli {
    /// Input program file (defaults to standard input).
    input: Option<PathBuf>,

    /// Run the program as-is and print the accumulator at halt or at
    /// the first repeated instruction; no repair is attempted.
    #[arg(long)]
    unpatched: bool,

    /// Print each executed instruction to standard error.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

/// Execute the tool.
///
/// Returns exit code: 0 = success, 1 = malformed program or runtime
/// error, 2 = no repair candidate, 3 = I/O error.
fn run(cli: &Cli) -> i32 {
    let source = match read_input(cli.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return 3;
        }
    };

    let program = match Program::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if cli.unpatched {
        run_unpatched(&program, cli.trace)
    } else {
        run_repaired(&program, cli.trace)
    }
}

/// Repair the program if it loops, then print its final accumulator.
fn run_repaired(program: &Program, trace: bool) -> i32 {
    // A program that already halts needs no repair.
    match execute(program, trace) {
        Ok(RunOutcome::Halted { accumulator }) => {
            println!("{}", accumulator);
            return 0;
        }
        Ok(RunOutcome::Looped { .. }) => {}
        Err(code) => return code,
    }

    let candidate = match find_repair_candidate(program) {
        Some(candidate) => candidate,
        None => {
            eprintln!("Error: no instruction flip makes the program terminate");
            return 2;
        }
    };

    let patched = match program.with_flipped(candidate.index) {
        Ok(patched) => patched,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match execute(&patched, trace) {
        Ok(RunOutcome::Halted { accumulator }) => {
            println!("{}", accumulator);
            0
        }
        Ok(RunOutcome::Looped { at, .. }) => {
            eprintln!(
                "Error: program still loops at instruction {} after flipping instruction {}",
                at, candidate.index
            );
            1
        }
        Err(code) => code,
    }
}

/// Run the program as-is; a detected loop is reported on stderr and the
/// accumulator at that point printed.
fn run_unpatched(program: &Program, trace: bool) -> i32 {
    match execute(program, trace) {
        Ok(RunOutcome::Halted { accumulator }) => {
            println!("{}", accumulator);
            0
        }
        Ok(RunOutcome::Looped { accumulator, at }) => {
            eprintln!("loop detected at instruction {}", at);
            println!("{}", accumulator);
            0
        }
        Err(code) => code,
    }
}

/// Runs `program` once, dumping the trace to stderr when enabled.
///
/// Runtime traps are reported here; the caller only sees the exit code.
fn execute(program: &Program, trace: bool) -> Result<RunOutcome, i32> {
    let config = InterpreterConfig {
        trace_enabled: trace,
    };
    let mut interpreter = Interpreter::new(program, config);
    let outcome = interpreter.run_to_outcome();

    if let Some(entries) = interpreter.trace() {
        for entry in entries {
            eprintln!(
                "{:>5}  {}  acc={}",
                entry.pc, entry.instruction, entry.accumulator
            );
        }
    }

    match outcome {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(1)
        }
    }
}

/// Reads the program text from `path`, or standard input when absent.
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
