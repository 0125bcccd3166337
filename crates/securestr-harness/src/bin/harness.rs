//! CLI entrypoint for the securestr operation harness.
//!
//! Each run constructs the working buffers from the positional arguments,
//! dispatches exactly one named operation, and prints the result code and
//! final buffer contents. The literal argument `=null` stands for an absent
//! buffer. Exit status is non-zero only for usage errors; an operation that
//! reports FAIL still exits zero.

use std::process;

use clap::{Parser, Subcommand};

use securestr_core::SecureStr;
use securestr_harness::{Operation, STR_CAPACITY, dispatch, render, report::RunRecord};

/// Operation-level test driver for the securestr library.
#[derive(Debug, Parser)]
#[command(name = "securestr-harness")]
#[command(about = "Exercises one securestr operation per run")]
struct Cli {
    /// Emit the run record as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Overwrite string_B with string_A.
    Cpy { string_a: String, string_b: String },
    /// Append string_A after string_B's content.
    Appd { string_a: String, string_b: String },
    /// Append one character to string_A.
    AppdChar { string_a: String, character: String },
    /// Overwrite string_B with a window of string_A.
    Substr {
        string_a: String,
        string_b: String,
        start: usize,
        count: usize,
    },
    /// Append a window of string_A after string_B's content.
    AppdSubstr {
        string_a: String,
        string_b: String,
        start: usize,
        count: usize,
    },
    /// Compare string_A and string_B for content equality.
    Cmp { string_a: String, string_b: String },
    /// Test whether string_A starts with string_B.
    StartsWith { string_a: String, string_b: String },
    /// Test whether string_A ends with string_B.
    EndsWith { string_a: String, string_b: String },
    /// Find the leftmost occurrence of string_B in string_A.
    IndexOf { string_a: String, string_b: String },
    /// Exchange the contents of string_A and string_B.
    Swap { string_a: String, string_b: String },
    /// Shorten string_A to the given length.
    Trunc { string_a: String, new_len: usize },
    /// Reset string_A's length to zero.
    Clear { string_a: String },
    /// Zeroize string_A's entire backing storage.
    Wipe { string_a: String },
    /// Read the byte at a position in string_A.
    GetChar { string_a: String, index: usize },
    /// Overwrite the byte at a position in string_A.
    SetChar {
        string_a: String,
        index: usize,
        character: String,
    },
    /// Report string_A's content length.
    Len { string_a: String },
    /// Report string_A's capacity.
    Cap { string_a: String },
}

fn main() {
    let cli = Cli::parse();

    if !cli.json {
        println!("securestr version {}", securestr_core::VERSION);
    }

    let (operation, string_a, string_b) = match cli.command {
        Command::Cpy { string_a, string_b } => {
            (Operation::Cpy, build(&string_a), build(&string_b))
        }
        Command::Appd { string_a, string_b } => {
            (Operation::Appd, build(&string_a), build(&string_b))
        }
        Command::AppdChar {
            string_a,
            character,
        } => (
            Operation::AppdChar(parse_byte(&character)),
            build(&string_a),
            None,
        ),
        Command::Substr {
            string_a,
            string_b,
            start,
            count,
        } => (
            Operation::Substr { start, count },
            build(&string_a),
            build(&string_b),
        ),
        Command::AppdSubstr {
            string_a,
            string_b,
            start,
            count,
        } => (
            Operation::AppdSubstr { start, count },
            build(&string_a),
            build(&string_b),
        ),
        Command::Cmp { string_a, string_b } => {
            (Operation::Cmp, build(&string_a), build(&string_b))
        }
        Command::StartsWith { string_a, string_b } => {
            (Operation::StartsWith, build(&string_a), build(&string_b))
        }
        Command::EndsWith { string_a, string_b } => {
            (Operation::EndsWith, build(&string_a), build(&string_b))
        }
        Command::IndexOf { string_a, string_b } => {
            (Operation::IndexOf, build(&string_a), build(&string_b))
        }
        Command::Swap { string_a, string_b } => {
            (Operation::Swap, build(&string_a), build(&string_b))
        }
        Command::Trunc { string_a, new_len } => {
            (Operation::Trunc(new_len), build(&string_a), None)
        }
        Command::Clear { string_a } => (Operation::Clear, build(&string_a), None),
        Command::Wipe { string_a } => (Operation::Wipe, build(&string_a), None),
        Command::GetChar { string_a, index } => {
            (Operation::GetChar(index), build(&string_a), None)
        }
        Command::SetChar {
            string_a,
            index,
            character,
        } => (
            Operation::SetChar(index, parse_byte(&character)),
            build(&string_a),
            None,
        ),
        Command::Len { string_a } => (Operation::Len, build(&string_a), None),
        Command::Cap { string_a } => (Operation::Cap, build(&string_a), None),
    };

    let run = dispatch(operation, string_a, string_b);

    if cli.json {
        match RunRecord::from_run(&run).to_json() {
            Ok(document) => println!("{document}"),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", render::render_text(&run));
    }
}

/// Builds a working buffer from an argument, honoring the `=null` marker.
///
/// An argument longer than the working capacity leaves the buffer empty;
/// the dispatched operation then reports its own result against that state.
fn build(argument: &str) -> Option<SecureStr> {
    if argument == "=null" {
        return None;
    }
    let mut buffer = match SecureStr::with_capacity(STR_CAPACITY) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    let _ = buffer.copy_from_bytes(argument.as_bytes());
    Some(buffer)
}

/// A character argument must be exactly one byte.
fn parse_byte(argument: &str) -> u8 {
    match argument.as_bytes() {
        [byte] => *byte,
        _ => {
            eprintln!("character argument must be a single byte, got {argument:?}");
            process::exit(2);
        }
    }
}
