//! Doublebox — NaN-boxed tagged value inspector.
//!
//! This is the diagnostic driver for the doublebox codec: it renders one
//! human-readable line per 64-bit word, either for the built-in demo
//! sequence or for raw hex words supplied on the command line.

mod render;

use doublebox_core::DoubleBox;
use std::process::ExitCode;

/// Exit code for success.
const EXIT_SUCCESS: u8 = 0;
/// Exit code for command-line usage errors.
const EXIT_USAGE_ERROR: u8 = 2;

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ExecutionMode {
    /// Replay the built-in sample sequence.
    Demo,
    /// Decode raw hex words given as arguments.
    Inspect(Vec<String>),
    /// Print version and exit.
    PrintVersion,
    /// Print help and exit.
    PrintHelp,
}

fn parse_args(args: &[String]) -> Result<ExecutionMode, String> {
    let mut iter = args.iter();
    let Some(first) = iter.next() else {
        return Ok(ExecutionMode::Demo);
    };

    match first.as_str() {
        "-h" | "--help" | "help" => Ok(ExecutionMode::PrintHelp),
        "-V" | "--version" | "version" => Ok(ExecutionMode::PrintVersion),
        "demo" => match iter.next() {
            None => Ok(ExecutionMode::Demo),
            Some(extra) => Err(format!("unexpected argument '{extra}' after 'demo'")),
        },
        "inspect" => {
            let words: Vec<String> = iter.cloned().collect();
            if words.is_empty() {
                Err("'inspect' needs at least one hex word".to_string())
            } else {
                Ok(ExecutionMode::Inspect(words))
            }
        }
        other => Err(format!("unknown command '{other}' (try --help)")),
    }
}

fn version_string() -> String {
    format!("doublebox {}", doublebox_core::VERSION)
}

fn help_text() -> &'static str {
    "doublebox — NaN-boxed tagged value inspector

USAGE:
    doublebox [demo]               replay the built-in sample sequence
    doublebox inspect <WORD>...    decode raw 64-bit hex words
    doublebox --help               show this help
    doublebox --version            show version

Hex words accept an optional 0x prefix and underscore separators,
e.g. 0xFFFC_0000_075B_CD15."
}

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let mode = match parse_args(&raw_args) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("doublebox: {e}");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    match mode {
        ExecutionMode::PrintVersion => {
            println!("{}", version_string());
            ExitCode::from(EXIT_SUCCESS)
        }
        ExecutionMode::PrintHelp => {
            println!("{}", help_text());
            ExitCode::from(EXIT_SUCCESS)
        }
        ExecutionMode::Demo => {
            for line in render::demo_lines() {
                println!("{line}");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        ExecutionMode::Inspect(words) => {
            for word in &words {
                match DoubleBox::from_hex(word) {
                    Ok(value) => println!("{}", render::describe_line(value)),
                    Err(e) => {
                        eprintln!("doublebox: '{word}': {e}");
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}
