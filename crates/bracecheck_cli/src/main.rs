//! bchk: the bracecheck delimiter-balance checker CLI.
//!
//! Usage:
//!   bchk [options] FILE
//!
//! Scans a source file for unmatched or mismatched `{}`, `()`, `[]` pairs,
//! ignoring brackets inside strings and comments.

use clap::Parser as ClapParser;
use std::process;

use bracecheck_diagnostics::Diagnostic;

#[derive(ClapParser, Debug)]
#[command(name = "bchk", about = "bracecheck - a lexical delimiter-balance checker")]
struct Cli {
    /// Source file to check.
    #[arg(value_name = "FILE")]
    file: String,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    process::exit(run_check(&cli));
}

fn run_check(cli: &Cli) -> i32 {
    let diagnostics = match bracecheck_scanner::check_file(&cli.file) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            println!("{}", e);
            return 1;
        }
    };

    let use_color = cli.pretty && atty_is_terminal();
    for diag in diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if diagnostics.has_errors() {
        2
    } else {
        0
    }
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if !use_color {
        println!("{}", diag);
        return;
    }

    if diag.is_error() {
        println!("{}{}Error{}: {}", BOLD, RED, RESET, diag.message_text);
    } else {
        println!("{}{}{}", GRAY, diag.message_text, RESET);
    }
    for related in &diag.related_information {
        println!("  {}", related.message_text);
    }
}

fn atty_is_terminal() -> bool {
    // Diagnostics go to stdout, so check that fd.
    #[cfg(unix)]
    {
        unsafe { libc::isatty(1) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
