//! Lm compiler CLI.

use std::io::{self, IsTerminal};

use lmc::driver;
use lmc::options::{parse_args, Command};

fn main() {
    lmc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Version) => {
            println!("lm {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Ok(Command::Lex(options)) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'lm --help' for usage.");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    match driver::run(&options, stdout.lock(), is_tty) {
        Ok(summary) => {
            if summary.has_errors() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lm Compiler");
    println!();
    println!("Usage: lm [options] <file>...");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message");
    println!("  -v, --version        Show version information");
    println!("      --benchmark      Time lexing of each file and print throughput");
    println!("      --tokens         Print every token with its position");
    println!("      --parallel       Lex files concurrently");
    println!("      --color=<when>   Color diagnostics: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable debug logging to stderr (e.g. RUST_LOG=debug)");
}
