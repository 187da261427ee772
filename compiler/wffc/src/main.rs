//! `wff` CLI
//!
//! Validates propositional formulas written in prefix LaTeX notation.

use wffc::commands::{check_file, lex_expression, parse_expression};
use wffc::BatchConfig;

fn main() {
    wffc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let mut config = BatchConfig::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else if arg == "--summary" || arg == "-s" {
                    config.summary = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: wff check <file> [--verbose] [--summary]");
                std::process::exit(1);
            };
            check_file(path, &config);
        }
        "lex" => {
            let Some(expression) = args.get(2) else {
                eprintln!("Usage: wff lex <expression>");
                std::process::exit(1);
            };
            lex_expression(expression);
        }
        "parse" => {
            let Some(expression) = args.get(2) else {
                eprintln!("Usage: wff parse <expression>");
                std::process::exit(1);
            };
            parse_expression(expression);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("wff {}", env!("CARGO_PKG_VERSION"));
        }
        // `wff <file>` is shorthand for `wff check <file>`.
        path if !path.starts_with('-') => {
            check_file(path, &BatchConfig::default());
        }
        _ => {
            eprintln!("error: unknown option '{command}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("wff - propositional formula validator");
    println!();
    println!("Usage: wff <command> [options]");
    println!("       wff <file>               Same as `wff check <file>`");
    println!();
    println!("Commands:");
    println!("  check <file>         Validate each expression in a batch file");
    println!("  lex <expression>     Show the lexer trace for one expression");
    println!("  parse <expression>   Validate one expression and show why it fails");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --verbose, -v        Print the reason for each invalid expression");
    println!("  --summary, -s        Print valid/invalid totals when done");
    println!();
    println!("Batch file format: the first line is the number of expressions,");
    println!("each following line is one expression. Output is one line per");
    println!("expression: `valida` or `invalida`.");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=wff_parse=debug) for trace output.");
}
