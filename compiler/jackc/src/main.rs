//! Jack front end CLI.

use jackc::commands::{explain_error, lex_file, parse_file};
use jackc::{init_tracing, parse_dump_options, DumpOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: jack parse <file.jack> [--json] [--spans]");
                std::process::exit(1);
            }
            let (options, path) = dump_options_or_exit(&args[2..]);
            parse_file(&path, &options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jack lex <file.jack>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("jack {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: jack --explain <ERROR_CODE>");
                eprintln!("Example: jack --explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ if !command.starts_with('-') => {
            // `jack Main.jack [options]` is shorthand for `jack parse`
            let (options, path) = dump_options_or_exit(&args[1..]);
            parse_file(&path, &options);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn dump_options_or_exit(args: &[String]) -> (DumpOptions, String) {
    match parse_dump_options(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: jack parse <file.jack> [--json] [--spans]");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Jack front end");
    println!();
    println!("Usage: jack <command> [options]");
    println!();
    println!("Commands:");
    println!("  <file.jack>          Parse a file and print its tree");
    println!("  parse <file.jack>    Parse a file and print its tree");
    println!("  lex <file.jack>      Split a file into lexemes and classify them");
    println!("  --explain <code>     Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Parse options:");
    println!("  --json              Print the tree as JSON");
    println!("  --tree              Print the tree as an outline (default)");
    println!("  --spans             Show the byte span of every node");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing, e.g. RUST_LOG=jack_parse=trace");
    println!();
    println!("Examples:");
    println!("  jack Main.jack");
    println!("  jack parse Main.jack --spans");
    println!("  jack parse Main.jack --json");
    println!("  jack lex Main.jack");
    println!("  jack --explain E1004");
}
