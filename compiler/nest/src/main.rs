//! Nest CLI

use std::path::Path;

use nest::{eval_once, init_tracing, run_repl, run_script, Output, ReplConfig, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    match command {
        "repl" => {
            let config = match ReplConfig::from_args(args.get(2..).unwrap_or_default()) {
                Ok(config) => config,
                Err(arg) => {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: nest repl [--quiet] [--prompt=<text>]");
                    std::process::exit(1);
                }
            };
            repl(&config);
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: nest run <file>");
                std::process::exit(1);
            }
            let output = Output::terminal();
            match run_script(Path::new(&args[2]), &output) {
                Ok(summary) if summary.is_success() => {}
                Ok(_) => std::process::exit(1),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: nest eval <line...>");
                eprintln!("Example: nest eval add 1 @add 2 3");
                std::process::exit(1);
            }
            let line = args[2..].join(" ");
            if !eval_once(&line, &Output::terminal()) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Nest {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn repl(config: &ReplConfig) {
    let mut session = Session::new();
    let stdin = std::io::stdin();
    if let Err(err) = run_repl(&mut session, config, stdin.lock(), &Output::terminal()) {
        eprintln!("error reading input: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Nest - nested-command interpreter");
    println!();
    println!("Usage: nest [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive interpreter (default)");
    println!("  run <file>           Evaluate each line of a file");
    println!("  eval <line...>       Evaluate one line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("REPL options:");
    println!("  --quiet, -q          Do not print the banner");
    println!("  --prompt=<text>      Prompt shown before each line (default: \"> \")");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=nest_eval=trace) for evaluation traces.");
}
