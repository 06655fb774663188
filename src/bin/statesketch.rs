//! Command-line interface for statesketch
//! This binary compiles statesketch sources into statechart descriptors and
//! dumps the token stream for debugging.
//!
//! Usage:
//!   statesketch parse `<path>` [--format `<format>`]   - Compile a source into a descriptor
//!   statesketch tokens `<path>` [--format `<format>`]  - Print the token stream

use clap::{Arg, Command};

use statesketch::StatechartDescriptor;

fn main() {
    let matches = Command::new("statesketch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for the statesketch statechart notation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Compile a source file into a statechart descriptor")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'json-pretty' or 'yaml')")
                        .default_value("json-pretty"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream for a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = read_source(path);
    match statesketch::parse(&source) {
        Ok(descriptor) => {
            let output = render_descriptor(&descriptor, format).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(err) => {
            // Failures keep the machine-readable shape so callers can pick
            // the message and position out of stderr
            let body = serde_json::to_string(&err).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            eprintln!("{}", body);
            std::process::exit(1);
        }
    }
}

fn render_descriptor(descriptor: &StatechartDescriptor, format: &str) -> Result<String, String> {
    match format {
        "json" => serde_json::to_string(descriptor).map_err(|e| e.to_string()),
        "json-pretty" => serde_json::to_string_pretty(descriptor).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(descriptor).map_err(|e| e.to_string()),
        _ => Err(format!(
            "unknown format '{}', expected 'json', 'json-pretty' or 'yaml'",
            format
        )),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let tokens = statesketch::tokenize(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    match format {
        "text" => {
            for token in &tokens {
                println!("{}:{} {}", token.line, token.col, token.describe());
            }
        }
        "json" => {
            let body = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", body);
        }
        _ => {
            eprintln!("Error: unknown format '{}', expected 'text' or 'json'", format);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    let result = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}
