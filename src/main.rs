//! hornlog CLI.
//!
//! Parses a logic program (facts, rules, and `?-` queries) from a file or
//! stdin, loads the knowledge base, and runs each query in order.
#![forbid(unsafe_code)]
use hornlog::{Parser, Program};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [input-file]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Show this help message");
    eprintln!("  -v, --version    Show version information");
    eprintln!("  --first N        Stop after N solutions per query");
    eprintln!();
    eprintln!("If no input file is provided, reads from stdin.");
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(program: Program, first: Option<usize>) {
    let (kb, queries) = program.into_knowledge_base();

    if queries.is_empty() {
        println!(
            "Loaded {} facts and {} rules; no queries to run.",
            kb.fact_count(),
            kb.rule_count()
        );
        return;
    }

    for goal in queries {
        println!("?- {}.", goal);
        let mut any = false;
        let solutions = kb.query(goal.predicate.clone(), goal.args.clone());
        let limit = first.unwrap_or(usize::MAX);
        for solution in solutions.take(limit) {
            any = true;
            println!("{}", solution);
        }
        if !any {
            println!("false.");
        }
        println!();
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("hornlog");

    let mut input: Option<String> = None;
    let mut first: Option<usize> = None;

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => {
                print_usage(program_name);
                return;
            }
            "-v" | "--version" => {
                println!("hornlog {}", VERSION);
                return;
            }
            "--first" => {
                index += 1;
                let value = args.get(index).and_then(|v| v.parse::<usize>().ok());
                match value {
                    Some(n) => first = Some(n),
                    None => {
                        eprintln!("--first requires a numeric argument");
                        process::exit(2);
                    }
                }
            }
            flag if flag.starts_with('-') => {
                eprintln!("unknown option: {}", flag);
                print_usage(program_name);
                process::exit(2);
            }
            path => {
                if input.is_some() {
                    eprintln!("only one input file may be given");
                    process::exit(2);
                }
                input = Some(path.to_string());
            }
        }
        index += 1;
    }

    let source = match read_source(input.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!(
                "failed to read {}: {}",
                input.as_deref().unwrap_or("stdin"),
                err
            );
            process::exit(1);
        }
    };

    match Parser::new().parse_str(&source) {
        Ok(program) => run(program, first),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
