use std::{fs, process::ExitCode};

use clap::Parser;
use countavg::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::core::{evaluate, summarize_program},
        value::Report,
    },
    parse_source,
};
use tracing::{Level, Metadata};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

/// countavg averages a list of integers written as a division by its own
/// count, e.g. `[2, 4, 6] / count(2, 4, 6)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells countavg to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the input, size, sum and average instead of just the average.
    #[arg(short, long)]
    report: bool,

    /// Prints the syntax tree before evaluating it.
    #[arg(short, long)]
    ast: bool,

    /// Logs the lexemes, tokens and operands of each phase.
    #[arg(short, long)]
    debug: bool,

    /// Logs every token and every grammar check as well.
    #[arg(short, long)]
    trace: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(if args.trace {
                    Level::TRACE
                } else if args.debug {
                    Level::DEBUG
                } else {
                    Level::WARN
                });

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };
    let source = script.trim();

    match execute(source, &args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn execute(source: &str, args: &Args) -> Result<String, Error> {
    let program = parse_source(source)?;

    if args.ast {
        print!("{}", Node::Division(&program));
    }

    if args.report {
        let summary = summarize_program(&program)?;
        Ok(Report { input: source,
                    summary }.to_string())
    } else {
        Ok(evaluate(&program)?.to_string())
    }
}

fn init_logger(level: Level) {
    let console_log = tracing_subscriber::fmt::layer().compact()
                                                      .with_writer(std::io::stderr)
                                                      .with_target(false)
                                                      .with_filter(filter::filter_fn(level_for("countavg", level)));
    tracing_subscriber::registry().with(console_log).init();
}

fn level_for(module: &'static str, level: Level) -> impl Fn(&Metadata) -> bool {
    move |metadata| {
        metadata.module_path()
                .unwrap_or_default()
                .starts_with(module)
        && metadata.level() <= &level
    }
}
