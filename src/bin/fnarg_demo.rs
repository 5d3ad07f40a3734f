// src/bin/fnarg_demo.rs

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fnarg_core::call_sites;
use fnarg_core::{CallSiteReport, Result};

#[derive(Parser)]
#[command(name = "fnarg-demo", about = "Run call sites that customize a shared helper")]
struct Cli {
    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the registered call sites
    List,
    /// Run registered call sites by name, or all of them
    Run { names: Vec<String> },
    /// Run the helper with an arbitrary input and prefix
    Prefix { input: String, prefix: String },
    /// Run the helper with a length limit on the result
    Bounded { input: String, max: usize },
}

fn print_reports(reports: &[CallSiteReport], json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(reports).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }
    for report in reports {
        println!("{:<8} {:<10} -> {}", report.name, report.input, report.output);
        for line in &report.logged {
            println!("{:<8} logged: {}", "", line);
        }
    }
    Ok(())
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::List => {
            for site in call_sites::call_sites() {
                println!("{:<8} input {:<10?} {}", site.name, site.input, site.description);
            }
            Ok(())
        }
        Command::Run { names } => {
            let reports = if names.is_empty() {
                call_sites::run_all()?
            } else {
                names.iter().map(|name| call_sites::run(name)).collect::<Result<Vec<_>>>()?
            };
            print_reports(&reports, cli.json)
        }
        Command::Prefix { input, prefix } => {
            println!("{}", call_sites::prefixed_super(input, prefix));
            Ok(())
        }
        Command::Bounded { input, max } => {
            println!("{}", call_sites::bounded_super(input, *max)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = fnarg_core::logging::setup_logger(cli.verbose) {
        eprintln!("failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
