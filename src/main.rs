//! Shellwright - Entry Point
//!
//! Reads structured intents as JSON and prints the shell command each one
//! maps to. With a payload argument it converts once; otherwise it runs an
//! interactive loop. Commands are printed, never executed.

use clap::Parser;
use shellwright::{CommandConverter, EngineConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert structured intents into macOS shell commands
#[derive(Parser, Debug)]
#[command(name = "shellwright", version)]
#[command(about = "Convert structured intent JSON into macOS shell commands")]
struct Args {
    /// Intent payload, e.g. '{"category":"apps","operation":"open","app":"chrome"}'
    payload: Option<String>,

    /// Operations catalog to use instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// TOML file with catalog path and app/folder table overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "shellwright=debug"
    } else {
        "shellwright=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => match EngineConfig::load_from_toml(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }

    let converter = CommandConverter::new(&config);

    match args.payload {
        Some(payload) => match converter.convert_json(&payload) {
            Ok(command) => {
                println!("{}", command);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        None => match run_interactive(&converter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Read one JSON payload per line until EOF or a quit command
fn run_interactive(converter: &CommandConverter) -> io::Result<()> {
    println!("Shellwright - enter intent JSON, or 'quit' to exit");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nBye!");
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Bye!");
            break;
        }

        match converter.convert_json(input) {
            Ok(command) => println!("{}", command),
            Err(e) => println!("Error: {}", e),
        }
        println!();
    }

    Ok(())
}
