use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;

use brickset::DEFAULT_RESOURCE;

use crate::commands;
use crate::context::Context;
use crate::formatters::OutputFormat;
use crate::repl::Repl;

#[derive(Parser)]
#[command(name = "brickset-cli")]
#[command(about = "Query a Brickset JSON export of LEGO sets", long_about = None)]
struct Cli {
    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format (text, json, table)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Interactive mode (REPL)
    #[arg(short, long)]
    interactive: bool,

    /// JSON document to load, or the name of a bundled resource
    #[arg(short, long, env = "BRICKSET_DATA", default_value = DEFAULT_RESOURCE)]
    data: PathBuf,

    /// Command to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query once with the sample arguments
    Demo,

    /// Run a single query, e.g. 'count_tag("Microscale")'
    Query {
        /// Query to run
        query: String,
    },

    /// Show how many sets were loaded and how they are packaged
    Stats,
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    info!("Starting brickset CLI");

    let mut context = match Context::load(&cli.data, cli.verbose, cli.format) {
        Ok(context) => context,
        Err(e) => {
            let formatter = cli.format.formatter();
            eprintln!("{}", formatter.format_error(&format!("{:#}", e)));
            std::process::exit(1);
        }
    };

    match (cli.command, cli.interactive) {
        (Some(Commands::Query { query }), _) => {
            commands::query::execute(&mut context, &query)?;
        },
        (Some(Commands::Stats), _) => {
            commands::stats::execute(&mut context)?;
        },
        (None, true) => {
            let mut repl = Repl::new(context)?;
            repl.run()?;
        },
        (Some(Commands::Demo), _) | (None, false) => {
            commands::demo::execute(&mut context)?;
        },
    }

    info!("brickset CLI done");

    Ok(())
}
