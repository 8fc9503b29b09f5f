//! Roster CLI - department hierarchy and salary statistics
//!
//! ```bash
//! roster                              # Interactive menu
//! roster hierarchy                    # Print departments and teams
//! roster stats [--json]               # Print salary statistics
//! roster export -o stats.csv          # Write salary statistics CSV
//! ```

use clap::{Parser, Subcommand};
use roster::config::{parse_delimiter, RosterConfig};
use roster::error::{MenuError, PipelineError};
use roster::logs;
use roster::{department_stats, load_roster, render_stats_json, run_action, Action};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    about = "Department hierarchy and salary statistics from employee rosters",
    long_about = None
)]
struct Cli {
    /// Roster file to read
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Destination of the statistics export
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Field delimiter of the roster and the export
    #[arg(short, long, global = true, value_parser = delimiter_arg)]
    delimiter: Option<char>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose an action from a numbered menu
    Menu,

    /// Print all departments and their teams
    Hierarchy,

    /// Print salary statistics per department
    Stats {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write salary statistics per department to CSV
    Export,
}

fn delimiter_arg(raw: &str) -> Result<char, String> {
    parse_delimiter("--delimiter", raw).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logs::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PipelineError::Menu(e @ (MenuError::Exhausted(_) | MenuError::EndOfInput))) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let config = RosterConfig::from_env()?.with_overrides(cli.input, cli.output, cli.delimiter);

    let output = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cmd_menu(&config)?,
        Commands::Hierarchy => run_action(Action::Hierarchy, &config)?,
        Commands::Stats { json: true } => cmd_stats_json(&config)?,
        Commands::Stats { json: false } => run_action(Action::Stats, &config)?,
        Commands::Export => run_action(Action::Export, &config)?,
    };

    println!("{}", output);
    Ok(())
}

fn cmd_menu(config: &RosterConfig) -> Result<String, PipelineError> {
    let stdin = io::stdin();
    let action =
        roster::menu::choose_action(&mut stdin.lock(), &mut io::stdout(), config.menu_attempts)?;
    run_action(action, config)
}

fn cmd_stats_json(config: &RosterConfig) -> Result<String, PipelineError> {
    let roster = load_roster(config)?;
    let stats = department_stats(&roster.records)?;
    Ok(render_stats_json(&stats)?)
}
