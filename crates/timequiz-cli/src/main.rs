//! timequiz CLI — a timed quiz read from a CSV file.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use timequiz_core::ReportFormat;

mod commands;

#[derive(Parser)]
#[command(
    name = "timequiz",
    version,
    about = "Timed quiz from a CSV file of questions and answers"
)]
struct Cli {
    /// Log session progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options for taking the quiz. Unset options fall back to the config file.
#[derive(Args, Debug, Default, PartialEq)]
pub struct RunArgs {
    /// CSV file in the format 'question,answer' [default: problems.csv]
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Time limit for the whole quiz in seconds, 0 for none [default: 30]
    #[arg(long)]
    pub limit: Option<u64>,

    /// Score output format: text, json [default: text]
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Also write the JSON report to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz (the default when no command is given)
    Run(RunArgs),

    /// Check a quiz CSV file without taking it
    Validate {
        /// CSV file to check [default: problems.csv]
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example quiz
    Init,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "timequiz={level},timequiz_core={level},timequiz_console={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    // Quiz options only apply to the default command; `run` takes its own.
    if cli.command.is_some() && cli.run != RunArgs::default() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "quiz options must follow the `run` command or be given without one",
            )
            .exit();
    }
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Run(args)) => commands::run::execute(args).await,
        None => commands::run::execute(cli.run).await,
        Some(Commands::Validate { csv, config }) => commands::validate::execute(csv, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
