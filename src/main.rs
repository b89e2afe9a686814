#![forbid(unsafe_code)]
//! Pitch Refiner Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use pitch::commands::{
    execute_score, execute_wizard, ReportFormat, ScoreOptions, WizardOptions,
};
use pitch::config::DEFAULT_CONFIG_FILE;
use pitch::{Config, Field};

#[derive(Parser)]
#[command(name = "pitch")]
#[command(about = "30-Second Pitch Refiner - draft and score an investor pitch")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the four questions interactively (default)
    Wizard {
        /// Step to open on
        #[arg(long, value_enum)]
        start_at: Option<StepArg>,
    },

    /// Score a pitch without prompting
    Score {
        /// JSON file with problem/solution/targetMarket/traction keys
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// What pain point does your startup address?
        #[arg(long)]
        problem: Option<String>,

        /// How does your product/service solve this problem?
        #[arg(long)]
        solution: Option<String>,

        /// Who is your ideal customer?
        #[arg(long)]
        target_market: Option<String>,

        /// What traction or validation do you have?
        #[arg(long)]
        traction: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

/// Wizard step to start on
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StepArg {
    Problem,
    Solution,
    TargetMarket,
    Traction,
}

/// Output format for the score command
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum FormatArg {
    #[default]
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = match Config::load_if_present(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} Failed to load {}: {}",
                style("✗").red(),
                cli.config.display(),
                e
            );
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Wizard { start_at: None }) {
        Commands::Wizard { start_at } => {
            // Convert CLI enum to library type
            let start_at = start_at.map(|step| match step {
                StepArg::Problem => Field::Problem,
                StepArg::Solution => Field::Solution,
                StepArg::TargetMarket => Field::TargetMarket,
                StepArg::Traction => Field::Traction,
            });
            execute_wizard(WizardOptions { start_at }, &config)?;
        }

        Commands::Score {
            input,
            problem,
            solution,
            target_market,
            traction,
            format,
        } => {
            let format = match format {
                FormatArg::Text => ReportFormat::Text,
                FormatArg::Json => ReportFormat::Json,
            };
            let options = ScoreOptions {
                input,
                problem,
                solution,
                target_market,
                traction,
                format,
            };
            execute_score(options, &config)?;
        }
    }

    Ok(())
}
