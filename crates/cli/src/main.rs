mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(name = "netfit", about = "Model-vs-data fit of simulated network ensembles")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract statistics for every draw and print the weighted fit tables
    Run {
        /// Path to the ensemble JSON file
        ensemble: String,
        /// Empirical baseline JSON; draw 0 of every entry is checked against it
        #[arg(long)]
        baseline: Option<String>,
        /// Ensemble entries hold simulated draws only; draw 0 comes from --baseline
        #[arg(long, requires = "baseline")]
        replicates_only: bool,
        /// JSON file overriding the default moment list and mixing columns
        #[arg(long)]
        config: Option<String>,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Also print per-network descriptive statistics of the simulated draws
        #[arg(long)]
        describe: bool,
    },
    /// Check draws, sizes and baseline without aggregating
    Validate {
        /// Path to the ensemble JSON file
        ensemble: String,
        #[arg(long)]
        baseline: Option<String>,
        #[arg(long, requires = "baseline")]
        replicates_only: bool,
    },
    /// List the statistics produced by the reference extractor
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new().with_level(cli.log_level).init()?;

    match cli.command {
        Commands::Run {
            ensemble,
            baseline,
            replicates_only,
            config,
            workers,
            json,
            describe,
        } => commands::run::run(
            &ensemble,
            baseline.as_deref(),
            replicates_only,
            config.as_deref(),
            workers,
            json,
            describe,
        ),
        Commands::Validate {
            ensemble,
            baseline,
            replicates_only,
        } => commands::validate::run(&ensemble, baseline.as_deref(), replicates_only),
        Commands::Schema => commands::schema::run(),
    }
}
