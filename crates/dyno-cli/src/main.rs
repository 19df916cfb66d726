use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::analyze::AnalyzeArgs;
use commands::classify::ClassifyArgs;
use commands::weight::WeightArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Curb-weight estimation and performance simulation tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline: weight estimate, stock performance,
    /// modifications, tuned performance, and the comparison report.
    Analyze(AnalyzeArgs),
    /// Classify an engine into a power class, segment, and tags from
    /// cylinder count and output alone.
    Classify(ClassifyArgs),
    /// Estimate curb weight only.
    Weight(WeightArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => commands::analyze::run(&args),
        Command::Classify(args) => commands::classify::run(&args),
        Command::Weight(args) => commands::weight::run(&args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
