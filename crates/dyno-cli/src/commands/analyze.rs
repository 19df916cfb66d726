//! Analyze command handler: the full stock-vs-tuned pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use dyno_lib::{analyze, AnalysisRequest, ModPackage, ReportMode};

use super::{InductionArg, ReductionArg, StageArg, VehicleArgs};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Terse on-screen summary.
    #[default]
    Text,
    /// Full report with the comparison table.
    Report,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub vehicle: VehicleArgs,

    /// Engine tuning stage.
    #[arg(long, value_enum, default_value = "stock")]
    pub stage: StageArg,

    /// Forced-induction kit.
    #[arg(long, value_enum, default_value = "none")]
    pub induction: InductionArg,

    /// Weight-reduction package.
    #[arg(long, value_enum, default_value = "none")]
    pub weight_reduction: ReductionArg,

    /// Output format for stdout.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the full report to this file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl AnalyzeArgs {
    fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            spec: self.vehicle.to_spec(),
            mods: ModPackage {
                stage: self.stage.into(),
                induction: self.induction.into(),
                weight_reduction: self.weight_reduction.into(),
            },
        }
    }
}

/// Handle the analyze subcommand.
pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let request = args.to_request();
    let summary = analyze(&request).context("vehicle analysis failed")?;

    match args.format {
        OutputFormat::Text => print!("{}", summary.render(ReportMode::PlainText)),
        OutputFormat::Report => print!("{}", summary.render(ReportMode::Report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialise summary")?
        ),
    }

    if let Some(path) = &args.export {
        fs::write(path, summary.render(ReportMode::Report))
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report exported to {}", path.display());
    }

    Ok(())
}
