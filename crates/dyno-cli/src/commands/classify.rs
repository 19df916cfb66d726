//! Classify command handler: the standalone power classifier.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use dyno_lib::Classification;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ClassifyFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Vehicle brand, used only for the headline.
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Vehicle model, used only for the headline.
    #[arg(long, default_value = "")]
    pub model: String,

    /// Cylinder count (3, 4, 5, 6, 8, 10, or 12).
    #[arg(long)]
    pub cylinders: u8,

    /// Engine output in brake horsepower.
    #[arg(long)]
    pub horsepower: f64,

    /// Output format for stdout.
    #[arg(long, value_enum, default_value = "text")]
    pub format: ClassifyFormat,
}

#[derive(Debug, Serialize)]
struct ClassifySummary {
    identity: String,
    cylinders: u8,
    horsepower: f64,
    #[serde(flatten)]
    classification: Classification,
}

/// Handle the classify subcommand.
pub fn run(args: &ClassifyArgs) -> Result<()> {
    let identity = identity(&args.brand, &args.model);
    let classification = Classification::from_engine(args.cylinders, args.horsepower);

    match args.format {
        ClassifyFormat::Text => {
            println!("{identity}");
            println!("Segment:     {}", classification.segment);
            println!("Power class: {}", classification.power_label);
            if classification.tags.is_empty() {
                println!("Tags:        none");
            } else {
                println!("Tags:        {}", classification.tags.join(", "));
            }
            println!(
                "\nThe {identity} is configured with a {}-cylinder powertrain. Delivering a {} \
                 power output, this machine is classified within the {} segment.",
                args.cylinders, classification.power_label, classification.segment
            );
        }
        ClassifyFormat::Json => {
            let summary = ClassifySummary {
                identity,
                cylinders: args.cylinders,
                horsepower: args.horsepower,
                classification,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .context("failed to serialise classification")?
            );
        }
    }

    Ok(())
}

fn identity(brand: &str, model: &str) -> String {
    let brand = brand.trim();
    let model = model.trim();
    format!(
        "{} {}",
        if brand.is_empty() {
            "GENERIC".to_string()
        } else {
            brand.to_uppercase()
        },
        if model.is_empty() {
            "VEHICLE".to_string()
        } else {
            model.to_uppercase()
        }
    )
}
