//! Weight command handler: curb-weight estimate alone.

use anyhow::{Context, Result};
use clap::Args;

use dyno_lib::estimate_curb_weight;

use super::VehicleArgs;

#[derive(Debug, Args)]
pub struct WeightArgs {
    #[command(flatten)]
    pub vehicle: VehicleArgs,
}

/// Handle the weight subcommand.
pub fn run(args: &WeightArgs) -> Result<()> {
    let spec = args.vehicle.to_spec();
    spec.validate().context("invalid vehicle attributes")?;

    let weight_kg = estimate_curb_weight(&spec);
    println!(
        "Estimated curb weight for {}: {} kg",
        spec.identity(),
        weight_kg
    );
    Ok(())
}
