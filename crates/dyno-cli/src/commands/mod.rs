//! CLI subcommand handlers.
//!
//! Each module owns one subcommand's argument struct and handler; main.rs
//! stays focused on parsing and dispatch. Shared vehicle arguments and
//! the clap-facing enum wrappers live here.

use clap::{Args, ValueEnum};

use dyno_lib::{
    Drivetrain, EngineStage, ForcedInduction, FuelType, VehicleSpec, WeightReduction,
};

pub mod analyze;
pub mod classify;
pub mod weight;

/// Drivetrain as accepted on the command line. Unknown values are
/// rejected here by clap; the library-side fallback exists for
/// programmatic callers only.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DrivetrainArg {
    Fwd,
    Rwd,
    Awd,
    #[value(name = "4wd")]
    FourWd,
}

impl From<DrivetrainArg> for Drivetrain {
    fn from(value: DrivetrainArg) -> Self {
        match value {
            DrivetrainArg::Fwd => Drivetrain::Fwd,
            DrivetrainArg::Rwd => Drivetrain::Rwd,
            DrivetrainArg::Awd => Drivetrain::Awd,
            DrivetrainArg::FourWd => Drivetrain::FourWd,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FuelArg {
    Petrol,
    Diesel,
    Cng,
    Hybrid,
}

impl From<FuelArg> for FuelType {
    fn from(value: FuelArg) -> Self {
        match value {
            FuelArg::Petrol => FuelType::Petrol,
            FuelArg::Diesel => FuelType::Diesel,
            FuelArg::Cng => FuelType::Cng,
            FuelArg::Hybrid => FuelType::Hybrid,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StageArg {
    #[default]
    Stock,
    Stage1,
    Stage2,
    Stage3,
}

impl From<StageArg> for EngineStage {
    fn from(value: StageArg) -> Self {
        match value {
            StageArg::Stock => EngineStage::Stock,
            StageArg::Stage1 => EngineStage::Stage1,
            StageArg::Stage2 => EngineStage::Stage2,
            StageArg::Stage3 => EngineStage::Stage3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum InductionArg {
    #[default]
    None,
    Turbo,
    Supercharger,
}

impl From<InductionArg> for ForcedInduction {
    fn from(value: InductionArg) -> Self {
        match value {
            InductionArg::None => ForcedInduction::None,
            InductionArg::Turbo => ForcedInduction::Turbo,
            InductionArg::Supercharger => ForcedInduction::Supercharger,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ReductionArg {
    #[default]
    None,
    Street,
    Track,
    Race,
}

impl From<ReductionArg> for WeightReduction {
    fn from(value: ReductionArg) -> Self {
        match value {
            ReductionArg::None => WeightReduction::None,
            ReductionArg::Street => WeightReduction::Street,
            ReductionArg::Track => WeightReduction::Track,
            ReductionArg::Race => WeightReduction::Race,
        }
    }
}

/// Vehicle attributes shared by the analyze and weight subcommands.
#[derive(Debug, Clone, Args)]
pub struct VehicleArgs {
    /// Vehicle brand, e.g. "Maruti".
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Vehicle model, e.g. "Alto".
    #[arg(long, default_value = "")]
    pub model: String,

    /// Body category, e.g. "Hatchback" or "Mid-Size SUV".
    #[arg(long)]
    pub category: String,

    /// Cylinder count (3, 4, 5, 6, 8, 10, or 12).
    #[arg(long)]
    pub cylinders: u8,

    /// Engine output in brake horsepower.
    #[arg(long)]
    pub horsepower: f64,

    /// Engine torque in newton-metres.
    #[arg(long)]
    pub torque: f64,

    /// Driven-axle layout.
    #[arg(long, value_enum)]
    pub drivetrain: DrivetrainArg,

    /// Fuel system.
    #[arg(long, value_enum, default_value = "petrol")]
    pub fuel: FuelArg,

    /// Ladder-frame chassis (vs. monocoque).
    #[arg(long)]
    pub ladder_frame: bool,
}

impl VehicleArgs {
    pub fn to_spec(&self) -> VehicleSpec {
        VehicleSpec {
            brand: self.brand.clone(),
            model: self.model.clone(),
            category: self.category.clone(),
            cylinders: self.cylinders,
            horsepower: self.horsepower,
            torque_nm: self.torque,
            drivetrain: self.drivetrain.into(),
            fuel_type: self.fuel.into(),
            is_ladder_frame: self.ladder_frame,
        }
    }
}
