//! Vehicle data types, weight/performance estimation, and classification.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Vehicle attributes and the drivetrain/fuel enums
//! - [`weight`] - Curb-weight estimation
//! - [`performance`] - Closed-form acceleration simulation
//! - [`mods`] - Hypothetical modification engine
//! - [`classify`] - Standalone power classification
//! - [`constants`] - Shared tables and calibration constants
//!
//! # Example
//!
//! ```
//! use dyno_lib::vehicle::{
//!     estimate_curb_weight, simulate_acceleration, Drivetrain, FuelType, VehicleSpec,
//! };
//!
//! let spec = VehicleSpec {
//!     brand: "BMW".into(),
//!     model: "M340i".into(),
//!     category: "Executive Sedan".into(),
//!     cylinders: 6,
//!     horsepower: 374.0,
//!     torque_nm: 500.0,
//!     drivetrain: Drivetrain::Awd,
//!     fuel_type: FuelType::Petrol,
//!     is_ladder_frame: false,
//! };
//!
//! let weight = estimate_curb_weight(&spec);
//! let perf =
//!     simulate_acceleration(weight.into(), spec.horsepower, spec.torque_nm, spec.drivetrain)
//!         .unwrap();
//! assert!(perf.zero_to_hundred_s >= 2.2);
//! ```

pub mod attributes;
pub mod classify;
pub mod constants;
pub mod mods;
pub mod performance;
pub mod weight;

pub use attributes::{Drivetrain, FuelType, VehicleSpec};
pub use classify::{classify_power, extra_tags, power_segment, PowerLabel, PowerSegment};
pub use mods::{
    apply_modifications, EngineStage, ForcedInduction, ModPackage, TunedSpec, WeightReduction,
};
pub use performance::{simulate_acceleration, PerformanceResult};
pub use weight::estimate_curb_weight;
