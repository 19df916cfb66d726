//! dyno library entry points.
//!
//! This crate exposes the curb-weight estimator, the closed-form
//! acceleration model, the modification engine, and the standalone power
//! classifier, plus the pipeline that chains them into a renderable
//! summary. Higher-level consumers (CLI, report export) should only
//! depend on the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod analysis;
pub mod error;
pub mod vehicle;

pub use analysis::{analyze, AnalysisRequest, AnalysisSummary, Classification, ReportMode};
pub use error::{Error, Result};
pub use vehicle::{
    apply_modifications, classify_power, estimate_curb_weight, extra_tags, power_segment,
    simulate_acceleration, Drivetrain, EngineStage, ForcedInduction, FuelType, ModPackage,
    PerformanceResult, PowerLabel, PowerSegment, TunedSpec, VehicleSpec, WeightReduction,
};
