//! Closed-form acceleration simulation.
//!
//! This is a heuristic curve, not a physical model: an efficiency figure
//! blends the power- and torque-to-weight ratios, a fixed numerator over
//! that efficiency gives a base time, and the drivetrain's launch traction
//! scales it. No iteration, no solver.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::attributes::Drivetrain;
use super::constants::{
    BASE_TIME_NUMERATOR, FALLBACK_BASE_TIME_S, LAUNCH_OVERHEAD_S, MIN_ZERO_TO_HUNDRED_S,
    TORQUE_EFFICIENCY_WEIGHT,
};

/// Simulated performance figures for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Horsepower per 1000 kg.
    pub power_to_weight: f64,
    /// Simulated 0-100 km/h time in seconds, floored at the physical
    /// minimum and rounded to two decimals.
    pub zero_to_hundred_s: f64,
}

/// Simulate power-to-weight and 0-100 km/h time.
///
/// Formula: `efficiency = ptw + 0.22 × ttw` (both per 1000 kg), then
/// `time = (1100 / efficiency) × traction + 1.25`, floored at 2.2 s.
/// A non-positive efficiency takes a fixed 25 s base time instead.
///
/// # Errors
/// Returns [`Error::NonPositiveWeight`] when `weight_kg` is zero,
/// negative, or non-finite; the ratios would be meaningless.
pub fn simulate_acceleration(
    weight_kg: f64,
    horsepower: f64,
    torque_nm: f64,
    drivetrain: Drivetrain,
) -> Result<PerformanceResult> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::NonPositiveWeight { weight_kg });
    }

    let power_to_weight = horsepower / weight_kg * 1000.0;
    let torque_to_weight = torque_nm / weight_kg * 1000.0;
    let efficiency = power_to_weight + TORQUE_EFFICIENCY_WEIGHT * torque_to_weight;

    let base_time = if efficiency > 0.0 {
        BASE_TIME_NUMERATOR / efficiency
    } else {
        FALLBACK_BASE_TIME_S
    };

    let raw = base_time * drivetrain.traction_multiplier() + LAUNCH_OVERHEAD_S;
    let zero_to_hundred_s = round2(raw.max(MIN_ZERO_TO_HUNDRED_S));

    Ok(PerformanceResult {
        power_to_weight,
        zero_to_hundred_s,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
