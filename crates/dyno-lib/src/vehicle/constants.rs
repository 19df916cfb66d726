//! Fixed tables and calibration constants used across the estimation pipeline.
//!
//! Values here are heuristic calibrations, not measured data. They were tuned
//! against Indian-market curb weights and are kept as named constants so the
//! estimator reads as the layered adjustment it is.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Base rolling-chassis shell weight (kg) per category, before any
/// engine, chassis, or brand adjustment. Keys are stored lowercase;
/// lookups normalize the same way.
pub static BASE_SHELL_WEIGHTS: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("micro suv", 750),
        ("hatchback", 850),
        ("compact sedan", 900),
        ("mid-size sedan", 1050),
        ("executive sedan", 1300),
        ("sub-compact suv", 1050),
        ("compact suv", 1100),
        ("mid-size suv", 1300),
        ("full-size suv", 1450),
        ("supercar", 1100),
        ("roadster", 900),
        ("luxury sedan", 1500),
        ("luxury suv", 1600),
        ("mpv", 1100),
        ("muv", 1450),
    ])
});

/// Shell weight used when the category is not in [`BASE_SHELL_WEIGHTS`].
pub const DEFAULT_BASE_WEIGHT_KG: i32 = 1000;

/// Mass-market Asian brands whose compact/mid-size sedans run lighter
/// than the premium shell weights above.
pub const ASIAN_MASS_MARKET_BRANDS: &[&str] = &[
    "maruti", "suzuki", "hyundai", "kia", "honda", "nissan", "datsun", "renault", "mg",
];

/// Brands with consistently light construction (coefficient 0.90).
pub const LIGHTWEIGHT_BRANDS: &[&str] = &["maruti", "suzuki", "datsun", "renault", "nissan"];

/// Brands slightly under the premium norm (coefficient 0.95).
pub const MIDWEIGHT_BRANDS: &[&str] = &["hyundai", "kia", "honda"];

/// Brands with heavier-than-average construction (coefficient 1.05).
pub const HEAVY_BRANDS: &[&str] = &["tata", "mahindra", "jeep", "ford", "force", "toyota"];

/// Luxury marques. Their SUVs carry extra equipment mass (coefficient
/// 1.15 when the category mentions "suv"); their other bodies are neutral.
pub const LUXURY_BRANDS: &[&str] = &[
    "mercedes",
    "benz",
    "mercedes-benz",
    "bmw",
    "audi",
    "volvo",
    "jaguar",
    "land rover",
    "range rover",
    "jlr",
    "porsche",
    "lexus",
    "mini",
    "maserati",
    "bentley",
    "rolls royce",
    "ferrari",
    "lamborghini",
];

pub const LIGHTWEIGHT_COEFFICIENT: f64 = 0.90;
pub const MIDWEIGHT_COEFFICIENT: f64 = 0.95;
pub const HEAVY_COEFFICIENT: f64 = 1.05;
pub const LUXURY_SUV_COEFFICIENT: f64 = 1.15;
pub const NEUTRAL_COEFFICIENT: f64 = 1.0;

/// Hatchbacks below this output are entry-level city cars with much
/// lighter shells.
pub const HATCHBACK_ENTRY_BHP: f64 = 75.0;
pub const HATCHBACK_ENTRY_DISCOUNT_KG: i32 = 200;

/// Hatchbacks above this output carry performance-trim reinforcement.
pub const HATCHBACK_PERFORMANCE_BHP: f64 = 110.0;
pub const HATCHBACK_PERFORMANCE_KG: i32 = 30;

/// Discount for mass-market Asian compact and mid-size sedans.
pub const SEDAN_MASS_MARKET_DISCOUNT_KG: i32 = 50;

/// Per-cylinder engine mass. Diesel blocks are heavier and carry a turbo.
pub const DIESEL_MASS_PER_CYLINDER_KG: i32 = 55;
pub const PETROL_MASS_PER_CYLINDER_KG: i32 = 30;

/// Flat additions for the high-pressure CNG tank and the hybrid battery
/// pack. These stack on top of the per-cylinder term.
pub const CNG_TANK_KG: i32 = 60;
pub const HYBRID_BATTERY_KG: i32 = 90;

/// Ladder-frame chassis mass over an equivalent monocoque.
pub const LADDER_FRAME_KG: i32 = 300;

/// Structural mass added per unit of engine output (cooling, brakes,
/// wider rubber all scale with power).
pub const POWER_SCALING_KG_PER_BHP: f64 = 0.8;

/// Torque contribution weight in the efficiency figure used by the
/// acceleration model.
pub const TORQUE_EFFICIENCY_WEIGHT: f64 = 0.22;

/// Numerator of the closed-form base-time curve (seconds scale).
pub const BASE_TIME_NUMERATOR: f64 = 1100.0;

/// Base time used when efficiency is not positive (degenerate inputs).
pub const FALLBACK_BASE_TIME_S: f64 = 25.0;

/// Fixed launch and shift overhead added after the traction multiplier.
pub const LAUNCH_OVERHEAD_S: f64 = 1.25;

/// Physical floor for any simulated 0-100 km/h time.
pub const MIN_ZERO_TO_HUNDRED_S: f64 = 2.2;

/// Cylinder counts the estimator and classifier know about.
pub const VALID_CYLINDER_COUNTS: &[u8] = &[3, 4, 5, 6, 8, 10, 12];
