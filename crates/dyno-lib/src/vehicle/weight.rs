//! Curb-weight estimation from raw vehicle attributes.
//!
//! The estimate is a layered heuristic: a per-category shell weight,
//! segment and brand discounts, engine and fuel-system mass, chassis and
//! drivetrain mass, a power-scaling term, and finally a brand coefficient.
//! The steps are order-sensitive because the coefficient multiplies the
//! whole running total.

use tracing::debug;

use super::attributes::{FuelType, VehicleSpec};
use super::constants::{
    ASIAN_MASS_MARKET_BRANDS, BASE_SHELL_WEIGHTS, CNG_TANK_KG, DEFAULT_BASE_WEIGHT_KG,
    DIESEL_MASS_PER_CYLINDER_KG, HATCHBACK_ENTRY_BHP, HATCHBACK_ENTRY_DISCOUNT_KG,
    HATCHBACK_PERFORMANCE_BHP, HATCHBACK_PERFORMANCE_KG, HEAVY_BRANDS, HEAVY_COEFFICIENT,
    HYBRID_BATTERY_KG, LADDER_FRAME_KG, LIGHTWEIGHT_BRANDS, LIGHTWEIGHT_COEFFICIENT,
    LUXURY_BRANDS, LUXURY_SUV_COEFFICIENT, MIDWEIGHT_BRANDS, MIDWEIGHT_COEFFICIENT,
    NEUTRAL_COEFFICIENT, PETROL_MASS_PER_CYLINDER_KG, POWER_SCALING_KG_PER_BHP,
    SEDAN_MASS_MARKET_DISCOUNT_KG,
};

/// Estimate curb weight (kg) for a vehicle.
///
/// Unrecognized categories fall back to the default shell weight and
/// unknown brands take the neutral coefficient, so the function is total:
/// every input produces an estimate. The result is truncated to a whole
/// kilogram after the brand coefficient is applied.
///
/// # Examples
/// ```
/// use dyno_lib::vehicle::{estimate_curb_weight, Drivetrain, FuelType, VehicleSpec};
///
/// let spec = VehicleSpec {
///     brand: "Maruti".into(),
///     model: "Alto".into(),
///     category: "Hatchback".into(),
///     cylinders: 3,
///     horsepower: 70.0,
///     torque_nm: 89.0,
///     drivetrain: Drivetrain::Fwd,
///     fuel_type: FuelType::Petrol,
///     is_ladder_frame: false,
/// };
/// assert_eq!(estimate_curb_weight(&spec), 716);
/// ```
pub fn estimate_curb_weight(spec: &VehicleSpec) -> i32 {
    let category = spec.category.trim().to_lowercase();
    let brand = spec.brand.trim().to_lowercase();

    // 1. Base rolling-chassis shell weight for the category.
    let mut weight = f64::from(
        BASE_SHELL_WEIGHTS
            .get(category.as_str())
            .copied()
            .unwrap_or(DEFAULT_BASE_WEIGHT_KG),
    );

    // 2. Hatchback output banding: entry-level city cars shed shell mass,
    //    performance trims gain reinforcement.
    if category == "hatchback" {
        if spec.horsepower < HATCHBACK_ENTRY_BHP {
            weight -= f64::from(HATCHBACK_ENTRY_DISCOUNT_KG);
        } else if spec.horsepower > HATCHBACK_PERFORMANCE_BHP {
            weight += f64::from(HATCHBACK_PERFORMANCE_KG);
        }
    }

    // 3. Mass-market Asian sedans run lighter than the premium shell norm.
    if matches!(category.as_str(), "compact sedan" | "mid-size sedan")
        && ASIAN_MASS_MARKET_BRANDS.contains(&brand.as_str())
    {
        weight -= f64::from(SEDAN_MASS_MARKET_DISCOUNT_KG);
    }

    // 4. Engine block mass scales with cylinder count; diesel blocks are
    //    heavier. CNG tanks and hybrid batteries stack on top.
    let per_cylinder = if spec.fuel_type == FuelType::Diesel {
        DIESEL_MASS_PER_CYLINDER_KG
    } else {
        PETROL_MASS_PER_CYLINDER_KG
    };
    weight += f64::from(i32::from(spec.cylinders) * per_cylinder);
    match spec.fuel_type {
        FuelType::Cng => weight += f64::from(CNG_TANK_KG),
        FuelType::Hybrid => weight += f64::from(HYBRID_BATTERY_KG),
        FuelType::Petrol | FuelType::Diesel => {}
    }

    // 5. Chassis construction.
    if spec.is_ladder_frame {
        weight += f64::from(LADDER_FRAME_KG);
    }

    // 6. Supporting structure scales with output.
    weight += spec.horsepower * POWER_SCALING_KG_PER_BHP;

    // 7. Driveline mass.
    weight += f64::from(spec.drivetrain.weight_penalty_kg());

    // 8. Brand construction coefficient, applied to the whole total.
    let coefficient = brand_coefficient(&brand, &category);

    let estimate = (weight * coefficient).trunc() as i32;
    debug!(estimate_kg = estimate, brand = %spec.brand, category = %spec.category, "estimated curb weight");
    estimate
}

/// Brand construction coefficient. Luxury marques are neutral except for
/// their SUVs, which carry extra equipment mass.
fn brand_coefficient(brand: &str, category: &str) -> f64 {
    if LIGHTWEIGHT_BRANDS.contains(&brand) {
        LIGHTWEIGHT_COEFFICIENT
    } else if MIDWEIGHT_BRANDS.contains(&brand) {
        MIDWEIGHT_COEFFICIENT
    } else if HEAVY_BRANDS.contains(&brand) {
        HEAVY_COEFFICIENT
    } else if LUXURY_BRANDS.contains(&brand) {
        if category.contains("suv") {
            LUXURY_SUV_COEFFICIENT
        } else {
            NEUTRAL_COEFFICIENT
        }
    } else {
        NEUTRAL_COEFFICIENT
    }
}
