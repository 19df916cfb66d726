//! Hypothetical modification engine.
//!
//! Three independent axes — engine stage, forced induction, weight
//! reduction — applied in that strict order to running totals, so the
//! induction multipliers compound on the already-staged output rather
//! than the stock figures.

use serde::{Deserialize, Serialize};

/// ECU/hardware tuning intensity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStage {
    #[default]
    Stock,
    Stage1,
    Stage2,
    Stage3,
}

impl EngineStage {
    /// (hp multiplier, torque multiplier, added mass kg, label).
    fn effect(self) -> Option<(f64, f64, i32, &'static str)> {
        match self {
            Self::Stock => None,
            Self::Stage1 => Some((1.15, 1.20, 0, "Stage 1 Tune")),
            Self::Stage2 => Some((1.25, 1.30, 4, "Stage 2 Tune")),
            Self::Stage3 => Some((1.40, 1.45, 18, "Stage 3 Tune")),
        }
    }
}

/// Bolt-on forced-induction kit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedInduction {
    #[default]
    None,
    Turbo,
    Supercharger,
}

impl ForcedInduction {
    fn effect(self) -> Option<(f64, f64, i32, &'static str)> {
        match self {
            Self::None => None,
            Self::Turbo => Some((1.30, 1.35, 35, "Turbocharger Kit")),
            Self::Supercharger => Some((1.50, 1.45, 50, "Supercharger Kit")),
        }
    }
}

/// Weight-reduction package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightReduction {
    #[default]
    None,
    /// Modest strip-out. Applied to the weight but deliberately not
    /// listed among the installed modifications.
    Street,
    Track,
    Race,
}

impl WeightReduction {
    /// (kg removed, label to append). Street carries no label.
    fn effect(self) -> Option<(i32, Option<&'static str>)> {
        match self {
            Self::None => None,
            Self::Street => Some((25, None)),
            Self::Track => Some((60, Some("Track Weight Reduction"))),
            Self::Race => Some((150, Some("Race Weight Reduction"))),
        }
    }
}

/// One selection per modification axis. All three axes are independent
/// and may be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModPackage {
    pub stage: EngineStage,
    pub induction: ForcedInduction,
    pub weight_reduction: WeightReduction,
}

impl ModPackage {
    /// Whether every axis is at its no-op value.
    pub fn is_stock(&self) -> bool {
        *self == Self::default()
    }
}

/// Output triple after modifications, with the installed-modification
/// labels in axis order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunedSpec {
    pub horsepower: i32,
    pub torque_nm: i32,
    pub weight_kg: i32,
    pub mods_applied: Vec<String>,
}

/// Apply a modification package to a stock (hp, torque, weight) triple.
///
/// Axis order is fixed: engine stage, then forced induction on the staged
/// figures, then weight reduction. Final figures are truncated to whole
/// units.
///
/// # Examples
/// ```
/// use dyno_lib::vehicle::{apply_modifications, ModPackage};
///
/// let stock = apply_modifications(250.0, 350.0, 1400, &ModPackage::default());
/// assert_eq!(stock.horsepower, 250);
/// assert_eq!(stock.torque_nm, 350);
/// assert_eq!(stock.weight_kg, 1400);
/// assert!(stock.mods_applied.is_empty());
/// ```
pub fn apply_modifications(
    horsepower: f64,
    torque_nm: f64,
    weight_kg: i32,
    package: &ModPackage,
) -> TunedSpec {
    let mut hp = horsepower;
    let mut torque = torque_nm;
    let mut weight = weight_kg;
    let mut mods_applied = Vec::new();

    if let Some((hp_mult, torque_mult, added_kg, label)) = package.stage.effect() {
        hp *= hp_mult;
        torque *= torque_mult;
        weight += added_kg;
        mods_applied.push(label.to_string());
    }

    if let Some((hp_mult, torque_mult, added_kg, label)) = package.induction.effect() {
        hp *= hp_mult;
        torque *= torque_mult;
        weight += added_kg;
        mods_applied.push(label.to_string());
    }

    if let Some((removed_kg, label)) = package.weight_reduction.effect() {
        weight -= removed_kg;
        if let Some(label) = label {
            mods_applied.push(label.to_string());
        }
    }

    TunedSpec {
        horsepower: hp.trunc() as i32,
        torque_nm: torque.trunc() as i32,
        weight_kg: weight,
        mods_applied,
    }
}
