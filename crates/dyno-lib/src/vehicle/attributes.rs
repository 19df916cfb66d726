//! Vehicle attributes and the closed enums behind the free-text inputs.
//!
//! Drivetrain and fuel type arrive as user text. They are modelled as
//! closed enums with lenient parsers: unrecognized drivetrain text maps to
//! [`Drivetrain::Unknown`] (neutral penalty and traction), unrecognized
//! fuel text maps to [`FuelType::Petrol`] (the neutral engine-mass term).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::VALID_CYLINDER_COUNTS;

/// Driven-axle layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Drivetrain {
    Fwd,
    Rwd,
    Awd,
    /// Part-time four-wheel drive with a transfer case.
    #[serde(rename = "4WD")]
    FourWd,
    /// Fallback for unrecognized input; carries neutral adjustments.
    Unknown,
}

impl Drivetrain {
    /// Lenient, case-insensitive parse; never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "fwd" => Self::Fwd,
            "rwd" => Self::Rwd,
            "awd" => Self::Awd,
            "4wd" | "4x4" => Self::FourWd,
            _ => Self::Unknown,
        }
    }

    /// Extra driveline mass (kg) over a front-wheel-drive layout.
    pub fn weight_penalty_kg(self) -> i32 {
        match self {
            Self::Fwd => 0,
            Self::Rwd => 50,
            Self::Awd => 80,
            Self::FourWd => 170,
            Self::Unknown => 0,
        }
    }

    /// Launch traction multiplier applied to the base acceleration time.
    /// AWD launches hardest; a 4WD transfer case costs time.
    pub fn traction_multiplier(self) -> f64 {
        match self {
            Self::Awd => 0.85,
            Self::Rwd => 1.00,
            Self::Fwd => 1.15,
            Self::FourWd => 1.20,
            Self::Unknown => 1.00,
        }
    }

    /// Display label matching the conventional badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fwd => "FWD",
            Self::Rwd => "RWD",
            Self::Awd => "AWD",
            Self::FourWd => "4WD",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Drivetrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel system fitted to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
    Hybrid,
}

impl FuelType {
    /// Lenient, case-insensitive parse. Unrecognized text behaves as
    /// petrol, which carries the neutral engine-mass term.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "diesel" => Self::Diesel,
            "cng" => Self::Cng,
            "hybrid" => Self::Hybrid,
            _ => Self::Petrol,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Cng => "CNG",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw vehicle attributes as entered by the user.
///
/// Brand, model, and category stay free text; the lookup tables normalize
/// case and whitespace at match time, and an unknown category falls back
/// to the default shell weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub brand: String,
    pub model: String,
    pub category: String,
    pub cylinders: u8,
    pub horsepower: f64,
    pub torque_nm: f64,
    pub drivetrain: Drivetrain,
    pub fuel_type: FuelType,
    pub is_ladder_frame: bool,
}

impl VehicleSpec {
    /// Validate vehicle attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if !VALID_CYLINDER_COUNTS.contains(&self.cylinders) {
            return Err(Error::VehicleDataValidation {
                message: format!(
                    "cylinders must be one of {:?}, got {}",
                    VALID_CYLINDER_COUNTS, self.cylinders
                ),
            });
        }

        let fields = [(self.horsepower, "horsepower"), (self.torque_nm, "torque_nm")];
        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }

    /// Headline identity line ("BRAND MODEL"), with placeholders for
    /// missing entries.
    pub fn identity(&self) -> String {
        let or_placeholder = |value: &str, fallback: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_uppercase()
            }
        };
        format!(
            "{} {}",
            or_placeholder(&self.brand, "GENERIC"),
            or_placeholder(&self.model, "VEHICLE")
        )
    }
}
