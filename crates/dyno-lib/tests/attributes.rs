use dyno_lib::vehicle::{Drivetrain, FuelType, VehicleSpec};
use dyno_lib::Error;

#[test]
fn drivetrain_parse_is_lenient() {
    assert_eq!(Drivetrain::parse(" AWD "), Drivetrain::Awd);
    assert_eq!(Drivetrain::parse("4wd"), Drivetrain::FourWd);
    assert_eq!(Drivetrain::parse("4x4"), Drivetrain::FourWd);
    assert_eq!(Drivetrain::parse("hovercraft"), Drivetrain::Unknown);
}

#[test]
fn unknown_drivetrain_carries_neutral_adjustments() {
    assert_eq!(Drivetrain::Unknown.weight_penalty_kg(), 0);
    assert!((Drivetrain::Unknown.traction_multiplier() - 1.0).abs() < 1e-9);
}

#[test]
fn fuel_parse_defaults_to_petrol() {
    assert_eq!(FuelType::parse("Diesel"), FuelType::Diesel);
    assert_eq!(FuelType::parse("CNG"), FuelType::Cng);
    assert_eq!(FuelType::parse("hybrid"), FuelType::Hybrid);
    assert_eq!(FuelType::parse("rocket fuel"), FuelType::Petrol);
}

fn spec() -> VehicleSpec {
    VehicleSpec {
        brand: "Tata".to_string(),
        model: "Safari".to_string(),
        category: "Mid-Size SUV".to_string(),
        cylinders: 4,
        horsepower: 168.0,
        torque_nm: 350.0,
        drivetrain: Drivetrain::Fwd,
        fuel_type: FuelType::Diesel,
        is_ladder_frame: false,
    }
}

#[test]
fn validates_cylinder_membership() {
    let mut invalid = spec();
    invalid.cylinders = 7;
    assert!(matches!(
        invalid.validate(),
        Err(Error::VehicleDataValidation { .. })
    ));

    let mut five = spec();
    five.cylinders = 5;
    assert!(five.validate().is_ok());
}

#[test]
fn validates_positive_finite_output() {
    for (horsepower, torque_nm) in [(0.0, 350.0), (-10.0, 350.0), (168.0, f64::NAN)] {
        let mut invalid = spec();
        invalid.horsepower = horsepower;
        invalid.torque_nm = torque_nm;
        assert!(invalid.validate().is_err());
    }
}

#[test]
fn identity_uppercases_and_fills_placeholders() {
    assert_eq!(spec().identity(), "TATA SAFARI");

    let mut anonymous = spec();
    anonymous.brand = "  ".to_string();
    anonymous.model = String::new();
    assert_eq!(anonymous.identity(), "GENERIC VEHICLE");
}
