use dyno_lib::vehicle::{simulate_acceleration, Drivetrain};
use dyno_lib::Error;

#[test]
fn pins_simple_rwd_case() {
    // ptw = 100, ttw = 0, efficiency = 100, base = 11.0, time = 12.25.
    let result = simulate_acceleration(1000.0, 100.0, 0.0, Drivetrain::Rwd).expect("valid weight");
    assert!((result.power_to_weight - 100.0).abs() < 1e-9);
    assert!((result.zero_to_hundred_s - 12.25).abs() < 1e-9);
}

#[test]
fn never_returns_below_physical_floor() {
    for horsepower in [500.0, 5_000.0, 50_000.0, 500_000.0] {
        let result = simulate_acceleration(900.0, horsepower, horsepower, Drivetrain::Awd)
            .expect("valid weight");
        assert!(result.zero_to_hundred_s >= 2.2);
    }

    let extreme =
        simulate_acceleration(800.0, 1_000_000.0, 1_000_000.0, Drivetrain::Awd).expect("valid");
    assert!((extreme.zero_to_hundred_s - 2.2).abs() < 1e-9);
}

#[test]
fn zero_output_takes_fallback_base_time() {
    // efficiency = 0 -> fixed 25.0 base, RWD multiplier 1.0, +1.25 overhead.
    let result = simulate_acceleration(1500.0, 0.0, 0.0, Drivetrain::Rwd).expect("valid weight");
    assert!((result.power_to_weight - 0.0).abs() < 1e-9);
    assert!((result.zero_to_hundred_s - 26.25).abs() < 1e-9);
}

#[test]
fn traction_orders_times_for_equal_inputs() {
    let time_for = |drivetrain| {
        simulate_acceleration(1500.0, 200.0, 300.0, drivetrain)
            .expect("valid weight")
            .zero_to_hundred_s
    };

    let awd = time_for(Drivetrain::Awd);
    let rwd = time_for(Drivetrain::Rwd);
    let fwd = time_for(Drivetrain::Fwd);
    let four_wd = time_for(Drivetrain::FourWd);

    assert!(awd < rwd);
    assert!(rwd < fwd);
    assert!(fwd < four_wd);

    // Unknown drivetrain takes the neutral multiplier.
    assert!((time_for(Drivetrain::Unknown) - rwd).abs() < 1e-9);
}

#[test]
fn result_is_rounded_to_two_decimals() {
    let result =
        simulate_acceleration(1432.0, 300.0, 400.0, Drivetrain::Rwd).expect("valid weight");
    let scaled = result.zero_to_hundred_s * 100.0;
    assert!((scaled - scaled.round()).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_weight() {
    for weight in [0.0, -1.0, f64::NAN] {
        let result = simulate_acceleration(weight, 100.0, 100.0, Drivetrain::Fwd);
        assert!(matches!(result, Err(Error::NonPositiveWeight { .. })));
    }
}
