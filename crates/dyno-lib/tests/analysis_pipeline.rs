use dyno_lib::{
    analyze, apply_modifications, estimate_curb_weight, simulate_acceleration, AnalysisRequest,
    Drivetrain, EngineStage, Error, ForcedInduction, FuelType, ModPackage, ReportMode,
    VehicleSpec, WeightReduction,
};

fn request() -> AnalysisRequest {
    AnalysisRequest {
        spec: VehicleSpec {
            brand: "BMW".to_string(),
            model: "M340i".to_string(),
            category: "Executive Sedan".to_string(),
            cylinders: 6,
            horsepower: 374.0,
            torque_nm: 500.0,
            drivetrain: Drivetrain::Awd,
            fuel_type: FuelType::Petrol,
            is_ladder_frame: false,
        },
        mods: ModPackage {
            stage: EngineStage::Stage2,
            induction: ForcedInduction::Turbo,
            weight_reduction: WeightReduction::Track,
        },
    }
}

#[test]
fn chains_components_in_documented_order() {
    let request = request();
    let summary = analyze(&request).expect("valid request");

    let weight = estimate_curb_weight(&request.spec);
    assert_eq!(summary.stock.weight_kg, weight);

    let stock_perf = simulate_acceleration(
        weight.into(),
        request.spec.horsepower,
        request.spec.torque_nm,
        request.spec.drivetrain,
    )
    .expect("positive weight");
    assert_eq!(summary.stock.performance, stock_perf);

    let tuned = apply_modifications(
        request.spec.horsepower,
        request.spec.torque_nm,
        weight,
        &request.mods,
    );
    assert_eq!(summary.tuned.horsepower, f64::from(tuned.horsepower));
    assert_eq!(summary.tuned.weight_kg, tuned.weight_kg);
    assert_eq!(summary.mods_applied, tuned.mods_applied);
}

#[test]
fn repeated_runs_are_identical() {
    let request = request();
    let first = analyze(&request).expect("valid request");
    let second = analyze(&request).expect("valid request");
    assert_eq!(first, second);
}

#[test]
fn tuned_configuration_outperforms_stock_for_an_upgrade_build() {
    let summary = analyze(&request()).expect("valid request");
    assert!(summary.tuned.horsepower > summary.stock.horsepower);
    assert!(summary.tuned.weight_kg < summary.stock.weight_kg);
    assert!(
        summary.tuned.performance.zero_to_hundred_s < summary.stock.performance.zero_to_hundred_s
    );
}

#[test]
fn stock_package_produces_equal_configurations() {
    let mut request = request();
    request.mods = ModPackage::default();
    let summary = analyze(&request).expect("valid request");

    assert_eq!(summary.stock.weight_kg, summary.tuned.weight_kg);
    assert_eq!(summary.stock.performance, summary.tuned.performance);
    assert!(summary.mods_applied.is_empty());
}

#[test]
fn rejects_unlisted_cylinder_count() {
    let mut request = request();
    request.spec.cylinders = 7;
    let result = analyze(&request);
    assert!(matches!(
        result,
        Err(Error::VehicleDataValidation { .. })
    ));
}

#[test]
fn plain_rendering_names_both_configurations() {
    let summary = analyze(&request()).expect("valid request");
    let text = summary.render(ReportMode::PlainText);

    assert!(text.contains("BMW M340I"));
    assert!(text.contains("Stock:"));
    assert!(text.contains("Tuned:"));
    assert!(text.contains("Stage 2 Tune"));
}

#[test]
fn report_rendering_contains_comparison_table() {
    let summary = analyze(&request()).expect("valid request");
    let report = summary.render(ReportMode::Report);

    assert!(report.contains("Vehicle Analysis Report"));
    assert!(report.contains("Modifications installed:"));
    assert!(report.contains(" - Stage 2 Tune"));
    assert!(report.contains(" - Turbocharger Kit"));
    assert!(report.contains(" - Track Weight Reduction"));
    for metric in [
        "Horsepower (hp)",
        "Torque (Nm)",
        "0-100 km/h (s)",
        "Curb weight (kg)",
        "Power-to-weight (hp/t)",
    ] {
        assert!(report.contains(metric), "missing row: {metric}");
    }
    assert!(report.contains("Delta"));
}

#[test]
fn report_notes_stock_configuration_when_nothing_applied() {
    let mut request = request();
    request.mods = ModPackage::default();
    let summary = analyze(&request).expect("valid request");
    let report = summary.render(ReportMode::Report);
    assert!(report.contains("none (stock configuration)"));
}

#[test]
fn summary_serialises_to_expected_json_shape() {
    let summary = analyze(&request()).expect("valid request");
    let value = serde_json::to_value(&summary).expect("serialisable");

    assert_eq!(value["identity"], "BMW M340I");
    assert_eq!(value["drivetrain"], "AWD");
    assert_eq!(value["fuel_type"], "petrol");
    assert!(value["stock"]["performance"]["zero_to_hundred_s"].is_number());
    assert!(value["tuned"]["weight_kg"].is_number());
    assert!(value["classification"]["power_label"].is_string());
    assert!(value["mods_applied"].is_array());
}
