//! Full analysis pipeline and its structured, renderable summary.
//!
//! `analyze` chains the estimators in the documented order: curb weight,
//! stock performance, modifications, tuned performance. The resulting
//! [`AnalysisSummary`] is a plain value that higher-level consumers (CLI,
//! report export) can serialise or render as text.

use std::fmt::Write;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::vehicle::{
    apply_modifications, classify_power, estimate_curb_weight, extra_tags, power_segment,
    simulate_acceleration, Drivetrain, FuelType, ModPackage, PerformanceResult, PowerLabel,
    PowerSegment, VehicleSpec,
};

/// Input to one full pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub spec: VehicleSpec,
    pub mods: ModPackage,
}

/// Engine classification block shared by the full pipeline and the
/// standalone classify command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub power_label: PowerLabel,
    pub segment: PowerSegment,
    pub tags: Vec<String>,
}

impl Classification {
    /// Classify an engine purely from cylinder count and output.
    pub fn from_engine(cylinders: u8, bhp: f64) -> Self {
        Self {
            power_label: classify_power(cylinders, bhp),
            segment: power_segment(cylinders),
            tags: extra_tags(cylinders, bhp)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// One configuration (stock or tuned) with its simulated performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub horsepower: f64,
    pub torque_nm: f64,
    pub weight_kg: i32,
    pub performance: PerformanceResult,
}

/// Presentation style for turning an [`AnalysisSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Terse on-screen form.
    PlainText,
    /// Exportable document with the stock-vs-tuned comparison table.
    Report,
}

/// Structured result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub identity: String,
    pub category: String,
    pub cylinders: u8,
    pub drivetrain: Drivetrain,
    pub fuel_type: FuelType,
    pub classification: Classification,
    pub stock: Configuration,
    pub tuned: Configuration,
    pub mods_applied: Vec<String>,
}

/// Run the full estimation pipeline for one request.
///
/// # Errors
/// Returns a validation error for out-of-range vehicle attributes. The
/// estimated curb weight is strictly positive for every valid spec, so
/// the downstream performance simulation cannot fail after validation.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisSummary> {
    let spec = &request.spec;
    spec.validate()?;

    let weight_kg = estimate_curb_weight(spec);
    let stock_perf = simulate_acceleration(
        weight_kg.into(),
        spec.horsepower,
        spec.torque_nm,
        spec.drivetrain,
    )?;

    let tuned = apply_modifications(spec.horsepower, spec.torque_nm, weight_kg, &request.mods);
    let tuned_perf = simulate_acceleration(
        tuned.weight_kg.into(),
        tuned.horsepower.into(),
        tuned.torque_nm.into(),
        spec.drivetrain,
    )?;

    debug!(
        weight_kg,
        stock_time = stock_perf.zero_to_hundred_s,
        tuned_time = tuned_perf.zero_to_hundred_s,
        mods = tuned.mods_applied.len(),
        "analysis complete"
    );

    Ok(AnalysisSummary {
        identity: spec.identity(),
        category: spec.category.trim().to_string(),
        cylinders: spec.cylinders,
        drivetrain: spec.drivetrain,
        fuel_type: spec.fuel_type,
        classification: Classification::from_engine(spec.cylinders, spec.horsepower),
        stock: Configuration {
            horsepower: spec.horsepower,
            torque_nm: spec.torque_nm,
            weight_kg,
            performance: stock_perf,
        },
        tuned: Configuration {
            horsepower: tuned.horsepower.into(),
            torque_nm: tuned.torque_nm.into(),
            weight_kg: tuned.weight_kg,
            performance: tuned_perf,
        },
        mods_applied: tuned.mods_applied,
    })
}

impl AnalysisSummary {
    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: ReportMode) -> String {
        match mode {
            ReportMode::PlainText => self.render_plain(),
            ReportMode::Report => self.render_report(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} ({}, {}-cylinder, {}, {})",
            self.identity, self.category, self.cylinders, self.drivetrain, self.fuel_type
        );
        let _ = writeln!(
            buffer,
            "Segment: {} | Power class: {}{}",
            self.classification.segment,
            self.classification.power_label,
            if self.classification.tags.is_empty() {
                String::new()
            } else {
                format!(" | Tags: {}", self.classification.tags.join(", "))
            }
        );
        let _ = writeln!(buffer, "Stock: {}", config_line(&self.stock));
        let _ = writeln!(buffer, "Tuned: {}", config_line(&self.tuned));
        if self.mods_applied.is_empty() {
            let _ = writeln!(buffer, "Mods:  none (stock configuration)");
        } else {
            let _ = writeln!(buffer, "Mods:  {}", self.mods_applied.join(", "));
        }
        buffer
    }

    fn render_report(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Vehicle Analysis Report");
        let _ = writeln!(buffer, "=======================");
        let _ = writeln!(buffer, "Vehicle:     {}", self.identity);
        let _ = writeln!(
            buffer,
            "Category:    {} ({}-cylinder, {}, {})",
            self.category, self.cylinders, self.drivetrain, self.fuel_type
        );
        let _ = writeln!(buffer, "Segment:     {}", self.classification.segment);
        let _ = writeln!(buffer, "Power class: {}", self.classification.power_label);
        if !self.classification.tags.is_empty() {
            let _ = writeln!(buffer, "Tags:        {}", self.classification.tags.join(", "));
        }

        let _ = writeln!(buffer, "\nModifications installed:");
        if self.mods_applied.is_empty() {
            let _ = writeln!(buffer, " - none (stock configuration)");
        } else {
            for label in &self.mods_applied {
                let _ = writeln!(buffer, " - {label}");
            }
        }

        let _ = writeln!(
            buffer,
            "\n{:<24} {:>10} {:>10} {:>10}",
            "Metric", "Stock", "Tuned", "Delta"
        );
        push_row_f0(
            &mut buffer,
            "Horsepower (hp)",
            self.stock.horsepower,
            self.tuned.horsepower,
        );
        push_row_f0(
            &mut buffer,
            "Torque (Nm)",
            self.stock.torque_nm,
            self.tuned.torque_nm,
        );
        push_row_f2(
            &mut buffer,
            "0-100 km/h (s)",
            self.stock.performance.zero_to_hundred_s,
            self.tuned.performance.zero_to_hundred_s,
        );
        push_row_f0(
            &mut buffer,
            "Curb weight (kg)",
            self.stock.weight_kg.into(),
            self.tuned.weight_kg.into(),
        );
        push_row_f1(
            &mut buffer,
            "Power-to-weight (hp/t)",
            self.stock.performance.power_to_weight,
            self.tuned.performance.power_to_weight,
        );
        buffer
    }
}

fn config_line(config: &Configuration) -> String {
    format!(
        "{:.0} hp / {:.0} Nm / {} kg -> 0-100 in {:.2} s ({:.1} hp/t)",
        config.horsepower,
        config.torque_nm,
        config.weight_kg,
        config.performance.zero_to_hundred_s,
        config.performance.power_to_weight
    )
}

fn push_row_f0(buffer: &mut String, metric: &str, stock: f64, tuned: f64) {
    let _ = writeln!(
        buffer,
        "{:<24} {:>10.0} {:>10.0} {:>10}",
        metric,
        stock,
        tuned,
        format!("{:+.0}", tuned - stock)
    );
}

fn push_row_f1(buffer: &mut String, metric: &str, stock: f64, tuned: f64) {
    let _ = writeln!(
        buffer,
        "{:<24} {:>10.1} {:>10.1} {:>10}",
        metric,
        stock,
        tuned,
        format!("{:+.1}", tuned - stock)
    );
}

fn push_row_f2(buffer: &mut String, metric: &str, stock: f64, tuned: f64) {
    let _ = writeln!(
        buffer,
        "{:<24} {:>10.2} {:>10.2} {:>10}",
        metric,
        stock,
        tuned,
        format!("{:+.2}", tuned - stock)
    );
}
