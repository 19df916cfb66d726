//! Power classification from cylinder count and output alone.
//!
//! This is the standalone variant of the toolkit: no weight, no mods,
//! just a banding table, a descriptive tag per band, and a segment tier
//! keyed on cylinder count.

use serde::{Deserialize, Serialize};

/// Output class within a cylinder count's banding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerLabel {
    Min,
    Max,
    Hyper,
    Unknown,
}

impl PowerLabel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Hyper => "HYPER",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PowerLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Market tier implied by cylinder count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerSegment {
    EntryLevel,
    Premium,
    LuxuryExecutive,
    HighPerformance,
    UltraPerformance,
    Exotic,
    Unknown,
}

impl PowerSegment {
    pub fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::Premium => "Premium",
            Self::LuxuryExecutive => "Luxury/Executive",
            Self::HighPerformance => "High Performance",
            Self::UltraPerformance => "Ultra Performance",
            Self::Exotic => "Exotic",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PowerSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive (min, max) output bands per cylinder count. First match
/// wins, so the shared 140 hp boundary for four cylinders stays in MIN.
fn power_bands(cylinders: u8) -> &'static [(f64, f64, PowerLabel)] {
    use PowerLabel::{Hyper, Max, Min};
    match cylinders {
        3 => &[
            (60.0, 90.0, Min),
            (91.0, 130.0, Max),
            (131.0, f64::INFINITY, Hyper),
        ],
        4 => &[
            (90.0, 140.0, Min),
            (140.0, 220.0, Max),
            (221.0, f64::INFINITY, Hyper),
        ],
        6 => &[
            (180.0, 260.0, Min),
            (261.0, 350.0, Max),
            (351.0, f64::INFINITY, Hyper),
        ],
        8 => &[
            (350.0, 450.0, Min),
            (451.0, 600.0, Max),
            (601.0, f64::INFINITY, Hyper),
        ],
        10 => &[
            (500.0, 550.0, Min),
            (551.0, 620.0, Max),
            (621.0, f64::INFINITY, Hyper),
        ],
        12 => &[
            (550.0, 700.0, Min),
            (701.0, 800.0, Max),
            (801.0, f64::INFINITY, Hyper),
        ],
        _ => &[],
    }
}

/// Classify an engine's output within its cylinder count's bands.
/// Unrecognized cylinder counts and out-of-band outputs return
/// [`PowerLabel::Unknown`].
pub fn classify_power(cylinders: u8, bhp: f64) -> PowerLabel {
    for (min_bhp, max_bhp, label) in power_bands(cylinders) {
        if (*min_bhp..=*max_bhp).contains(&bhp) {
            return *label;
        }
    }
    PowerLabel::Unknown
}

/// Descriptive tags for notable output levels.
///
/// The 6/8/10-cylinder chains are first-match with later arms shadowed by
/// the first (e.g. any V6 over 280 hp reads "Refined V6"); the table is
/// kept exactly as calibrated rather than reordered.
pub fn extra_tags(cylinders: u8, bhp: f64) -> Vec<&'static str> {
    let mut tags = Vec::new();
    match cylinders {
        3 => {
            if bhp > 120.0 && bhp <= 140.0 {
                tags.push("Efficient 3-Cyl");
            } else if bhp > 140.0 {
                tags.push("Performance 3-Cyl");
            }
        }
        4 => {
            if bhp > 160.0 && bhp <= 200.0 {
                tags.push("Balanced I4");
            } else if bhp > 200.0 && bhp <= 250.0 {
                tags.push("Sports Tuned I4");
            } else if bhp > 250.0 {
                tags.push("High Performance I4");
            }
        }
        6 => {
            if bhp > 280.0 {
                tags.push("Refined V6");
            } else if bhp > 330.0 {
                tags.push("Twin-Turbo V6");
            } else if bhp > 380.0 {
                tags.push("Track Spec V6");
            }
        }
        8 => {
            if bhp > 400.0 {
                tags.push("Premium V8");
            } else if bhp > 520.0 {
                tags.push("V8 BI-Turbo");
            } else if bhp > 600.0 {
                tags.push("SuperCharged V8");
            }
        }
        10 => {
            if bhp > 500.0 {
                tags.push("V10 High-Rev");
            } else if bhp > 620.0 {
                tags.push("SuperSport V10");
            } else if bhp > 700.0 {
                tags.push("V10 TrackLine");
            }
        }
        12 => {
            if bhp > 550.0 && bhp <= 700.0 {
                tags.push("V12 Grand Tourer");
            } else if bhp > 700.0 && bhp <= 900.0 {
                tags.push("V12 Performance");
            } else if bhp > 900.0 {
                tags.push("HyperDrive V12");
            }
        }
        _ => {}
    }
    tags
}

/// Map a cylinder count to its market tier.
pub fn power_segment(cylinders: u8) -> PowerSegment {
    match cylinders {
        3 => PowerSegment::EntryLevel,
        4 => PowerSegment::Premium,
        6 => PowerSegment::LuxuryExecutive,
        8 => PowerSegment::HighPerformance,
        10 => PowerSegment::UltraPerformance,
        12 => PowerSegment::Exotic,
        _ => PowerSegment::Unknown,
    }
}
