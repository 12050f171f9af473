use serde::Serialize;

use super::snapshot::{Gender, MeasurementSnapshot};
use super::validation::{validate_snapshot, MeasurementError};

pub const SCORE_MIN: f64 = -3.0;
pub const SCORE_MAX: f64 = 3.0;

/// Fixed calibration offset added to every score.
const OFFSET: f64 = 0.25;

const TITAN_HEIGHT_M: f64 = 1.70;
const TITAN_PER_M: f64 = 2.0;
const LEGACY_AGE: f64 = 35.0;
const LEGACY_PER_YEAR: f64 = 0.01;
const HANDBRAKE_BMI: f64 = 29.0;
const HANDBRAKE_PER_BMI: f64 = 0.08;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleContribution {
    pub label: &'static str, // e.g. "Architecture", "Titan"
    pub description: String, // e.g. "height 1.80 m > 1.70 m"
    pub value: f64,          // Signed amount added to the raw total
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub modules: Vec<ModuleContribution>,
    /// Sum of all modules before clipping and rounding.
    pub raw_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoreBreakdown {
    pub fn module(&self, label: &str) -> Option<&ModuleContribution> {
        self.modules.iter().find(|m| m.label == label)
    }
}

/// Compute the Aureo Index for a snapshot.
///
/// Total over all inputs: non-physical values propagate as IEEE infinities
/// or NaN (clipping leaves NaN untouched). Use [`calculate_score`] to reject
/// them up front.
pub fn calculate(snapshot: &MeasurementSnapshot) -> f64 {
    finalize(evaluate(snapshot).raw_total)
}

/// Validate a snapshot, then score it and report each module's share.
pub fn calculate_score(snapshot: &MeasurementSnapshot) -> Result<ScoreResult, MeasurementError> {
    validate_snapshot(snapshot).map_err(MeasurementError::Invalid)?;

    if snapshot.gender == Gender::Female && snapshot.hip_cm.is_none() {
        tracing::warn!("no hip measurement for female snapshot, counting it as 0");
    }

    let breakdown = evaluate(snapshot);
    let score = finalize(breakdown.raw_total);
    tracing::debug!(raw_total = breakdown.raw_total, score, "scored snapshot");

    Ok(ScoreResult { score, breakdown })
}

fn evaluate(s: &MeasurementSnapshot) -> ScoreBreakdown {
    let height_m = s.height_cm / 100.0;

    let (muscle_sum, waist_penalty) = match s.gender {
        Gender::Male => {
            // Shoulders weigh more than chest to favor the V-taper
            let torso_composite = (s.shoulder_cm * 1.4 + s.chest_cm) / 2.0;
            let muscle_sum = torso_composite + s.biceps_cm + s.thigh_cm + s.calf_cm;
            (muscle_sum, s.waist_cm * 3.0)
        }
        Gender::Female => {
            let shoulder_factor = 0.7;
            let hip_factor = if s.waist_cm < 85.0 { 1.4 } else { 1.0 };
            let muscle_sum = s.hip_or_zero() * hip_factor
                + s.shoulder_cm * shoulder_factor
                + s.chest_cm
                + s.thigh_cm
                + s.biceps_cm
                + s.calf_cm;
            (muscle_sum, s.waist_cm * 4.5)
        }
    };
    let architecture = (muscle_sum - waist_penalty) / s.height_cm;

    let density = s.weight_kg / s.waist_cm;

    let titan = if height_m > TITAN_HEIGHT_M {
        (height_m - TITAN_HEIGHT_M) * TITAN_PER_M
    } else {
        0.0
    };

    let legacy = if s.age_years > LEGACY_AGE {
        (s.age_years - LEGACY_AGE) * LEGACY_PER_YEAR
    } else {
        0.0
    };

    let imc = s.weight_kg / (height_m * height_m);
    let handbrake = if imc > HANDBRAKE_BMI {
        (imc - HANDBRAKE_BMI) * HANDBRAKE_PER_BMI
    } else {
        0.0
    };

    let raw_total = architecture + density + titan + legacy - handbrake + OFFSET;

    let modules = vec![
        ModuleContribution {
            label: "Architecture",
            description: format!(
                "muscle {:.1} - waist penalty {:.1} over {} cm",
                muscle_sum, waist_penalty, s.height_cm
            ),
            value: architecture,
        },
        ModuleContribution {
            label: "Density",
            description: format!("{} kg / {} cm waist", s.weight_kg, s.waist_cm),
            value: density,
        },
        ModuleContribution {
            label: "Titan",
            description: format!("height {:.2} m, bonus above {:.2} m", height_m, TITAN_HEIGHT_M),
            value: titan,
        },
        ModuleContribution {
            label: "Legacy",
            description: format!("age {}, bonus above {}", s.age_years, LEGACY_AGE),
            value: legacy,
        },
        ModuleContribution {
            label: "Handbrake",
            description: format!("BMI {:.1}, penalty above {}", imc, HANDBRAKE_BMI),
            value: -handbrake,
        },
        ModuleContribution {
            label: "Offset",
            description: "calibration".to_string(),
            value: OFFSET,
        },
    ];

    ScoreBreakdown { modules, raw_total }
}

/// Clip to [-3, 3], then round to 3 decimals.
fn finalize(raw: f64) -> f64 {
    // Comparisons rather than clamp() so NaN passes through as-is
    let mut clipped = raw;
    if clipped > SCORE_MAX {
        clipped = SCORE_MAX;
    }
    if clipped < SCORE_MIN {
        clipped = SCORE_MIN;
    }
    round_to_thousandths(clipped)
}

/// Round to the nearest thousandth of the exact binary value, halves away
/// from zero.
fn round_to_thousandths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // The only doubles exactly halfway between thousandths are odd sixteenths
    let sixteenths = value * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0 {
        return (value * 1000.0).round() / 1000.0;
    }
    // Precision formatting works on the exact decimal expansion
    format!("{:.3}", value).parse().unwrap_or(value)
}
