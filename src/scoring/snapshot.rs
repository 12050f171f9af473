use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{MeasurementEntry, Profile, WeightEntry};

/// Selects which branch of the architecture formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One set of body measurements, taken at a single point in time.
///
/// All lengths are in centimeters, mass in kilograms. Values are expected to
/// be strictly positive; see [`crate::scoring::validate_snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementSnapshot {
    pub gender: Gender,
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub waist_cm: f64,
    pub shoulder_cm: f64,
    pub chest_cm: f64,
    pub biceps_cm: f64,
    pub thigh_cm: f64,
    pub calf_cm: f64,
    /// Only materially used by the female branch. Absent counts as 0.
    pub hip_cm: Option<f64>,
}

impl MeasurementSnapshot {
    pub fn hip_or_zero(&self) -> f64 {
        self.hip_cm.unwrap_or(0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("no weight entries recorded")]
    NoWeights,
    #[error("no measurement entries recorded")]
    NoMeasurements,
    #[error("profile is missing {0}")]
    IncompleteProfile(&'static str),
    #[error("birth date {0} is after {1}")]
    BirthDateInFuture(NaiveDate, NaiveDate),
    #[error("latest measurement ({0}) is missing waist or shoulders")]
    MissingKeyMeasurements(NaiveDate),
}

// Estimates for circumferences that were not recorded, as a ratio of waist.
const CHEST_PER_WAIST: f64 = 1.2;
const BICEPS_PER_WAIST: f64 = 0.4;
const THIGH_PER_WAIST: f64 = 0.6;
const CALF_PER_WAIST: f64 = 0.4;
const HIP_PER_WAIST: f64 = 1.1;

/// A stored value of zero or a non-finite value counts as not recorded.
fn recorded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Build a snapshot from the most recent weight and measurement records.
///
/// Waist and shoulders are mandatory on the latest measurement entry. Other
/// circumferences fall back to a fixed fraction of the waist when missing
/// or recorded as zero.
/// Age is the number of full years between the birth date and `today`.
pub fn assemble_snapshot(
    profile: &Profile,
    weights: &[WeightEntry],
    measurements: &[MeasurementEntry],
    gender: Gender,
    today: NaiveDate,
) -> Result<MeasurementSnapshot, SnapshotError> {
    // Ties on date keep the entry listed last
    let latest_weight = weights
        .iter()
        .max_by_key(|w| w.date)
        .ok_or(SnapshotError::NoWeights)?;
    let latest_measurement = measurements
        .iter()
        .max_by_key(|m| m.date)
        .ok_or(SnapshotError::NoMeasurements)?;

    let birth_date = profile
        .birth_date
        .ok_or(SnapshotError::IncompleteProfile("birth_date"))?;
    let height_cm =
        recorded(profile.height_cm).ok_or(SnapshotError::IncompleteProfile("height_cm"))?;

    let age_years = today
        .years_since(birth_date)
        .ok_or(SnapshotError::BirthDateInFuture(birth_date, today))?;

    let (waist, shoulders) = match (
        recorded(latest_measurement.waist),
        recorded(latest_measurement.shoulders),
    ) {
        (Some(w), Some(s)) => (w, s),
        _ => {
            return Err(SnapshotError::MissingKeyMeasurements(
                latest_measurement.date,
            ))
        }
    };

    tracing::debug!(
        weight_date = %latest_weight.date,
        measurement_date = %latest_measurement.date,
        age_years,
        "assembled snapshot from latest records"
    );

    Ok(MeasurementSnapshot {
        gender,
        age_years: f64::from(age_years),
        height_cm,
        weight_kg: latest_weight.weight_kg,
        waist_cm: waist,
        shoulder_cm: shoulders,
        chest_cm: recorded(latest_measurement.chest).unwrap_or(waist * CHEST_PER_WAIST),
        biceps_cm: recorded(latest_measurement.bicep).unwrap_or(waist * BICEPS_PER_WAIST),
        thigh_cm: recorded(latest_measurement.thigh).unwrap_or(waist * THIGH_PER_WAIST),
        calf_cm: recorded(latest_measurement.calves).unwrap_or(waist * CALF_PER_WAIST),
        hip_cm: Some(recorded(latest_measurement.hips).unwrap_or(waist * HIP_PER_WAIST)),
    })
}
