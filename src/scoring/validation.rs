use thiserror::Error;

use super::snapshot::MeasurementSnapshot;

#[derive(Debug, Error, PartialEq)]
pub enum MeasurementError {
    #[error("invalid measurements: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Validate a snapshot before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_snapshot(snapshot: &MeasurementSnapshot) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let required = [
        ("age_years", snapshot.age_years),
        ("height_cm", snapshot.height_cm),
        ("weight_kg", snapshot.weight_kg),
        ("waist_cm", snapshot.waist_cm),
        ("shoulder_cm", snapshot.shoulder_cm),
        ("chest_cm", snapshot.chest_cm),
        ("biceps_cm", snapshot.biceps_cm),
        ("thigh_cm", snapshot.thigh_cm),
        ("calf_cm", snapshot.calf_cm),
    ];

    for (field, value) in required {
        if let Some(problem) = check_positive(value) {
            errors.push(format!("measurement.{}: {} (got {})", field, problem, value));
        }
    }

    if let Some(hip) = snapshot.hip_cm {
        if let Some(problem) = check_positive(hip) {
            errors.push(format!("measurement.hip_cm: {} (got {})", problem, hip));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_positive(value: f64) -> Option<&'static str> {
    if !value.is_finite() {
        Some("must be a finite number")
    } else if value <= 0.0 {
        Some("must be positive")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Gender;

    fn valid_snapshot() -> MeasurementSnapshot {
        MeasurementSnapshot {
            gender: Gender::Male,
            age_years: 30.0,
            height_cm: 180.0,
            weight_kg: 80.0,
            waist_cm: 80.0,
            shoulder_cm: 120.0,
            chest_cm: 100.0,
            biceps_cm: 35.0,
            thigh_cm: 55.0,
            calf_cm: 38.0,
            hip_cm: None,
        }
    }

    #[test]
    fn test_valid_snapshot() {
        assert!(validate_snapshot(&valid_snapshot()).is_ok());
    }

    #[test]
    fn test_zero_height() {
        let mut snapshot = valid_snapshot();
        snapshot.height_cm = 0.0;
        let errors = validate_snapshot(&snapshot).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("measurement.height_cm"));
        assert!(errors[0].contains("must be positive"));
    }

    #[test]
    fn test_nan_waist() {
        let mut snapshot = valid_snapshot();
        snapshot.waist_cm = f64::NAN;
        let errors = validate_snapshot(&snapshot).unwrap_err();
        assert!(errors[0].contains("measurement.waist_cm: must be a finite number"));
    }

    #[test]
    fn test_negative_hip_rejected_when_present() {
        let mut snapshot = valid_snapshot();
        snapshot.hip_cm = Some(-5.0);
        let errors = validate_snapshot(&snapshot).unwrap_err();
        assert!(errors[0].contains("measurement.hip_cm"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut snapshot = valid_snapshot();
        snapshot.weight_kg = -1.0; // Error 1
        snapshot.waist_cm = 0.0; // Error 2
        snapshot.calf_cm = f64::INFINITY; // Error 3
        let errors = validate_snapshot(&snapshot).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_display_joins_messages() {
        let err = MeasurementError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "invalid measurements: a; b");
    }
}
