use serde::Serialize;

/// Body-mass index, or None when either input is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

/// Finer BMI scale that splits obesity into three classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiGrade {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiGrade {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiGrade::Underweight
        } else if bmi < 25.0 {
            BmiGrade::Normal
        } else if bmi < 30.0 {
            BmiGrade::Overweight
        } else if bmi < 35.0 {
            BmiGrade::ObesityI
        } else if bmi < 40.0 {
            BmiGrade::ObesityII
        } else {
            BmiGrade::ObesityIII
        }
    }

    /// Position on the improvement ladder, worst first. Underweight is off
    /// the ladder: moving out of it counts as an improvement, moving into it
    /// never does.
    pub fn health_step(self) -> Option<u8> {
        match self {
            BmiGrade::Underweight => None,
            BmiGrade::ObesityIII => Some(0),
            BmiGrade::ObesityII => Some(1),
            BmiGrade::ObesityI => Some(2),
            BmiGrade::Overweight => Some(3),
            BmiGrade::Normal => Some(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value() {
        let value = bmi(80.0, 200.0).unwrap();
        assert!((value - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_bmi_rejects_non_positive() {
        assert_eq!(bmi(0.0, 180.0), None);
        assert_eq!(bmi(80.0, -1.0), None);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
        assert_eq!(BmiCategory::Normal.label(), "Normal weight");
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(BmiGrade::from_bmi(29.9), BmiGrade::Overweight);
        assert_eq!(BmiGrade::from_bmi(30.0), BmiGrade::ObesityI);
        assert_eq!(BmiGrade::from_bmi(35.0), BmiGrade::ObesityII);
        assert_eq!(BmiGrade::from_bmi(40.0), BmiGrade::ObesityIII);
    }

    #[test]
    fn test_health_step_order() {
        assert!(BmiGrade::Normal.health_step() > BmiGrade::Overweight.health_step());
        assert!(BmiGrade::ObesityI.health_step() > BmiGrade::ObesityIII.health_step());
        assert!(BmiGrade::ObesityIII.health_step() > BmiGrade::Underweight.health_step());
    }
}
