use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::Gender;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub weights: Vec<WeightEntry>,

    #[serde(default)]
    pub measurements: Vec<MeasurementEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,

    /// Used when `--gender` is not given on the command line
    #[serde(default)]
    pub gender: Option<Gender>,

    /// Format: YYYY-MM-DD
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub height_cm: Option<f64>,

    /// Final target weight; drives goal progress and the goal achievement
    #[serde(default)]
    pub goal_weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// One dated set of circumferences, in centimeters.
///
/// Waist and shoulders are required for scoring; the rest may be left out.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MeasurementEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub shoulders: Option<f64>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub bicep: Option<f64>,
    #[serde(default)]
    pub thigh: Option<f64>,
    #[serde(default)]
    pub calves: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
profile:
  name: Ana
  gender: female
  birth_date: 1988-04-02
  height_cm: 168
  goal_weight_kg: 58
weights:
  - { date: 2026-09-01, weight_kg: 62 }
  - { date: 2026-10-01, weight_kg: 61.5 }
measurements:
  - date: 2026-10-01
    waist: 70
    shoulders: 104
    hips: 98
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.profile.gender, Some(Gender::Female));
        assert_eq!(
            config.profile.birth_date,
            NaiveDate::from_ymd_opt(1988, 4, 2)
        );
        assert_eq!(config.profile.height_cm, Some(168.0));
        assert_eq!(config.profile.goal_weight_kg, Some(58.0));
        assert_eq!(config.weights.len(), 2);
        assert_eq!(config.measurements[0].hips, Some(98.0));
        assert!(config.measurements[0].chest.is_none());
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
profile:
  height: 180
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
