use serde::Serialize;

use super::bmi::{bmi, BmiGrade};
use crate::config::{Profile, WeightEntry};

const FIVE_PERCENT: f64 = 5.0;
const TEN_PERCENT: f64 = 10.0;

/// Milestones unlocked by the weight log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Achievement {
    FirstStep,
    FivePercentLost,
    TenPercentLost,
    BmiImproved,
    GoalReached,
}

impl Achievement {
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstStep => "First Step",
            Achievement::FivePercentLost => "5% Lost",
            Achievement::TenPercentLost => "10% Lost",
            Achievement::BmiImproved => "BMI Improved",
            Achievement::GoalReached => "Goal Reached",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightProgress {
    pub start_kg: f64,
    pub current_kg: f64,
    pub goal_kg: Option<f64>,
    /// Percent of the way from the first weight to the goal, clamped to [0, 100]
    pub goal_progress: Option<f64>,
    pub achievements: Vec<Achievement>,
}

/// Percent of the distance from `start_kg` to `goal_kg` covered so far.
///
/// Works for both losing and gaining goals. Moving away from the goal gives
/// 0, overshooting gives 100, and a goal equal to the start gives 0.
pub fn goal_progress(start_kg: f64, current_kg: f64, goal_kg: f64) -> f64 {
    let progress = if start_kg == goal_kg {
        0.0
    } else if goal_kg < start_kg {
        (start_kg - current_kg) / (start_kg - goal_kg) * 100.0
    } else {
        (current_kg - start_kg) / (goal_kg - start_kg) * 100.0
    };
    progress.clamp(0.0, 100.0)
}

/// Achievements earned by a weight log, in a fixed order.
///
/// The first entry by date is the starting weight, the last one the current
/// weight. Nothing is unlocked without a height or without any entries.
pub fn unlocked_achievements(
    weights: &[WeightEntry],
    height_cm: Option<f64>,
    goal_weight_kg: Option<f64>,
) -> Vec<Achievement> {
    let Some(height_cm) = height_cm.filter(|h| *h != 0.0) else {
        return Vec::new();
    };
    let ordered = by_date(weights);
    let (Some(start), Some(latest)) = (ordered.first(), ordered.last()) else {
        return Vec::new();
    };
    let (start, latest) = (start.weight_kg, latest.weight_kg);

    let mut unlocked = vec![Achievement::FirstStep];

    if start > latest {
        let loss_percent = (start - latest) / start * 100.0;
        if loss_percent >= FIVE_PERCENT {
            unlocked.push(Achievement::FivePercentLost);
        }
        if loss_percent >= TEN_PERCENT {
            unlocked.push(Achievement::TenPercentLost);
        }
    }

    if ordered.len() > 1 {
        if let (Some(start_bmi), Some(latest_bmi)) =
            (bmi(start, height_cm), bmi(latest, height_cm))
        {
            let before = BmiGrade::from_bmi(start_bmi).health_step();
            let after = BmiGrade::from_bmi(latest_bmi).health_step();
            if after > before {
                unlocked.push(Achievement::BmiImproved);
            }
        }
    }

    if let Some(goal) = goal_weight_kg.filter(|g| *g != 0.0) {
        if latest <= goal {
            unlocked.push(Achievement::GoalReached);
        }
    }

    unlocked
}

/// Summarize the weight log against the profile's goal. None without entries.
pub fn weight_progress(profile: &Profile, weights: &[WeightEntry]) -> Option<WeightProgress> {
    let ordered = by_date(weights);
    let start_kg = ordered.first()?.weight_kg;
    let current_kg = ordered.last()?.weight_kg;
    let goal_kg = profile.goal_weight_kg.filter(|g| *g != 0.0);

    Some(WeightProgress {
        start_kg,
        current_kg,
        goal_kg,
        goal_progress: goal_kg.map(|goal| goal_progress(start_kg, current_kg, goal)),
        achievements: unlocked_achievements(weights, profile.height_cm, profile.goal_weight_kg),
    })
}

// Stable, so entries sharing a date keep their listed order
fn by_date(weights: &[WeightEntry]) -> Vec<&WeightEntry> {
    let mut ordered: Vec<&WeightEntry> = weights.iter().collect();
    ordered.sort_by_key(|w| w.date);
    ordered
}
