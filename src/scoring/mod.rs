pub mod bmi;
pub mod engine;
pub mod progress;
pub mod rank;
pub mod snapshot;
pub mod validation;

pub use bmi::{bmi, BmiCategory, BmiGrade};
pub use engine::{calculate, calculate_score, ModuleContribution, ScoreBreakdown, ScoreResult};
pub use progress::{goal_progress, unlocked_achievements, weight_progress, Achievement, WeightProgress};
pub use rank::{golden_progress, rank_color, rank_title, Rank, GOLDEN_RATIO};
pub use snapshot::{assemble_snapshot, Gender, MeasurementSnapshot, SnapshotError};
pub use validation::{validate_snapshot, MeasurementError};
