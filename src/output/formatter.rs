use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoring::rank::TIERS;
use crate::scoring::{
    bmi, golden_progress, BmiCategory, Gender, MeasurementSnapshot, ModuleContribution, Rank,
    ScoreResult, WeightProgress,
};

const PROGRESS_BAR_WIDTH: usize = 20;

/// Everything shown for one scored snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub gender: Gender,
    pub score: f64,
    pub rank: Rank,
    pub rank_title: &'static str,
    pub rank_color: &'static str,
    pub golden_progress: f64,
    pub bmi: Option<f64>,
    pub bmi_category: Option<&'static str>,
    pub modules: Vec<ModuleContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_progress: Option<WeightProgress>,
}

impl ScoreReport {
    pub fn new(snapshot: &MeasurementSnapshot, result: ScoreResult) -> Self {
        let rank = Rank::from_score(result.score);
        let bmi = bmi(snapshot.weight_kg, snapshot.height_cm);
        Self {
            gender: snapshot.gender,
            score: result.score,
            rank,
            rank_title: rank.title(snapshot.gender),
            rank_color: rank.color(),
            golden_progress: golden_progress(result.score),
            bmi,
            bmi_category: bmi.map(|b| BmiCategory::from_bmi(b).label()),
            modules: result.breakdown.modules,
            weight_progress: None,
        }
    }

    pub fn with_weight_progress(mut self, progress: Option<WeightProgress>) -> Self {
        self.weight_progress = progress;
        self
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Parse "#RRGGBB" into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

fn paint(text: &str, hex: &str, use_colors: bool) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) if use_colors => text.truecolor(r, g, b).bold().to_string(),
        _ => text.to_string(),
    }
}

/// Render a percentage as a fixed-width bar, e.g. "[#####-----]"
pub fn format_progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format a score report as multi-line text
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let score = format!("{:.3}", report.score);
    lines.push(format!(
        "Aureo Index: {}  {}",
        paint(&score, report.rank_color, use_colors),
        paint(report.rank_title, report.rank_color, use_colors)
    ));
    lines.push(format!(
        "  Golden progress: {} {:.0}%",
        format_progress_bar(report.golden_progress, PROGRESS_BAR_WIDTH),
        report.golden_progress
    ));

    if let (Some(bmi), Some(category)) = (report.bmi, report.bmi_category) {
        lines.push(format!("  BMI: {:.1} ({})", bmi, category));
    }

    if let Some(progress) = &report.weight_progress {
        match (progress.goal_kg, progress.goal_progress) {
            (Some(goal), Some(percent)) => lines.push(format!(
                "  Goal progress: {} {:.0}% ({:.1} kg -> {:.1} kg, goal {:.1} kg)",
                format_progress_bar(percent, PROGRESS_BAR_WIDTH),
                percent,
                progress.start_kg,
                progress.current_kg,
                goal
            )),
            _ => lines.push(format!(
                "  Weight: {:.1} kg -> {:.1} kg",
                progress.start_kg, progress.current_kg
            )),
        }
        if !progress.achievements.is_empty() {
            let titles: Vec<&str> = progress.achievements.iter().map(|a| a.title()).collect();
            lines.push(format!("  Achievements: {}", titles.join(", ")));
        }
    }

    lines.push("  Breakdown:".to_string());
    for module in &report.modules {
        let label = format!("{:<13}", module.label);
        let value = format!("{:+.3}", module.value);
        if use_colors {
            lines.push(format!(
                "    {}{:>8}  {}",
                label,
                value,
                module.description.dimmed()
            ));
        } else {
            lines.push(format!("    {}{:>8}  {}", label, value, module.description));
        }
    }

    lines.join("\n")
}

/// Format a score report as pretty JSON
pub fn format_json(report: &ScoreReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Format the rank table, highest tier first
pub fn format_rank_table(gender: Gender, use_colors: bool) -> String {
    TIERS
        .iter()
        .map(|tier| {
            let threshold = if tier.min_score.is_finite() {
                format!(">= {:>6.3}", tier.min_score)
            } else {
                format!("{:>9}", "below")
            };
            let title = format!("{:<11}", tier.title(gender));
            format!(
                "{}  {}  {}",
                threshold,
                paint(&title, tier.color, use_colors),
                tier.color
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
