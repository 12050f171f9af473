use serde::Serialize;

use super::snapshot::Gender;

/// The golden ratio. A score at or above it earns the ÁUREO tier.
pub const GOLDEN_RATIO: f64 = 1.618;

/// Rank tiers, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Esfera,
    Survivor,
    Tank,
    HeavyDuty,
    Rookie,
    Amateur,
    Contender,
    Solido,
    Fitness,
    Spartan,
    Aureo,
    Leyenda,
    Divino,
}

/// One band of the rank table: lower bound (inclusive), labels and color.
#[derive(Debug)]
pub struct Tier {
    pub rank: Rank,
    pub min_score: f64,
    pub masculine: &'static str,
    pub feminine: &'static str,
    pub color: &'static str,
}

/// Rank bands scanned top-down; the first band whose `min_score` the score
/// reaches wins. The last band is unbounded below.
pub static TIERS: [Tier; 13] = [
    Tier { rank: Rank::Divino, min_score: 2.10, masculine: "DIVINO", feminine: "DIVINA", color: "#FFD700" },
    Tier { rank: Rank::Leyenda, min_score: 1.90, masculine: "LEYENDA", feminine: "LEYENDA", color: "#C5A000" },
    Tier { rank: Rank::Aureo, min_score: GOLDEN_RATIO, masculine: "ÁUREO", feminine: "ÁUREA", color: "#D4AF37" },
    Tier { rank: Rank::Spartan, min_score: 1.30, masculine: "SPARTAN", feminine: "AMAZONA", color: "#9C27B0" },
    Tier { rank: Rank::Fitness, min_score: 1.10, masculine: "FITNESS", feminine: "FITNESS", color: "#2196F3" },
    Tier { rank: Rank::Solido, min_score: 0.90, masculine: "SÓLIDO", feminine: "SÓLIDA", color: "#4CAF50" },
    Tier { rank: Rank::Contender, min_score: 0.70, masculine: "CONTENDER", feminine: "CONTENDER", color: "#8BC34A" },
    Tier { rank: Rank::Amateur, min_score: 0.40, masculine: "AMATEUR", feminine: "AMATEUR", color: "#FFC107" },
    Tier { rank: Rank::Rookie, min_score: 0.00, masculine: "ROOKIE", feminine: "ROOKIE", color: "#FF9800" },
    Tier { rank: Rank::HeavyDuty, min_score: -0.80, masculine: "HEAVY DUTY", feminine: "HEAVY DUTY", color: "#FF5722" },
    Tier { rank: Rank::Tank, min_score: -1.30, masculine: "TANK", feminine: "TANK", color: "#F44336" },
    Tier { rank: Rank::Survivor, min_score: -2.10, masculine: "SURVIVOR", feminine: "SURVIVOR", color: "#B71C1C" },
    Tier { rank: Rank::Esfera, min_score: f64::NEG_INFINITY, masculine: "ESFERA", feminine: "ESFERA", color: "#212121" },
];

impl Tier {
    pub fn title(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.masculine,
            Gender::Female => self.feminine,
        }
    }
}

impl Rank {
    /// Rank for a score. NaN falls through every comparison and lands on
    /// the bottom band.
    pub fn from_score(score: f64) -> Rank {
        tier_for(score).rank
    }

    pub fn tier(self) -> &'static Tier {
        TIERS
            .iter()
            .find(|t| t.rank == self)
            .unwrap_or(&TIERS[TIERS.len() - 1])
    }

    pub fn title(self, gender: Gender) -> &'static str {
        self.tier().title(gender)
    }

    pub fn color(self) -> &'static str {
        self.tier().color
    }
}

/// Band containing `score`.
pub fn tier_for(score: f64) -> &'static Tier {
    TIERS
        .iter()
        .find(|t| score >= t.min_score)
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Rank label for a score, spelled for the given gender.
pub fn rank_title(score: f64, gender: Gender) -> &'static str {
    tier_for(score).title(gender)
}

/// Hex display color for a score's rank band.
pub fn rank_color(score: f64) -> &'static str {
    tier_for(score).color
}

/// Percentage of the way from 0 to the golden threshold, clamped to [0, 100].
pub fn golden_progress(score: f64) -> f64 {
    (score / GOLDEN_RATIO * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_golden_threshold_is_inclusive() {
        assert_eq!(rank_title(1.618, Gender::Male), "ÁUREO");
        assert_eq!(rank_title(1.618, Gender::Female), "ÁUREA");
        assert_eq!(rank_title(1.617, Gender::Male), "SPARTAN");
        assert_eq!(rank_color(1.618), "#D4AF37");
    }

    #[test]
    fn test_every_threshold_boundary() {
        let expected = [
            (2.10, "DIVINO", "#FFD700"),
            (1.90, "LEYENDA", "#C5A000"),
            (1.30, "SPARTAN", "#9C27B0"),
            (1.10, "FITNESS", "#2196F3"),
            (0.90, "SÓLIDO", "#4CAF50"),
            (0.70, "CONTENDER", "#8BC34A"),
            (0.40, "AMATEUR", "#FFC107"),
            (0.00, "ROOKIE", "#FF9800"),
            (-0.80, "HEAVY DUTY", "#FF5722"),
            (-1.30, "TANK", "#F44336"),
            (-2.10, "SURVIVOR", "#B71C1C"),
            (-2.11, "ESFERA", "#212121"),
        ];
        for (score, title, color) in expected {
            assert_eq!(rank_title(score, Gender::Male), title, "score {}", score);
            assert_eq!(rank_color(score), color, "score {}", score);
        }
    }

    #[test]
    fn test_gendered_spellings() {
        assert_eq!(rank_title(2.5, Gender::Female), "DIVINA");
        assert_eq!(rank_title(1.4, Gender::Female), "AMAZONA");
        assert_eq!(rank_title(1.0, Gender::Female), "SÓLIDA");
        assert_eq!(rank_title(1.95, Gender::Female), "LEYENDA");
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(Rank::from_score(10.0), Rank::Divino);
        assert_eq!(Rank::from_score(-10.0), Rank::Esfera);
        assert_eq!(Rank::from_score(f64::NEG_INFINITY), Rank::Esfera);
        assert_eq!(Rank::from_score(f64::NAN), Rank::Esfera);
        assert_eq!(rank_color(f64::NAN), "#212121");
    }

    #[test]
    fn test_tiers_sorted_descending() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].min_score > pair[1].min_score);
            assert!(pair[0].rank > pair[1].rank);
        }
    }

    #[test]
    fn test_rank_roundtrip_through_table() {
        for tier in &TIERS {
            assert_eq!(tier.rank.color(), tier.color);
            assert_eq!(tier.rank.title(Gender::Male), tier.masculine);
        }
    }

    #[test]
    fn test_golden_progress() {
        assert_eq!(golden_progress(GOLDEN_RATIO), 100.0);
        assert_eq!(golden_progress(2.5), 100.0);
        assert_eq!(golden_progress(-1.0), 0.0);
        assert!((golden_progress(0.809) - 50.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn rank_is_monotonic(a in -4.0f64..4.0, b in -4.0f64..4.0) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            prop_assert!(Rank::from_score(hi) >= Rank::from_score(lo));
        }

        #[test]
        fn color_matches_title_band(score in -4.0f64..4.0) {
            let tier = tier_for(score);
            prop_assert_eq!(rank_color(score), tier.color);
            prop_assert_eq!(rank_title(score, Gender::Male), tier.masculine);
            prop_assert_eq!(rank_title(score, Gender::Female), tier.feminine);
        }
    }
}
