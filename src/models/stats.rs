//! Hit statistics and judgement types.
//!
//! This module defines the judgement tiers used for scoring,
//! including the fixed score value of each tier and hit statistics tracking.

use serde::{Deserialize, Serialize};

/// Judgement tiers from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Judgement {
    /// Tightest window.
    Perfect,
    /// Close timing.
    Great,
    /// Acceptable timing.
    Good,
    /// Note passed the line without being hit.
    Miss,
}

impl Judgement {
    /// Scoring tiers in the order they are tested against a distance.
    pub const SCORING: [Judgement; 3] = [Judgement::Perfect, Judgement::Great, Judgement::Good];

    /// Fixed score awarded for this tier.
    pub fn score_value(self) -> u32 {
        match self {
            Judgement::Perfect => 100,
            Judgement::Great => 50,
            Judgement::Good => 20,
            Judgement::Miss => 0,
        }
    }

    /// Returns true for every tier that keeps the combo alive.
    pub fn is_hit(self) -> bool {
        !matches!(self, Judgement::Miss)
    }

    pub fn label(self) -> &'static str {
        match self {
            Judgement::Perfect => "PERFECT",
            Judgement::Great => "GREAT",
            Judgement::Good => "GOOD",
            Judgement::Miss => "MISS",
        }
    }
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated hit statistics for a play session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitStats {
    pub perfect: u32,
    pub great: u32,
    pub good: u32,
    pub miss: u32,
}

impl HitStats {
    /// Creates empty hit statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counter for a tier.
    pub fn count(&self, judgement: Judgement) -> u32 {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Good => self.good,
            Judgement::Miss => self.miss,
        }
    }

    /// Increments the counter for a tier and returns the new value.
    pub fn record(&mut self, judgement: Judgement) -> u32 {
        let slot = match judgement {
            Judgement::Perfect => &mut self.perfect,
            Judgement::Great => &mut self.great,
            Judgement::Good => &mut self.good,
            Judgement::Miss => &mut self.miss,
        };
        *slot += 1;
        *slot
    }

    /// Zeroes the scoring tier counters. The miss counter is left intact.
    pub fn reset_scoring_tiers(&mut self) {
        self.perfect = 0;
        self.great = 0;
        self.good = 0;
    }

    /// Total judged notes, misses included.
    pub fn total(&self) -> u32 {
        self.perfect + self.great + self.good + self.miss
    }

    /// Calculates accuracy percentage (0-100).
    ///
    /// Each tier is weighted by its score relative to a PERFECT:
    /// - Perfect: 100%
    /// - Great: 50%
    /// - Good: 20%
    /// - Miss: 0%
    pub fn calculate_accuracy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        let max = Judgement::Perfect.score_value() as f64;
        let earned = self.perfect as f64 * max
            + self.great as f64 * Judgement::Great.score_value() as f64
            + self.good as f64 * Judgement::Good.score_value() as f64;

        (earned / (total * max)) * 100.0
    }
}

/// Resolved judgement for one note. Produced once per hit or swept note.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JudgementOutcome {
    pub judgement: Judgement,
    pub lane: usize,
    pub score_delta: u32,
    /// Signed distance to the judgement line when the note was resolved.
    pub distance: f64,
    /// Session clock at resolution (in milliseconds).
    pub timestamp_ms: f64,
}

impl JudgementOutcome {
    pub fn new(judgement: Judgement, lane: usize, distance: f64, timestamp_ms: f64) -> Self {
        Self {
            judgement,
            lane,
            score_delta: judgement.score_value(),
            distance,
            timestamp_ms,
        }
    }
}

/// Final figures of a finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u32,
    pub hit_stats: HitStats,
    pub max_combo: u32,
    pub accuracy: f64,
}
