//! Score, combo and per-tier counters.

use super::SessionContext;
use crate::models::settings::MissPolicy;
use crate::models::stats::{HitStats, JudgementOutcome, SessionSummary};
use crate::shared::messages::CoreEvent;

/// Sole owner of scoring state. Only judgement outcomes mutate it.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub hit_stats: HitStats,
    miss_policy: MissPolicy,
}

impl ScoreState {
    pub fn new(miss_policy: MissPolicy) -> Self {
        Self {
            score: 0,
            combo: 0,
            max_combo: 0,
            hit_stats: HitStats::new(),
            miss_policy,
        }
    }

    /// Applies one outcome and returns the counter of its tier afterwards.
    pub fn apply(&mut self, outcome: &JudgementOutcome) -> u32 {
        let judgement = outcome.judgement;
        if judgement.is_hit() {
            self.score = self.score.saturating_add(outcome.score_delta);
            self.combo += 1;
            self.max_combo = self.max_combo.max(self.combo);
        } else {
            self.combo = 0;
            if self.miss_policy == MissPolicy::ResetCounts {
                self.hit_stats.reset_scoring_tiers();
            }
        }
        self.hit_stats.record(judgement)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            final_score: self.score,
            hit_stats: self.hit_stats.clone(),
            max_combo: self.max_combo,
            accuracy: self.hit_stats.calculate_accuracy(),
        }
    }
}

impl SessionContext {
    /// Feeds an outcome to the accumulator and reports it to the host.
    pub(crate) fn apply_outcome(&mut self, outcome: JudgementOutcome) {
        let tier_count = self.score.apply(&outcome);
        self.last_judgement = Some(outcome.judgement);

        log::debug!(
            "ENGINE: {} on lane {} (distance {:.1}), score {}, combo {}",
            outcome.judgement,
            outcome.lane,
            outcome.distance,
            self.score.score,
            self.score.combo
        );

        self.events.push(CoreEvent::JudgementOccurred {
            judgement: outcome.judgement,
            lane: outcome.lane,
            score_delta: outcome.score_delta,
            cumulative_score: self.score.score,
            tier_count,
            combo: self.score.combo,
        });
    }
}
