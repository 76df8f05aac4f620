//! Definitions and constructors for hit window distance thresholds.
//!
//! Thresholds are expressed in the same unit as note positions (distance
//! from the judgement line), not in milliseconds.

use super::error::EngineError;
use crate::models::stats::Judgement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitWindow {
    pub perfect: f64,
    pub great: f64,
    pub good: f64,
    pub miss: f64,
}

impl HitWindow {
    /// Default window used when no custom values are configured.
    pub fn new() -> Self {
        Self {
            perfect: 20.0,
            great: 40.0,
            good: 60.0,
            miss: 80.0,
        }
    }

    /// Utility constructor for fully custom values.
    pub fn from_custom(perfect: f64, great: f64, good: f64, miss: f64) -> Result<Self, EngineError> {
        let window = Self {
            perfect,
            great,
            good,
            miss,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks PERFECT < GREAT < GOOD < MISS, all positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        let ordered = [self.perfect, self.great, self.good, self.miss];
        if ordered.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(EngineError::InvalidHitWindow(format!(
                "thresholds must be positive: {:?}",
                ordered
            )));
        }
        if ordered.windows(2).any(|w| w[0] >= w[1]) {
            return Err(EngineError::InvalidHitWindow(format!(
                "thresholds must be strictly increasing: {:?}",
                ordered
            )));
        }
        Ok(())
    }

    /// Maximum distance accepted for a scoring tier. `Miss` maps to the sweep threshold.
    pub fn threshold(&self, judgement: Judgement) -> f64 {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Good => self.good,
            Judgement::Miss => self.miss,
        }
    }

    /// Returns true if a press at this distance may target the note at all.
    pub fn in_range(&self, distance: f64) -> bool {
        distance.abs() < self.miss
    }

    /// Classifies a distance into a scoring tier.
    ///
    /// Boundaries are inclusive, so a distance equal to a threshold resolves to
    /// the tighter tier. Returns `None` past the GOOD window.
    pub fn judge(&self, distance: f64) -> Option<Judgement> {
        let abs_distance = distance.abs();
        Judgement::SCORING
            .into_iter()
            .find(|tier| abs_distance <= self.threshold(*tier))
    }

    /// Returns true once a note has overshot the line past the MISS threshold.
    pub fn is_missed(&self, signed_distance: f64) -> bool {
        signed_distance > self.miss
    }
}

impl Default for HitWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_tiers() {
        let window = HitWindow::new();
        assert_eq!(window.judge(0.0), Some(Judgement::Perfect));
        assert_eq!(window.judge(-15.0), Some(Judgement::Perfect));
        assert_eq!(window.judge(30.0), Some(Judgement::Great));
        assert_eq!(window.judge(45.0), Some(Judgement::Good));
        assert_eq!(window.judge(70.0), None);
    }

    #[test]
    fn test_boundaries_resolve_to_tighter_tier() {
        let window = HitWindow::new();
        assert_eq!(window.judge(20.0), Some(Judgement::Perfect));
        assert_eq!(window.judge(40.0), Some(Judgement::Great));
        assert_eq!(window.judge(-60.0), Some(Judgement::Good));
        assert!(!window.in_range(80.0));
        assert!(window.in_range(79.9));
        assert!(!window.is_missed(80.0));
        assert!(window.is_missed(80.5));
    }

    #[test]
    fn test_validate_rejects_unordered() {
        assert!(HitWindow::from_custom(20.0, 40.0, 60.0, 80.0).is_ok());
        assert!(HitWindow::from_custom(20.0, 20.0, 60.0, 80.0).is_err());
        assert!(HitWindow::from_custom(50.0, 40.0, 60.0, 80.0).is_err());
        assert!(HitWindow::from_custom(0.0, 40.0, 60.0, 80.0).is_err());
    }
}
