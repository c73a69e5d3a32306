//! Risk Scoring Module
//!
//! Additive 0-100 scores built from independently triggered signals.
//! Each signal contributes a fixed weight and a flag; no signal suppresses
//! another, so the order signals are added in only affects flag order.

use tracing::debug;

use crate::utils::constants::MAX_RISK_SCORE;

/// Individual triggered signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFactor {
    pub weight: u32,
    pub flag: String,
}

/// Final, clamped score with its ordered flags and details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskScore {
    /// Sum of triggered weights clamped to 100
    pub total: u8,
    /// Unclamped sum, kept for logging
    pub raw_total: u32,
    /// Flags in the order their signals fired, never empty
    pub flags: Vec<String>,
    pub details: Vec<String>,
}

impl RiskScore {
    /// True when at least one signal fired
    pub fn has_signals(&self) -> bool {
        self.raw_total > 0
    }
}

/// Builder for creating risk scores from triggered signals.
///
/// Consumes itself on every step; nothing is observable until `build`.
#[derive(Debug, Clone, Default)]
pub struct RiskScoreBuilder {
    factors: Vec<ScoreFactor>,
    details: Vec<String>,
}

impl RiskScoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triggered signal
    pub fn with_signal(mut self, weight: u32, flag: impl Into<String>) -> Self {
        let flag = flag.into();
        debug!(weight, flag = %flag, "signal triggered");
        self.factors.push(ScoreFactor { weight, flag });
        self
    }

    /// Add a signal only when `triggered` holds
    pub fn with_signal_if(self, triggered: bool, weight: u32, flag: impl Into<String>) -> Self {
        if triggered {
            self.with_signal(weight, flag)
        } else {
            self
        }
    }

    /// Add an explanatory detail line
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Build final risk score; `sentinel` becomes the only flag if nothing fired
    pub fn build(self, sentinel: &str) -> RiskScore {
        let raw_total: u32 = self.factors.iter().map(|f| f.weight).sum();
        let total = raw_total.min(MAX_RISK_SCORE as u32) as u8;

        let flags = if self.factors.is_empty() {
            vec![sentinel.to_string()]
        } else {
            self.factors.into_iter().map(|f| f.flag).collect()
        };

        RiskScore {
            total,
            raw_total,
            flags,
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_uses_sentinel() {
        let score = RiskScoreBuilder::new().build("nothing");
        assert_eq!(score.total, 0);
        assert_eq!(score.flags, vec!["nothing".to_string()]);
        assert!(score.details.is_empty());
        assert!(!score.has_signals());
    }

    #[test]
    fn test_weights_are_additive_and_ordered() {
        let score = RiskScoreBuilder::new()
            .with_signal(20, "a")
            .with_signal_if(false, 50, "skipped")
            .with_signal_if(true, 15, "b")
            .with_detail("why")
            .build("nothing");

        assert_eq!(score.total, 35);
        assert_eq!(score.flags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(score.details, vec!["why".to_string()]);
    }

    #[test]
    fn test_total_is_clamped() {
        let score = RiskScoreBuilder::new()
            .with_signal(90, "scam")
            .with_signal(30, "entropy")
            .with_signal(20, "zeros")
            .build("nothing");

        assert_eq!(score.total, 100);
        assert_eq!(score.raw_total, 140);
        assert_eq!(score.flags.len(), 3);
    }
}
