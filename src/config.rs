//! Strategy weights chosen by the player.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_REVERSE_PSYCHOLOGY: f64 = 0.35;
const DEFAULT_RISK_TOLERANCE: f64 = 0.25;

/// Secondary adjustment applied after neighborhood scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternBias {
    /// Nudge every candidate by the recent safe/mine streak.
    Recent,
    #[default]
    Balanced,
    /// Favor cells with few annotated neighbors.
    Explore,
}

impl PatternBias {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternBias::Recent => "recent",
            PatternBias::Balanced => "balanced",
            PatternBias::Explore => "explore",
        }
    }
}

impl FromStr for PatternBias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(PatternBias::Recent),
            "balanced" => Ok(PatternBias::Balanced),
            "explore" => Ok(PatternBias::Explore),
            _ => Err(Error::UnknownPatternBias(s.to_owned())),
        }
    }
}

/// Heuristic emphasis. `Default` is the reset state of the strategy panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyConfig {
    /// In `[0, 1]`. Favors cells whose neighborhood is ambiguous.
    pub reverse_psychology: f64,
    /// In `[0, 1]`. Lower values amplify the penalty next to known mines.
    pub risk_tolerance: f64,
    pub pattern_bias: PatternBias,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            reverse_psychology: DEFAULT_REVERSE_PSYCHOLOGY,
            risk_tolerance: DEFAULT_RISK_TOLERANCE,
            pattern_bias: PatternBias::Balanced,
        }
    }
}

fn clamp_weight(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

impl StrategyConfig {
    /// Out-of-range weights are clamped, non-finite ones reset to default.
    pub fn new(reverse_psychology: f64, risk_tolerance: f64, pattern_bias: PatternBias) -> Self {
        Self {
            reverse_psychology,
            risk_tolerance,
            pattern_bias,
        }
        .clamped()
    }

    /// Slider form: whole percentages, clamped to `0..=100`.
    pub fn from_percent(
        reverse_psychology: i32,
        risk_tolerance: i32,
        pattern_bias: PatternBias,
    ) -> Self {
        Self::new(
            reverse_psychology.clamp(0, 100) as f64 / 100.0,
            risk_tolerance.clamp(0, 100) as f64 / 100.0,
            pattern_bias,
        )
    }

    pub fn clamped(self) -> Self {
        Self {
            reverse_psychology: clamp_weight(self.reverse_psychology, DEFAULT_REVERSE_PSYCHOLOGY),
            risk_tolerance: clamp_weight(self.risk_tolerance, DEFAULT_RISK_TOLERANCE),
            pattern_bias: self.pattern_bias,
        }
    }

    /// Whole-percent slider position, the inverse of [`StrategyConfig::from_percent`].
    pub fn reverse_psychology_percent(&self) -> u8 {
        (self.clamped().reverse_psychology * 100.0).round() as u8
    }

    /// Whole-percent slider position, the inverse of [`StrategyConfig::from_percent`].
    pub fn risk_tolerance_percent(&self) -> u8 {
        (self.clamped().risk_tolerance * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reset() {
        let c = StrategyConfig::default();
        assert_eq!(c.reverse_psychology, 0.35);
        assert_eq!(c.risk_tolerance, 0.25);
        assert_eq!(c.pattern_bias, PatternBias::Balanced);
    }

    #[test]
    fn test_new_clamps() {
        let c = StrategyConfig::new(1.7, -0.2, PatternBias::Explore);
        assert_eq!(c.reverse_psychology, 1.0);
        assert_eq!(c.risk_tolerance, 0.0);
        assert_eq!(c.pattern_bias, PatternBias::Explore);
    }

    #[test]
    fn test_non_finite_falls_back_to_default() {
        let c = StrategyConfig::new(f64::NAN, f64::INFINITY, PatternBias::Recent);
        assert_eq!(c.reverse_psychology, 0.35);
        assert_eq!(c.risk_tolerance, 0.25);
    }

    #[test]
    fn test_percent_roundtrip() {
        let c = StrategyConfig::from_percent(42, 130, PatternBias::Balanced);
        assert!((c.reverse_psychology - 0.42).abs() < 1e-12);
        assert_eq!(c.risk_tolerance, 1.0);
        assert_eq!(c.reverse_psychology_percent(), 42);
        assert_eq!(c.risk_tolerance_percent(), 100);

        let c = StrategyConfig::from_percent(-5, 0, PatternBias::Balanced);
        assert_eq!(c.reverse_psychology, 0.0);
    }

    #[test]
    fn test_pattern_bias_parse() {
        assert_eq!("recent".parse::<PatternBias>().unwrap(), PatternBias::Recent);
        assert_eq!(" Explore ".parse::<PatternBias>().unwrap(), PatternBias::Explore);
        assert_eq!("BALANCED".parse::<PatternBias>().unwrap(), PatternBias::Balanced);
        assert_eq!(
            "greedy".parse::<PatternBias>().unwrap_err(),
            Error::UnknownPatternBias("greedy".to_owned())
        );
        for mode in [PatternBias::Recent, PatternBias::Balanced, PatternBias::Explore] {
            assert_eq!(mode.as_str().parse::<PatternBias>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&StrategyConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"reversePsychology":0.35,"riskTolerance":0.25,"patternBias":"balanced"}"#
        );

        let json = r#"{"reversePsychology":0.8,"riskTolerance":0.1,"patternBias":"explore"}"#;
        let parsed: StrategyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, StrategyConfig::new(0.8, 0.1, PatternBias::Explore));
    }
}
