//! Human-readable explanation of a prediction.

use crate::config::{PatternBias, StrategyConfig};
use serde::{Deserialize, Serialize};

/// Reverse psychology is called out above this weight.
const REVERSE_PSYCHOLOGY_NOTE_THRESHOLD: f64 = 0.4;
/// Risk tolerance is called out below this weight.
const LOW_RISK_NOTE_THRESHOLD: f64 = 0.3;

/// Aggregates over the selected cells. Averages are 0 for an empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub count: usize,
    pub average_score: f64,
    pub average_adjacent_mines: f64,
}

impl SelectionSummary {
    /// Build from `(score, adjacent_mines)` pairs of the selected cells.
    pub fn from_picks(picks: &[(f64, u32)]) -> Self {
        if picks.is_empty() {
            return Self::default();
        }
        let n = picks.len() as f64;
        let score_sum: f64 = picks.iter().map(|&(score, _)| score).sum();
        let mine_sum: u32 = picks.iter().map(|&(_, mines)| mines).sum();
        Self {
            count: picks.len(),
            average_score: score_sum / n,
            average_adjacent_mines: mine_sum as f64 / n,
        }
    }
}

/// Rationale lines in fixed order: summary, active heuristics, mine exposure.
pub fn explain(summary: &SelectionSummary, config: &StrategyConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    lines.push(format!(
        "Suggested {} move{} with an average safety score of {:.2}.",
        summary.count,
        if summary.count == 1 { "" } else { "s" },
        summary.average_score
    ));

    if config.reverse_psychology > REVERSE_PSYCHOLOGY_NOTE_THRESHOLD {
        lines.push(
            "We leaned into reverse psychology, avoiding overly obvious clusters.".to_owned(),
        );
    }
    if config.risk_tolerance < LOW_RISK_NOTE_THRESHOLD {
        lines.push(
            "Risk tolerance is low: heavily penalized tiles near confirmed mines.".to_owned(),
        );
    }
    match config.pattern_bias {
        PatternBias::Recent => {
            lines.push("Adapted to your recent streak to counteract mine hits.".to_owned())
        },
        PatternBias::Explore => {
            lines.push("Encouraged exploration into less-charted areas of the board.".to_owned())
        },
        PatternBias::Balanced => {},
    }

    lines.push(format!(
        "On average, these picks have {:.1} adjacent confirmed mines.",
        summary.average_adjacent_mines
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_has_zero_averages() {
        let summary = SelectionSummary::from_picks(&[]);
        assert_eq!(summary, SelectionSummary::default());

        let lines = explain(&summary, &StrategyConfig::new(0.0, 1.0, PatternBias::Balanced));
        assert_eq!(
            lines,
            vec![
                "Suggested 0 moves with an average safety score of 0.00.".to_owned(),
                "On average, these picks have 0.0 adjacent confirmed mines.".to_owned(),
            ]
        );
    }

    #[test]
    fn test_summary_averages() {
        let summary = SelectionSummary::from_picks(&[(3.0, 0), (1.0, 2), (2.0, 1)]);
        assert_eq!(summary.count, 3);
        assert!((summary.average_score - 2.0).abs() < 1e-12);
        assert!((summary.average_adjacent_mines - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_move_is_singular() {
        let summary = SelectionSummary::from_picks(&[(1.234, 0)]);
        let lines = explain(&summary, &StrategyConfig::new(0.0, 1.0, PatternBias::Balanced));
        assert_eq!(lines[0], "Suggested 1 move with an average safety score of 1.23.");
    }

    #[test]
    fn test_default_config_notes_low_risk_only() {
        let summary = SelectionSummary::from_picks(&[(1.0, 0), (1.0, 0)]);
        let lines = explain(&summary, &StrategyConfig::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Risk tolerance is low"));
    }

    #[test]
    fn test_all_notes_in_order() {
        let summary = SelectionSummary::from_picks(&[(1.0, 1)]);

        let lines = explain(&summary, &StrategyConfig::new(0.9, 0.1, PatternBias::Recent));
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("reverse psychology"));
        assert!(lines[2].contains("Risk tolerance is low"));
        assert!(lines[3].contains("recent streak"));
        assert_eq!(lines[4], "On average, these picks have 1.0 adjacent confirmed mines.");

        let lines = explain(&summary, &StrategyConfig::new(0.9, 0.1, PatternBias::Explore));
        assert!(lines[3].contains("less-charted"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let summary = SelectionSummary::default();
        let lines = explain(&summary, &StrategyConfig::new(0.4, 0.3, PatternBias::Balanced));
        assert_eq!(lines.len(), 2);
    }
}
