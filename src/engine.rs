//! Prediction engine: ranks unknown cells by how safe they look.
//!
//! A heuristic, not a solver. Runs these passes:
//! - Neighborhood scoring (safe/mine adjacency, reverse psychology, risk penalty)
//! - Pattern bias (recent streak or exploration bonus)
//! - Tie-break jitter
//! - Top-K selection and rationale

use crate::config::{PatternBias, StrategyConfig};
use crate::rationale::{self, SelectionSummary};
use crate::rng::{JitterSource, TieBreakRng, JITTER_MAX};
use crate::types::{Annotation, Grid, NeighborCache};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Reward per confirmed-safe neighbor.
const SAFE_WEIGHT: f64 = 2.0;
/// Penalty per confirmed-mine neighbor.
const MINE_WEIGHT: f64 = 2.5;
const REVERSE_GAIN: f64 = 4.0;
/// Extra mine multiplier at zero risk tolerance.
const RISK_GAIN: f64 = 2.0;

/// Trailing annotations considered by the recent-streak bias.
pub const HISTORY_WINDOW: usize = 20;
const NEUTRAL_SAFE_RATIO: f64 = 0.5;
const RECENT_GAIN: f64 = 2.0;
const EXPLORE_GAIN: f64 = 0.15;
const MOORE_NEIGHBORS: u32 = 8;

pub const MAX_SUGGESTIONS: usize = 5;

/// Score breakdown for one unknown cell, without jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScore {
    pub safe_adj: u32,
    pub mine_adj: u32,
    /// Neighbors that are not unknown.
    pub known_adj: u32,
    pub base: f64,
    pub reverse_boost: f64,
    /// Subtracted from the total.
    pub risk_penalty: f64,
    pub pattern_adjustment: f64,
}

impl CellScore {
    pub fn total(&self) -> f64 {
        self.base + self.reverse_boost - self.risk_penalty + self.pattern_adjustment
    }
}

/// A recommended cell. `score` includes the tie-break jitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub row: usize,
    pub col: usize,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Best first.
    pub suggestions: Vec<Suggestion>,
    pub rationale: Vec<String>,
    pub summary: SelectionSummary,
}

impl Prediction {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.suggestions.iter().any(|s| s.row == row && s.col == col)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.suggestions.iter().map(|s| (s.row, s.col))
    }
}

/// Fraction of safe marks among the last [`HISTORY_WINDOW`] annotated cells
/// in row-major order, or 0.5 when nothing is annotated.
pub fn recent_safe_ratio(grid: &Grid) -> f64 {
    let history: Vec<Annotation> = grid
        .iter()
        .map(|(_, _, a)| a)
        .filter(|a| a.is_known())
        .collect();
    let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
    if window.is_empty() {
        return NEUTRAL_SAFE_RATIO;
    }
    let safe = window.iter().filter(|&&a| a == Annotation::Safe).count();
    safe as f64 / window.len() as f64
}

/// Score a single cell. `safe_ratio` comes from [`recent_safe_ratio`] and is
/// only read in [`PatternBias::Recent`] mode.
pub fn score_cell(
    grid: &Grid,
    nc: &NeighborCache,
    row: usize,
    col: usize,
    config: &StrategyConfig,
    safe_ratio: f64,
) -> CellScore {
    let mut safe_adj = 0u32;
    let mut mine_adj = 0u32;
    for &(nr, ncol) in nc.get(row, col) {
        match grid.get(nr, ncol) {
            Some(Annotation::Safe) => safe_adj += 1,
            Some(Annotation::Mine) => mine_adj += 1,
            _ => {},
        }
    }
    let known_adj = safe_adj + mine_adj;

    let base = safe_adj as f64 * SAFE_WEIGHT - mine_adj as f64 * MINE_WEIGHT;

    let obviousness = (safe_adj as f64 - mine_adj as f64).abs();
    let reverse_boost = (1.0 - obviousness.tanh()) * config.reverse_psychology * REVERSE_GAIN;

    let risk_penalty = mine_adj as f64 * (1.0 + (1.0 - config.risk_tolerance) * RISK_GAIN);

    let pattern_adjustment = match config.pattern_bias {
        PatternBias::Recent => (NEUTRAL_SAFE_RATIO - safe_ratio) * RECENT_GAIN,
        PatternBias::Explore => (MOORE_NEIGHBORS - known_adj) as f64 * EXPLORE_GAIN,
        PatternBias::Balanced => 0.0,
    };

    CellScore {
        safe_adj,
        mine_adj,
        known_adj,
        base,
        reverse_boost,
        risk_penalty,
        pattern_adjustment,
    }
}

fn bounded_jitter<J: JitterSource + ?Sized>(jitter: &mut J) -> f64 {
    let v = jitter.jitter();
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, JITTER_MAX)
    }
}

struct Candidate {
    suggestion: Suggestion,
    mine_adj: u32,
}

/// Rank the unknown cells of `grid` with entropy-seeded tie-breaking.
pub fn predict(grid: &Grid, config: &StrategyConfig) -> Prediction {
    predict_with(grid, config, &mut TieBreakRng::new())
}

/// Rank the unknown cells of `grid`, drawing tie-break jitter from `jitter`.
///
/// Never mutates its inputs. A grid without unknown cells yields an empty
/// suggestion list and a rationale with zero averages.
pub fn predict_with<J: JitterSource + ?Sized>(
    grid: &Grid,
    config: &StrategyConfig,
    jitter: &mut J,
) -> Prediction {
    let config = config.clamped();
    if !grid.has_annotations() {
        debug!("Grid has no annotations, ranking on strategy weights alone");
    }
    let nc = NeighborCache::for_grid(grid);
    let safe_ratio = recent_safe_ratio(grid);

    let mut candidates: Vec<Candidate> = Vec::new();
    for (row, col, annotation) in grid.iter() {
        if annotation != Annotation::Unknown {
            continue;
        }
        let score = score_cell(grid, &nc, row, col, &config, safe_ratio);
        trace!("({row}, {col}): {score:?}");
        candidates.push(Candidate {
            suggestion: Suggestion {
                row,
                col,
                score: score.total() + bounded_jitter(jitter),
            },
            mine_adj: score.mine_adj,
        });
    }

    let unknown = candidates.len();
    candidates.sort_by(|a, b| b.suggestion.score.total_cmp(&a.suggestion.score));
    candidates.truncate(MAX_SUGGESTIONS.min(unknown));

    let picks: Vec<(f64, u32)> = candidates
        .iter()
        .map(|c| (c.suggestion.score, c.mine_adj))
        .collect();
    let summary = SelectionSummary::from_picks(&picks);
    let rationale = rationale::explain(&summary, &config);

    debug!(
        "Predicted {} of {} unknown cells on {}x{} (mode {}, safe ratio {:.2}, avg {:.2})",
        summary.count,
        unknown,
        grid.rows(),
        grid.cols(),
        config.pattern_bias.as_str(),
        safe_ratio,
        summary.average_score
    );

    Prediction {
        suggestions: candidates.into_iter().map(|c| c.suggestion).collect(),
        rationale,
        summary,
    }
}
