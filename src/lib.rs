//! WebAssembly safe-move advisor for hand-annotated Minesweeper grids.
//!
//! The player marks cells as safe or mine; the engine ranks the remaining
//! unknown cells with a fast, explainable heuristic and returns the top picks
//! plus a short rationale. All grid data crosses the JS boundary as a flat
//! `Uint8Array` in row-major layout: `cells[row * cols + col]` maps to JS
//! `cellStates[row][col]`, with 0 = unknown, 1 = safe, 2 = mine.

pub mod config;
pub mod engine;
pub mod error;
pub mod rationale;
pub mod rng;
pub mod types;

pub use config::{PatternBias, StrategyConfig};
pub use engine::{predict, predict_with, Prediction, Suggestion};
pub use error::{Error, Result};
pub use types::{Annotation, Grid};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::config::{PatternBias, StrategyConfig};
    use crate::engine;
    use crate::types::Grid;

    fn to_js_error(err: impl std::fmt::Display) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }

    /// Rank the unknown cells of an annotated grid.
    /// Returns JS object: `{ suggestions: [{ row, col, score }], rationale: string[], summary }`
    #[wasm_bindgen(js_name = "predict")]
    pub fn wasm_predict(
        rows: usize,
        cols: usize,
        cells_flat: &[u8],
        reverse_psychology: f64,
        risk_tolerance: f64,
        pattern_bias: &str,
    ) -> Result<JsValue, JsValue> {
        let grid = Grid::from_codes(rows, cols, cells_flat).map_err(to_js_error)?;
        let mode: PatternBias = pattern_bias.parse().map_err(to_js_error)?;
        let config = StrategyConfig::new(reverse_psychology, risk_tolerance, mode);

        let prediction = engine::predict(&grid, &config);
        serde_wasm_bindgen::to_value(&prediction).map_err(to_js_error)
    }

    /// Strategy panel reset state.
    /// Returns JS object: `{ reversePsychology, riskTolerance, patternBias }`
    #[wasm_bindgen(js_name = "defaultStrategy")]
    pub fn wasm_default_strategy() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&StrategyConfig::default()).map_err(to_js_error)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM advisor ready".to_string()
    }
}
