//! Parallel Sweep Module
//!
//! Rayon-backed variants of the brute-force sweep. Enable with the
//! `parallel` feature flag:
//!
//! ```toml
//! [dependencies]
//! sinegrid-core = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Every (frequency, phase) cell of the sweep is independent, so the grid
//! partitions cleanly by frequency: each worker reduces its own frequency's
//! phase column and the results are collected back in grid order. No locks,
//! no shared accumulators, and the per-cell arithmetic is unchanged, so
//! output is bit-identical to the sequential sweep.
//!
//! Worth it for large grids and long sample sets; for small sweeps the
//! sequential path is usually faster.

use rayon::prelude::*;

use crate::sine_fit::{phase_grid, reduce_row, residual, ResidualMatrix, SineFitScorer};
use crate::types::{Sample, ScoreRow};

/// Parallel counterpart of [`SineFitScorer::score`].
///
/// Partitioned by frequency; row order matches the frequency grid.
pub fn parallel_score(scorer: &SineFitScorer, samples: &[Sample]) -> Vec<ScoreRow> {
    let phases = phase_grid(scorer.phase_count());
    scorer
        .frequencies()
        .par_iter()
        .map(|&frequency| {
            reduce_row(
                frequency,
                phases.iter().map(|&phase| residual(frequency, phase, samples)),
            )
        })
        .collect()
}

/// Parallel counterpart of [`SineFitScorer::score_matrix`].
pub fn parallel_score_matrix(scorer: &SineFitScorer, samples: &[Sample]) -> ResidualMatrix {
    let phases = phase_grid(scorer.phase_count());
    let residuals = scorer
        .frequencies()
        .par_iter()
        .map(|&frequency| {
            phases
                .iter()
                .map(|&phase| residual(frequency, phase, samples))
                .collect()
        })
        .collect();
    ResidualMatrix {
        frequencies: scorer.frequencies().to_vec(),
        phases,
        residuals,
    }
}
