//! Residual Hit Detector
//!
//! Classifies a sweep's score rows into frequency "hits": rows whose
//! best-phase residual dips to a strict local minimum well below the global
//! average, and rows whose worst-phase residual spikes to a strict local
//! maximum well above it. A deep best-phase dip means some phase of the
//! reference sine tracks the signal closely at that frequency; a tall
//! worst-phase spike is the anti-phase counterpart of the same alignment.
//!
//! "Well below/above" is the inherited deviation heuristic: with
//! `avg = (avg_max + avg_min) / 2`, a minimum hit must fall under
//! `avg - 4·(avg - avg_min)` and a maximum hit must rise over
//! `avg - 4·(avg - avg_max)`. The two formulas are structurally identical
//! but sign-asymmetric around `avg`; that asymmetry is part of the
//! detector's contract and is kept as is.
//!
//! ## Example
//!
//! ```rust
//! use sinegrid_core::hit_detector::HitDetector;
//! use sinegrid_core::types::ScoreRow;
//!
//! let row = |max_residual, min_residual, frequency| ScoreRow {
//!     max_residual,
//!     min_residual,
//!     frequency,
//! };
//! // A flat table with one deep best-phase dip at 30 rad/s
//! let rows = vec![
//!     row(1.0, 1.0, 10.0),
//!     row(1.0, 1.0, 20.0),
//!     row(1.0, 0.05, 30.0),
//!     row(1.0, 1.0, 40.0),
//!     row(1.0, 1.0, 50.0),
//! ];
//!
//! let hits = HitDetector::new().detect(&rows).unwrap();
//! assert_eq!(hits.minima.len(), 1);
//! assert_eq!(hits.minima[0].frequency, 30.0);
//! assert!(hits.maxima.is_empty());
//! ```

use crate::types::{FrequencyHit, HitList, ScoreRow, SpectrumError, SpectrumResult};

/// Deviation factor of the inherited threshold heuristic.
pub const DEFAULT_DEVIATION_FACTOR: f64 = 4.0;

/// Local-extremum hit detector over a sweep's score table.
#[derive(Debug, Clone)]
pub struct HitDetector {
    /// How many average-deviations a row must stand out by to count
    deviation_factor: f64,
}

impl Default for HitDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HitDetector {
    /// Create a detector with the conventional deviation factor of 4.
    pub fn new() -> Self {
        Self {
            deviation_factor: DEFAULT_DEVIATION_FACTOR,
        }
    }

    /// Override the deviation factor. Larger values demand deeper dips and
    /// taller spikes before flagging a hit.
    pub fn with_deviation_factor(mut self, deviation_factor: f64) -> Self {
        self.deviation_factor = deviation_factor;
        self
    }

    /// Get the deviation factor.
    pub fn deviation_factor(&self) -> f64 {
        self.deviation_factor
    }

    /// Classify score rows into minima and maxima hits.
    ///
    /// Fails with [`SpectrumError::EmptyScoreTable`] on an empty table.
    /// Rows at the table boundary have only one neighbor and are never
    /// flagged, so fewer than three rows always yields an empty
    /// [`HitList`]. Hit order follows row order.
    pub fn detect(&self, rows: &[ScoreRow]) -> SpectrumResult<HitList> {
        if rows.is_empty() {
            return Err(SpectrumError::EmptyScoreTable);
        }

        let count = rows.len() as f64;
        let avg_max = rows.iter().map(|r| r.max_residual).sum::<f64>() / count;
        let avg_min = rows.iter().map(|r| r.min_residual).sum::<f64>() / count;
        let avg = (avg_max + avg_min) / 2.0;
        let thresh_min = avg - self.deviation_factor * (avg - avg_min);
        let thresh_max = avg - self.deviation_factor * (avg - avg_max);

        let mut minima = Vec::new();
        let mut maxima = Vec::new();

        for i in 1..rows.len().saturating_sub(1) {
            let (prev, row, next) = (&rows[i - 1], &rows[i], &rows[i + 1]);

            if row.min_residual < prev.min_residual
                && row.min_residual < next.min_residual
                && row.min_residual < thresh_min
            {
                minima.push(FrequencyHit {
                    frequency: row.frequency,
                    residual: row.min_residual,
                });
            }
            if row.max_residual > prev.max_residual
                && row.max_residual > next.max_residual
                && row.max_residual > thresh_max
            {
                maxima.push(FrequencyHit {
                    frequency: row.frequency,
                    residual: row.max_residual,
                });
            }
        }

        Ok(HitList { minima, maxima })
    }
}
