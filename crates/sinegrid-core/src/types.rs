//! Core types for sinusoid spectrum estimation
//!
//! This module defines the value types shared by the sweep scorer and the
//! hit detector: measurement samples, per-frequency score rows, detected
//! frequency hits, and the crate-wide error type.
//!
//! All types are plain read-only snapshots. Nothing in this crate mutates a
//! value after handing it to the caller, so results can be cloned, compared,
//! and serialized freely.

use serde::{Deserialize, Serialize};

/// Result type for spectrum estimation operations
pub type SpectrumResult<T> = Result<T, SpectrumError>;

/// Errors that can occur during spectrum estimation
///
/// Every variant marks a caller-side configuration bug. Both the scorer and
/// the detector are pure and deterministic, so a failed call fails
/// identically on retry; there is no recovery path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpectrumError {
    #[error("invalid phase count: {0}. Must be at least 1")]
    InvalidPhaseCount(usize),

    #[error("frequency grid is empty")]
    EmptyFrequencyGrid,

    #[error("score table is empty")]
    EmptyScoreTable,
}

/// A single signal measurement: the signal's value at one point in time.
///
/// Time is in seconds, value is dimensionless. The sweep works best when
/// values stay roughly within [-1, 1]; larger amplitudes are accepted but
/// fit quality against the unit-amplitude reference sinusoid degrades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Measurement time in seconds
    pub time: f64,
    /// Measured signal value
    pub value: f64,
}

impl Sample {
    /// Create a sample from a (time, value) pair.
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// Sweep result for one candidate frequency.
///
/// Holds the worst-phase and best-phase total squared residual against the
/// reference sinusoid at this frequency. Rows are emitted in frequency-grid
/// order; that ordering carries meaning because the hit detector compares
/// each row against its immediate neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// Largest residual over the phase grid
    pub max_residual: f64,
    /// Smallest residual over the phase grid
    pub min_residual: f64,
    /// Candidate frequency in rad/s
    pub frequency: f64,
}

/// A frequency flagged by the hit detector, with the residual that earned
/// the flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyHit {
    /// Flagged frequency in rad/s
    pub frequency: f64,
    /// Residual value at the flagged row (best-phase for minima hits,
    /// worst-phase for maxima hits)
    pub residual: f64,
}

/// Detector output: frequencies whose residual curves show a qualifying
/// local extremum.
///
/// Both lists preserve the score-table row order, so hits come out in the
/// same order as the caller's frequency grid. A frequency appears in both
/// lists only if it independently passes both tests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitList {
    /// Rows whose best-phase residual is a strict local minimum below the
    /// deviation threshold
    pub minima: Vec<FrequencyHit>,
    /// Rows whose worst-phase residual is a strict local maximum above the
    /// deviation threshold
    pub maxima: Vec<FrequencyHit>,
}

impl HitList {
    /// True if neither list contains a hit.
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty() && self.maxima.is_empty()
    }

    /// Total number of hits across both lists.
    pub fn len(&self) -> usize {
        self.minima.len() + self.maxima.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_from_pair() {
        let s = Sample::from((0.25, -0.5));
        assert_eq!(s.time, 0.25);
        assert_eq!(s.value, -0.5);
    }

    #[test]
    fn test_hit_list_empty() {
        let hits = HitList::default();
        assert!(hits.is_empty());
        assert_eq!(hits.len(), 0);
    }

    #[test]
    fn test_hit_list_len() {
        let hits = HitList {
            minima: vec![FrequencyHit {
                frequency: 20.0,
                residual: 0.1,
            }],
            maxima: vec![],
        };
        assert!(!hits.is_empty());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = SpectrumError::InvalidPhaseCount(0);
        assert!(err.to_string().contains("phase count"));
        assert!(SpectrumError::EmptyFrequencyGrid
            .to_string()
            .contains("frequency grid"));
    }
}
