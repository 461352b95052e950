//! # SineGrid Core Library
//!
//! Brute-force sinusoid spectrum estimation for irregularly sampled, noisy
//! real-valued signals.
//!
//! ## Overview
//!
//! Given a set of (time, value) measurements, this crate estimates which
//! oscillation frequencies are present by exhaustively fitting a
//! unit-amplitude sine wave at every (frequency, phase) hypothesis on a
//! grid and scoring each fit with its total squared residual. The phase
//! dimension is reduced to a best/worst residual per frequency, and a
//! deviation heuristic then flags the frequencies whose residual curves
//! stand out as local extrema.
//!
//! Because the residual is summed directly at the measured sample times,
//! the method needs no resampling and no even spacing. It trades
//! efficiency for robustness on exactly the data where FFT-based methods
//! struggle; the sweep is deliberately dense and unoptimized.
//!
//! ## Processing Flow
//!
//! ```text
//! samples ──> SineFitScorer ──> Vec<ScoreRow> ──> HitDetector ──> HitList
//!                  │
//!                  └──> ResidualMatrix (full frequency × phase table)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sinegrid_core::{HitDetector, Sample, SineFitScorer, SweepConfig};
//!
//! // A clean 140 rad/s tone sampled over one second
//! let samples: Vec<Sample> = (0..250)
//!     .map(|i| {
//!         let t = i as f64 / 250.0;
//!         Sample::new(t, (140.0 * t).sin())
//!     })
//!     .collect();
//!
//! let scorer = SineFitScorer::new(SweepConfig {
//!     frequencies: (100..181).map(f64::from).collect(),
//!     phase_count: 30,
//! })?;
//! let rows = scorer.score(&samples);
//!
//! let hits = HitDetector::new().detect(&rows)?;
//! assert_eq!(hits.minima.len(), 1);
//! assert_eq!(hits.minima[0].frequency, 140.0);
//! # Ok::<(), sinegrid_core::SpectrumError>(())
//! ```

pub mod hit_detector;
pub mod sine_fit;
pub mod types;

// Parallel sweep (requires `parallel` feature)
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export main types
pub use hit_detector::{HitDetector, DEFAULT_DEVIATION_FACTOR};
pub use sine_fit::{ResidualMatrix, SineFitScorer, SweepConfig, DEFAULT_PHASE_COUNT};
pub use types::{FrequencyHit, HitList, Sample, ScoreRow, SpectrumError, SpectrumResult};
