//! Validated transition matrix for the four-stage sleep chain.

use tracing::debug;

use crate::error::ChainError;
use crate::stage::SleepStage;

/// Maximum deviation of a row sum from 1.0 before the matrix is rejected.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// A 4x4 row-stochastic transition matrix.
///
/// Each row `i` contains the probabilities of transitioning from stage `i`
/// to stages 0..4 in [`SleepStage::ALL`] order. The matrix is validated at
/// construction and immutable afterwards, so every instance that exists is
/// a proper stochastic matrix.
#[derive(Debug, Clone, Copy)]
pub struct TransitionMatrix {
    probs: [[f64; 4]; 4],
}

impl TransitionMatrix {
    /// Constructs a validated transition matrix.
    ///
    /// Rows and columns are ordered as [`SleepStage::ALL`]. Every entry must
    /// be finite and within `[0, 1]`, and every row must sum to 1.0 within
    /// `1e-9`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidProbability`] for a non-finite or
    /// out-of-range entry, and [`ChainError::NonStochasticRow`] for a row
    /// whose sum deviates beyond tolerance.
    pub fn new(probs: [[f64; 4]; 4]) -> Result<Self, ChainError> {
        for &from in &SleepStage::ALL {
            let row = &probs[from.as_index()];
            let mut sum = 0.0;
            for &to in &SleepStage::ALL {
                let p = row[to.as_index()];
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(ChainError::InvalidProbability { from, to, value: p });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(ChainError::NonStochasticRow { stage: from, sum });
            }
        }
        Ok(Self { probs })
    }

    /// Returns the outgoing probability distribution for a given stage.
    pub fn row(&self, from: SleepStage) -> &[f64; 4] {
        &self.probs[from.as_index()]
    }

    /// Returns the probability of transitioning from one stage to another.
    pub fn prob(&self, from: SleepStage, to: SleepStage) -> f64 {
        self.probs[from.as_index()][to.as_index()]
    }

    /// Returns the full 4x4 probability matrix.
    pub fn probs(&self) -> &[[f64; 4]; 4] {
        &self.probs
    }

    /// Samples the next stage given the current stage, using cumulative CDF.
    ///
    /// Draws a uniform random number in `[0, 1)` and walks the row's
    /// cumulative distribution in [`SleepStage::ALL`] order, returning the
    /// first stage whose cumulative probability meets or exceeds the draw.
    /// Falls back to the last stage if rounding prevents a match.
    pub fn sample(&self, from: SleepStage, rng: &mut impl rand::Rng) -> SleepStage {
        let u: f64 = rng.random();
        let row = &self.probs[from.as_index()];
        let mut cumulative = 0.0;
        for &stage in &SleepStage::ALL {
            cumulative += row[stage.as_index()];
            if cumulative >= u {
                return stage;
            }
        }
        // Only reachable through tolerance-level rounding drift; the matrix
        // itself was validated at construction.
        debug!(%from, u, cumulative, "cumulative sum fell short of draw, selecting last stage");
        SleepStage::Rem
    }
}
