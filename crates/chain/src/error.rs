//! Error types for the hypnos-chain crate.

use crate::stage::SleepStage;

/// Error type for all fallible operations in the hypnos-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a transition probability is non-finite or outside [0, 1].
    #[error("transition probability {from}->{to} is invalid: {value} (must be finite and in [0, 1])")]
    InvalidProbability {
        /// Source stage of the offending entry.
        from: SleepStage,
        /// Target stage of the offending entry.
        to: SleepStage,
        /// The invalid value.
        value: f64,
    },

    /// Returned when a transition row does not sum to 1 within tolerance.
    #[error("transition row for {stage} sums to {sum}, expected 1.0")]
    NonStochasticRow {
        /// Source stage whose row is invalid.
        stage: SleepStage,
        /// The actual row sum.
        sum: f64,
    },

    /// Returned when a stage name does not match any declared stage.
    #[error("unknown sleep stage: {name:?} (expected one of Awake, Light, Deep, REM)")]
    UnknownStage {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a simulation is requested for zero epochs.
    #[error("epoch count must be at least 1")]
    ZeroEpochs,

    /// Returned when a session configuration is invalid.
    #[error("invalid session: {reason}")]
    InvalidSession {
        /// Description of the problem.
        reason: String,
    },
}
