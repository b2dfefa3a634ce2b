//! Sleep session simulation.

use crate::error::ChainError;
use crate::stage::SleepStage;
use crate::trace::SessionTrace;
use crate::transition::TransitionMatrix;

/// Simulates a full session of sleep stages.
///
/// The first element of the trace equals `initial`; each of the remaining
/// `n_epochs - 1` elements is drawn from the current stage's transition row,
/// so the next stage depends only on the current one. Deterministic given
/// the same matrix, initial stage, epoch count, and RNG seed.
///
/// # Errors
///
/// Returns [`ChainError::ZeroEpochs`] if `n_epochs` is zero.
pub fn simulate_session(
    matrix: &TransitionMatrix,
    initial: SleepStage,
    n_epochs: usize,
    rng: &mut impl rand::Rng,
) -> Result<SessionTrace, ChainError> {
    let mut stages = vec![initial; n_epochs];
    simulate_session_into(matrix, initial, rng, &mut stages)?;
    Ok(SessionTrace::new(stages))
}

/// Simulates sleep stages into a pre-allocated buffer.
///
/// `out.len()` is the epoch count: `out[0]` is set to `initial` and the
/// remaining elements are drawn sequentially. Produces the same sequence as
/// [`simulate_session`] under the same seed.
///
/// # Errors
///
/// Returns [`ChainError::ZeroEpochs`] if `out` is empty.
pub fn simulate_session_into(
    matrix: &TransitionMatrix,
    initial: SleepStage,
    rng: &mut impl rand::Rng,
    out: &mut [SleepStage],
) -> Result<(), ChainError> {
    if out.is_empty() {
        return Err(ChainError::ZeroEpochs);
    }
    out[0] = initial;
    let mut current = initial;
    for slot in out.iter_mut().skip(1) {
        current = matrix.sample(current, rng);
        *slot = current;
    }
    Ok(())
}
