//! Four-state Markov chain for nightly sleep-stage sequences.
//!
//! This crate models a night of sleep as a first-order Markov chain over
//! four stages, drawing one stage per fixed-duration epoch from a
//! row-stochastic transition matrix that is validated once at construction.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  transition   │────▶│   simulate     │────▶│   SessionTrace   │
//!  │  (validate P) │     │  (draw stages) │     │   (one night)    │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use hypnos_chain::{SessionConfig, SleepStage, TransitionMatrix, simulate_session};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let matrix = TransitionMatrix::new([
//!     [0.70, 0.25, 0.00, 0.05],
//!     [0.05, 0.70, 0.15, 0.10],
//!     [0.02, 0.20, 0.70, 0.08],
//!     [0.05, 0.60, 0.05, 0.30],
//! ])?;
//!
//! let session = SessionConfig::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! let trace = simulate_session(
//!     &matrix,
//!     session.initial_stage(),
//!     session.epoch_count(),
//!     &mut rng,
//! )?;
//!
//! assert_eq!(trace.len(), 96);
//! assert_eq!(trace.stages()[0], SleepStage::Awake);
//! # Ok::<(), hypnos_chain::ChainError>(())
//! ```

pub mod config;
pub mod error;
pub mod simulate;
pub mod stage;
pub mod trace;
pub mod transition;

pub use config::SessionConfig;
pub use error::ChainError;
pub use simulate::{simulate_session, simulate_session_into};
pub use stage::SleepStage;
pub use trace::SessionTrace;
pub use transition::TransitionMatrix;
