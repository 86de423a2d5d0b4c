//! Scoracle Core - betting analysis utilities.
//!
//! Two independent computations: a Monte Carlo simulator that estimates the
//! distribution of combined team totals from historical per-team scores
//! (with over/under line analysis), and a generator of evenly distributed
//! 2-bet parlay pairings. Python bindings are available behind the `python`
//! feature.

pub mod constants;
pub mod error;
pub mod input;
pub mod over_under;
pub mod parlay;
#[cfg(feature = "python")]
mod python;
pub mod report;
pub mod simulation;

pub use constants::{DEFAULT_SIMULATIONS, MAX_EVENTS, PARLAY_LEGS, THRESHOLD_SLOTS};
pub use error::{InvalidInputError, Result};
pub use over_under::{analyze, LineKind, ThresholdLine, ThresholdReport};
pub use parlay::{generate_balanced_pairs, pair_count, ParlayPair};
pub use simulation::{draw_count, simulate, summarize, ModalTotal, ScoreSample, ScoreSimulator, SimulationResult};
