//! Evolutionary search engine.
//!
//! Implements the generational loop that evolves a population of candidate
//! print batches toward the cheapest one:
//!
//! - [`Individual`]: a batch of exactly [`BATCH_SIZE`] distinct catalog
//!   indices
//! - [`EvolutionConfig`]: loop parameters (population size, termination,
//!   mutation probability, cost policy)
//! - [`operators`]: elitist selection, single-point crossover with
//!   cardinality repair, best-effort mutation
//! - [`EvolutionEngine`]: drives generations until convergence, the
//!   generation cap, or external cancellation, emitting one
//!   [`GenerationRecord`](crate::report::GenerationRecord) per generation
//!
//! The loop intentionally uses deterministic best-of-population selection
//! for both parents and full generational replacement. This trades diversity
//! for fast lock-in on a good batch; convergence is declared once the same
//! best batch (as a set) survives a configured number of consecutive
//! generations.

mod config;
pub mod operators;
mod runner;
mod types;

pub use config::{ConfigError, EvolutionConfig};
pub use runner::{EvolutionEngine, RunResult, Termination};
pub use types::{Individual, BATCH_SIZE};
