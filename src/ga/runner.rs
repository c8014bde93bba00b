//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] owns one run from population initialization to
//! termination: breed offspring, replace the population wholesale, record
//! the generation's best, check for stagnation-based convergence.

use super::config::{ConfigError, EvolutionConfig};
use super::operators::{crossover, mutate, select_best};
use super::types::{Individual, BATCH_SIZE};
use crate::catalog::Catalog;
use crate::fitness::Evaluator;
use crate::report::{GenerationRecord, ReportSink};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The same best batch persisted for `convergence_threshold` consecutive
    /// generations. A heuristic proxy for local-optimum lock-in, not a
    /// mathematical guarantee.
    Converged,

    /// The generation cap was reached first.
    MaxGenerationsReached,

    /// The cancellation flag was raised; the trace covers the generations
    /// completed up to that point.
    Cancelled,
}

/// Outcome of one evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Best batch of the final generation.
    pub best: Individual,

    /// Score of [`best`](RunResult::best).
    pub best_score: f64,

    /// One record per completed generation, in order.
    pub trace: Vec<GenerationRecord>,

    /// Why the run stopped.
    pub termination: Termination,
}

impl RunResult {
    /// Number of generations completed.
    pub fn generations(&self) -> usize {
        self.trace.len()
    }
}

/// Drives the generational loop.
pub struct EvolutionEngine;

impl EvolutionEngine {
    /// Runs one evolutionary search over `catalog`.
    ///
    /// Each completed generation is pushed through `sink` before the next
    /// one starts, so consumers can render live progress. The final
    /// [`RunResult`] is pushed through the sink as well, then returned.
    pub fn run<S: ReportSink>(
        catalog: &Catalog,
        config: &EvolutionConfig,
        sink: &mut S,
    ) -> Result<RunResult, ConfigError> {
        Self::run_with_cancel(catalog, config, sink, None)
    }

    /// Like [`run`](Self::run), with a cooperative cancellation flag.
    ///
    /// The flag is checked once per generation; raising it stops the run
    /// between generations with the partial trace intact.
    pub fn run_with_cancel<S: ReportSink>(
        catalog: &Catalog,
        config: &EvolutionConfig,
        sink: &mut S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult, ConfigError> {
        config.validate()?;
        if catalog.len() < BATCH_SIZE {
            return Err(ConfigError::CatalogTooSmall { len: catalog.len() });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let evaluator = Evaluator::new(catalog, config.policy.clone());
        let n_items = catalog.len();

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(n_items, &mut rng))
            .collect();
        let mut scores: Vec<f64> = population.iter().map(|ind| evaluator.score(ind)).collect();

        // Fallback in case the run is cancelled before a generation completes.
        let initial_best = select_best(&scores);
        let mut best = population[initial_best].clone();
        let mut best_score = scores[initial_best];

        let mut trace: Vec<GenerationRecord> = Vec::new();
        let mut previous_best: Option<[usize; BATCH_SIZE]> = None;
        let mut stagnant = 0usize;
        let mut termination = Termination::MaxGenerationsReached;

        for generation in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            // Full replacement: every slot is bred from the current elite.
            let offspring: Vec<Individual> = (0..population.len())
                .map(|_| {
                    let parent = &population[select_best(&scores)];
                    let mate = &population[select_best(&scores)];
                    let mut child = crossover(parent, mate, n_items, &mut rng);
                    mutate(&mut child, n_items, config.mutation_probability, &mut rng);
                    child
                })
                .collect();

            population = offspring;
            scores = population.iter().map(|ind| evaluator.score(ind)).collect();

            let best_index = select_best(&scores);
            best = population[best_index].clone();
            best_score = scores[best_index];

            let record = GenerationRecord {
                generation,
                best: best.clone(),
                score: best_score,
            };
            log::debug!(
                "generation {generation}: best {:?} scored {best_score:.2}/100",
                best.genes()
            );
            trace.push(record.clone());
            sink.on_generation(&record);

            // Stagnation counts consecutive generations with the same best
            // batch, compared as a set.
            let current_set = best.sorted_genes();
            match previous_best {
                Some(prev) if prev == current_set => stagnant += 1,
                _ => {
                    stagnant = 1;
                    previous_best = Some(current_set);
                }
            }

            if stagnant >= config.convergence_threshold {
                termination = Termination::Converged;
                break;
            }
        }

        log::info!(
            "run stopped after {} generation(s) ({termination:?}), best score {best_score:.2}/100",
            trace.len()
        );

        let result = RunResult {
            best,
            best_score,
            trace,
            termination,
        };
        sink.on_run_complete(&result);
        Ok(result)
    }
}
