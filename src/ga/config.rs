//! Engine configuration.
//!
//! [`EvolutionConfig`] holds every parameter that controls a run. Defaults
//! reproduce the reference policy: population of 10, at most 1000
//! generations, convergence after 10 stagnant generations, mutation
//! probability 0.2, and the standard cost normalization bounds.

use crate::fitness::CostPolicy;
use crate::ga::types::BATCH_SIZE;
use serde::{Deserialize, Serialize};

/// Configuration for one evolutionary run.
///
/// # Builder pattern
///
/// ```
/// use printopt::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(100)
///     .with_convergence_threshold(20)
///     .with_seed(42);
/// assert_eq!(config.population_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Hard cap on the number of generations.
    pub max_generations: usize,

    /// Consecutive generations the same best batch must persist before the
    /// run is declared converged.
    pub convergence_threshold: usize,

    /// Probability that an offspring undergoes a mutation attempt (0.0–1.0).
    pub mutation_probability: f64,

    /// Cost normalization policy used by the fitness evaluator.
    pub policy: CostPolicy,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 1000,
            convergence_threshold: 10,
            mutation_probability: 0.2,
            policy: CostPolicy::default(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation threshold for convergence.
    pub fn with_convergence_threshold(mut self, n: usize) -> Self {
        self.convergence_threshold = n;
        self
    }

    /// Sets the mutation probability, clamped to [0, 1].
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Replaces the whole cost policy.
    pub fn with_cost_policy(mut self, policy: CostPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the cost mapped to the top score.
    pub fn with_cost_min(mut self, cost_min: f64) -> Self {
        self.policy.cost_min = cost_min;
        self
    }

    /// Sets the cost mapped to the bottom score.
    pub fn with_cost_max(mut self, cost_max: f64) -> Self {
        self.policy.cost_max = cost_max;
        self
    }

    /// Sets the machine-time cost per print hour.
    pub fn with_time_cost_rate(mut self, rate: f64) -> Self {
        self.policy.time_cost_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.convergence_threshold == 0 {
            return Err(ConfigError::ZeroConvergenceThreshold);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::MutationProbabilityOutOfRange(
                self.mutation_probability,
            ));
        }
        if self.policy.cost_max <= self.policy.cost_min {
            return Err(ConfigError::DegenerateCostBounds {
                min: self.policy.cost_min,
                max: self.policy.cost_max,
            });
        }
        Ok(())
    }
}

/// A configuration the engine refuses to run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `population_size` is zero.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// `max_generations` is zero.
    #[error("max_generations must be at least 1")]
    NoGenerations,

    /// `convergence_threshold` is zero.
    #[error("convergence_threshold must be at least 1")]
    ZeroConvergenceThreshold,

    /// `mutation_probability` falls outside [0, 1].
    #[error("mutation_probability must be within [0, 1], got {0}")]
    MutationProbabilityOutOfRange(f64),

    /// The normalization bounds do not form a valid range.
    #[error("cost_max ({max}) must exceed cost_min ({min})")]
    DegenerateCostBounds { min: f64, max: f64 },

    /// The catalog cannot fill a single batch.
    #[error("catalog holds {len} item(s) but a batch needs {BATCH_SIZE}")]
    CatalogTooSmall { len: usize },
}
