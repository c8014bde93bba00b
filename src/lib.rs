//! Genetic-algorithm batch selection for 3D print job planning.
//!
//! Searches for the most cost-effective fixed-size batch (three jobs) from a
//! catalog of 3D print models, where fitness is a bounded [1, 100] score
//! derived from total filament and machine-time cost. The crate provides:
//!
//! - **Catalog**: immutable, index-addressed item records, loadable from CSV.
//! - **Fitness**: a pure cost-to-score evaluator with a configurable
//!   normalization policy.
//! - **Evolution engine**: elitist selection, single-point crossover with
//!   cardinality repair, best-effort mutation, full generational replacement,
//!   and a stagnation-based convergence stop.
//! - **Baseline sampler**: pure random sampling used as a control to show
//!   the evolutionary search beats chance.
//! - **Reporting**: a sink abstraction through which generation records and
//!   run results flow incrementally, so a UI or plotting layer can render
//!   live progress without coupling to the search loop.
//!
//! # Example
//!
//! ```
//! use printopt::catalog::{Catalog, Item};
//! use printopt::ga::{EvolutionConfig, EvolutionEngine};
//! use printopt::report::MemorySink;
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("phone stand", 45.0, 2.0, "black", 120.0),
//!     Item::new("planter", 80.0, 4.0, "white", 125.0),
//!     Item::new("dragon mini", 35.0, 3.0, "gold", 150.0),
//!     Item::new("cable tidy", 50.0, 3.5, "grey", 110.0),
//! ]);
//!
//! let config = EvolutionConfig::default().with_seed(42);
//! let mut sink = MemorySink::default();
//! let result = EvolutionEngine::run(&catalog, &config, &mut sink).unwrap();
//! assert!(result.best_score >= 1.0 && result.best_score <= 100.0);
//! ```

pub mod baseline;
pub mod catalog;
pub mod fitness;
pub mod ga;
pub mod report;

pub use baseline::{sample_and_rank, RankedSample};
pub use catalog::{Catalog, CatalogError, Item};
pub use fitness::{CostBreakdown, CostPolicy, Evaluator};
pub use ga::{ConfigError, EvolutionConfig, EvolutionEngine, Individual, RunResult, Termination};
pub use report::{GenerationRecord, LogSink, MemorySink, NullSink, ReportSink};
