//! Cost-derived fitness evaluation.
//!
//! The search minimizes the total cost of a batch (filament plus machine
//! time), but the rest of the crate works with a bounded score in [1, 100]
//! where higher is better. [`Evaluator::score`] applies that monotonic
//! decreasing transform; [`CostPolicy`] holds the normalization constants.

use crate::catalog::Catalog;
use crate::ga::Individual;
use serde::{Deserialize, Serialize};

/// Cost normalization policy.
///
/// The bounds are policy constants, not values derived from the catalog:
/// they pin the score scale so results stay comparable across catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPolicy {
    /// Machine-time cost per print hour, in currency units.
    pub time_cost_rate: f64,

    /// Total cost mapped to the top score.
    pub cost_min: f64,

    /// Total cost mapped to the bottom score.
    pub cost_max: f64,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            time_cost_rate: 2.0,
            cost_min: 15.0,
            cost_max: 500.0,
        }
    }
}

/// Intermediate cost figures for one batch.
///
/// Produced by [`Evaluator::breakdown`]; the baseline reporter surfaces
/// these alongside each ranked sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Filament cost over the whole batch.
    pub filament_cost: f64,

    /// Summed print hours over the whole batch.
    pub total_hours: f64,

    /// Machine-time cost (`total_hours * time_cost_rate`).
    pub time_cost: f64,

    /// Filament mass over the whole batch, in grams.
    pub total_mass_g: f64,
}

impl CostBreakdown {
    /// Combined filament and machine-time cost.
    pub fn total_cost(&self) -> f64 {
        self.filament_cost + self.time_cost
    }

    /// Mass-weighted mean filament price per kilogram.
    pub fn mean_price_per_kg(&self) -> f64 {
        if self.total_mass_g > 0.0 {
            (self.filament_cost / self.total_mass_g) * 1000.0
        } else {
            0.0
        }
    }
}

/// Pure fitness function over a shared catalog.
///
/// Holds a reference to the catalog rather than owning it: the same catalog
/// value backs the engine, the operators, and the baseline sampler.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    policy: CostPolicy,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `catalog` with the given policy.
    pub fn new(catalog: &'a Catalog, policy: CostPolicy) -> Self {
        Self { catalog, policy }
    }

    /// The catalog this evaluator scores against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Computes the batch's cost figures.
    ///
    /// # Panics
    /// Panics if the individual references an index outside the catalog.
    pub fn breakdown(&self, individual: &Individual) -> CostBreakdown {
        let mut filament_cost = 0.0;
        let mut total_hours = 0.0;
        let mut total_mass_g = 0.0;
        for &index in individual.genes() {
            let item = self.catalog.item(index);
            filament_cost += item.filament_cost();
            total_hours += item.print_hours;
            total_mass_g += item.mass_g;
        }
        CostBreakdown {
            filament_cost,
            total_hours,
            time_cost: total_hours * self.policy.time_cost_rate,
            total_mass_g,
        }
    }

    /// Scores a batch on the [1, 100] scale. Lower cost yields a higher
    /// score; results outside the scale are clamped.
    pub fn score(&self, individual: &Individual) -> f64 {
        let total = self.breakdown(individual).total_cost();
        let span = self.policy.cost_max - self.policy.cost_min;
        let raw = 100.0 - ((total - self.policy.cost_min) / span) * 99.0;
        raw.clamp(1.0, 100.0)
    }
}
