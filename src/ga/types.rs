//! Candidate solution representation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of catalog items in one batch.
///
/// Fixed for the whole crate: every individual holds exactly this many
/// distinct catalog indices, before and after every operator.
pub const BATCH_SIZE: usize = 3;

/// One candidate batch: [`BATCH_SIZE`] distinct catalog indices.
///
/// Gene order is preserved so crossover cut points are well defined, but two
/// individuals with the same indices in different order denote the same
/// batch — convergence checks and [`same_set`](Individual::same_set) compare
/// sorted genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Individual {
    genes: [usize; BATCH_SIZE],
}

impl Individual {
    /// Builds an individual from explicit genes.
    ///
    /// # Panics
    /// Panics if the genes are not pairwise distinct.
    pub fn from_genes(genes: [usize; BATCH_SIZE]) -> Self {
        assert!(
            genes[0] != genes[1] && genes[0] != genes[2] && genes[1] != genes[2],
            "individual genes must be distinct, got {genes:?}"
        );
        Self { genes }
    }

    /// Draws a uniform random batch: [`BATCH_SIZE`] distinct indices from
    /// `[0, n_items)`.
    ///
    /// # Panics
    /// Panics if `n_items < BATCH_SIZE`.
    pub fn random<R: Rng>(n_items: usize, rng: &mut R) -> Self {
        assert!(
            n_items >= BATCH_SIZE,
            "need at least {BATCH_SIZE} catalog items, got {n_items}"
        );
        let drawn = rand::seq::index::sample(rng, n_items, BATCH_SIZE).into_vec();
        let genes: [usize; BATCH_SIZE] = drawn
            .try_into()
            .expect("sample returns exactly BATCH_SIZE indices");
        Self { genes }
    }

    /// The genes in their stored order.
    pub fn genes(&self) -> &[usize; BATCH_SIZE] {
        &self.genes
    }

    /// Whether `gene` already occurs in this individual.
    pub fn contains(&self, gene: usize) -> bool {
        self.genes.contains(&gene)
    }

    /// The genes in ascending order, for set-wise comparison.
    pub fn sorted_genes(&self) -> [usize; BATCH_SIZE] {
        let mut sorted = self.genes;
        sorted.sort_unstable();
        sorted
    }

    /// Whether two individuals denote the same batch, ignoring gene order.
    pub fn same_set(&self, other: &Self) -> bool {
        self.sorted_genes() == other.sorted_genes()
    }

    /// Overwrites the gene at `position`.
    ///
    /// Callers must ensure `gene` is absent from the individual beforehand;
    /// distinctness is re-checked in debug builds.
    pub(crate) fn set_gene(&mut self, position: usize, gene: usize) {
        self.genes[position] = gene;
        debug_assert!(
            self.genes[0] != self.genes[1]
                && self.genes[0] != self.genes[2]
                && self.genes[1] != self.genes[2],
            "gene replacement broke distinctness: {:?}",
            self.genes
        );
    }
}
