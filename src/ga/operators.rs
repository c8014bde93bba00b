//! Genetic operators.
//!
//! All three operators are pure transformations over individuals; the engine
//! supplies the population, the catalog size, and the RNG.
//!
//! - [`select_best`]: elitist best-of-population selection (stable argmax).
//!   Both parent draws use it, so parent and mate are the same elite
//!   individual every time. That bias is deliberate and must be preserved:
//!   swapping in tournament or fitness-proportionate selection changes
//!   convergence speed and diversity.
//! - [`crossover`]: single-point cut at 1 or 2, mate genes appended if not
//!   already present, then an explicit pad with unused catalog indices so
//!   the offspring always holds exactly [`BATCH_SIZE`] distinct genes.
//! - [`mutate`]: best-effort single-gene replacement; a draw that collides
//!   with an existing gene leaves the individual untouched.

use super::types::{Individual, BATCH_SIZE};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Returns the index of the highest score, first occurrence winning ties.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn select_best(scores: &[f64]) -> usize {
    assert!(!scores.is_empty(), "cannot select from an empty population");
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = index;
        }
    }
    best
}

/// Single-point crossover with cardinality repair.
///
/// Picks a cut uniformly from `{1, 2}`, takes the parent's prefix up to the
/// cut, then appends the mate's genes that are not already present,
/// truncating to [`BATCH_SIZE`]. If the parents' gene pools overlap so much
/// that fewer than [`BATCH_SIZE`] distinct genes survive, the offspring is
/// padded with catalog indices chosen uniformly among those not yet present.
///
/// # Panics
/// Panics if `n_items < BATCH_SIZE` (no valid offspring exists).
pub fn crossover<R: Rng>(
    parent: &Individual,
    mate: &Individual,
    n_items: usize,
    rng: &mut R,
) -> Individual {
    let cut = rng.random_range(1..BATCH_SIZE);

    let mut genes: Vec<usize> = parent.genes()[..cut].to_vec();
    for &gene in mate.genes() {
        if !genes.contains(&gene) {
            genes.push(gene);
        }
    }
    genes.truncate(BATCH_SIZE);

    while genes.len() < BATCH_SIZE {
        let unused: Vec<usize> = (0..n_items).filter(|g| !genes.contains(g)).collect();
        let pick = unused
            .choose(rng)
            .expect("catalog holds at least BATCH_SIZE items");
        genes.push(*pick);
    }

    let genes: [usize; BATCH_SIZE] = genes
        .try_into()
        .expect("offspring holds exactly BATCH_SIZE genes");
    Individual::from_genes(genes)
}

/// Best-effort mutation.
///
/// With probability `probability`, draws one catalog index uniformly; if it
/// is not already part of the individual, it replaces the gene at a
/// uniformly chosen position. A colliding draw is dropped without retry —
/// mutation is not guaranteed to change the individual.
pub fn mutate<R: Rng>(individual: &mut Individual, n_items: usize, probability: f64, rng: &mut R) {
    if rng.random_range(0.0..1.0) < probability {
        let candidate = rng.random_range(0..n_items);
        if !individual.contains(candidate) {
            let position = rng.random_range(0..BATCH_SIZE);
            individual.set_gene(position, candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_valid(individual: &Individual, n_items: usize) -> bool {
        let sorted = individual.sorted_genes();
        sorted[0] < sorted[1] && sorted[1] < sorted[2] && sorted[2] < n_items
    }

    // ---- Selection ----

    #[test]
    fn test_select_best_argmax() {
        assert_eq!(select_best(&[10.0, 55.0, 3.0, 41.0]), 1);
    }

    #[test]
    fn test_select_best_first_wins_ties() {
        assert_eq!(select_best(&[7.0, 99.0, 99.0, 99.0]), 1);
    }

    #[test]
    fn test_select_best_single() {
        assert_eq!(select_best(&[42.0]), 0);
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_select_best_empty_panics() {
        select_best(&[]);
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_identical_parents_reproduce_the_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Individual::from_genes([2, 5, 9]);
        for _ in 0..50 {
            let child = crossover(&parent, &parent, 17, &mut rng);
            assert!(child.same_set(&parent));
        }
    }

    #[test]
    fn test_crossover_keeps_parent_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Individual::from_genes([1, 4, 8]);
        let mate = Individual::from_genes([3, 6, 12]);
        for _ in 0..50 {
            let child = crossover(&parent, &mate, 17, &mut rng);
            // The cut is at least 1, so the parent's first gene survives.
            assert_eq!(child.genes()[0], 1);
            assert!(is_valid(&child, 17));
        }
    }

    #[test]
    fn test_crossover_genes_come_from_parents_on_partial_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Individual::from_genes([0, 1, 2]);
        let mate = Individual::from_genes([1, 2, 3]);
        for _ in 0..50 {
            let child = crossover(&parent, &mate, 17, &mut rng);
            assert!(is_valid(&child, 17));
            for &gene in child.genes() {
                assert!(gene <= 3, "gene {gene} not drawn from either parent");
            }
        }
    }

    #[test]
    fn test_crossover_on_minimal_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Individual::from_genes([0, 1, 2]);
        let mate = Individual::from_genes([2, 0, 1]);
        for _ in 0..20 {
            let child = crossover(&parent, &mate, 3, &mut rng);
            assert_eq!(child.sorted_genes(), [0, 1, 2]);
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_probability_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Individual::from_genes([3, 8, 14]);
        let mut individual = original.clone();
        for _ in 0..100 {
            mutate(&mut individual, 17, 0.0, &mut rng);
        }
        assert_eq!(individual, original);
    }

    #[test]
    fn test_mutation_on_full_coverage_is_identity() {
        // Every catalog index is already in the batch, so every draw collides.
        let mut rng = StdRng::seed_from_u64(42);
        let original = Individual::from_genes([0, 1, 2]);
        let mut individual = original.clone();
        for _ in 0..100 {
            mutate(&mut individual, 3, 1.0, &mut rng);
        }
        assert_eq!(individual, original);
    }

    #[test]
    fn test_mutation_eventually_changes_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Individual::from_genes([0, 1, 2]);
        let mut individual = original.clone();
        let mut changed = false;
        for _ in 0..200 {
            mutate(&mut individual, 17, 1.0, &mut rng);
            assert!(is_valid(&individual, 17));
            if individual != original {
                changed = true;
            }
        }
        assert!(changed, "mutation never fired in 200 attempts at p=1.0");
    }

    // ---- Invariant properties ----

    proptest! {
        #[test]
        fn prop_crossover_yields_three_distinct_valid_genes(
            n_items in BATCH_SIZE..40usize,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let parent = Individual::random(n_items, &mut rng);
            let mate = Individual::random(n_items, &mut rng);
            let child = crossover(&parent, &mate, n_items, &mut rng);
            prop_assert!(is_valid(&child, n_items));
        }

        #[test]
        fn prop_mutation_preserves_validity(
            n_items in BATCH_SIZE..40usize,
            probability in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut individual = Individual::random(n_items, &mut rng);
            for _ in 0..20 {
                mutate(&mut individual, n_items, probability, &mut rng);
                prop_assert!(is_valid(&individual, n_items));
            }
        }

        #[test]
        fn prop_pipeline_preserves_validity(
            n_items in BATCH_SIZE..40usize,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let parent = Individual::random(n_items, &mut rng);
            let mate = Individual::random(n_items, &mut rng);
            let mut child = crossover(&parent, &mate, n_items, &mut rng);
            mutate(&mut child, n_items, 0.2, &mut rng);
            prop_assert!(is_valid(&child, n_items));
        }
    }
}
