//! Random-sampling baseline.
//!
//! Draws independent uniform random batches and ranks them by score. The
//! baseline never feeds back into the evolutionary search — it exists purely
//! as a control, so a consumer can show how much better (or not) evolution
//! did than blind chance over the same catalog and scoring policy.

use crate::catalog::Catalog;
use crate::fitness::{CostBreakdown, CostPolicy, Evaluator};
use crate::ga::{ConfigError, Individual, BATCH_SIZE};
use crate::report::ReportSink;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of random batches drawn by default.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Number of ranked samples reported by default.
pub const DEFAULT_TOP_K: usize = 3;

/// One scored random batch, with the cost figures a reporting layer shows
/// next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSample {
    /// The sampled batch.
    pub individual: Individual,

    /// Its score on the [1, 100] scale.
    pub score: f64,

    /// Intermediate cost figures for display.
    pub metrics: CostBreakdown,
}

/// Draws `count` independent random batches and ranks them best first.
///
/// Scoring uses the same evaluator as the evolutionary search. Tie order
/// among equal scores is unspecified.
pub fn sample_and_rank<R: Rng>(
    catalog: &Catalog,
    policy: &CostPolicy,
    count: usize,
    rng: &mut R,
) -> Result<Vec<RankedSample>, ConfigError> {
    if catalog.len() < BATCH_SIZE {
        return Err(ConfigError::CatalogTooSmall { len: catalog.len() });
    }

    let evaluator = Evaluator::new(catalog, policy.clone());
    let mut ranked: Vec<RankedSample> = (0..count)
        .map(|_| {
            let individual = Individual::random(catalog.len(), rng);
            let score = evaluator.score(&individual);
            let metrics = evaluator.breakdown(&individual);
            RankedSample {
                individual,
                score,
                metrics,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(ranked)
}

/// Pushes the `k` best samples through the sink, best first.
pub fn report_top_k<S: ReportSink>(ranked: &[RankedSample], k: usize, sink: &mut S) {
    let top = &ranked[..k.min(ranked.len())];
    sink.on_baseline(top);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::report::MemorySink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_catalog() -> Catalog {
        Catalog::from_items(vec![
            Item::new("phone stand", 45.0, 2.0, "black", 120.0),
            Item::new("planter", 80.0, 4.0, "white", 125.0),
            Item::new("dragon mini", 35.0, 3.0, "gold", 150.0),
        ])
    }

    fn wide_catalog() -> Catalog {
        let items = (0..12)
            .map(|i| {
                Item::new(
                    format!("model {i}"),
                    20.0 + 10.0 * i as f64,
                    1.0 + 0.5 * i as f64,
                    "grey",
                    110.0 + 5.0 * i as f64,
                )
            })
            .collect();
        Catalog::from_items(items)
    }

    #[test]
    fn test_single_sample_on_minimal_catalog() {
        let catalog = reference_catalog();
        let mut rng = StdRng::seed_from_u64(42);
        let ranked = sample_and_rank(&catalog, &CostPolicy::default(), 1, &mut rng).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].individual.sorted_genes(), [0, 1, 2]);
        assert!((ranked[0].score - 95.17237113402062).abs() < 1e-6);
        assert!((ranked[0].metrics.total_cost() - 38.65).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_is_descending() {
        let catalog = wide_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let ranked =
            sample_and_rank(&catalog, &CostPolicy::default(), DEFAULT_SAMPLE_COUNT, &mut rng)
                .unwrap();

        assert_eq!(ranked.len(), DEFAULT_SAMPLE_COUNT);
        for window in ranked.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_samples_are_valid_and_scored_consistently() {
        let catalog = wide_catalog();
        let policy = CostPolicy::default();
        let evaluator = Evaluator::new(&catalog, policy.clone());
        let mut rng = StdRng::seed_from_u64(11);

        let ranked = sample_and_rank(&catalog, &policy, 50, &mut rng).unwrap();
        for sample in &ranked {
            let sorted = sample.individual.sorted_genes();
            assert!(sorted[0] < sorted[1] && sorted[1] < sorted[2]);
            assert!(sorted[2] < catalog.len());
            assert_eq!(sample.score, evaluator.score(&sample.individual));
            assert!(sample.score >= 1.0 && sample.score <= 100.0);
        }
    }

    #[test]
    fn test_small_catalog_is_rejected() {
        let catalog = Catalog::from_items(vec![Item::new("only", 10.0, 1.0, "red", 100.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = sample_and_rank(&catalog, &CostPolicy::default(), 10, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::CatalogTooSmall { len: 1 });
    }

    #[test]
    fn test_report_top_k() {
        let catalog = wide_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let ranked = sample_and_rank(&catalog, &CostPolicy::default(), 20, &mut rng).unwrap();

        let mut sink = MemorySink::default();
        report_top_k(&ranked, DEFAULT_TOP_K, &mut sink);
        assert_eq!(sink.baseline.len(), 3);
        assert_eq!(sink.baseline[0], ranked[0]);
    }

    #[test]
    fn test_report_top_k_clamps_to_available() {
        let catalog = wide_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let ranked = sample_and_rank(&catalog, &CostPolicy::default(), 2, &mut rng).unwrap();

        let mut sink = MemorySink::default();
        report_top_k(&ranked, 10, &mut sink);
        assert_eq!(sink.baseline.len(), 2);
    }
}
