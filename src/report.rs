//! Result reporting.
//!
//! The engine and the baseline sampler never render anything themselves:
//! they push structured records through a [`ReportSink`], and a separate
//! consumer (UI, plotter, logger, test harness) decides pacing and display.
//! Generation records arrive one at a time as each generation completes, so
//! a consumer can show live progress without the search loop sleeping.

use crate::baseline::RankedSample;
use crate::ga::{Individual, RunResult};
use serde::{Deserialize, Serialize};

/// Best-of-generation snapshot, appended to the run trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// 1-based index of the completed generation.
    pub generation: usize,

    /// Best batch of that generation's population.
    pub best: Individual,

    /// Score of the best batch.
    pub score: f64,
}

/// Sink for structured search results.
///
/// All methods default to no-ops so consumers implement only what they
/// display. Sink failures are the consumer's concern; implementations should
/// not propagate errors back into the search.
pub trait ReportSink {
    /// Called once per completed generation, in order.
    fn on_generation(&mut self, _record: &GenerationRecord) {}

    /// Called once when the run terminates.
    fn on_run_complete(&mut self, _result: &RunResult) {}

    /// Called with the top-ranked baseline samples, best first.
    fn on_baseline(&mut self, _ranked: &[RankedSample]) {}
}

/// Discards everything.
pub struct NullSink;

impl ReportSink for NullSink {}

/// Collects everything in memory. Useful for tests and for consumers that
/// render after the fact.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Generation records in arrival order.
    pub records: Vec<GenerationRecord>,

    /// The final run result, once the run terminates.
    pub result: Option<RunResult>,

    /// Top-ranked baseline samples, if a baseline was reported.
    pub baseline: Vec<RankedSample>,
}

impl ReportSink for MemorySink {
    fn on_generation(&mut self, record: &GenerationRecord) {
        self.records.push(record.clone());
    }

    fn on_run_complete(&mut self, result: &RunResult) {
        self.result = Some(result.clone());
    }

    fn on_baseline(&mut self, ranked: &[RankedSample]) {
        self.baseline = ranked.to_vec();
    }
}

/// Forwards everything to the `log` facade: generations at debug level,
/// terminal results at info level.
pub struct LogSink;

impl ReportSink for LogSink {
    fn on_generation(&mut self, record: &GenerationRecord) {
        log::debug!(
            "generation {}: batch {:?} scored {:.2}/100",
            record.generation,
            record.best.genes(),
            record.score
        );
    }

    fn on_run_complete(&mut self, result: &RunResult) {
        log::info!(
            "best batch {:?} scored {:.2}/100 after {} generation(s) ({:?})",
            result.best.genes(),
            result.best_score,
            result.generations(),
            result.termination
        );
    }

    fn on_baseline(&mut self, ranked: &[RankedSample]) {
        for (position, sample) in ranked.iter().enumerate() {
            log::info!(
                "random baseline #{}: batch {:?} scored {:.2}/100, cost {:.2}, {:.0} g, {:.2}/kg mean",
                position + 1,
                sample.individual.genes(),
                sample.score,
                sample.metrics.total_cost(),
                sample.metrics.total_mass_g,
                sample.metrics.mean_price_per_kg()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Termination;

    #[test]
    fn test_memory_sink_collects_records() {
        let mut sink = MemorySink::default();
        let record = GenerationRecord {
            generation: 1,
            best: Individual::from_genes([0, 1, 2]),
            score: 95.0,
        };
        sink.on_generation(&record);
        sink.on_generation(&record);
        assert_eq!(sink.records.len(), 2);
        assert_eq!(sink.records[0], record);
    }

    #[test]
    fn test_memory_sink_stores_result() {
        let mut sink = MemorySink::default();
        let result = RunResult {
            best: Individual::from_genes([0, 1, 2]),
            best_score: 95.0,
            trace: vec![],
            termination: Termination::Converged,
        };
        sink.on_run_complete(&result);
        assert_eq!(sink.result, Some(result));
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        let record = GenerationRecord {
            generation: 1,
            best: Individual::from_genes([0, 1, 2]),
            score: 95.0,
        };
        sink.on_generation(&record);
        sink.on_baseline(&[]);
    }
}
