//! Query timing metrics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::run_id::RunId;

/// Metrics for a single query pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Short description of the query (e.g. `category=cooking sort=newest`).
    pub label: String,
    /// Items in the source collection.
    pub source_len: usize,
    /// Items that matched before paging.
    pub matched: usize,
    /// Items returned on the page.
    pub shown: usize,
    /// Query duration (microseconds).
    pub duration_us: u64,
}

/// Aggregate over all queries in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub run_id: String,
    pub queries: Vec<QueryMetrics>,
    pub total_duration_us: u64,
    pub max_duration_us: u64,
    pub mean_duration_us: f64,
}

/// Collector for query metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    run_id: RunId,
    queries: Vec<QueryMetrics>,
}

/// Timer started by [`MetricsCollector::start`].
#[derive(Debug)]
pub struct QueryTimer {
    label: String,
    start: Instant,
}

impl QueryTimer {
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl MetricsCollector {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            queries: Vec::new(),
        }
    }

    /// Start timing a query.
    pub fn start(&self, label: impl Into<String>) -> QueryTimer {
        QueryTimer {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Finish a timed query and record its counts.
    pub fn finish(&mut self, timer: QueryTimer, source_len: usize, matched: usize, shown: usize) {
        let duration_us = timer.elapsed().as_micros() as u64;
        self.record(QueryMetrics {
            label: timer.label,
            source_len,
            matched,
            shown,
            duration_us,
        });
    }

    pub fn record(&mut self, metrics: QueryMetrics) {
        self.queries.push(metrics);
    }

    pub fn queries(&self) -> &[QueryMetrics] {
        &self.queries
    }

    /// Summarize everything recorded so far.
    pub fn summary(&self) -> RunMetrics {
        let total_duration_us: u64 = self.queries.iter().map(|q| q.duration_us).sum();
        let max_duration_us = self.queries.iter().map(|q| q.duration_us).max().unwrap_or(0);
        let mean_duration_us = if self.queries.is_empty() {
            0.0
        } else {
            total_duration_us as f64 / self.queries.len() as f64
        };

        RunMetrics {
            run_id: self.run_id.to_string(),
            queries: self.queries.clone(),
            total_duration_us,
            max_duration_us,
            mean_duration_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(label: &str, duration_us: u64) -> QueryMetrics {
        QueryMetrics {
            label: label.to_string(),
            source_len: 10,
            matched: 4,
            shown: 4,
            duration_us,
        }
    }

    #[test]
    fn test_summary_aggregates() {
        let mut collector = MetricsCollector::new(RunId::from_string("run-7"));
        collector.record(metrics("a", 100));
        collector.record(metrics("b", 300));

        let summary = collector.summary();
        assert_eq!(summary.run_id, "run-7");
        assert_eq!(summary.total_duration_us, 400);
        assert_eq!(summary.max_duration_us, 300);
        assert_eq!(summary.mean_duration_us, 200.0);
        assert_eq!(summary.queries.len(), 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = MetricsCollector::new(RunId::generate()).summary();
        assert_eq!(summary.total_duration_us, 0);
        assert_eq!(summary.mean_duration_us, 0.0);
    }

    #[test]
    fn test_timer_records_counts() {
        let mut collector = MetricsCollector::new(RunId::generate());
        let timer = collector.start("sort=newest");
        collector.finish(timer, 18, 5, 5);

        let recorded = &collector.queries()[0];
        assert_eq!(recorded.label, "sort=newest");
        assert_eq!(recorded.matched, 5);
        assert_eq!(recorded.source_len, 18);
    }
}
