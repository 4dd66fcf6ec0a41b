//! Translation lookup metrics.
//!
//! Counts dictionary lookups and misses. A miss means a page asked for a key
//! path the dictionary does not have, which is an authoring defect; the
//! counters make that visible on `/health` and in tests.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of successful key lookups
    hits: AtomicUsize,

    /// Number of lookups for keys that do not exist
    misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    fn new() -> Self {
        LookupMetrics {
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            hit_rate,
        }
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(LookupMetrics::global(), LookupMetrics::global()));
    }

    #[test]
    fn test_record_hit() {
        let metrics = LookupMetrics::new();

        assert_eq!(metrics.hits(), 0);
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.hits(), 2);
        assert_eq!(metrics.misses(), 0);
    }

    #[test]
    fn test_record_miss() {
        let metrics = LookupMetrics::new();

        metrics.record_miss();
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.hits, 0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.hit_rate, 0.0);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = LookupMetrics::new();

        // 3 hits, 1 miss = 75%
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.misses, 1);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["misses"], 0);
        assert_eq!(json["hit_rate"], 100.0);
    }
}
