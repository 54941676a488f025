//! Stress tests for the sync engine.
//!
//! These exercise shared type-level state (schemas, the fixture provider)
//! from many threads at once.

use crate::fixtures::{fixture_provider, fresh, Complex, Holder, Node, Roster};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use syncgraph_core::Syncable;

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

    /// Prints a summary of the test.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Total operations: {}", self.total_ops);
        println!("Successful: {}", self.successful_ops);
        println!("Failed: {}", self.failed_ops);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second);
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of worker threads.
    pub threads: usize,
    /// Operations per thread.
    pub operations: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            operations: 1000,
        }
    }
}

impl StressConfig {
    /// Creates a light configuration suitable for unit tests.
    #[must_use]
    pub fn light() -> Self {
        Self {
            threads: 2,
            operations: 50,
        }
    }
}

fn run_workers<F>(config: &StressConfig, op: F) -> StressTestResult
where
    F: Fn(usize, usize) -> bool + Send + Sync + 'static,
{
    let op = Arc::new(op);
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|worker| {
            let op = Arc::clone(&op);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);
            let operations = config.operations;
            thread::spawn(move || {
                for i in 0..operations {
                    if op(worker, i) {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            failed.fetch_add(config.operations, Ordering::Relaxed);
        }
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Encodes distinct instances of the same types concurrently.
pub fn stress_concurrent_encode(config: &StressConfig) -> StressTestResult {
    fixture_provider();
    run_workers(config, |worker, i| {
        let n = (worker * 1_000_000 + i) as i64;
        let roster = Roster {
            items: vec![Complex::new(n as f64, 1.0); 4],
        };
        let chain = Node::chain(&[n, n + 1, n + 2]);
        roster.to_sync_data().is_ok() && chain.to_sync_data().is_ok()
    })
}

/// Round-trips nested objects concurrently, fabricating through the shared
/// provider.
pub fn stress_concurrent_round_trip(config: &StressConfig) -> StressTestResult {
    fixture_provider();
    run_workers(config, |worker, i| {
        let value = Complex::new(worker as f64, i as f64);
        let source = Holder {
            value: Some(value.clone()),
        };
        let mut target: Holder = fresh();
        source
            .to_sync_data()
            .and_then(|data| target.sync_from(&data))
            .is_ok()
            && target.value == Some(value)
    })
}

/// Fabricates instances from the shared provider concurrently.
pub fn stress_concurrent_create(config: &StressConfig) -> StressTestResult {
    let provider = fixture_provider();
    run_workers(config, move |_, i| {
        let name = ["Complex", "Holder", "Node", "Roster"][i % 4];
        provider.create(name).is_ok()
    })
}
