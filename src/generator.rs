//! Synthetic workload generation.
//!
//! Builds random but always-valid workloads from a caller-supplied RNG.
//! Pass a seeded RNG for reproducible workloads.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rr_cycle_sim::generator::WorkloadGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let workload = WorkloadGenerator::new(5)
//!     .with_arrival_range(0, 20)
//!     .with_burst_range(1, 8)
//!     .generate(&mut rng);
//!
//! assert_eq!(workload.process_count(), 5);
//! assert!(workload.simulate().is_ok());
//! ```

use rand::Rng;

use crate::models::{ProcessSpec, Workload};

/// Random workload generator.
///
/// All ranges are inclusive. Bounds are clamped so that generated input
/// always passes validation: arrivals are `>= 0`, bursts and quanta `>= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    process_count: u32,
    arrival_range: (i64, i64),
    burst_range: (i64, i64),
    quantum_range: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator for `process_count` processes.
    ///
    /// Defaults: arrivals in `0..=20`, bursts in `1..=10`, quantum in `1..=4`.
    pub fn new(process_count: u32) -> Self {
        Self {
            process_count,
            arrival_range: (0, 20),
            burst_range: (1, 10),
            quantum_range: (1, 4),
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = normalize(min, max, 0);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = normalize(min, max, 1);
        self
    }

    /// Sets the quantum range.
    pub fn with_quantum_range(mut self, min: i64, max: i64) -> Self {
        self.quantum_range = normalize(min, max, 1);
        self
    }

    /// Generates a workload. Process ids run from 1 to `process_count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Workload {
        let quantum = rng.random_range(self.quantum_range.0..=self.quantum_range.1);
        let processes = (1..=self.process_count).map(|id| {
            ProcessSpec::new(
                id,
                rng.random_range(self.arrival_range.0..=self.arrival_range.1),
                rng.random_range(self.burst_range.0..=self.burst_range.1),
            )
        });
        Workload::new(quantum).with_processes(processes.collect::<Vec<_>>())
    }
}

/// Orders the bounds and raises them to at least `floor`.
fn normalize(min: i64, max: i64, floor: i64) -> (i64, i64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    (lo.max(floor), hi.max(floor))
}
