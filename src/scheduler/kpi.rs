//! Simulation quality metrics (KPIs).
//!
//! Computes aggregate indicators from a set of completed-process records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | CPU Busy | Sum of all execution intervals |
//! | CPU Utilization | busy / makespan |
//! | Dispatches | Total number of execution intervals |

use serde::{Deserialize, Serialize};

use crate::models::CompletedProcess;

/// Aggregate simulation indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Total ticks the CPU was running some process.
    pub cpu_busy_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Total number of dispatches.
    pub dispatch_count: usize,
}

impl SimulationKpi {
    /// Computes KPIs from completed-process records.
    ///
    /// An empty slice yields all-zero metrics.
    pub fn calculate(records: &[CompletedProcess]) -> Self {
        let process_count = records.len();
        let makespan = records
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);
        // Per-process times fit in i64 but their sum may not.
        let total_turnaround: f64 = records.iter().map(|r| r.turnaround_time as f64).sum();
        let total_waiting: f64 = records.iter().map(|r| r.waiting_time as f64).sum();
        let cpu_busy_time: i64 = records.iter().map(|r| r.executed_time()).sum();
        let dispatch_count = records.iter().map(|r| r.dispatch_count()).sum();

        let (avg_turnaround_time, avg_waiting_time) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround / process_count as f64,
                total_waiting / process_count as f64,
            )
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            cpu_busy_time as f64 / makespan as f64
        };

        Self {
            process_count,
            makespan,
            avg_turnaround_time,
            avg_waiting_time,
            cpu_busy_time,
            cpu_utilization,
            dispatch_count,
        }
    }
}
