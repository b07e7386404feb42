//! Round-Robin CPU scheduling simulator.
//!
//! Simulates preemptive Round-Robin scheduling of a fixed set of processes
//! on a single CPU and reports, per process, completion, turnaround and
//! waiting times plus the exact execution intervals.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessState`,
//!   `CompletedProcess`, `ExecutionInterval`, `Workload`
//! - **`scheduler`**: The engine (`RoundRobinScheduler`), observers and KPIs
//! - **`validation`**: Input checks (quantum, bursts, arrivals, duplicate IDs)
//! - **`generator`**: Seeded synthetic workloads
//!
//! # Example
//!
//! ```
//! use rr_cycle_sim::{simulate, models::ProcessSpec, scheduler::SimulationKpi};
//!
//! let processes = vec![ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 2, 3)];
//! let done = simulate(&processes, 2).unwrap();
//!
//! assert_eq!(done[0].completion_time, 5);
//! assert_eq!(done[1].completion_time, 6);
//!
//! let kpi = SimulationKpi::calculate(&done);
//! assert!((kpi.avg_waiting_time - 1.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use scheduler::{simulate, simulate_with_observer};
