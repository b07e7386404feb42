//! Round-Robin engine and simulation metrics.
//!
//! # Algorithm
//!
//! `RoundRobinScheduler` runs a discrete-time, single-CPU simulation with
//! a fixed quantum. Fairness is enforced per cycle: every ready process
//! gets one slice per cycle, and each new cycle re-sorts the ready queue
//! by arrival time and id.
//!
//! # Observation
//!
//! The engine performs no I/O. Progress is reported through
//! `SimulationObserver`; `LogObserver` forwards events to the `log` facade.
//!
//! # KPI
//!
//! `SimulationKpi` computes makespan, average turnaround and waiting time,
//! and CPU utilization.

mod kpi;
mod observer;
mod ready_queue;
mod round_robin;

pub use kpi::SimulationKpi;
pub use observer::{LogObserver, NoopObserver, SimulationObserver};
pub(crate) use ready_queue::ReadyQueue;
pub use round_robin::{
    simulate, simulate_with_observer, RoundRobinScheduler, SimulationReport,
};
