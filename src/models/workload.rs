//! Workload (simulation input) model.
//!
//! A workload bundles a time quantum with the processes to schedule. It is
//! the serializable form an input collector produces, e.g. from a JSON file.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, ProcessSpec};
use crate::error::SimulationError;
use crate::scheduler::RoundRobinScheduler;

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Maximum contiguous ticks a process may run before preemption.
    pub quantum: i64,
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates an empty workload with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Adds several processes.
    pub fn with_processes(mut self, processes: impl IntoIterator<Item = ProcessSpec>) -> Self {
        self.processes.extend(processes);
        self
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Runs the workload to completion.
    pub fn simulate(&self) -> Result<Vec<CompletedProcess>, SimulationError> {
        RoundRobinScheduler::new(self.quantum).run(&self.processes)
    }
}
