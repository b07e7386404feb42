//! Process model.
//!
//! A process is a unit of CPU work with an arrival time and a total burst
//! requirement. `ProcessSpec` is the immutable caller-facing definition;
//! `ProcessState` is the engine-owned mutable view used while simulating.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use super::ExecutionInterval;

/// A process definition supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a new process definition.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Admission ordering key: arrival time, then id.
    #[inline]
    pub fn arrival_key(&self) -> (i64, u32) {
        (self.arrival_time, self.id)
    }
}

/// Mutable simulation state of a single process.
///
/// Created from a [`ProcessSpec`] at simulation start and mutated only by
/// the engine loop until `remaining_time` reaches zero. Observers see it
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// The immutable definition this state was built from.
    pub spec: ProcessSpec,
    /// CPU time still owed. Non-increasing, never negative.
    pub(crate) remaining_time: i64,
    /// Dispatch intervals in the order they happened.
    pub(crate) execution_history: Vec<ExecutionInterval>,
    /// Whether the process has run during the current cycle.
    pub(crate) cycle_executed: bool,
}

impl ProcessState {
    /// Creates a fresh state with the full burst outstanding.
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining_time: spec.burst_time,
            execution_history: Vec::new(),
            cycle_executed: false,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> u32 {
        self.spec.id
    }

    /// Admission ordering key: arrival time, then id.
    #[inline]
    pub fn arrival_key(&self) -> (i64, u32) {
        self.spec.arrival_key()
    }

    /// CPU time still owed.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Whether the process has run during the current cycle.
    #[inline]
    pub fn cycle_executed(&self) -> bool {
        self.cycle_executed
    }

    /// Whether all required CPU time has been delivered.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Runs the process for at most `quantum` ticks starting at `clock`.
    ///
    /// Records the interval, marks the process as executed in this cycle
    /// and returns the interval. The slice is `min(quantum, remaining_time)`.
    pub(crate) fn execute(&mut self, clock: i64, quantum: i64) -> ExecutionInterval {
        let slice = quantum.min(self.remaining_time);
        let interval = ExecutionInterval::new(clock, clock + slice);
        self.remaining_time -= slice;
        self.execution_history.push(interval);
        self.cycle_executed = true;
        interval
    }
}

impl From<ProcessSpec> for ProcessState {
    fn from(spec: ProcessSpec) -> Self {
        Self::new(spec)
    }
}
