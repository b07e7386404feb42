//! Completed-process records (simulation output).
//!
//! A record captures the final metrics of one process together with every
//! interval during which it held the CPU. Records are the data contract
//! consumed by report and Gantt renderers.

use serde::{Deserialize, Serialize};

use super::{ProcessSpec, ProcessState};

/// A half-open `[start, end)` span of CPU time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two intervals share any tick.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(i64, i64)> for ExecutionInterval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

/// Final metrics of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: u32,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total CPU time consumed.
    pub burst_time: i64,
    /// Clock value when the last slice finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `completion_time - burst_time`.
    pub execution_start_offset: i64,
    /// Dispatch intervals, strictly increasing in start time.
    pub execution_history: Vec<ExecutionInterval>,
}

impl CompletedProcess {
    /// Derives the completion metrics of a finished process.
    ///
    /// `completion_time` is the clock value at which `remaining_time`
    /// reached zero.
    pub(crate) fn from_state(state: ProcessState, completion_time: i64) -> Self {
        let ProcessSpec {
            id,
            arrival_time,
            burst_time,
        } = state.spec;
        let turnaround_time = completion_time - arrival_time;
        Self {
            id,
            arrival_time,
            burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - burst_time,
            execution_start_offset: completion_time - burst_time,
            execution_history: state.execution_history,
        }
    }

    /// Sum of all execution interval lengths.
    pub fn executed_time(&self) -> i64 {
        self.execution_history.iter().map(|i| i.duration()).sum()
    }

    /// Number of times the process was dispatched.
    pub fn dispatch_count(&self) -> usize {
        self.execution_history.len()
    }

    /// First tick at which the process held the CPU.
    pub fn first_start(&self) -> Option<i64> {
        self.execution_history.first().map(|i| i.start)
    }

    /// Spans during which the process was ready but not running.
    ///
    /// Walks the history from `arrival_time`, emitting the gap before each
    /// interval that starts after the previous end. The spans sum to
    /// `waiting_time`.
    pub fn waiting_spans(&self) -> Vec<ExecutionInterval> {
        let mut spans = Vec::new();
        let mut wait_start = self.arrival_time;
        for interval in &self.execution_history {
            if wait_start < interval.start {
                spans.push(ExecutionInterval::new(wait_start, interval.start));
            }
            wait_start = interval.end;
        }
        spans
    }
}

/// One CPU slice attributed to a process, for chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlice {
    /// Process that held the CPU.
    pub process_id: u32,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

/// Flattens all execution histories into a single CPU timeline.
///
/// Slices are ordered by start time; since the CPU is a single resource
/// no two slices overlap.
pub fn timeline(records: &[CompletedProcess]) -> Vec<TimelineSlice> {
    let mut slices: Vec<TimelineSlice> = records
        .iter()
        .flat_map(|r| {
            r.execution_history.iter().map(move |i| TimelineSlice {
                process_id: r.id,
                start: i.start,
                end: i.end,
            })
        })
        .collect();
    slices.sort_by_key(|s| (s.start, s.process_id));
    slices
}
