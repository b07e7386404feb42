//! Cycle-aware ready queue.
//!
//! A FIFO of admitted, unfinished processes. Each entry carries a
//! `cycle_executed` flag; dispatch rotates past flagged entries, and a
//! rollover re-sorts the queue by `(arrival_time, id)` and clears all flags
//! once every entry has run in the current cycle.

use std::collections::VecDeque;

use crate::models::ProcessState;

/// Ready queue with per-entry cycle bookkeeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadyQueue {
    entries: VecDeque<ProcessState>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process at the tail.
    pub fn push_back(&mut self, process: ProcessState) {
        debug_assert!(
            !self.entries.iter().any(|p| p.id() == process.id()),
            "process {} queued twice",
            process.id()
        );
        self.entries.push_back(process);
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the queue is non-empty and every entry has run this cycle.
    pub fn cycle_complete(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|p| p.cycle_executed())
    }

    /// Starts a new cycle.
    ///
    /// Stable-sorts the entries by `(arrival_time, id)` and clears every
    /// `cycle_executed` flag.
    pub fn rollover(&mut self) {
        self.entries
            .make_contiguous()
            .sort_by_key(|p| p.arrival_key());
        for p in self.entries.iter_mut() {
            p.cycle_executed = false;
        }
    }

    /// Removes the first entry that has not yet run this cycle.
    ///
    /// Entries already flagged are rotated to the tail as the scan passes
    /// them. Returns `None` after one full rotation if every entry is
    /// flagged.
    pub fn take_next(&mut self) -> Option<ProcessState> {
        for _ in 0..self.entries.len() {
            if self.entries.front().is_some_and(|p| !p.cycle_executed()) {
                return self.entries.pop_front();
            }
            self.entries.rotate_left(1);
        }
        None
    }

    /// Process IDs in queue order.
    #[cfg(test)]
    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|p| p.id()).collect()
    }

    /// Iterates entries in queue order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ProcessState> {
        self.entries.iter()
    }
}
