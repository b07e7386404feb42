//! Simulation observers.
//!
//! The engine reports progress through [`SimulationObserver`] instead of
//! printing. Every method has a no-op default, so an observer only
//! implements the events it cares about.

use crate::models::{CompletedProcess, ExecutionInterval, ProcessState};

/// Receives engine events as the simulation advances.
pub trait SimulationObserver {
    /// A process moved from pending arrivals to the ready queue tail.
    fn on_admit(&mut self, _process: &ProcessState, _clock: i64) {}

    /// A cycle rollover happened. `cycle` counts rollovers from 1.
    fn on_cycle_start(&mut self, _cycle: u64, _clock: i64) {}

    /// A process ran for `interval`, leaving `remaining` ticks of work.
    fn on_dispatch(&mut self, _process_id: u32, _interval: ExecutionInterval, _remaining: i64) {}

    /// A process finished.
    fn on_complete(&mut self, _record: &CompletedProcess) {}

    /// No ready process was eligible for dispatch; the clock advanced by one.
    fn on_stall(&mut self, _clock: i64) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Forwards engine events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SimulationObserver for LogObserver {
    fn on_admit(&mut self, process: &ProcessState, clock: i64) {
        log::debug!(
            "[RR] t={}: admitted P{} (arrival={}, burst={})",
            clock,
            process.id(),
            process.spec.arrival_time,
            process.spec.burst_time
        );
    }

    fn on_cycle_start(&mut self, cycle: u64, clock: i64) {
        log::info!("[RR] t={}: starting cycle {}", clock, cycle);
    }

    fn on_dispatch(&mut self, process_id: u32, interval: ExecutionInterval, remaining: i64) {
        log::debug!(
            "[RR] P{} ran [{}, {}), remaining {}",
            process_id,
            interval.start,
            interval.end,
            remaining
        );
    }

    fn on_complete(&mut self, record: &CompletedProcess) {
        log::info!(
            "[RR] t={}: P{} completed (turnaround={}, waiting={})",
            record.completion_time,
            record.id,
            record.turnaround_time,
            record.waiting_time
        );
    }

    fn on_stall(&mut self, clock: i64) {
        log::warn!(
            "[RR] t={}: every ready process already ran this cycle, advancing clock",
            clock
        );
    }
}
