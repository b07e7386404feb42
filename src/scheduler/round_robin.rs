//! Round-Robin engine with cycle-based fairness.
//!
//! # Algorithm
//!
//! 1. Admit every pending process with `arrival_time <= clock`, in
//!    `(arrival_time, id)` order, to the ready queue tail.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. If every ready process has run this cycle, roll over: re-sort the
//!    queue by `(arrival_time, id)` and clear all cycle flags.
//! 4. Dispatch the first ready process that has not run this cycle for
//!    `min(quantum, remaining)` ticks.
//! 5. Admit arrivals up to the new clock, then requeue the dispatched
//!    process at the tail or record it as completed.
//!
//! Unlike textbook Round-Robin, a process that arrives mid-cycle is
//! dispatched ahead of processes that already ran in the current cycle,
//! and each rollover restores arrival order.
//!
//! # Complexity
//! O(d * n) where d = number of dispatches, n = ready queue length.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{NoopObserver, ReadyQueue, SimulationObserver};
use crate::error::SimulationError;
use crate::models::{CompletedProcess, ProcessSpec, ProcessState};
use crate::validation::validate_input;

/// Output of a detailed simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Completed processes, sorted by ascending id.
    pub processes: Vec<CompletedProcess>,
    /// Number of cycle rollovers performed.
    pub cycles: u64,
}

/// Round-Robin scheduler with a fixed time quantum.
///
/// Each call to [`run`](Self::run) is an independent, deterministic
/// simulation; the scheduler holds no state between runs.
///
/// # Example
///
/// ```
/// use rr_cycle_sim::models::ProcessSpec;
/// use rr_cycle_sim::scheduler::RoundRobinScheduler;
///
/// let processes = vec![ProcessSpec::new(1, 0, 5)];
/// let done = RoundRobinScheduler::new(3).run(&processes).unwrap();
///
/// assert_eq!(done[0].completion_time, 5);
/// assert_eq!(done[0].execution_history.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler. The quantum is validated when a run starts.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Runs the simulation to completion.
    ///
    /// Returns completed processes sorted by id.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] if the quantum or any process
    /// definition is invalid. No simulation is performed in that case.
    pub fn run(
        &self,
        processes: &[ProcessSpec],
    ) -> Result<Vec<CompletedProcess>, SimulationError> {
        self.run_with_observer(processes, &mut NoopObserver)
    }

    /// Runs the simulation, reporting progress to `observer`.
    pub fn run_with_observer<O: SimulationObserver>(
        &self,
        processes: &[ProcessSpec],
        observer: &mut O,
    ) -> Result<Vec<CompletedProcess>, SimulationError> {
        Ok(self.run_detailed(processes, observer)?.processes)
    }

    /// Runs the simulation and returns the full report.
    pub fn run_detailed<O: SimulationObserver>(
        &self,
        processes: &[ProcessSpec],
        observer: &mut O,
    ) -> Result<SimulationReport, SimulationError> {
        validate_input(processes, self.quantum)?;
        Ok(Simulation::new(processes, self.quantum, observer).run())
    }
}

/// Runs a simulation with no observer.
///
/// Shorthand for `RoundRobinScheduler::new(quantum).run(processes)`.
pub fn simulate(
    processes: &[ProcessSpec],
    quantum: i64,
) -> Result<Vec<CompletedProcess>, SimulationError> {
    RoundRobinScheduler::new(quantum).run(processes)
}

/// Runs a simulation, reporting progress to `observer`.
pub fn simulate_with_observer<O: SimulationObserver>(
    processes: &[ProcessSpec],
    quantum: i64,
    observer: &mut O,
) -> Result<Vec<CompletedProcess>, SimulationError> {
    RoundRobinScheduler::new(quantum).run_with_observer(processes, observer)
}

/// State of a single run. Input must already be validated.
struct Simulation<'o, O: SimulationObserver> {
    quantum: i64,
    clock: i64,
    cycles: u64,
    /// Not yet admitted, sorted by `(arrival_time, id)`.
    pending: VecDeque<ProcessState>,
    ready: ReadyQueue,
    completed: Vec<CompletedProcess>,
    observer: &'o mut O,
}

impl<'o, O: SimulationObserver> Simulation<'o, O> {
    fn new(processes: &[ProcessSpec], quantum: i64, observer: &'o mut O) -> Self {
        let mut pending: Vec<ProcessState> =
            processes.iter().copied().map(ProcessState::new).collect();
        pending.sort_by_key(|p| p.arrival_key());

        Self {
            quantum,
            clock: 0,
            cycles: 0,
            pending: pending.into(),
            ready: ReadyQueue::new(),
            completed: Vec::with_capacity(processes.len()),
            observer,
        }
    }

    fn run(mut self) -> SimulationReport {
        while !self.pending.is_empty() || !self.ready.is_empty() {
            self.admit_arrivals();

            if self.ready.is_empty() {
                // Idle CPU: skip straight to the next arrival.
                if let Some(next) = self.pending.front() {
                    self.clock = next.spec.arrival_time;
                }
                continue;
            }

            if self.ready.cycle_complete() {
                self.cycles += 1;
                self.ready.rollover();
                self.observer.on_cycle_start(self.cycles, self.clock);
            }

            let Some(process) = self.ready.take_next() else {
                // Unreachable while rollover precedes every dispatch.
                self.clock = self.clock.saturating_add(1);
                self.observer.on_stall(self.clock);
                continue;
            };

            self.dispatch(process);
        }

        self.completed.sort_by_key(|r| r.id);
        SimulationReport {
            processes: self.completed,
            cycles: self.cycles,
        }
    }

    /// Moves every arrived process to the ready queue tail.
    fn admit_arrivals(&mut self) {
        let clock = self.clock;
        while self
            .pending
            .front()
            .is_some_and(|p| p.spec.arrival_time <= clock)
        {
            if let Some(process) = self.pending.pop_front() {
                self.observer.on_admit(&process, clock);
                self.ready.push_back(process);
            }
        }
    }

    /// Runs one slice, then requeues or completes the process.
    ///
    /// Arrivals up to the end of the slice are admitted before the process
    /// is requeued, so they land ahead of it.
    fn dispatch(&mut self, mut process: ProcessState) {
        let interval = process.execute(self.clock, self.quantum);
        self.clock = interval.end;
        self.observer
            .on_dispatch(process.id(), interval, process.remaining_time());

        self.admit_arrivals();

        if process.is_finished() {
            let record = CompletedProcess::from_state(process, self.clock);
            self.observer.on_complete(&record);
            self.completed.push(record);
        } else {
            self.ready.push_back(process);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::WorkloadGenerator;
    use crate::models::{timeline, ExecutionInterval};
    use crate::scheduler::LogObserver;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn intervals(pairs: &[(i64, i64)]) -> Vec<ExecutionInterval> {
        pairs.iter().copied().map(ExecutionInterval::from).collect()
    }

    fn history(done: &[CompletedProcess], id: u32) -> Vec<ExecutionInterval> {
        done.iter()
            .find(|r| r.id == id)
            .map(|r| r.execution_history.clone())
            .unwrap()
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Admit(u32, i64),
        Cycle(u64, i64),
        Dispatch(u32, i64, i64, i64),
        Complete(u32, i64),
        Stall(i64),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl SimulationObserver for Recorder {
        fn on_admit(&mut self, process: &ProcessState, clock: i64) {
            self.events.push(Event::Admit(process.id(), clock));
        }

        fn on_cycle_start(&mut self, cycle: u64, clock: i64) {
            self.events.push(Event::Cycle(cycle, clock));
        }

        fn on_dispatch(&mut self, process_id: u32, interval: ExecutionInterval, remaining: i64) {
            self.events.push(Event::Dispatch(
                process_id,
                interval.start,
                interval.end,
                remaining,
            ));
        }

        fn on_complete(&mut self, record: &CompletedProcess) {
            self.events
                .push(Event::Complete(record.id, record.completion_time));
        }

        fn on_stall(&mut self, clock: i64) {
            self.events.push(Event::Stall(clock));
        }
    }

    #[test]
    fn test_single_process_no_contention() {
        let done = simulate(&[ProcessSpec::new(1, 0, 5)], 3).unwrap();
        assert_eq!(done.len(), 1);
        let p = &done[0];
        assert_eq!(p.execution_history, intervals(&[(0, 3), (3, 5)]));
        assert_eq!(p.completion_time, 5);
        assert_eq!(p.turnaround_time, 5);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.execution_start_offset, 0);
    }

    #[test]
    fn test_simultaneous_arrivals_alternate() {
        let processes = vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 0, 4)];
        let report = RoundRobinScheduler::new(2)
            .run_detailed(&processes, &mut NoopObserver)
            .unwrap();
        let done = &report.processes;

        assert_eq!(history(done, 1), intervals(&[(0, 2), (4, 6)]));
        assert_eq!(history(done, 2), intervals(&[(2, 4), (6, 8)]));
        assert_eq!(done[0].completion_time, 6);
        assert_eq!(done[0].turnaround_time, 6);
        assert_eq!(done[0].waiting_time, 2);
        assert_eq!(done[1].completion_time, 8);
        assert_eq!(done[1].turnaround_time, 8);
        assert_eq!(done[1].waiting_time, 4);
        assert_eq!(report.cycles, 1);
    }

    #[test]
    fn test_staggered_arrival() {
        let processes = vec![ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 2, 3)];
        let done = simulate(&processes, 2).unwrap();

        assert_eq!(history(&done, 1), intervals(&[(0, 2), (4, 5)]));
        assert_eq!(history(&done, 2), intervals(&[(2, 4), (5, 6)]));
        assert_eq!(done[0].completion_time, 5);
        assert_eq!(done[0].waiting_time, 2);
        assert_eq!(done[1].completion_time, 6);
        assert_eq!(done[1].turnaround_time, 4);
        assert_eq!(done[1].waiting_time, 1);
    }

    #[test]
    fn test_burst_equal_to_quantum_single_interval() {
        let processes = vec![
            ProcessSpec::new(1, 0, 3),
            ProcessSpec::new(2, 0, 3),
            ProcessSpec::new(3, 1, 3),
        ];
        let done = simulate(&processes, 3).unwrap();
        for r in &done {
            assert_eq!(r.execution_history.len(), 1);
        }
        assert_eq!(history(&done, 1), intervals(&[(0, 3)]));
        assert_eq!(history(&done, 2), intervals(&[(3, 6)]));
        assert_eq!(history(&done, 3), intervals(&[(6, 9)]));
    }

    #[test]
    fn test_idle_gap_jumps_clock() {
        let processes = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 10, 4)];
        let done = simulate(&processes, 3).unwrap();
        assert_eq!(history(&done, 1), intervals(&[(0, 2)]));
        assert_eq!(history(&done, 2), intervals(&[(10, 13), (13, 14)]));
        assert_eq!(done[1].waiting_time, 0);
        assert_eq!(done[1].turnaround_time, 4);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let done = simulate(&[ProcessSpec::new(1, 5, 2)], 3).unwrap();
        assert_eq!(done[0].execution_history, intervals(&[(5, 7)]));
        assert_eq!(done[0].completion_time, 7);
        assert_eq!(done[0].turnaround_time, 2);
        assert_eq!(done[0].execution_start_offset, 5);
    }

    #[test]
    fn test_mid_cycle_arrival_runs_before_executed_processes() {
        // P3 arrives while P1 and P2 have both run in the current cycle.
        // It is dispatched ahead of P1, and the rollover that follows
        // restores arrival order (P1 before P2).
        let processes = vec![
            ProcessSpec::new(1, 0, 6),
            ProcessSpec::new(2, 0, 6),
            ProcessSpec::new(3, 3, 2),
        ];
        let report = RoundRobinScheduler::new(2)
            .run_detailed(&processes, &mut NoopObserver)
            .unwrap();
        let done = &report.processes;

        assert_eq!(history(done, 1), intervals(&[(0, 2), (6, 8), (10, 12)]));
        assert_eq!(history(done, 2), intervals(&[(2, 4), (8, 10), (12, 14)]));
        assert_eq!(history(done, 3), intervals(&[(4, 6)]));
        assert_eq!(report.cycles, 2);
    }

    #[test]
    fn test_arrival_at_slice_end_runs_next() {
        let processes = vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 2, 2)];
        let done = simulate(&processes, 2).unwrap();
        assert_eq!(history(&done, 2), intervals(&[(2, 4)]));
        assert_eq!(history(&done, 1), intervals(&[(0, 2), (4, 6)]));
    }

    #[test]
    fn test_results_sorted_by_id_not_completion() {
        let processes = vec![ProcessSpec::new(9, 0, 6), ProcessSpec::new(4, 1, 1)];
        let done = simulate(&processes, 2).unwrap();
        let ids: Vec<u32> = done.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 9]);
        // P4 finished first.
        assert!(done[0].completion_time < done[1].completion_time);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let a = vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 1, 4),
        ];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(simulate(&a, 2).unwrap(), simulate(&b, 2).unwrap());
    }

    #[test]
    fn test_empty_workload() {
        let report = RoundRobinScheduler::new(4)
            .run_detailed(&[], &mut NoopObserver)
            .unwrap();
        assert!(report.processes.is_empty());
        assert_eq!(report.cycles, 0);
    }

    #[test]
    fn test_invalid_input_runs_nothing() {
        let mut recorder = Recorder::default();
        let err = simulate_with_observer(
            &[ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 2, 3)],
            2,
            &mut recorder,
        )
        .unwrap_err();

        let SimulationError::InvalidInput(errors) = err;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_invalid_quantum() {
        let err = simulate(&[ProcessSpec::new(1, 0, 5)], 0).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let late_arrival = simulate(&[ProcessSpec::new(1, i64::MAX - 1, 5)], 3).unwrap_err();
        assert_eq!(
            late_arrival.validation_errors()[0].kind,
            ValidationErrorKind::TimeOverflow
        );

        let huge_bursts = simulate(
            &[
                ProcessSpec::new(1, 0, i64::MAX),
                ProcessSpec::new(2, 0, i64::MAX),
            ],
            i64::MAX,
        )
        .unwrap_err();
        assert_eq!(
            huge_bursts.validation_errors()[0].kind,
            ValidationErrorKind::TimeOverflow
        );
    }

    #[test]
    fn test_clock_reaches_i64_max() {
        let done = simulate(&[ProcessSpec::new(1, i64::MAX - 5, 5)], 2).unwrap();
        assert_eq!(done[0].completion_time, i64::MAX);
        assert_eq!(done[0].execution_history.len(), 3);
        assert_eq!(done[0].waiting_time, 0);
    }

    #[test]
    fn test_observer_event_sequence() {
        let processes = vec![ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 2, 3)];
        let mut recorder = Recorder::default();
        simulate_with_observer(&processes, 2, &mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                Event::Admit(1, 0),
                Event::Dispatch(1, 0, 2, 1),
                Event::Admit(2, 2),
                Event::Dispatch(2, 2, 4, 1),
                Event::Cycle(1, 4),
                Event::Dispatch(1, 4, 5, 0),
                Event::Complete(1, 5),
                Event::Dispatch(2, 5, 6, 0),
                Event::Complete(2, 6),
            ]
        );
    }

    #[test]
    fn test_log_observer_runs() {
        let processes = vec![ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 1, 2)];
        let mut observer = LogObserver;
        let done = simulate_with_observer(&processes, 2, &mut observer).unwrap();
        assert_eq!(done, simulate(&processes, 2).unwrap());
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let workload = WorkloadGenerator::new(12).generate(&mut rng);
        let first = workload.simulate().unwrap();
        let second = workload.simulate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_properties_on_random_workloads() {
        let generator = WorkloadGenerator::new(10)
            .with_arrival_range(0, 30)
            .with_burst_range(1, 12)
            .with_quantum_range(1, 5);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let workload = generator.generate(&mut rng);
            let quantum = workload.quantum;
            let mut recorder = Recorder::default();
            let done = RoundRobinScheduler::new(quantum)
                .run_with_observer(&workload.processes, &mut recorder)
                .unwrap();

            assert_eq!(done.len(), workload.process_count());
            assert!(done.windows(2).all(|w| w[0].id < w[1].id));
            assert!(recorder.events.iter().all(|e| !matches!(e, Event::Stall(_))));

            for r in &done {
                // Work conservation
                assert_eq!(r.executed_time(), r.burst_time, "seed {seed}");
                // Metric identities
                assert_eq!(r.turnaround_time, r.completion_time - r.arrival_time);
                assert_eq!(r.waiting_time, r.turnaround_time - r.burst_time);
                assert!(r.waiting_time >= 0);
                assert_eq!(r.execution_start_offset, r.completion_time - r.burst_time);
                assert_eq!(r.execution_history.last().map(|i| i.end), Some(r.completion_time));
                // Never runs before arrival
                assert!(r.first_start().unwrap() >= r.arrival_time);

                // Per-process ordering and quantum bound
                let last = r.execution_history.len() - 1;
                for (i, interval) in r.execution_history.iter().enumerate() {
                    assert!(interval.duration() > 0);
                    if i < last {
                        assert_eq!(interval.duration(), quantum);
                    } else {
                        assert!(interval.duration() <= quantum);
                    }
                }
                assert!(r
                    .execution_history
                    .windows(2)
                    .all(|w| w[0].end <= w[1].start));
            }

            // Single CPU: no two slices overlap, clock is monotonic.
            let slices = timeline(&done);
            assert!(slices.windows(2).all(|w| w[0].end <= w[1].start));
            let all: Vec<ExecutionInterval> = done
                .iter()
                .flat_map(|r| r.execution_history.iter().copied())
                .collect();
            for (i, a) in all.iter().enumerate() {
                assert!(all[i + 1..].iter().all(|b| !a.overlaps(b)), "seed {seed}");
            }

            let dispatches: Vec<(i64, i64)> = recorder
                .events
                .iter()
                .filter_map(|e| match e {
                    Event::Dispatch(_, start, end, _) => Some((*start, *end)),
                    _ => None,
                })
                .collect();
            assert!(dispatches.windows(2).all(|w| w[0].1 <= w[1].0));
        }
    }
}
