//! Discrete-event simulation of a fixed pool of workers.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::{debug, trace};

use super::graph::{DependencyGraph, ScheduleError};
use super::step::StepId;

/// One step's stay on a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub step: StepId,
    /// Index of the worker, `0..worker_count`
    pub worker: usize,
    pub start: u64,
    pub finish: u64,
}

/// Outcome of a simulation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timeline {
    /// Time at which the last step finished
    pub total_time: u64,
    /// Every step, in the order the steps finished
    pub assignments: Vec<Assignment>,
}

impl Timeline {
    /// Steps in completion order
    pub fn completion_order(&self) -> impl Iterator<Item = StepId> + '_ {
        self.assignments.iter().map(|a| a.step)
    }
}

/// Pending completion event. Field order gives the heap its ordering:
/// earliest finish first, ties broken alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Completion {
    finish: u64,
    step: StepId,
    worker: usize,
    start: u64,
}

impl DependencyGraph {
    /// Run every step on `worker_count` workers, where a step takes
    /// [`StepId::duration`]`(base_duration)`.
    ///
    /// At each decision point the ready steps are handed out alphabetically
    /// to the lowest-numbered idle workers, then time jumps to the next
    /// completion.
    pub fn simulate(
        mut self,
        worker_count: usize,
        base_duration: u64,
    ) -> Result<Timeline, ScheduleError> {
        if self.is_empty() {
            return Ok(Timeline::default());
        }
        if worker_count == 0 {
            return Err(ScheduleError::NoWorkers);
        }

        // at most one step per worker can run, so surplus workers never get a slot
        let mut idle: BTreeSet<usize> = (0..worker_count.min(self.len())).collect();
        let mut in_progress: BTreeSet<StepId> = BTreeSet::new();
        let mut pending: BinaryHeap<Reverse<Completion>> = BinaryHeap::new();
        let mut assignments = Vec::with_capacity(self.len());
        let mut now: u64 = 0;

        while !self.is_empty() {
            let ready: Vec<StepId> = self
                .ready()
                .filter(|step| !in_progress.contains(step))
                .collect();

            for step in ready {
                let Some(worker) = idle.pop_first() else {
                    break;
                };
                let finish = step
                    .duration(base_duration)
                    .and_then(|duration| now.checked_add(duration))
                    .ok_or(ScheduleError::DurationOverflow { step })?;
                trace!(%step, worker, start = now, finish, "assigned step");
                in_progress.insert(step);
                pending.push(Reverse(Completion {
                    finish,
                    step,
                    worker,
                    start: now,
                }));
            }

            // nothing running and nothing startable: the rest wait on each other
            let Some(&Reverse(next)) = pending.peek() else {
                return Err(self.cycle_error());
            };
            now = next.finish;

            while pending.peek().is_some_and(|Reverse(c)| c.finish == now) {
                let Some(Reverse(done)) = pending.pop() else {
                    break;
                };
                trace!(step = %done.step, worker = done.worker, at = now, "completed step");
                self.complete(done.step);
                in_progress.remove(&done.step);
                idle.insert(done.worker);
                assignments.push(Assignment {
                    step: done.step,
                    worker: done.worker,
                    start: done.start,
                    finish: done.finish,
                });
            }
        }

        debug!(
            total_time = now,
            steps = assignments.len(),
            worker_count,
            base_duration,
            "simulated schedule"
        );
        Ok(Timeline {
            total_time: now,
            assignments,
        })
    }
}

/// Full timeline for the steps named in `edges`
pub fn simulate<I>(
    edges: I,
    worker_count: usize,
    base_duration: u64,
) -> Result<Timeline, ScheduleError>
where
    I: IntoIterator<Item = (StepId, StepId)>,
{
    DependencyGraph::from_edges(edges).simulate(worker_count, base_duration)
}

/// Minimum time to finish every step named in `edges`
pub fn schedule<I>(edges: I, worker_count: usize, base_duration: u64) -> Result<u64, ScheduleError>
where
    I: IntoIterator<Item = (StepId, StepId)>,
{
    simulate(edges, worker_count, base_duration).map(|timeline| timeline.total_time)
}
