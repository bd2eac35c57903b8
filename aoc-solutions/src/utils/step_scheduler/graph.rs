use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, warn};

use super::step::StepId;

/// Why a dependency graph could not be run to completion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Steps remain but none of them can ever start
    #[error("cyclic dependency among steps {}", render_steps(.remaining))]
    CyclicDependency { remaining: Vec<StepId> },
    #[error("cannot schedule steps without any workers")]
    NoWorkers,
    /// Finishing `step` would pass `u64::MAX` time units
    #[error("finish time of step {step} does not fit in 64 bits")]
    DurationOverflow { step: StepId },
}

fn render_steps(steps: &[StepId]) -> String {
    steps.iter().map(|s| s.letter()).collect()
}

/// Remaining steps and, for each, the prerequisites not yet completed.
///
/// Running an ordering or a simulation consumes the graph; clone it first to
/// run several against the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    prerequisites: BTreeMap<StepId, BTreeSet<StepId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(prerequisite, step)` pairs
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (StepId, StepId)>,
    {
        let mut graph = Self::new();
        for (prerequisite, step) in edges {
            graph.add_edge(prerequisite, step);
        }
        graph
    }

    /// Record that `step` cannot start before `prerequisite` is done.
    ///
    /// Repeated edges collapse into one. A step listed as its own
    /// prerequisite is kept as a step but the edge is dropped.
    pub fn add_edge(&mut self, prerequisite: StepId, step: StepId) {
        self.prerequisites.entry(prerequisite).or_default();
        if prerequisite == step {
            warn!(%step, "ignoring step listed as its own prerequisite");
            return;
        }
        self.prerequisites.entry(step).or_default().insert(prerequisite);
    }

    /// Number of steps not yet completed
    pub fn len(&self) -> usize {
        self.prerequisites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty()
    }

    pub fn contains(&self, step: StepId) -> bool {
        self.prerequisites.contains_key(&step)
    }

    /// Remaining steps in alphabetical order
    pub fn steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.prerequisites.keys().copied()
    }

    /// Prerequisites of `step` that are still outstanding
    pub fn prerequisites(&self, step: StepId) -> Option<&BTreeSet<StepId>> {
        self.prerequisites.get(&step)
    }

    /// Steps with no outstanding prerequisites, alphabetically
    pub fn ready(&self) -> impl Iterator<Item = StepId> + '_ {
        self.prerequisites
            .iter()
            .filter(|(_, prerequisites)| prerequisites.is_empty())
            .map(|(&step, _)| step)
    }

    /// Remove a finished step, both as a step and as anyone's prerequisite
    pub fn complete(&mut self, step: StepId) {
        self.prerequisites.remove(&step);
        for prerequisites in self.prerequisites.values_mut() {
            prerequisites.remove(&step);
        }
    }

    pub(super) fn cycle_error(&self) -> ScheduleError {
        ScheduleError::CyclicDependency {
            remaining: self.steps().collect(),
        }
    }

    /// Single-worker order: repeatedly run the alphabetically first ready step.
    pub fn linearize(mut self) -> Result<Vec<StepId>, ScheduleError> {
        let mut order = Vec::with_capacity(self.len());

        while !self.is_empty() {
            let step = self.ready().next().ok_or_else(|| self.cycle_error())?;
            order.push(step);
            self.complete(step);
        }

        debug!(steps = order.len(), "linearized dependency graph");
        Ok(order)
    }
}

/// Alphabetical topological order of the steps named in `edges`
pub fn linearize<I>(edges: I) -> Result<Vec<StepId>, ScheduleError>
where
    I: IntoIterator<Item = (StepId, StepId)>,
{
    DependencyGraph::from_edges(edges).linearize()
}
