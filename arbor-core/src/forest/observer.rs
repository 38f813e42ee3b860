//! Observation hook for spanning-forest construction.
//!
//! The builder reports each edge decision after it is made. Observers only
//! watch: nothing they do can change which edges are selected.

use tracing::{debug, trace};

use crate::edge::Edge;
use crate::weight::Weight;

/// Whether the builder kept or discarded an edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeOutcome {
    /// The edge joined two separate components and is part of the forest.
    Selected,
    /// Both endpoints were already connected; keeping it would close a cycle.
    Rejected,
}

impl EdgeOutcome {
    /// Returns the lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }
}

/// A single decision made while building a forest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDecision<W> {
    /// The edge that was examined.
    pub edge: Edge<W>,
    /// Position of the edge in the caller's input.
    pub input_index: usize,
    /// Position of the edge in weight order.
    pub position: usize,
    /// What the builder did with the edge.
    pub outcome: EdgeOutcome,
}

/// Receives edge decisions from [`crate::SpanningForestBuilder`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, EdgeDecision, EdgeObserver, EdgeOutcome, SpanningForestBuilder};
///
/// #[derive(Default)]
/// struct CountRejected(usize);
///
/// impl<W> EdgeObserver<W> for CountRejected {
///     fn on_decision(&mut self, decision: &EdgeDecision<W>) {
///         if decision.outcome == EdgeOutcome::Rejected {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 0, 2), Edge::new(1, 2, 3)];
/// let mut counter = CountRejected::default();
/// SpanningForestBuilder::new().build_observed(3, &edges, &mut counter)?;
/// assert_eq!(counter.0, 1);
/// # Ok::<(), arbor_core::ForestError>(())
/// ```
pub trait EdgeObserver<W> {
    /// Called once per examined edge, in weight order.
    fn on_decision(&mut self, decision: &EdgeDecision<W>);
}

/// Observer that ignores every decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<W> EdgeObserver<W> for NoopObserver {
    fn on_decision(&mut self, _decision: &EdgeDecision<W>) {}
}

/// Observer that keeps every decision in the order it was made.
#[derive(Clone, Debug)]
pub struct RecordingObserver<W> {
    decisions: Vec<EdgeDecision<W>>,
}

impl<W> Default for RecordingObserver<W> {
    fn default() -> Self {
        Self {
            decisions: Vec::new(),
        }
    }
}

impl<W: Copy> RecordingObserver<W> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded decisions.
    #[must_use]
    pub fn decisions(&self) -> &[EdgeDecision<W>] {
        &self.decisions
    }

    /// Iterates over the edges that were selected.
    pub fn selected(&self) -> impl Iterator<Item = &Edge<W>> {
        self.decisions
            .iter()
            .filter(|decision| decision.outcome == EdgeOutcome::Selected)
            .map(|decision| &decision.edge)
    }

    /// Consumes the recorder, returning the decisions.
    #[must_use]
    pub fn into_decisions(self) -> Vec<EdgeDecision<W>> {
        self.decisions
    }
}

impl<W: Copy> EdgeObserver<W> for RecordingObserver<W> {
    fn on_decision(&mut self, decision: &EdgeDecision<W>) {
        self.decisions.push(*decision);
    }
}

/// Observer that narrates decisions as `tracing` events.
///
/// Selected edges are emitted at `DEBUG`, rejected edges at `TRACE`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl<W: Weight> EdgeObserver<W> for TracingObserver {
    fn on_decision(&mut self, decision: &EdgeDecision<W>) {
        let edge = &decision.edge;
        match decision.outcome {
            EdgeOutcome::Selected => debug!(
                source = edge.source(),
                target = edge.target(),
                weight = %edge.weight(),
                position = decision.position,
                "adding edge"
            ),
            EdgeOutcome::Rejected => trace!(
                source = edge.source(),
                target = edge.target(),
                weight = %edge.weight(),
                position = decision.position,
                "skipping edge that would close a cycle"
            ),
        }
    }
}

impl<W, O> EdgeObserver<W> for &mut O
where
    O: EdgeObserver<W> + ?Sized,
{
    fn on_decision(&mut self, decision: &EdgeDecision<W>) {
        (**self).on_decision(decision);
    }
}

impl<W, A, B> EdgeObserver<W> for (A, B)
where
    A: EdgeObserver<W>,
    B: EdgeObserver<W>,
{
    fn on_decision(&mut self, decision: &EdgeDecision<W>) {
        self.0.on_decision(decision);
        self.1.on_decision(decision);
    }
}
