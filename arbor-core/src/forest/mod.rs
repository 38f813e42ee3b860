//! Extremal spanning-forest construction.
//!
//! [`SpanningForestBuilder`] runs Kruskal's algorithm: edges are visited in
//! weight order (ascending to minimise, descending to maximise) and each one
//! is kept only if it joins two components that are still separate in a
//! [`DisjointSet`]. On a connected graph the result is a spanning tree; on a
//! disconnected graph it is a forest with one tree per component.
//!
//! Edges of equal weight keep their input order. The sort is stable and runs
//! over a vector of indices, so the caller's slice is never reordered and
//! the same slice can feed a minimising and a maximising run.

mod observer;

use std::fmt;

use tracing::{debug, instrument};

use crate::disjoint_set::DisjointSet;
use crate::edge::Edge;
use crate::error::{ForestError, Result};
use crate::weight::Weight;

pub use self::observer::{
    EdgeDecision, EdgeObserver, EdgeOutcome, NoopObserver, RecordingObserver, TracingObserver,
};

/// Which extremum the builder optimises for.
///
/// # Examples
/// ```
/// use arbor_core::Direction;
///
/// assert_eq!(Direction::default(), Direction::Minimize);
/// assert_eq!(Direction::Maximize.as_str(), "maximize");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Produce a minimum-cost spanning forest.
    #[default]
    Minimize,
    /// Produce a maximum-cost spanning forest.
    Maximize,
}

impl Direction {
    /// Returns the lowercase name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }

    fn compare<W: Weight>(self, left: &W, right: &W) -> std::cmp::Ordering {
        match self {
            Self::Minimize => left.total_order(right),
            Self::Maximize => right.total_order(left),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a spanning-forest computation.
///
/// Edges are listed in the order they were selected. When the input graph
/// is connected the forest is a spanning tree with `node_count - 1` edges.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_cost: W,
    node_count: usize,
    component_count: usize,
    direction: Direction,
}

impl<W: Weight> SpanningForest<W> {
    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> W { self.total_cost }

    /// Returns the number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of trees (connected components) in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the direction the forest was optimised for.
    #[must_use]
    #[rustfmt::skip]
    pub fn direction(&self) -> Direction { self.direction }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the forest connects every node into one tree.
    ///
    /// Graphs with zero or one node count as spanned.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.node_count.saturating_sub(1)
    }

    /// Consumes the forest, returning its edges and total cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_cost)
    }
}

/// Configures and runs spanning-forest construction.
///
/// The builder holds no per-run state, so one instance can be reused and
/// shared freely; each run allocates its own [`DisjointSet`].
///
/// # Examples
/// ```
/// use arbor_core::{Direction, Edge, SpanningForestBuilder};
///
/// let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 1), Edge::new(0, 2, 3)];
///
/// let minimum = SpanningForestBuilder::new().build(3, &edges)?;
/// assert_eq!(minimum.edges(), &[Edge::new(1, 2, 1), Edge::new(0, 2, 3)]);
/// assert_eq!(minimum.total_cost(), 4);
///
/// let maximum = SpanningForestBuilder::new()
///     .with_direction(Direction::Maximize)
///     .build(3, &edges)?;
/// assert_eq!(maximum.total_cost(), 7);
/// # Ok::<(), arbor_core::ForestError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpanningForestBuilder {
    direction: Direction,
}

impl SpanningForestBuilder {
    /// Creates a builder that minimises total cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the direction to optimise for.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the configured direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Builds the extremal spanning forest of `edges` over `node_count` nodes.
    ///
    /// # Errors
    /// Returns an error when an edge references a node `>= node_count`, is
    /// a self-loop, or carries a non-finite weight. Also fails with
    /// [`ForestError::InvalidSize`] when `node_count` nodes cannot be
    /// allocated, and with [`ForestError::CostOverflow`] when the total cost
    /// overflows `W`.
    pub fn build<W: Weight>(
        &self,
        node_count: usize,
        edges: &[Edge<W>],
    ) -> Result<SpanningForest<W>> {
        self.build_observed(node_count, edges, &mut NoopObserver)
    }

    /// Builds the forest, reporting every edge decision to `observer`.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::build`].
    pub fn build_observed<W, O>(
        &self,
        node_count: usize,
        edges: &[Edge<W>],
        observer: &mut O,
    ) -> Result<SpanningForest<W>>
    where
        W: Weight,
        O: EdgeObserver<W> + ?Sized,
    {
        self.build_partitioned(node_count, edges, observer)
            .map(|(forest, _)| forest)
    }

    /// Builds the forest and also returns the final partition, so callers
    /// can keep answering connectivity queries after the run.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::build`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, NoopObserver, SpanningForestBuilder};
    ///
    /// let edges = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 2.0)];
    /// let (forest, mut partition) =
    ///     SpanningForestBuilder::new().build_partitioned(4, &edges, &mut NoopObserver)?;
    /// assert!(!forest.is_spanning_tree());
    /// assert!(partition.connected(2, 3)?);
    /// assert!(!partition.connected(1, 2)?);
    /// # Ok::<(), arbor_core::ForestError>(())
    /// ```
    #[instrument(
        name = "forest.build",
        err,
        skip(self, edges, observer),
        fields(edge_count = edges.len(), direction = %self.direction),
    )]
    pub fn build_partitioned<W, O>(
        &self,
        node_count: usize,
        edges: &[Edge<W>],
        observer: &mut O,
    ) -> Result<(SpanningForest<W>, DisjointSet)>
    where
        W: Weight,
        O: EdgeObserver<W> + ?Sized,
    {
        validate_edges(node_count, edges)?;

        let order = self.selection_order(edges);
        let mut partition = DisjointSet::try_new(node_count)?;
        let target = node_count.saturating_sub(1);
        let mut selected = Vec::with_capacity(target.min(edges.len()));
        let mut total_cost = W::ZERO;

        for (position, &index) in order.iter().enumerate() {
            if selected.len() == target {
                break;
            }

            let edge = edges[index];
            let outcome = if partition.union(edge.source(), edge.target())? {
                total_cost = total_cost
                    .checked_accumulate(edge.weight())
                    .ok_or(ForestError::CostOverflow { index })?;
                selected.push(edge);
                EdgeOutcome::Selected
            } else {
                EdgeOutcome::Rejected
            };

            observer.on_decision(&EdgeDecision {
                edge,
                input_index: index,
                position,
                outcome,
            });
        }

        debug!(
            selected = selected.len(),
            components = partition.component_count(),
            total_cost = %total_cost,
            "spanning forest built"
        );

        let forest = SpanningForest {
            edges: selected,
            total_cost,
            node_count,
            component_count: partition.component_count(),
            direction: self.direction,
        };
        Ok((forest, partition))
    }

    fn selection_order<W: Weight>(&self, edges: &[Edge<W>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by(|&left, &right| {
            self.direction
                .compare(&edges[left].weight(), &edges[right].weight())
        });
        order
    }
}

/// Builds the extremal spanning forest of `edges` in one call.
///
/// # Errors
/// Fails under the same conditions as [`SpanningForestBuilder::build`].
///
/// # Examples
/// ```
/// use arbor_core::{Direction, Edge, spanning_forest};
///
/// let forest = spanning_forest(1, &[] as &[Edge<u32>], Direction::Minimize)?;
/// assert!(forest.is_empty());
/// assert_eq!(forest.total_cost(), 0);
/// # Ok::<(), arbor_core::ForestError>(())
/// ```
pub fn spanning_forest<W: Weight>(
    node_count: usize,
    edges: &[Edge<W>],
    direction: Direction,
) -> Result<SpanningForest<W>> {
    SpanningForestBuilder::new()
        .with_direction(direction)
        .build(node_count, edges)
}

fn validate_edges<W: Weight>(node_count: usize, edges: &[Edge<W>]) -> Result<()> {
    edges
        .iter()
        .enumerate()
        .try_for_each(|(index, edge)| validate_edge(node_count, index, edge))
}

fn validate_edge<W: Weight>(node_count: usize, index: usize, edge: &Edge<W>) -> Result<()> {
    for node in [edge.source(), edge.target()] {
        if node >= node_count {
            return Err(ForestError::EdgeOutOfRange {
                index,
                node,
                node_count,
            });
        }
    }

    if edge.is_self_loop() {
        return Err(ForestError::InvalidEdge {
            index,
            node: edge.source(),
        });
    }

    if !edge.weight().is_admissible() {
        return Err(ForestError::NonFiniteWeight {
            index,
            source_node: edge.source(),
            target: edge.target(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod property;
