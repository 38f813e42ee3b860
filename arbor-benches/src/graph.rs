//! Seeded synthetic graphs for forest construction benchmarks.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first (each node `i > 0` attaches to a uniformly chosen earlier node) and
//! the requested number of extra edges is then sprinkled on top. Weights are
//! drawn uniformly from `0..=MAX_WEIGHT`, so ties are common.

use arbor_core::Edge;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Largest weight assigned to a generated edge.
pub const MAX_WEIGHT: u32 = 1_000;

/// Errors raised while generating a synthetic graph.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticGraphError {
    /// Extra edges were requested for a graph too small to hold them
    /// without self-loops.
    #[error("a graph with {node_count} node(s) cannot hold {extra_edges} extra edge(s)")]
    TooFewNodes {
        /// Requested node count.
        node_count: usize,
        /// Requested number of extra edges.
        extra_edges: usize,
    },
}

/// Shape and seed of a synthetic graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// Seed for the `SmallRng` driving generation.
    pub seed: u64,
}

/// A connected graph with integer weights.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge<u32>>,
}

impl SyntheticGraph {
    /// Generates a graph described by `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticGraphError::TooFewNodes`] when extra edges are
    /// requested for fewer than two nodes.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticGraphError> {
        let node_count = config.node_count;
        if node_count < 2 && config.extra_edges > 0 {
            return Err(SyntheticGraphError::TooFewNodes {
                node_count,
                extra_edges: config.extra_edges,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(
            node_count
                .saturating_sub(1)
                .saturating_add(config.extra_edges),
        );
        for target in 1..node_count {
            let source = rng.gen_range(0..target);
            edges.push(Edge::new(source, target, rng.gen_range(0..=MAX_WEIGHT)));
        }
        for _ in 0..config.extra_edges {
            let source = rng.gen_range(0..node_count);
            let mut target = rng.gen_range(0..node_count - 1);
            if target >= source {
                target += 1;
            }
            edges.push(Edge::new(source, target, rng.gen_range(0..=MAX_WEIGHT)));
        }

        Ok(Self { node_count, edges })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the generated edges in generation order.
    #[must_use]
    pub const fn edges(&self) -> &[Edge<u32>] {
        self.edges.as_slice()
    }

    /// Returns a copy of the edges with `f64` weights.
    #[must_use]
    pub fn float_edges(&self) -> Vec<Edge<f64>> {
        self.edges
            .iter()
            .map(|edge| Edge::new(edge.source(), edge.target(), f64::from(edge.weight())))
            .collect()
    }
}
