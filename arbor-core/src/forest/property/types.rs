//! Type definitions for forest property-based tests.

use test_strategy::Arbitrary;

use crate::Edge;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of one to three values, so ties dominate.
    ManyIdentical,
    /// A random spanning tree plus roughly `n / 2` to `n` extra edges.
    Sparse,
    /// Most node pairs are joined (edge probability 0.7 to 0.95).
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
}

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Generated edges, free of self-loops.
    pub edges: Vec<Edge<i64>>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Controls how often the determinism property re-runs the builder.
pub(super) struct DeterminismConfig {
    /// Number of runs compared against the first.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the repetition count from `ARBOR_FOREST_PBT_REPS`, defaulting
    /// to 5.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_FOREST_PBT_REPS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
