//! Graph generators for forest property-based tests.
//!
//! Larger graphs come from seeded [`SmallRng`] generators, one per
//! [`WeightDistribution`]. Small graphs for the brute-force oracle come
//! straight from proptest so they shrink well.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{ForestFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 32;

/// Largest graph handed to the brute-force oracle.
pub(super) const ORACLE_MAX_NODES: usize = 8;
/// Most edges handed to the brute-force oracle (`2^12` subsets).
pub(super) const ORACLE_MAX_EDGES: usize = 12;

/// Generates fixtures covering all weight distributions.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small graphs, possibly disconnected, with tie-prone weights.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge<i64>>)> {
    (1..=ORACLE_MAX_NODES).prop_flat_map(|node_count| {
        let edge = (0..node_count, 0..node_count, -5_i64..=5)
            .prop_filter("self-loops are rejected by the builder", |(s, t, _)| s != t)
            .prop_map(Edge::from);
        let max_edges = if node_count > 1 { ORACLE_MAX_EDGES } else { 0 };
        (Just(node_count), prop::collection::vec(edge, 0..=max_edges))
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> ForestFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            let edges = random_graph(rng, 0, node_count, (0.2, 0.6), |r| {
                r.gen_range(-1_000_000..1_000_000)
            });
            (node_count, edges)
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            let edges = random_graph(rng, 0, node_count, (0.3, 0.7), |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (node_count, edges)
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            let edges = random_graph(rng, 0, node_count, (0.7, 0.95), |r| r.gen_range(0..100));
            (node_count, edges)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };

    ForestFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Joins each pair in `[offset, offset + node_count)` with a probability
/// drawn from `probability_range`.
fn random_graph(
    rng: &mut SmallRng,
    offset: usize,
    node_count: usize,
    probability_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<Edge<i64>> {
    let probability = rng.gen_range(probability_range.0..=probability_range.1);
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(Edge::new(offset + left, offset + right, w));
            }
        }
    }
    edges
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge<i64>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge<i64>> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0..1_000)))
        .collect();

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        if left != right {
            edges.push(Edge::new(left, right, rng.gen_range(0..1_000)));
        }
    }
    (node_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge<i64>>) {
    let parts = rng.gen_range(2..=5);
    let mut node_count = 0;
    let mut edges = Vec::new();
    for _ in 0..parts {
        let size = rng.gen_range(2..=12);
        edges.extend(random_graph(rng, node_count, size, (0.4, 0.9), |r| {
            r.gen_range(0..50)
        }));
        node_count += size;
    }
    // Trailing isolated nodes.
    node_count += rng.gen_range(0..=3);
    (node_count, edges)
}
