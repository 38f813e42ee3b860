//! Brute-force oracle for spanning-forest optimality.
//!
//! Enumerates every subset of the input edges and keeps the acyclic ones
//! with `n - c` edges, where `c` is the number of components of the input
//! graph. Those are exactly the spanning forests of the input, so the best
//! cost among them is the optimum the builder must match. Only usable for
//! the handful of edges [`super::strategies::small_graph_strategy`] emits.

use crate::{Direction, Edge};

/// Optimal cost found by exhaustive search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Best total cost among all spanning forests.
    pub total_cost: i64,
    /// Edges in every spanning forest (`n - c`).
    pub edge_count: usize,
    /// Components of the input graph.
    pub component_count: usize,
}

/// Returns the optimal spanning-forest cost for `direction`.
pub(super) fn brute_force_forest(
    node_count: usize,
    edges: &[Edge<i64>],
    direction: Direction,
) -> OracleResult {
    let component_count = count_components(node_count, edges.iter());
    let edge_count = node_count - component_count;

    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let subset: Vec<&Edge<i64>> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !is_acyclic(node_count, &subset) {
            continue;
        }
        let cost: i64 = subset.iter().map(|edge| edge.weight()).sum();
        best = Some(match (best, direction) {
            (None, _) => cost,
            (Some(current), Direction::Minimize) => current.min(cost),
            (Some(current), Direction::Maximize) => current.max(cost),
        });
    }

    OracleResult {
        total_cost: best.unwrap_or(0),
        edge_count,
        component_count,
    }
}

/// Counts connected components using a plain parent array.
pub(super) fn count_components<'a>(
    node_count: usize,
    edges: impl IntoIterator<Item = &'a Edge<i64>>,
) -> usize {
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Returns `true` when no edge in `edges` closes a cycle.
pub(super) fn is_acyclic(node_count: usize, edges: &[&Edge<i64>]) -> bool {
    let mut parent: Vec<usize> = (0..node_count).collect();
    edges.iter().all(|edge| {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        parent[right] = left;
        left != right
    })
}

/// Path-halving find over a bare parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
