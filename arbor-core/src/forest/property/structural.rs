//! Structural invariants of a built forest.
//!
//! For any generated graph and either direction, the forest must:
//!
//! - contain no cycle (replaying its edges through a fresh union-find never
//!   finds both endpoints already joined),
//! - hold exactly `n - c` edges for `c` input components,
//! - be a spanning tree exactly when the input is connected,
//! - only contain edges taken from the input,
//! - report a total cost equal to the sum of its edge weights.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Direction, Edge, SpanningForest, spanning_forest};

use super::oracle::{count_components, is_acyclic};
use super::types::ForestFixture;

/// Runs the structural invariant property for `fixture` in both directions.
pub(super) fn run_structural_invariants_property(fixture: &ForestFixture) -> TestCaseResult {
    for direction in [Direction::Minimize, Direction::Maximize] {
        let forest = spanning_forest(fixture.node_count, &fixture.edges, direction).map_err(|e| {
            TestCaseError::fail(format!(
                "spanning_forest failed: {e} (direction={direction}, distribution={:?}, nodes={}, edges={})",
                fixture.distribution,
                fixture.node_count,
                fixture.edges.len(),
            ))
        })?;

        validate_acyclicity(&forest)?;
        validate_edge_count(fixture, &forest)?;
        validate_membership(fixture, &forest)?;
        validate_total_cost(&forest)?;
    }
    Ok(())
}

fn validate_acyclicity(forest: &SpanningForest<i64>) -> TestCaseResult {
    let edges: Vec<&Edge<i64>> = forest.edges().iter().collect();
    if !is_acyclic(forest.node_count(), &edges) {
        return Err(TestCaseError::fail(format!(
            "{} forest contains a cycle: {:?}",
            forest.direction(),
            forest.edges(),
        )));
    }
    Ok(())
}

fn validate_edge_count(fixture: &ForestFixture, forest: &SpanningForest<i64>) -> TestCaseResult {
    let input_components = count_components(fixture.node_count, &fixture.edges);
    let expected = fixture.node_count - input_components;
    if forest.len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} (n={}, c={input_components})",
            forest.len(),
            fixture.node_count,
        )));
    }
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest reports {} components, input has {input_components}",
            forest.component_count(),
        )));
    }
    if forest.is_spanning_tree() != (input_components <= 1) {
        return Err(TestCaseError::fail(format!(
            "is_spanning_tree={} but input has {input_components} components",
            forest.is_spanning_tree(),
        )));
    }
    Ok(())
}

fn validate_membership(fixture: &ForestFixture, forest: &SpanningForest<i64>) -> TestCaseResult {
    for edge in forest.edges() {
        if !fixture.edges.contains(edge) {
            return Err(TestCaseError::fail(format!(
                "forest edge {edge:?} is not present in the input",
            )));
        }
    }
    Ok(())
}

fn validate_total_cost(forest: &SpanningForest<i64>) -> TestCaseResult {
    let sum: i64 = forest.edges().iter().map(Edge::weight).sum();
    if sum != forest.total_cost() {
        return Err(TestCaseError::fail(format!(
            "total cost {} differs from edge sum {sum}",
            forest.total_cost(),
        )));
    }
    Ok(())
}
