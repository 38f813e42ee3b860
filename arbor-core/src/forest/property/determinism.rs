//! Reproducibility of forest construction.
//!
//! Re-runs the builder on the same input and requires identical output,
//! edge for edge. The `ManyIdentical` distribution makes this meaningful:
//! with heavy ties only the stable input-order rule fixes the result.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Direction, SpanningForestBuilder};

use super::types::{DeterminismConfig, ForestFixture};

/// Runs the determinism property for `fixture` in both directions.
pub(super) fn run_determinism_property(fixture: &ForestFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    for direction in [Direction::Minimize, Direction::Maximize] {
        let builder = SpanningForestBuilder::new().with_direction(direction);
        let run = || {
            builder
                .build(fixture.node_count, &fixture.edges)
                .map_err(|e| TestCaseError::fail(format!("build failed: {e}")))
        };

        let baseline = run()?;
        for repetition in 1..config.repetitions {
            let result = run()?;
            if result != baseline {
                return Err(TestCaseError::fail(format!(
                    "run {repetition} ({direction}) differs from baseline \
                     (distribution={:?}, nodes={}, edges={})",
                    fixture.distribution,
                    fixture.node_count,
                    fixture.edges.len(),
                )));
            }
        }
    }
    Ok(())
}
