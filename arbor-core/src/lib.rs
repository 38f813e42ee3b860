//! Arbor core library.
//!
//! Builds minimum- and maximum-cost spanning forests over weighted
//! undirected graphs with Kruskal's algorithm on top of a rank-balanced,
//! path-compressing [`DisjointSet`].
//!
//! # Determinism
//!
//! Edges of equal weight are considered in their input order, in both
//! directions. Two runs over the same node count, edge slice and
//! [`Direction`] therefore select identical edges in identical order.

mod disjoint_set;
mod edge;
mod error;
mod forest;
#[cfg(test)]
mod test_utils;
mod weight;

pub use crate::{
    disjoint_set::{DisjointSet, checked_node_count},
    edge::Edge,
    error::{ForestError, ForestErrorCode, Result},
    forest::{
        Direction, EdgeDecision, EdgeObserver, EdgeOutcome, NoopObserver, RecordingObserver,
        SpanningForest, SpanningForestBuilder, TracingObserver, spanning_forest,
    },
    weight::Weight,
};
