//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for spanning-forest construction.

pub mod graph;
pub mod params;
