//! Property-based tests for spanning-forest construction.
//!
//! Checks the builder against a brute-force oracle on small graphs,
//! validates structural invariants (acyclicity, edge count, connectivity)
//! on larger generated graphs, and asserts that repeated runs over tied
//! weights are reproducible.

mod determinism;
mod oracle;
mod strategies;
mod structural;
mod types;
