//! Command-line interface orchestration for arbor.
//!
//! The `run` command reads an edge list (and optionally node labels), builds
//! the requested minimum and/or maximum spanning forests, and hands a summary
//! back for rendering.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, DirectionArg, ExecutionSummary, ForestReport, RunCommand,
    render_summary, run_cli,
};
pub use input::{EdgeList, LineError, read_edge_list, read_labels};

#[cfg(test)]
mod test_helpers;
