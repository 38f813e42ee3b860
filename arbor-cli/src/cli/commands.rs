//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    Direction, Edge, ForestError, ForestErrorCode, RecordingObserver, SpanningForest,
    SpanningForestBuilder, TracingObserver,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{EdgeList, LineError, read_edge_list, read_labels};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute minimum and maximum spanning forests of weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build spanning forests from an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Which extremal forest to build.
    #[arg(long, value_enum, default_value_t = DirectionArg::Minimize)]
    pub direction: DirectionArg,

    /// File with one node label per line, used in the rendered output.
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Print a line for every edge as it is added to the forest.
    #[arg(long)]
    pub narrate: bool,

    /// Fail unless every forest connects all nodes into a single tree.
    #[arg(long)]
    pub require_connected: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Directions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Build the minimum-cost forest.
    Minimize,
    /// Build the maximum-cost forest.
    Maximize,
    /// Build the minimum-cost forest, then the maximum-cost forest.
    Both,
}

impl DirectionArg {
    /// Returns the core directions to run, in output order.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Minimize => &[Direction::Minimize],
            Self::Maximize => &[Direction::Maximize],
            Self::Both => &[Direction::Minimize, Direction::Maximize],
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Both => "both",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading an input file.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of the edge list was malformed.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// File containing the malformed line.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: LineError,
    },
    /// The edge list contained no node count line.
    #[error("`{path}` does not declare a node count")]
    MissingNodeCount {
        /// File that was read.
        path: PathBuf,
    },
    /// The label file did not provide exactly one label per node.
    #[error("`{path}` has {labels} labels but the graph has {nodes} nodes")]
    LabelCount {
        /// Label file that was read.
        path: PathBuf,
        /// Number of labels found.
        labels: usize,
        /// Number of nodes declared by the edge list.
        nodes: usize,
    },
    /// An edge was rejected by the forest builder.
    #[error("{path}:{line}: {source}")]
    Edge {
        /// Edge-list file containing the edge.
        path: PathBuf,
        /// One-based line number of the edge.
        line: usize,
        /// The builder's error.
        #[source]
        source: ForestError,
    },
    /// `--require-connected` was set and the graph is not connected.
    #[error("{direction} forest has {components} components; the graph is not connected")]
    Disconnected {
        /// Direction of the forest that failed the check.
        direction: Direction,
        /// Number of trees in that forest.
        components: usize,
    },
    /// The core rejected the input.
    #[error(transparent)]
    Core(#[from] ForestError),
}

impl CliError {
    /// Returns the stable core error code when the failure originated in
    /// `arbor-core`.
    #[must_use]
    pub const fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Core(error) | Self::Edge { source: error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// One built forest plus its optional narration.
#[derive(Debug, Clone)]
pub struct ForestReport {
    /// The forest returned by the builder.
    pub forest: SpanningForest<f64>,
    /// `adding edge …` lines in selection order; empty unless narrating.
    pub narration: Vec<String>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the edge-list source.
    pub data_source: String,
    /// Number of nodes declared by the source.
    pub node_count: usize,
    /// Number of edges read from the source.
    pub edge_count: usize,
    /// Node labels, when a label file was supplied.
    pub labels: Option<Vec<String>>,
    /// One report per requested direction.
    pub reports: Vec<ForestReport>,
}

impl ExecutionSummary {
    /// Returns the label of `node`, or its number when unlabelled.
    #[must_use]
    pub fn node_name(&self, node: usize) -> String {
        node_name(self.labels.as_deref(), node)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or forest construction fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, DirectionArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 4\n1 2 1\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         direction: DirectionArg::Both,
///         labels: None,
///         narrate: false,
///         require_connected: true,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.reports[0].forest.total_cost(), 4.0);
/// assert_eq!(summary.reports[1].forest.total_cost(), 7.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), direction = command.direction.as_str()),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let list = read_edge_list(&command.path)?;
    let labels = command
        .labels
        .as_deref()
        .map(|path| read_labels(path, list.node_count))
        .transpose()?;

    let mut reports = Vec::with_capacity(command.direction.directions().len());
    for &direction in command.direction.directions() {
        let report = build_report(
            &list,
            &command.path,
            direction,
            command.narrate.then_some(labels.as_deref()),
        )?;
        if command.require_connected && !report.forest.is_spanning_tree() {
            return Err(CliError::Disconnected {
                direction,
                components: report.forest.component_count(),
            });
        }
        reports.push(report);
    }

    let summary = ExecutionSummary {
        data_source: derive_data_source_name(&command.path, command.name.as_deref()),
        node_count: list.node_count,
        edge_count: list.edges.len(),
        labels,
        reports,
    };
    info!(
        data_source = summary.data_source.as_str(),
        forests = summary.reports.len(),
        "command completed"
    );
    Ok(summary)
}

/// Builds one forest. `narration` is `Some(labels)` when selected edges
/// should be narrated.
#[instrument(
    name = "cli.build_forest",
    err,
    skip(list, path, direction, narration),
    fields(direction = %direction),
)]
fn build_report(
    list: &EdgeList,
    path: &Path,
    direction: Direction,
    narration: Option<Option<&[String]>>,
) -> Result<ForestReport, CliError> {
    let mut recorder = RecordingObserver::new();
    let forest = SpanningForestBuilder::new()
        .with_direction(direction)
        .build_observed(
            list.node_count,
            &list.edges,
            &mut (TracingObserver, &mut recorder),
        )
        .map_err(|error| locate(error, list, path))?;

    let narration = narration
        .map(|labels| {
            recorder
                .selected()
                .map(|edge| narrate_edge(edge, labels))
                .collect()
        })
        .unwrap_or_default();

    info!(
        edges = forest.len(),
        total_cost = forest.total_cost(),
        components = forest.component_count(),
        "forest built"
    );
    Ok(ForestReport { forest, narration })
}

/// Attaches the source line to errors that name a specific edge.
fn locate(error: ForestError, list: &EdgeList, path: &Path) -> CliError {
    match error.edge_index().and_then(|index| list.line_of(index)) {
        Some(line) => CliError::Edge {
            path: path.to_path_buf(),
            line,
            source: error,
        },
        None => CliError::Core(error),
    }
}

pub(super) fn narrate_edge(edge: &Edge<f64>, labels: Option<&[String]>) -> String {
    format!(
        "adding edge ({}, {}) weight {}",
        node_name(labels, edge.source()),
        node_name(labels, edge.target()),
        edge.weight()
    )
}

fn node_name(labels: Option<&[String]>, node: usize) -> String {
    labels
        .and_then(|labels| labels.get(node))
        .cloned()
        .unwrap_or_else(|| node.to_string())
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edges".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Each forest is introduced by its direction in brackets, followed by any
/// narration, one tab-separated `source target weight` row per edge, the
/// total cost and the number of components.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, ForestReport, render_summary};
/// # use arbor_core::{Direction, Edge, spanning_forest};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = spanning_forest(2, &[Edge::new(0, 1, 2.5)], Direction::Minimize)?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     node_count: 2,
///     edge_count: 1,
///     labels: Some(vec!["A".into(), "B".into()]),
///     reports: vec![ForestReport { forest, narration: Vec::new() }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("[minimize]\nA\tB\t2.5\ntotal cost: 2.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    for report in &summary.reports {
        let forest = &report.forest;
        writeln!(writer)?;
        writeln!(writer, "[{}]", forest.direction())?;
        for line in &report.narration {
            writeln!(writer, "{line}")?;
        }
        for edge in forest.edges() {
            writeln!(
                writer,
                "{}\t{}\t{}",
                summary.node_name(edge.source()),
                summary.node_name(edge.target()),
                edge.weight()
            )?;
        }
        writeln!(writer, "total cost: {}", forest.total_cost())?;
        writeln!(writer, "components: {}", forest.component_count())?;
    }
    Ok(())
}
