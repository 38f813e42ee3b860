//! Edge-list and label file ingestion.
//!
//! An edge list is UTF-8 text. Blank lines and lines starting with `#` are
//! ignored. The first remaining line holds the node count; every line after
//! it holds one edge as `source target weight`, separated by whitespace.
//!
//! ```text
//! # six nodes, eight edges
//! 6
//! 0 1 4
//! 0 2 3
//! ```
//!
//! A label file holds one node label per non-blank line, in node order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use arbor_core::{Edge, checked_node_count};
use thiserror::Error;
use tracing::{debug, instrument};

use super::commands::CliError;

/// Reasons a single edge-list line could not be parsed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LineError {
    /// The node count line was not an integer.
    #[error("node count `{raw}` is not an integer")]
    NodeCount {
        /// The text that failed to parse.
        raw: String,
    },
    /// An edge line did not have exactly three fields.
    #[error("expected `source target weight`, found {found} field(s)")]
    FieldCount {
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },
    /// An endpoint was not a non-negative integer.
    #[error("node `{raw}` is not a non-negative integer")]
    Node {
        /// The text that failed to parse.
        raw: String,
    },
    /// The weight was not a number.
    #[error("weight `{raw}` is not a number")]
    Weight {
        /// The text that failed to parse.
        raw: String,
    },
}

/// A parsed edge-list file.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList {
    /// Number of nodes declared by the file.
    pub node_count: usize,
    /// Edges in file order.
    pub edges: Vec<Edge<f64>>,
    /// One-based line number of each edge, parallel to `edges`.
    pub lines: Vec<usize>,
}

impl EdgeList {
    /// Returns the line an edge was read from.
    #[must_use]
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.lines.get(index).copied()
    }
}

/// Reads and parses the edge list at `path`.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read, a line is malformed,
/// the file declares no node count, or the node count is negative.
#[instrument(name = "cli.read_edge_list", err, skip_all, fields(path = %path.display()))]
pub fn read_edge_list(path: &Path) -> Result<EdgeList, CliError> {
    let list = parse_edge_list(open(path)?, path)?;
    debug!(
        nodes = list.node_count,
        edges = list.edges.len(),
        "edge list parsed"
    );
    Ok(list)
}

pub(super) fn parse_edge_list(reader: impl BufRead, path: &Path) -> Result<EdgeList, CliError> {
    let mut node_count = None;
    let mut edges = Vec::new();
    let mut lines = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| io_error(path, source))?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let at_line = |reason| CliError::Parse {
            path: path.to_path_buf(),
            line: line_number,
            reason,
        };

        match node_count {
            None => {
                let raw: i64 = content.parse().map_err(|_| {
                    at_line(LineError::NodeCount {
                        raw: content.to_owned(),
                    })
                })?;
                node_count = Some(checked_node_count(raw)?);
            }
            Some(_) => {
                edges.push(parse_edge(content).map_err(at_line)?);
                lines.push(line_number);
            }
        }
    }

    let node_count = node_count.ok_or_else(|| CliError::MissingNodeCount {
        path: path.to_path_buf(),
    })?;
    Ok(EdgeList {
        node_count,
        edges,
        lines,
    })
}

fn parse_edge(content: &str) -> Result<Edge<f64>, LineError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    let node = |raw: &str| {
        raw.parse::<usize>().map_err(|_| LineError::Node {
            raw: raw.to_owned(),
        })
    };
    let weight = weight.parse::<f64>().map_err(|_| LineError::Weight {
        raw: (*weight).to_owned(),
    })?;
    Ok(Edge::new(node(*source)?, node(*target)?, weight))
}

/// Reads one label per non-blank line and checks there is one per node.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read or the label count
/// differs from `node_count`.
#[instrument(name = "cli.read_labels", err, skip_all, fields(path = %path.display()))]
pub fn read_labels(path: &Path, node_count: usize) -> Result<Vec<String>, CliError> {
    parse_labels(open(path)?, path, node_count)
}

pub(super) fn parse_labels(
    reader: impl BufRead,
    path: &Path,
    node_count: usize,
) -> Result<Vec<String>, CliError> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| io_error(path, source))?;
        let label = line.trim();
        if !label.is_empty() {
            labels.push(label.to_owned());
        }
    }

    if labels.len() != node_count {
        return Err(CliError::LabelCount {
            path: path.to_path_buf(),
            labels: labels.len(),
            nodes: node_count,
        });
    }
    Ok(labels)
}

fn open(path: &Path) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: PathBuf::from(path),
        source,
    }
}
