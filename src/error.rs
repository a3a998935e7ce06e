//! Error types of the coloring crate.
//!
//! A search that exhausts every candidate is *not* an error: solvers report it
//! as `None`. The types below only cover malformed input and misuse of the API.

use thiserror::Error;

use crate::color::Node;

/// errors raised while reading instance or solution files
#[derive(Debug, Error)]
pub enum InputError {
    /// the file could not be read or written
    #[error("unable to access {path}: {source}")]
    Io {
        /// file path
        path: String,
        /// underlying I/O error
        source: std::io::Error,
    },

    /// no `colors = <number>` line before the end of the file
    #[error("color count should be defined in the first line: 'colors = <number>'")]
    MissingHeader,

    /// the first non-comment line is not a valid header
    #[error("line {line}: color count should be defined in the first line: 'colors = <number>' (got '{content}')")]
    MalformedHeader {
        /// 1-based line number
        line: usize,
        /// offending line
        content: String,
    },

    /// an edge line is not of the form `<node_a>,<node_b>`
    #[error("line {line}: each line should contain two numbers separated by a comma (got '{content}')")]
    MalformedEdge {
        /// 1-based line number
        line: usize,
        /// offending line
        content: String,
    },

    /// a solution line is not of the form `<node>:<color>`
    #[error("line {line}: each solution line should be '<node>:<color>' (got '{content}')")]
    MalformedSolution {
        /// 1-based line number
        line: usize,
        /// offending line
        content: String,
    },

    /// the edges do not form a valid graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// errors raised while building a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// an edge references a node missing from the declared node set
    #[error("edge references undeclared node {0}")]
    UndeclaredNode(Node),

    /// an edge connects a node to itself (no proper coloring exists)
    #[error("self-loop on node {0}")]
    SelfLoop(Node),
}

/// errors raised when checking a coloring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// a node touched by an edge has no color
    #[error("node {0} has no color")]
    MissingColor(Node),
}
