//! Error types for adjgraph.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Everything that can go wrong when building, mutating, or (de)serializing
/// a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A caller-supplied argument violates a structural constraint
    /// (e.g. a label vector whose length does not match the graph order).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex index outside `0..order` was passed to an edge operation.
    #[error("vertex index {index} out of range for graph of order {order}")]
    IndexOutOfRange { index: usize, order: usize },

    /// A GRA/WGRA document violates the grammar. Line numbers are 1-based.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Opening, reading, or writing a graph file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
