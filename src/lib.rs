//! # adjgraph
//!
//! Adjacency-list graphs for teaching, with text serialization.
//!
//! Vertices are numbered `0..order` and the vertex number indexes its
//! adjacency list. Graphs can be directed or undirected, optionally
//! weighted (every edge carries an `f64` cost) and optionally labeled.
//!
//! ## Key Features
//!
//! - **Multigraph model**: adjacency lists keep insertion order and permit
//!   parallel edges; removal targets the first occurrence only
//! - **GRA / WGRA**: line-oriented text formats for unweighted and weighted
//!   graphs, with a `#key: value` metadata preamble
//! - **DOT export**: one-way conversion for external layout engines
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adjgraph::{codec, to_dot, Graph};
//! use std::path::Path;
//!
//! let mut graph = Graph::new(3, false);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! // Deterministic output: canonicalize, then save as GRA text.
//! graph.sort_adjacency();
//! codec::save(&graph, Path::new("path.gra"))?;
//!
//! // Hand the DOT text to a renderer of your choice.
//! let dot = to_dot(&graph);
//! # Ok::<(), adjgraph::GraphError>(())
//! ```

pub mod error;
pub mod graph;

// Re-exports for convenience
pub use error::{GraphError, Result};

// Graph re-exports
pub use graph::{codec, to_dot, Graph, GraphStats};
