//! Graph module — the data model and its external representations.
//!
//! Provides the adjacency-list graph, the GRA/WGRA text codec, and the
//! DOT export.

pub mod codec;
pub mod dot;
pub mod engine;

pub use codec::{
    decode, decode_weighted, decode_weighted_with, encode, load, load_weighted,
    load_weighted_with, save,
};
pub use dot::to_dot;
pub use engine::{Graph, GraphStats};
