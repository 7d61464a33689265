//! DOT export — a one-way description of a graph for external renderers.
//!
//! The output is a string in the DOT graph-description language, suitable
//! for feeding to a layout engine (dot, neato, fdp, sfdp, circo). It is not
//! round-trippable back into a [`Graph`].

use crate::graph::engine::Graph;

/// Render a graph as DOT text.
///
/// Directed graphs use `digraph { ... }` with ` -> ` edges, undirected use
/// `graph { ... }` with ` -- `. Each vertex gets a declaration line, quoted
/// with its label when the graph is labeled. Each undirected edge is
/// written once, from its `adj <= s` side; weighted edges carry a
/// `[label=cost]` attribute. Pure string computation — never fails for a
/// well-formed graph.
pub fn to_dot(graph: &Graph) -> String {
    let (mut dot, link) = if graph.directed() {
        (String::from("digraph {\n"), " -> ")
    } else {
        (String::from("graph {\n"), " -- ")
    };

    for s in 0..graph.order() {
        match graph.label(s) {
            Some(label) => dot.push_str(&format!("  {s}[label = \"{label}\"]\n")),
            None => dot.push_str(&format!("  {s}\n")),
        }
        for &adj in graph.neighbors(s) {
            if graph.directed() || adj <= s {
                match graph.cost(s, adj) {
                    Some(cost) => dot.push_str(&format!("{s}{link}{adj} [label={cost}] \n")),
                    None => dot.push_str(&format!("{s}{link}{adj}\n")),
                }
            }
        }
    }

    dot.push('}');
    dot
}
