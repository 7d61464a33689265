//! The core adjacency-list graph.
//!
//! Vertices are numbered `0..order` and the vertex number indexes its
//! adjacency list. Adjacency lists keep insertion order and permit
//! duplicates, so parallel edges are representable.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{GraphError, Result};

/// A graph as adjacency lists, optionally weighted and optionally labeled.
///
/// The weighted/unweighted distinction is carried by the type of `costs`:
/// `None` means the graph has no cost data at all, `Some` means every edge
/// carries a cost. The flag is fixed at construction, as is `directed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Number of vertices.
    order: usize,
    /// True if edges are one-way.
    directed: bool,
    /// Per-vertex list of reachable vertices, in insertion order.
    adjlists: Vec<Vec<usize>>,
    /// Edge `(src, dst)` -> cost. Present iff the graph is weighted.
    costs: Option<HashMap<(usize, usize), f64>>,
    /// Per-vertex names, aligned by index with `adjlists`.
    labels: Option<Vec<String>>,
    /// Free-form metadata carried through from a loaded file.
    /// Only the reserved key `labels` is interpreted by the codecs.
    infos: BTreeMap<String, String>,
}

impl Graph {
    /// Create an unweighted graph with `order` isolated vertices.
    pub fn new(order: usize, directed: bool) -> Self {
        Self {
            order,
            directed,
            adjlists: vec![Vec::new(); order],
            costs: None,
            labels: None,
            infos: BTreeMap::new(),
        }
    }

    /// Create a weighted graph with `order` isolated vertices.
    pub fn new_weighted(order: usize, directed: bool) -> Self {
        Self {
            costs: Some(HashMap::new()),
            ..Self::new(order, directed)
        }
    }

    // ─── Accessors ──────────────────────────────────────────────

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// True if edges are one-way.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// True if every edge carries a cost.
    pub fn is_weighted(&self) -> bool {
        self.costs.is_some()
    }

    /// Vertices reachable from `v` by one edge, in insertion order.
    /// Parallel edges appear as duplicate entries.
    ///
    /// # Panics
    ///
    /// Panics if `v >= order`.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjlists[v]
    }

    /// Cost of edge `(src, dst)`, if the graph is weighted and the edge exists.
    pub fn cost(&self, src: usize, dst: usize) -> Option<f64> {
        self.costs.as_ref()?.get(&(src, dst)).copied()
    }

    /// Vertex labels, if the graph is labeled.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Label of vertex `v`, if the graph is labeled and `v` is in range.
    pub fn label(&self, v: usize) -> Option<&str> {
        self.labels.as_ref()?.get(v).map(String::as_str)
    }

    /// Metadata value stored under `key`.
    pub fn info(&self, key: &str) -> Option<&str> {
        self.infos.get(key).map(String::as_str)
    }

    /// All metadata entries.
    pub fn infos(&self) -> &BTreeMap<String, String> {
        &self.infos
    }

    /// Store a metadata entry, overwriting any previous value.
    pub fn set_info(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.infos.insert(key.into(), value.into());
    }

    // ─── Labels ─────────────────────────────────────────────────

    /// Attach vertex labels, taking ownership of the vector.
    ///
    /// Fails with [`GraphError::InvalidArgument`] unless there is exactly
    /// one label per vertex.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.order {
            return Err(GraphError::InvalidArgument(format!(
                "got {} labels for a graph of order {}",
                labels.len(),
                self.order
            )));
        }
        self.labels = Some(labels);
        Ok(())
    }

    // ─── Vertex Operations ──────────────────────────────────────

    /// Append one isolated vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        self.adjlists.push(Vec::new());
        self.order += 1;
        self.order - 1
    }

    /// Append `count` isolated vertices.
    ///
    /// When `labels` is given, it is concatenated onto the existing label
    /// vector (the graph becomes labeled if it was not). The lengths of
    /// `labels` and `count` are deliberately not cross-checked; keeping the
    /// label vector aligned with the order is the caller's business here.
    pub fn add_vertices(&mut self, count: usize, labels: Option<Vec<String>>) {
        self.order += count;
        for _ in 0..count {
            self.adjlists.push(Vec::new());
        }
        if let Some(new_labels) = labels {
            match self.labels.as_mut() {
                Some(existing) => existing.extend(new_labels),
                None => self.labels = Some(new_labels),
            }
        }
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Add edge `(src, dst)` to an unweighted graph.
    ///
    /// Appends `dst` to the adjacency list of `src`; for an undirected graph
    /// with `src != dst`, also appends the reverse entry. Repeated calls
    /// create parallel edges.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] on an invalid index, and
    /// with [`GraphError::InvalidArgument`] on a weighted graph, where a
    /// cost is required — use [`Graph::add_edge_weighted`] there.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        if self.costs.is_some() {
            return Err(GraphError::InvalidArgument(
                "weighted graph requires a cost, use add_edge_weighted".into(),
            ));
        }
        self.push_adjacency(src, dst)
    }

    /// Add edge `(src, dst)` with a cost.
    ///
    /// On a weighted graph the cost is recorded under `(src, dst)` — and
    /// under `(dst, src)` too when undirected — overwriting unconditionally,
    /// so on parallel edges the last write wins. On an unweighted graph the
    /// cost is ignored and only the adjacency entries are added.
    pub fn add_edge_weighted(&mut self, src: usize, dst: usize, cost: f64) -> Result<()> {
        self.push_adjacency(src, dst)?;
        if let Some(costs) = self.costs.as_mut() {
            costs.insert((src, dst), cost);
            if !self.directed {
                costs.insert((dst, src), cost);
            }
        }
        Ok(())
    }

    /// Remove edge `(src, dst)`.
    ///
    /// Removes the *first* occurrence of `dst` in the adjacency list of
    /// `src`, so one call removes one parallel edge. The symmetric entry
    /// (and the cost entries, when weighted) are removed for an undirected
    /// graph. When the edge is absent, this is a silent no-op.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] on an invalid index.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let Some(pos) = self.adjlists[src].iter().position(|&v| v == dst) else {
            return Ok(());
        };
        self.adjlists[src].remove(pos);
        if let Some(costs) = self.costs.as_mut() {
            costs.remove(&(src, dst));
        }
        if !self.directed && src != dst {
            if let Some(pos) = self.adjlists[dst].iter().position(|&v| v == src) {
                self.adjlists[dst].remove(pos);
            }
            if let Some(costs) = self.costs.as_mut() {
                costs.remove(&(dst, src));
            }
        }
        Ok(())
    }

    // ─── Canonicalization ───────────────────────────────────────

    /// Sort every adjacency list ascending, in place.
    ///
    /// Makes the serialized output deterministic across graphs built in
    /// different edge orders. Costs and labels are untouched and parallel
    /// edges are kept.
    pub fn sort_adjacency(&mut self) {
        for list in &mut self.adjlists {
            list.sort_unstable();
        }
    }

    // ─── Stats ──────────────────────────────────────────────────

    /// Summary counts for the graph.
    ///
    /// `edge_count` counts each undirected edge once (self-loops included)
    /// and every adjacency entry of a directed graph.
    pub fn stats(&self) -> GraphStats {
        let edge_count = if self.directed {
            self.adjlists.iter().map(Vec::len).sum()
        } else {
            self.adjlists
                .iter()
                .enumerate()
                .map(|(s, list)| list.iter().filter(|&&adj| s >= adj).count())
                .sum()
        };
        GraphStats {
            order: self.order,
            edge_count,
            directed: self.directed,
            weighted: self.is_weighted(),
            labeled: self.labels.is_some(),
        }
    }

    // ─── Internal Helpers ───────────────────────────────────────

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.order {
            return Err(GraphError::IndexOutOfRange {
                index: v,
                order: self.order,
            });
        }
        Ok(())
    }

    fn push_adjacency(&mut self, src: usize, dst: usize) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.adjlists[src].push(dst);
        // A self-loop gets a single entry even in the undirected case.
        if !self.directed && src != dst {
            self.adjlists[dst].push(src);
        }
        Ok(())
    }
}

/// Summary counts about a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub order: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub weighted: bool,
    pub labeled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new(4, false);
        assert_eq!(graph.order(), 4);
        for v in 0..4 {
            assert!(graph.neighbors(v).is_empty());
        }
        assert!(!graph.is_weighted());
        assert_eq!(graph.stats().edge_count, 0);
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(2), &[] as &[usize]);
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = Graph::new(3, true);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_weighted_costs_are_symmetric() {
        let mut graph = Graph::new_weighted(3, false);
        graph.add_edge_weighted(0, 2, 4.5).unwrap();
        assert_eq!(graph.neighbors(0), &[2]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert_eq!(graph.cost(0, 2), Some(4.5));
        assert_eq!(graph.cost(2, 0), Some(4.5));
    }

    #[test]
    fn test_repeated_weighted_edge_last_cost_wins() {
        let mut graph = Graph::new_weighted(2, false);
        graph.add_edge_weighted(0, 1, 1.0).unwrap();
        graph.add_edge_weighted(0, 1, 7.0).unwrap();
        // Both adjacency entries survive, the cost is overwritten.
        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert_eq!(graph.cost(0, 1), Some(7.0));
        assert_eq!(graph.cost(1, 0), Some(7.0));
    }

    #[test]
    fn test_self_loop_appended_once() {
        let mut graph = Graph::new(2, false);
        graph.add_edge(1, 1).unwrap();
        assert_eq!(graph.neighbors(1), &[1]);
    }

    #[test]
    fn test_add_edge_rejects_bad_indices() {
        let mut graph = Graph::new(3, false);
        assert!(matches!(
            graph.add_edge(3, 0),
            Err(GraphError::IndexOutOfRange { index: 3, order: 3 })
        ));
        assert!(matches!(
            graph.add_edge(0, 5),
            Err(GraphError::IndexOutOfRange { index: 5, order: 3 })
        ));
        // A failed call must not leave a dangling adjacency entry behind.
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_add_edge_on_weighted_graph_requires_cost() {
        let mut graph = Graph::new_weighted(2, false);
        assert!(matches!(
            graph.add_edge(0, 1),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_cost_ignored_on_unweighted_graph() {
        let mut graph = Graph::new(2, false);
        graph.add_edge_weighted(0, 1, 9.0).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.cost(0, 1), None);
    }

    #[test]
    fn test_remove_edge_first_occurrence_only() {
        let mut graph = Graph::new(2, true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.remove_edge(0, 1).unwrap();
        assert_eq!(graph.neighbors(0), &[1], "one parallel edge must survive");
    }

    #[test]
    fn test_remove_edge_undirected_removes_both_sides() {
        let mut graph = Graph::new_weighted(3, false);
        graph.add_edge_weighted(0, 1, 2.0).unwrap();
        graph.remove_edge(1, 0).unwrap();
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(1).is_empty());
        assert_eq!(graph.cost(0, 1), None);
        assert_eq!(graph.cost(1, 0), None);
    }

    #[test]
    fn test_remove_missing_edge_is_noop() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(0, 1).unwrap();
        graph.remove_edge(0, 2).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
    }

    #[test]
    fn test_remove_edge_rejects_bad_indices() {
        let mut graph = Graph::new(2, false);
        assert!(matches!(
            graph.remove_edge(2, 0),
            Err(GraphError::IndexOutOfRange { index: 2, order: 2 })
        ));
    }

    #[test]
    fn test_remove_self_loop() {
        let mut graph = Graph::new_weighted(2, false);
        graph.add_edge_weighted(1, 1, 3.0).unwrap();
        graph.remove_edge(1, 1).unwrap();
        assert!(graph.neighbors(1).is_empty());
        assert_eq!(graph.cost(1, 1), None);
    }

    #[test]
    fn test_add_vertex_grows_order() {
        let mut graph = Graph::new(1, false);
        let v = graph.add_vertex();
        assert_eq!(v, 1);
        assert_eq!(graph.order(), 2);
        graph.add_edge(0, v).unwrap();
        assert_eq!(graph.neighbors(v), &[0]);
    }

    #[test]
    fn test_add_vertices_concatenates_labels() {
        let mut graph = Graph::new(2, false);
        graph
            .set_labels(vec!["a".to_string(), "b".to_string()])
            .unwrap();
        graph.add_vertices(2, Some(vec!["c".to_string(), "d".to_string()]));
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.label(3), Some("d"));
    }

    #[test]
    fn test_set_labels_validates_length() {
        let mut graph = Graph::new(3, false);
        let err = graph.set_labels(vec!["only".to_string()]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument(_)));
        assert!(graph.labels().is_none());
    }

    #[test]
    fn test_sort_adjacency_keeps_duplicates() {
        let mut graph = Graph::new(4, true);
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.sort_adjacency();
        assert_eq!(graph.neighbors(0), &[1, 2, 3, 3]);
    }

    #[test]
    fn test_stats_counts_undirected_edges_once() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 2).unwrap();
        let stats = graph.stats();
        assert_eq!(stats.order, 3);
        assert_eq!(stats.edge_count, 3);
        assert!(!stats.directed);
        assert!(!stats.weighted);
        assert!(!stats.labeled);
    }

    #[test]
    fn test_infos_round_trip_through_accessors() {
        let mut graph = Graph::new(1, false);
        graph.set_info("source", "unit-test");
        assert_eq!(graph.info("source"), Some("unit-test"));
        assert_eq!(graph.info("missing"), None);
    }
}
