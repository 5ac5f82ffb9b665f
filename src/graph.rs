use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Identifier of a node, in `0..node_count`.
pub type NodeId = usize;
/// Edge weight. Weights are non-negative by construction.
pub type Weight = u64;

/// A directed, weighted edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Edge {
    /// Cost of traversing the edge.
    pub weight: Weight,
    /// Node the edge leaves.
    pub from: NodeId,
    /// Node the edge enters.
    pub to: NodeId,
}

/// An immutable weighted directed graph, read from an adjacency matrix where row `i`, column `j` holds the weight of the edge `i -> j`.
///
/// [`Graph`]s should be built using a [`GraphBuilder`](crate::builder::GraphBuilder) or parsed from text with [`str::parse`].
#[derive(Clone, Debug)]
pub struct Graph {
    // node `i` is always `NodeIndex::new(i)`; nodes are only ever added in order
    pub(crate) graph: DiGraph<(), Weight>,
}

impl Graph {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub(crate) fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// All edges leaving `node`, ordered by destination.
    ///
    /// A node outside the graph has no edges.
    pub fn adjacent_edges(&self, node: NodeId) -> Vec<Edge> {
        if !self.contains(node) {
            return Vec::new();
        }

        self.graph.edges(NodeIndex::new(node))
            .map(|e| Edge {
                weight: *e.weight(),
                from: e.source().index(),
                to: e.target().index(),
            })
            .sorted_by_key(|e| e.to)
            .collect_vec()
    }

    /// Number of edges leaving `node`. A self-loop counts once.
    pub fn out_degree(&self, node: NodeId) -> usize {
        if !self.contains(node) {
            return 0;
        }

        self.graph.edges(NodeIndex::new(node)).count()
    }

    /// Every edge in the graph, in row-major matrix order.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph.edge_references()
            .map(|e| Edge {
                weight: *e.weight(),
                from: e.source().index(),
                to: e.target().index(),
            })
            .sorted_by_key(|e| (e.from, e.to))
            .collect_vec()
    }

    /// The weight of the edge `from -> to`, if there is one.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        self.graph.find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Nodes with an odd number of outgoing edges, in ascending order.
    pub fn odd_vertices(&self) -> Vec<NodeId> {
        (0..self.node_count())
            .filter(|node| self.out_degree(*node) % 2 == 1)
            .collect_vec()
    }
}

/// The adjacency listing: one `From: <node> To: <dest>:<weight>, ...` line per node.
impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in 0..self.node_count() {
            write!(f, "From: {} To:", node)?;
            let adjacent = self.adjacent_edges(node);
            if !adjacent.is_empty() {
                write!(f, " {}", adjacent.iter().map(|e| format!("{}:{}", e.to, e.weight)).join(", "))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
