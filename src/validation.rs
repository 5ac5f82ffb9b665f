use itertools::Itertools;
use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use thiserror::Error;

use crate::graph::{Graph, NodeId};

/// A way in which a graph breaks the assumptions of [`RouteInspector`](crate::RouteInspector).
///
/// None of these stop the solver from running, but its answer is only meaningful without them.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GraphDefect {
    /// The edges `from -> to` and `to -> from` differ in presence or weight.
    #[error("edge {from} -> {to} does not match {to} -> {from}")]
    Asymmetric {
        /// Lower node of the pair.
        from: NodeId,
        /// Higher node of the pair.
        to: NodeId,
    },
    /// Some nodes with edges cannot be reached from the first node with an edge.
    #[error("nodes {unreachable:?} cannot be reached")]
    Disconnected {
        /// Unreachable nodes, ascending.
        unreachable: Vec<NodeId>,
    },
}

/// Check `graph` for an asymmetric matrix and for edges that cannot all be reached.
///
/// Returns every defect found, or an empty [`Vec`] if there are none.
pub fn validate(graph: &Graph) -> Vec<GraphDefect> {
    let mut defects = (0..graph.node_count())
        .tuple_combinations()
        .filter(|(from, to)| graph.weight(*from, *to) != graph.weight(*to, *from))
        .map(|(from, to)| GraphDefect::Asymmetric { from, to })
        .collect_vec();

    let touched = graph.edges().into_iter()
        .flat_map(|e| [e.from, e.to])
        .sorted()
        .dedup()
        .collect_vec();

    if let Some(&root) = touched.first() {
        let mut reached = vec![false; graph.node_count()];
        let mut dfs = Dfs::new(&graph.graph, NodeIndex::new(root));
        while let Some(node) = dfs.next(&graph.graph) {
            reached[node.index()] = true;
        }

        let unreachable = touched.into_iter().filter(|node| !reached[*node]).collect_vec();
        if !unreachable.is_empty() {
            defects.push(GraphDefect::Disconnected { unreachable });
        }
    }

    defects
}
