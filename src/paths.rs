use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId, Weight};

/// Single-source shortest distances over a [`Graph`], computed once by Dijkstra's algorithm.
///
/// Edge weights must be non-negative, which [`Weight`] guarantees.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: NodeId,
    // `None` is unreachable
    dist_to: Vec<Option<Weight>>,
}

impl ShortestPaths {
    /// Compute the distance from `source` to every node of `graph`.
    ///
    /// If `source` is not in the graph, every node is unreachable.
    /// Paths whose total weight exceeds [`Weight::MAX`] are not followed.
    pub fn new(graph: &Graph, source: NodeId) -> Self {
        let mut dist_to = vec![None; graph.node_count()];
        if !graph.contains(source) {
            return Self { source, dist_to };
        }

        dist_to[source] = Some(0);
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((dist, node))) = frontier.pop() {
            // superseded by a shorter path pushed after this entry
            if dist_to[node].is_some_and(|best| dist > best) {
                continue;
            }

            for edge in graph.adjacent_edges(node) {
                // a path longer than `Weight::MAX` is treated as no path
                let Some(candidate) = dist.checked_add(edge.weight) else {
                    continue;
                };
                if dist_to[edge.to].map_or(true, |best| candidate < best) {
                    dist_to[edge.to] = Some(candidate);
                    frontier.push(Reverse((candidate, edge.to)));
                }
            }
        }

        Self { source, dist_to }
    }

    /// The node distances are measured from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Minimum total weight of a path from [`Self::source`] to `node`, or `None` if there is no such path.
    pub fn distance_to(&self, node: NodeId) -> Option<Weight> {
        self.dist_to.get(node).copied().flatten()
    }
}
