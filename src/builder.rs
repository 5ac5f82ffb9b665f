//! Incremental construction of [`Graph`]s.

use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::BuilderInvalidReason;
use crate::graph::{Graph, NodeId, Weight};

/// A builder for [`Graph`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    node_count: usize,
    // keyed by (from, to) so the built graph lists edges in row-major order
    edges: BTreeMap<(NodeId, NodeId), Weight>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GraphBuilder {
    /// Construct a new [`Self`] for a graph with nodes `0..node_count` and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            ..Default::default()
        }
    }

    /// Add the directed edge `from -> to` with the given `weight`.
    ///
    /// May cause the builder to enter a [`NodeOutOfBounds`](BuilderInvalidReason::NodeOutOfBounds) invalid state if either endpoint is out of range,
    /// or a [`DuplicateEdge`](BuilderInvalidReason::DuplicateEdge) invalid state if the edge is already present.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if from >= self.node_count || to >= self.node_count {
            self.invalid_reasons.push(BuilderInvalidReason::NodeOutOfBounds { from, to, node_count: self.node_count });
            return self;
        }

        if self.edges.insert((from, to), weight).is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateEdge { from, to });
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Graph`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Graph, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut graph = DiGraph::with_capacity(self.node_count, self.edges.len());
        for _ in 0..self.node_count {
            graph.add_node(());
        }

        for (&(from, to), &weight) in &self.edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        }

        Ok(Graph { graph })
    }
}
