use thiserror::Error;

use crate::graph::NodeId;

/// Reasons a [`GraphBuilder`](crate::builder::GraphBuilder) may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// An edge was added with an endpoint outside `0..node_count`.
    #[error("edge {from} -> {to} leaves the node range 0..{node_count}")]
    NodeOutOfBounds {
        /// Origin of the offending edge.
        from: NodeId,
        /// Destination of the offending edge.
        to: NodeId,
        /// Node count the builder was created with.
        node_count: usize,
    },
    /// The same directed edge was added twice.
    #[error("edge {from} -> {to} was added more than once")]
    DuplicateEdge {
        /// Origin of the offending edge.
        from: NodeId,
        /// Destination of the offending edge.
        to: NodeId,
    },
}

/// Errors raised while reading the adjacency-matrix text format.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The input holds no node count line.
    #[error("input is empty, expected a node count on the first line")]
    MissingNodeCount,
    /// The first line is not a non-negative integer.
    #[error("node count {value:?} is not a non-negative integer")]
    InvalidNodeCount {
        /// Text found on the first line.
        value: String,
    },
    /// A matrix field is not an integer.
    #[error("weight {value:?} at row {row}, column {column} is not an integer")]
    InvalidWeight {
        /// Zero-based matrix row.
        row: usize,
        /// Zero-based matrix column.
        column: usize,
        /// Text found in the field.
        value: String,
    },
    /// A matrix field is an integer that does not fit in a [`Weight`](crate::Weight), nor in an `i64` if negative.
    #[error("weight {value:?} at row {row}, column {column} is out of range")]
    WeightOutOfRange {
        /// Zero-based matrix row.
        row: usize,
        /// Zero-based matrix column.
        column: usize,
        /// Text found in the field.
        value: String,
    },
    /// A matrix field is negative but not the `-1` "no edge" sentinel.
    #[error("weight {value} at row {row}, column {column} is negative")]
    NegativeWeight {
        /// Zero-based matrix row.
        row: usize,
        /// Zero-based matrix column.
        column: usize,
        /// Value found in the field.
        value: i64,
    },
    /// A matrix row does not have exactly one field per node.
    #[error("row {row} has {found} fields, expected {expected}")]
    RowLength {
        /// Zero-based matrix row.
        row: usize,
        /// Node count.
        expected: usize,
        /// Fields found on the row.
        found: usize,
    },
    /// The matrix does not have exactly one row per node.
    #[error("matrix has {found} rows, expected {expected}")]
    RowCount {
        /// Node count.
        expected: usize,
        /// Rows found.
        found: usize,
    },
}

/// Reasons a [`RouteInspector`](crate::RouteInspector) may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SolverFailure {
    /// The graph has an odd number of odd-degree vertices, so they cannot be paired.
    #[error("graph has {count} odd-degree vertices, which cannot be paired")]
    OddVertexCount {
        /// Number of odd-degree vertices found.
        count: usize,
    },
    /// Every pairing of the odd-degree vertices contains a pair with no path between them,
    /// or has a total distance that overflows [`Weight`](crate::Weight).
    #[error("every pairing of the odd-degree vertices contains an unreachable pair or overflows")]
    NoUsablePairing,
}

/// Any failure of [`inspect_str`](crate::inspect_str).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InspectError {
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The graph could not be solved.
    #[error(transparent)]
    Solve(#[from] SolverFailure),
}
