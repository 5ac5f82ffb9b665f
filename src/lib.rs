#![warn(missing_docs)]

//! # `route-inspection`
//!
//! Picks the start and end nodes of the cheapest walk that traverses every edge of a weighted graph,
//! a variant of the [route inspection problem](https://en.wikipedia.org/wiki/Chinese_postman_problem) (the "park ranger" problem).
//! Begin by parsing a [`Graph`] from its adjacency-matrix text (see [`parse`]) or building one with a [`GraphBuilder`],
//! then call [`solve()`] to yield an [`Inspection`].
//!
//! # Internals
//! A graph where every vertex has even degree has an Eulerian circuit, and any node may start it.
//! Otherwise the odd-degree vertices have to be paired up, and the path between each pair walked twice,
//! except for one pair: the walk starts at one node of that pair and ends at the other.
//!
//! A high level overview is as follows:
//!
//! 1. Collect the vertices of odd out-degree.
//! 2. Run Dijkstra's algorithm from each of them ([`ShortestPaths`]).
//! 3. Enumerate every perfect matching of the odd vertices ([`matching::for_each_perfect_matching`]).
//! Score each one as it is produced by the total distance between its pairs, less its longest pair.
//! 4. The longest pair of the lowest scoring matching are the endpoints.
//!
//! The graph is assumed to be connected and to have a symmetric matrix.
//! [`validate()`] reports where this does not hold; the solver does not check it.

pub use builder::GraphBuilder;
pub use error::{BuilderInvalidReason, InspectError, ParseError, SolverFailure};
pub use graph::{Edge, Graph, NodeId, Weight};
pub use paths::ShortestPaths;
pub use report::{LabelStyle, Report};
pub use solver::{solve, Inspection, RouteInspector};
pub use validation::{validate, GraphDefect};

pub mod builder;
pub(crate) mod error;
pub(crate) mod graph;
pub mod matching;
pub mod parse;
pub(crate) mod paths;
pub(crate) mod report;
pub(crate) mod solver;
pub(crate) mod validation;

/// Parse `text` in the adjacency-matrix format and solve the resulting graph.
pub fn inspect_str(text: &str) -> Result<Inspection, InspectError> {
    let graph = parse::parse_matrix(text)?;
    Ok(solve(&graph)?)
}
