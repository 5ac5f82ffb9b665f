//! The adjacency-matrix text format.
//!
//! ```text
//! 4
//! -1,1,1,1
//! 1,-1,1,-1
//! 1,1,-1,1
//! 1,-1,1,-1
//! ```
//!
//! The first line holds the node count `N`, followed by `N` rows of `N` comma separated weights.
//! Row `i`, column `j` is the weight of the edge `i -> j`, or `-1` if there is no such edge.

use std::num::IntErrorKind;
use std::str::FromStr;

use itertools::Itertools;

use crate::builder::GraphBuilder;
use crate::error::ParseError;
use crate::graph::{Graph, Weight};

const NO_EDGE: i64 = -1;

/// Parse the adjacency-matrix text format into a [`Graph`].
///
/// Blank lines and whitespace around fields are ignored.
pub fn parse_matrix(text: &str) -> Result<Graph, ParseError> {
    let mut lines = text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let count_line = lines.next().ok_or(ParseError::MissingNodeCount)?;
    let node_count = count_line.parse::<usize>()
        .map_err(|_| ParseError::InvalidNodeCount { value: count_line.to_string() })?;

    let rows = lines.collect_vec();
    if rows.len() != node_count {
        return Err(ParseError::RowCount { expected: node_count, found: rows.len() });
    }

    let mut builder = GraphBuilder::with_nodes(node_count);
    for (row, line) in rows.into_iter().enumerate() {
        let fields = line.split(',').map(str::trim).collect_vec();
        if fields.len() != node_count {
            return Err(ParseError::RowLength { row, expected: node_count, found: fields.len() });
        }

        for (column, field) in fields.into_iter().enumerate() {
            if let Some(weight) = parse_weight(row, column, field)? {
                builder.add_edge(row, column, weight);
            }
        }
    }

    // rows and columns are bounded by `node_count` and each cell is read once
    let graph = builder.build().expect("matrix cells are in range and distinct");
    Ok(graph)
}

fn parse_weight(row: usize, column: usize, field: &str) -> Result<Option<Weight>, ParseError> {
    let out_of_range = || ParseError::WeightOutOfRange { row, column, value: field.to_string() };

    match field.parse::<Weight>() {
        Ok(weight) => return Ok(Some(weight)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => return Err(out_of_range()),
        // maybe negative, retry signed
        Err(_) => {}
    }

    match field.parse::<i64>() {
        Ok(NO_EDGE) => Ok(None),
        Ok(value) if value < 0 => Err(ParseError::NegativeWeight { row, column, value }),
        // "-0"
        Ok(value) => Ok(Some(value.unsigned_abs())),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Err(out_of_range()),
        Err(_) => Err(ParseError::InvalidWeight { row, column, value: field.to_string() }),
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}

impl Graph {
    /// Serialise this graph back into the adjacency-matrix text format.
    pub fn to_matrix_string(&self) -> String {
        let mut out = format!("{}\n", self.node_count());
        for from in 0..self.node_count() {
            out += &(0..self.node_count())
                .map(|to| match self.weight(from, to) {
                    Some(weight) => weight.to_string(),
                    None => NO_EDGE.to_string(),
                })
                .join(",");
            out.push('\n');
        }

        out
    }
}
