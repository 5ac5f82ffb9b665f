use std::fmt::{Display, Formatter};

use strum::{EnumString, VariantArray};

use crate::graph::{Graph, NodeId};
use crate::solver::Inspection;

/// How node identifiers are printed in a [`Report`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, strum::Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum LabelStyle {
    /// Raw integer ids: `0`, `1`, ...
    #[default]
    Numeric,
    /// Capital letters: `A`, `B`, ... Ids past `Z` fall back to [`Numeric`](Self::Numeric).
    Letters,
}

impl LabelStyle {
    /// Render `node` in this style.
    pub fn label(&self, node: NodeId) -> String {
        match self {
            Self::Letters if node < 26 => char::from(b'A' + node as u8).to_string(),
            _ => node.to_string(),
        }
    }
}

/// The printed result of inspecting one input file.
pub struct Report<'a> {
    /// Where the graph was read from.
    pub source: &'a str,
    /// The parsed graph.
    pub graph: &'a Graph,
    /// The solver's answer.
    pub inspection: &'a Inspection,
    /// How to print node ids in the answer.
    pub labels: LabelStyle,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File: {}", self.source)?;
        writeln!(f, "Number of nodes: {}", self.graph.node_count())?;
        writeln!(f, "Graph")?;
        writeln!(f, "{}", self.graph)?;
        writeln!(f, "Is Eulerian: {}", self.inspection.is_eulerian())?;
        match self.inspection.optimal_pair() {
            Some((start, end)) => writeln!(f, "Optimal nodes: {}, {}", self.labels.label(start), self.labels.label(end))?,
            None => writeln!(f, "Optimal nodes: none")?,
        }
        writeln!(f, "Retraced distance: {}", self.inspection.retraced())
    }
}
