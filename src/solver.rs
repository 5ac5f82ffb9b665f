use itertools::Itertools;
use log::{debug, trace, warn};
use unordered_pair::UnorderedPair;

use crate::error::SolverFailure;
use crate::graph::{Graph, NodeId, Weight};
use crate::matching::{for_each_perfect_matching, Matching};
use crate::paths::ShortestPaths;

/// Outcome of a route inspection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Inspection {
    /// Every node has even degree, so a closed walk covers every edge exactly once and may start anywhere.
    Eulerian,
    /// The walk covering every edge with the least repeated distance starts at `start` and ends at `end`.
    Endpoints {
        /// First node of the walk.
        start: NodeId,
        /// Last node of the walk.
        end: NodeId,
        /// Total shortest-path distance between the odd-degree pairs that must be walked twice.
        retraced: Weight,
    },
}

impl Inspection {
    /// Whether the graph already has an Eulerian circuit.
    pub fn is_eulerian(&self) -> bool {
        matches!(self, Self::Eulerian)
    }

    /// The optimal `(start, end)` pair, or `None` if the graph is Eulerian.
    pub fn optimal_pair(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Self::Eulerian => None,
            Self::Endpoints { start, end, .. } => Some((*start, *end)),
        }
    }

    /// Distance walked a second time; zero when no pair has to be doubled.
    pub fn retraced(&self) -> Weight {
        match self {
            Self::Eulerian => 0,
            Self::Endpoints { retraced, .. } => *retraced,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct ScoredMatching {
    // sum of pair distances, less the longest pair
    score: Weight,
    // indices into the odd vertex list
    endpoints: UnorderedPair<usize>,
}

/// Finds the best start and end nodes for a walk that traverses every edge of a graph.
///
/// Odd-degree vertices are collected on construction, together with one [`ShortestPaths`] from each of them.
/// Use [`Self::solve`] to run the pairing search.
///
/// The graph is assumed to be connected with a symmetric matrix, i.e. undirected in spirit;
/// see [`validate()`](crate::validate()) for a check.
#[derive(Clone, Debug)]
pub struct RouteInspector {
    odd_vertices: Vec<NodeId>,
    // parallel to `odd_vertices`
    odd_shortest_paths: Vec<ShortestPaths>,
}

impl From<&Graph> for RouteInspector {
    fn from(graph: &Graph) -> Self {
        let odd_vertices = graph.odd_vertices();
        debug!("found {} odd-degree vertices: {:?}", odd_vertices.len(), odd_vertices);

        let odd_shortest_paths = odd_vertices.iter()
            .map(|source| ShortestPaths::new(graph, *source))
            .collect_vec();

        Self {
            odd_vertices,
            odd_shortest_paths,
        }
    }
}

impl RouteInspector {
    /// Nodes with odd out-degree, ascending.
    pub fn odd_vertices(&self) -> &[NodeId] {
        &self.odd_vertices
    }

    #[inline]
    fn pair_distance(&self, pair: UnorderedPair<usize>) -> Option<Weight> {
        let UnorderedPair(first, second) = pair;
        self.odd_shortest_paths[first].distance_to(self.odd_vertices[second])
    }

    /// Score a matching, or `None` if any of its pairs has no path between them
    /// or the total distance does not fit in a [`Weight`].
    fn score(&self, matching: &Matching) -> Option<ScoredMatching> {
        let mut total: Weight = 0;
        let mut longest: Option<(Weight, UnorderedPair<usize>)> = None;

        for pair in matching {
            let dist = self.pair_distance(*pair)?;
            total = total.checked_add(dist)?;
            // first pair holding the maximum wins
            if longest.map_or(true, |(max, _)| dist > max) {
                longest = Some((dist, *pair));
            }
        }

        let (max, endpoints) = longest?;
        // `max` is one of the summands
        Some(ScoredMatching { score: total - max, endpoints })
    }

    /// Decide the optimal start and end nodes.
    ///
    /// With no odd vertices the graph is [`Eulerian`](Inspection::Eulerian).
    /// With exactly two, they are the endpoints regardless of distance.
    /// With more, every perfect matching of the odd vertices is scored by the total distance between its pairs,
    /// excluding its longest pair, which becomes the matching's start and end.
    /// The first matching with the lowest score wins; matchings relying on an unreachable pair,
    /// or whose total distance overflows [`Weight`], are skipped.
    /// Matchings are scored as they are enumerated, so only the best one so far is kept.
    ///
    /// Fails with [`SolverFailure::OddVertexCount`] if the odd vertices cannot be paired
    /// and [`SolverFailure::NoUsablePairing`] if every matching was skipped.
    pub fn solve(&self) -> Result<Inspection, SolverFailure> {
        match self.odd_vertices.as_slice() {
            [] => Ok(Inspection::Eulerian),
            [start, end] => Ok(Inspection::Endpoints { start: *start, end: *end, retraced: 0 }),
            odd if odd.len() % 2 == 1 => Err(SolverFailure::OddVertexCount { count: odd.len() }),
            odd => {
                debug!("scoring pairings of {} odd-degree vertices", odd.len());

                let mut best: Option<ScoredMatching> = None;
                let mut scored_count = 0usize;
                let mut skipped = 0usize;
                for_each_perfect_matching(odd.len(), |matching| {
                    scored_count += 1;
                    let Some(scored) = self.score(matching) else {
                        trace!("pairing {:?} has an unreachable pair or overflows", matching);
                        skipped += 1;
                        return;
                    };

                    trace!("pairing {:?} scores {}", matching, scored.score);
                    if best.map_or(true, |b| scored.score < b.score) {
                        best = Some(scored);
                    }
                });

                debug!("scored {} pairings", scored_count);
                if skipped > 0 {
                    warn!("skipped {} of {} pairings relying on an unreachable pair or an overflowing distance", skipped, scored_count);
                }

                let best = best.ok_or(SolverFailure::NoUsablePairing)?;
                let UnorderedPair(start, end) = best.endpoints;
                Ok(Inspection::Endpoints {
                    start: odd[start],
                    end: odd[end],
                    retraced: best.score,
                })
            }
        }
    }
}

/// Shorthand for [`RouteInspector::from`] followed by [`RouteInspector::solve`].
pub fn solve(graph: &Graph) -> Result<Inspection, SolverFailure> {
    RouteInspector::from(graph).solve()
}
