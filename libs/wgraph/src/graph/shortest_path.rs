use log::debug;
use num_traits::{Bounded, CheckedAdd, NumOps, Zero};

use crate::graph::{GraphError, WeightedGraph};
use crate::sequence::OrderedSequence;
use crate::utils::VertexVec;
use crate::Vertex;

/// Which `(distance, vertex)` pair the shortest path frontier hands out next.
///
/// `Ascending` is the usual Dijkstra order (smallest tentative distance first).
/// `Descending` hands out the largest pair first, the order of the classic
/// command-driven tool. For non-negative weights both settle on the same distances
/// because every improvement is re-queued; `Descending` may need many more extractions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontierOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// pairs taken from the frontier
    pub extractions: usize,
    /// successful distance improvements (= pushes after the seed)
    pub relaxations: usize,
}

/// Result of a single-source run: `W::max_value()` marks unreachable vertices.
#[derive(Clone, Debug)]
pub struct ShortestPaths<W> {
    pub source: Vertex,
    pub distances: VertexVec<W>,
    pub stats: SearchStats,
}

impl<W> ShortestPaths<W>
where
    W: Bounded + Copy + Ord,
{
    pub fn distance(&self, v: Vertex) -> W {
        self.distances[v]
    }

    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.distances[v] != W::max_value()
    }
}

impl<W> WeightedGraph<W>
where
    W: Zero + Bounded + NumOps + CheckedAdd + Copy + Ord,
{
    /// Relaxes from `source` until the frontier runs dry.
    ///
    /// Improved vertices are pushed again without removing their older frontier pairs;
    /// a stale pair is processed like any other and simply relaxes nothing new.
    /// A relaxation whose sum does not fit into `W` is skipped.
    pub fn shortest_path_search(&self, source: Vertex) -> Result<ShortestPaths<W>, GraphError> {
        self.check_vertex(source)?;
        let mut frontier = match self.frontier_order {
            FrontierOrder::Ascending => OrderedSequence::ascending(),
            FrontierOrder::Descending => OrderedSequence::descending(),
        };
        let mut d = vertex_vec![W::max_value(); self.num_vertices()];
        let mut stats = SearchStats::default();

        d[source] = W::zero();
        frontier.push((W::zero(), source));

        while !frontier.is_empty() {
            let (_, u) = *frontier.front();
            frontier.pop();
            stats.extractions += 1;

            for n in self.neighbors(u) {
                let candidate = match d[u].checked_add(&n.w) {
                    Some(candidate) => candidate,
                    None => continue,
                };
                if candidate < d[n.to] {
                    d[n.to] = candidate;
                    frontier.push((candidate, n.to));
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "shortest path search from {} ({:?} frontier): {} extractions, {} relaxations",
            source, self.frontier_order, stats.extractions, stats.relaxations
        );

        Ok(ShortestPaths {
            source,
            distances: d,
            stats,
        })
    }

    /// Distance from `source` to `destination`, `W::max_value()` if there is no path.
    pub fn shortest_path(&self, source: Vertex, destination: Vertex) -> Result<W, GraphError> {
        self.check_vertex(destination)?;
        Ok(self.shortest_path_search(source)?.distance(destination))
    }
}
