use num_traits::{Bounded, CheckedAdd, NumOps, Zero};

use crate::disjoint_set::DisjointSetForest;
use crate::graph::{GraphError, WeightedGraph};
use crate::sort::exchange_sort;
use crate::Vertex;

impl<W> WeightedGraph<W>
where
    W: Zero + Bounded + NumOps + Copy + Ord,
{
    /// Kruskal over all adjacency entries. Returns the accepted edges `(u, v, w)` in the
    /// order they were accepted; a disconnected graph yields one tree per component.
    ///
    /// Each undirected edge shows up twice as a candidate (once per endpoint), the second
    /// copy is always rejected by the union-find. Candidates of equal weight are taken in
    /// adjacency order: by the vertex owning the list, then by list position.
    pub fn spanning_forest(&self) -> Vec<(Vertex, Vertex, W)> {
        let mut candidates: Vec<(W, Vertex, Vertex)> = Vec::new();
        for (u, list) in self.adjacency.iter().enumerate() {
            for n in list {
                candidates.push((n.w, u as Vertex, n.to));
            }
        }

        exchange_sort(&mut candidates, |a, b| a.0 > b.0);

        let mut sets = DisjointSetForest::new(self.num_vertices());
        let mut forest = Vec::new();
        for (w, u, v) in candidates {
            let u_root = sets.find(u);
            let v_root = sets.find(v);
            if u_root != v_root {
                sets.union(u_root, v_root);
                forest.push((u, v, w));
            }
        }
        forest
    }

    /// Total weight of [`WeightedGraph::spanning_forest`], `CostOverflow` if it does not fit into `W`.
    pub fn spanning_tree_cost(&self) -> Result<W, GraphError>
    where
        W: CheckedAdd,
    {
        self.spanning_forest()
            .into_iter()
            .try_fold(W::zero(), |cost, (_, _, w)| cost.checked_add(&w))
            .ok_or(GraphError::CostOverflow)
    }
}
