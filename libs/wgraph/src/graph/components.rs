use fixedbitset::FixedBitSet;
use num_traits::{Bounded, NumOps, Zero};

use crate::graph::WeightedGraph;
use crate::Vertex;

impl<W> WeightedGraph<W>
where
    W: Zero + Bounded + NumOps + Copy + Ord,
{
    /// Number of connected components; isolated vertices count as components of their own.
    pub fn connected_components(&self) -> usize {
        let num_vertices = self.num_vertices();
        let mut visited = FixedBitSet::with_capacity(num_vertices);
        let mut stack: Vec<Vertex> = Vec::new();
        let mut components = 0;

        for root in 0..num_vertices {
            if visited[root] {
                continue;
            }
            components += 1;
            visited.insert(root);
            stack.push(root as Vertex);

            // depth-first, one explicit stack instead of recursion
            while let Some(v) = stack.pop() {
                for n in self.neighbors(v) {
                    if !visited[n.to as usize] {
                        visited.insert(n.to as usize);
                        stack.push(n.to);
                    }
                }
            }
        }
        components
    }
}
