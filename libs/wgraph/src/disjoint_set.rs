use crate::utils::VertexVec;
use crate::Vertex;

/// Union-find over the elements `0..n`.
///
/// No path compression and no union by rank: `find` walks the whole parent chain and
/// `union` always hangs the root of its first argument below the root of the second.
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: VertexVec<Option<Vertex>>,
}

impl DisjointSetForest {
    pub fn new(n: usize) -> Self {
        Self {
            parent: vertex_vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative (root) of the set containing `i`.
    pub fn find(&self, i: Vertex) -> Vertex {
        let mut current = i;
        while let Some(parent) = self.parent[current] {
            current = parent;
        }
        current
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they already were one set.
    pub fn union(&mut self, x: Vertex, y: Vertex) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        self.parent[x_root] = Some(y_root);
        true
    }

    pub fn same(&self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_forest_has_singleton_sets() {
        let forest = DisjointSetForest::new(4);
        assert_eq!(forest.len(), 4);
        for i in 0..4 {
            assert_eq!(forest.find(i), i);
        }
        assert!(!forest.same(0, 1));
    }

    #[test]
    fn empty_forest() {
        let forest = DisjointSetForest::new(0);
        assert!(forest.is_empty());
    }

    #[test]
    fn first_root_becomes_child_of_second() {
        let mut forest = DisjointSetForest::new(3);
        assert!(forest.union(0, 1));
        assert_eq!(forest.find(0), 1);
        assert_eq!(forest.find(1), 1);

        assert!(forest.union(1, 2));
        assert_eq!(forest.find(0), 2);
    }

    #[test]
    fn union_of_joined_sets_is_noop() {
        let mut forest = DisjointSetForest::new(3);
        forest.union(0, 1);
        let before = forest.find(0);
        assert!(!forest.union(1, 0));
        assert!(!forest.union(0, 1));
        assert_eq!(forest.find(0), before);
        assert_eq!(forest.find(2), 2);
    }

    #[test]
    fn find_agrees_after_every_union() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64;

        let mut rng = Pcg64::seed_from_u64(1234);
        let n = 60;
        let mut forest = DisjointSetForest::new(n);
        for _ in 0..200 {
            let x = rng.gen_range(0..n as Vertex);
            let y = rng.gen_range(0..n as Vertex);
            forest.union(x, y);
            assert_eq!(forest.find(x), forest.find(y));
        }
    }

    #[test]
    fn long_chain_does_not_overflow_the_stack() {
        let n = 200_000;
        let mut forest = DisjointSetForest::new(n);
        for i in 0..(n as Vertex - 1) {
            forest.union(i, i + 1);
        }
        assert_eq!(forest.find(0), n as Vertex - 1);
    }
}
