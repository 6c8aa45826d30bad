#[macro_use]
mod utils;
pub mod disjoint_set;
pub mod graph;
pub mod sequence;
pub mod sort;

pub use disjoint_set::DisjointSetForest;
pub use graph::{
    FrontierOrder, GraphError, GraphSize, Neighbor, SearchStats, ShortestPaths, WeightedGraph,
};
pub use sequence::OrderedSequence;
pub use sort::exchange_sort;
pub use utils::VertexVec;

pub type Vertex = u32;
// trait aliases are experimental (rust-lang/rfcs#1733)
// pub trait Weight = Zero + Bounded + NumOps + Copy + Ord;
