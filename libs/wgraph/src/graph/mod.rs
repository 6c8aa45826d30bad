use std::error::Error;
use std::fmt::{Display, Formatter};

use num_traits::{Bounded, NumOps, Zero};

use crate::Vertex;

mod components;
mod shortest_path;
mod spanning_forest;

pub use shortest_path::{FrontierOrder, SearchStats, ShortestPaths};


/// One entry of an adjacency list: the other endpoint and the edge weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor<W> {
    pub to: Vertex,
    pub w: W,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphSize {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { vertex: Vertex, num_vertices: usize },
    /// the summed weight does not fit into the weight type
    CostOverflow,
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::VertexOutOfRange {
                vertex,
                num_vertices,
            } => write!(
                f,
                "vertex {} is out of range for a graph with {} vertices",
                vertex, num_vertices
            ),
            GraphError::CostOverflow => write!(f, "total weight overflows the weight type"),
        }
    }
}

impl Error for GraphError {}

/// Undirected weighted graph over the vertices `0..num_vertices`.
///
/// Every edge `(u, v, w)` is stored twice, as `(v, w)` in the list of `u` and as `(u, w)`
/// in the list of `v`. Lists keep insertion order. Parallel edges are possible through
/// [`WeightedGraph::build_graph`] but are refused by [`WeightedGraph::insert_edge`].
#[derive(Clone, Debug)]
pub struct WeightedGraph<W> {
    adjacency: Vec<Vec<Neighbor<W>>>,
    frontier_order: FrontierOrder,
}

impl<W> WeightedGraph<W>
where
    W: Zero + Bounded + NumOps + Copy + Ord,
{
    pub fn new(num_vertices: usize) -> Self {
        Self::with_frontier_order(num_vertices, FrontierOrder::default())
    }

    pub fn with_frontier_order(num_vertices: usize, frontier_order: FrontierOrder) -> Self {
        Self {
            adjacency: (0..num_vertices).map(|_| Vec::new()).collect(),
            frontier_order,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn frontier_order(&self) -> FrontierOrder {
        self.frontier_order
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        (v as usize) < self.adjacency.len()
    }

    fn check_vertex(&self, v: Vertex) -> Result<(), GraphError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.num_vertices(),
            })
        }
    }

    pub fn neighbors(&self, v: Vertex) -> &[Neighbor<W>] {
        &self.adjacency[v as usize]
    }

    /// Changes the number of vertices. Shrinking drops every vertex `>= new_size`
    /// together with all edges touching it, growing adds isolated vertices.
    pub fn resize(&mut self, new_size: usize) {
        if new_size < self.adjacency.len() {
            self.adjacency.truncate(new_size);
            for list in self.adjacency.iter_mut() {
                list.retain(|n| (n.to as usize) < new_size);
            }
        } else {
            self.adjacency.resize_with(new_size, Vec::new);
        }
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex, w: W) {
        self.adjacency[u as usize].push(Neighbor { to: v, w });
        self.adjacency[v as usize].push(Neighbor { to: u, w });
    }

    /// Appends every `(u, v, w)` without looking for existing edges. Either all edges are
    /// added or, if one endpoint is out of range, none.
    pub fn build_graph(
        &mut self,
        edges: impl IntoIterator<Item = (Vertex, Vertex, W)>,
    ) -> Result<(), GraphError> {
        let edges: Vec<_> = edges.into_iter().collect();
        for &(u, v, _) in &edges {
            self.check_vertex(u)?;
            self.check_vertex(v)?;
        }
        for (u, v, w) in edges {
            self.add_edge(u, v, w);
        }
        Ok(())
    }

    pub fn has_edge(&self, source: Vertex, destination: Vertex) -> bool {
        self.contains_vertex(source)
            && self.adjacency[source as usize]
                .iter()
                .any(|n| n.to == destination)
    }

    /// Adds an edge unless an endpoint is out of range or `source` already has an edge
    /// to `destination`.
    pub fn insert_edge(&mut self, source: Vertex, destination: Vertex, weight: W) -> bool {
        if !self.contains_vertex(source) || !self.contains_vertex(destination) {
            return false;
        }
        if self.has_edge(source, destination) {
            return false;
        }
        self.add_edge(source, destination, weight);
        true
    }

    /// Removes one `source`-`destination` entry from each side. Deleting an edge that
    /// does not exist succeeds; only out-of-range endpoints fail.
    pub fn delete_edge(&mut self, source: Vertex, destination: Vertex) -> bool {
        if !self.contains_vertex(source) || !self.contains_vertex(destination) {
            return false;
        }
        remove_first(&mut self.adjacency[source as usize], destination);
        remove_first(&mut self.adjacency[destination as usize], source);
        true
    }

    pub fn size(&self) -> GraphSize {
        let incidences: usize = self.adjacency.iter().map(|list| list.len()).sum();
        GraphSize {
            vertices: self.num_vertices(),
            edges: incidences / 2,
        }
    }
}

fn remove_first<W>(list: &mut Vec<Neighbor<W>>, to: Vertex) {
    if let Some(pos) = list.iter().position(|n| n.to == to) {
        list.remove(pos);
    }
}

impl<W: Display> Display for WeightedGraph<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (v, list) in self.adjacency.iter().enumerate() {
            writeln!(f, "Vertex {}:", v)?;
            for n in list {
                writeln!(f, " -> {} (weight {})", n.to, n.w)?;
            }
        }
        Ok(())
    }
}
