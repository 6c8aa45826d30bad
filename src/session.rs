use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use log::{debug, info, warn};
use took::Timer;
use wgraph::{FrontierOrder, Vertex, WeightedGraph};

use crate::command::{parse_command, Command};
use crate::config::DEFAULT_MAX_VERTICES;
use crate::io::edge_reader::load_edges;
use crate::utils::logging::{format_log_command_timed, format_seconds};

pub type Weight = i64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Holds the graph all commands of one run operate on.
pub struct Session {
    graph: WeightedGraph<Weight>,
    /// largest graph a BUILD may create
    max_vertices: usize,
}

// negative ids can never be in range, so they fail like any other bad vertex
fn to_vertex(v: i64) -> Option<Vertex> {
    Vertex::try_from(v).ok()
}

fn checked_vertex(v: i64, num_vertices: usize) -> anyhow::Result<Vertex> {
    match to_vertex(v) {
        Some(vertex) if (vertex as usize) < num_vertices => Ok(vertex),
        _ => bail!(
            "vertex {} is out of range for a graph with {} vertices",
            v,
            num_vertices
        ),
    }
}

impl Session {
    pub fn new(initial_vertices: usize, frontier_order: FrontierOrder) -> Self {
        Self {
            graph: WeightedGraph::with_frontier_order(initial_vertices, frontier_order),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn graph(&self) -> &WeightedGraph<Weight> {
        &self.graph
    }

    /// Executes a single command and returns the text to report for it.
    pub fn execute(&mut self, command: &Command) -> anyhow::Result<String> {
        match command {
            Command::Build { path } => {
                let edges = load_edges(path.as_str())?;
                self.build(edges)?;
                let size = self.graph.size();
                info!(
                    "built graph from {} with {} vertices and {} edges",
                    path, size.vertices, size.edges
                );
                Ok("Built Graph".to_string())
            }
            Command::GetSize => {
                let size = self.graph.size();
                Ok(format!(
                    "Vertices of Graph: {}, Edges of Graph: {}",
                    size.vertices, size.edges
                ))
            }
            Command::Insert {
                source,
                destination,
                weight,
            } => {
                let inserted = match (to_vertex(*source), to_vertex(*destination)) {
                    (Some(s), Some(d)) if *weight >= 0 => self.graph.insert_edge(s, d, *weight),
                    _ => false,
                };
                if inserted {
                    Ok(format!("Inserted edge ({}, {}) to Graph", source, destination))
                } else {
                    Ok(format!(
                        "Failed to insert edge ({}, {}) to Graph",
                        source, destination
                    ))
                }
            }
            Command::Delete {
                source,
                destination,
            } => {
                let deleted = match (to_vertex(*source), to_vertex(*destination)) {
                    (Some(s), Some(d)) => self.graph.delete_edge(s, d),
                    _ => false,
                };
                if deleted {
                    Ok(format!("Deleted edge ({}, {}) from Graph", source, destination))
                } else {
                    Ok(format!(
                        "Failed to delete edge ({}, {}) from Graph",
                        source, destination
                    ))
                }
            }
            Command::ShortestPath {
                source,
                destination,
            } => {
                let n = self.graph.num_vertices();
                let s = checked_vertex(*source, n)?;
                let d = checked_vertex(*destination, n)?;
                let cost = self.graph.shortest_path(s, d)?;
                if cost == Weight::MAX {
                    Ok(format!("No path from {} to {}", source, destination))
                } else {
                    Ok(format!(
                        "Shortest path from {} to {} costs {}",
                        source, destination, cost
                    ))
                }
            }
            Command::SpanningTree => Ok(format!(
                "Spanning tree of Graph costs {}",
                self.graph.spanning_tree_cost()?
            )),
            Command::ConnectedComponents => Ok(format!(
                "The number of connected components of Graph is {}",
                self.graph.connected_components()
            )),
            Command::Print => {
                if self.graph.num_vertices() == 0 {
                    Ok("Graph is empty".to_string())
                } else {
                    Ok(self.graph.to_string())
                }
            }
        }
    }

    /// Replaces the graph by one spanning exactly the vertices `0..=max id` of `edges`.
    /// Negative ids or weights and graphs above `max_vertices` leave the old graph in place.
    fn build(&mut self, edges: Vec<(i64, i64, Weight)>) -> anyhow::Result<()> {
        let mut converted = Vec::with_capacity(edges.len());
        for (u, v, w) in edges {
            if w < 0 {
                bail!("edge ({}, {}) has negative weight {}", u, v, w);
            }
            match (to_vertex(u), to_vertex(v)) {
                (Some(u), Some(v)) => converted.push((u, v, w)),
                _ => bail!("edge ({}, {}) has a negative vertex id", u, v),
            }
        }
        let num_vertices = converted
            .iter()
            .map(|&(u, v, _)| u.max(v) as usize + 1)
            .max()
            .unwrap_or(0);
        if num_vertices > self.max_vertices {
            bail!(
                "edge file needs {} vertices, the limit is {}",
                num_vertices,
                self.max_vertices
            );
        }

        let mut graph =
            WeightedGraph::with_frontier_order(num_vertices, self.graph.frontier_order());
        graph.build_graph(converted)?;
        self.graph = graph;
        Ok(())
    }

    /// Runs every command line of `commands`, writing each result followed by its
    /// execution time and a blank line to `out`. A failing command is reported in the
    /// output and does not stop the run.
    pub fn run<R, O>(&mut self, commands: R, out: &mut O) -> anyhow::Result<RunSummary>
    where
        R: BufRead,
        O: Write,
    {
        let mut summary = RunSummary::default();
        for (line_no, line) in commands.lines().enumerate() {
            let line = line.with_context(|| format!("could not read command {}", line_no + 1))?;

            let timer = Timer::new();
            let result = match parse_command(&line) {
                Ok(Some(command)) => self.execute(&command),
                Ok(None) => continue,
                Err(e) => Err(e),
            };
            let took = timer.took();

            summary.executed += 1;
            let message = match result {
                Ok(message) => message,
                Err(e) => {
                    summary.failed += 1;
                    warn!("line {}: '{}' failed: {:#}", line_no + 1, line.trim(), e);
                    format!("Error: {:#}", e)
                }
            };
            debug!("{}", format_log_command_timed(line.trim(), &message, &took));

            writeln!(out, "{}", message.trim_end())?;
            writeln!(out, "{}", format_seconds(&took))?;
            writeln!(out)?;
        }
        Ok(summary)
    }
}
