use std::fs::File;
use std::io::Read;

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::session::Weight;

/**
Edge files hold whitespace separated integer triples, one undirected edge each:

u0 v0 w0
u1 v1 w1
...

Line breaks carry no meaning, a triple may span lines. Vertex ids are validated by the
graph, not here.
 */
pub fn load_edges(path: impl Into<String>) -> anyhow::Result<Vec<(i64, i64, Weight)>> {
    let path: String = path.into();
    let mut s = String::new();
    File::open(&path)
        .with_context(|| format!("could not open file {}", path))?
        .read_to_string(&mut s)?;
    parse_edges(&s).with_context(|| format!("invalid edge file {}", path))
}

pub fn parse_edges(s: &str) -> anyhow::Result<Vec<(i64, i64, Weight)>> {
    let numbers = s
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("expected an integer, found '{}'", token))
        })
        .collect::<anyhow::Result<Vec<i64>>>()?;

    let mut triples = numbers.into_iter().tuples::<(i64, i64, i64)>();
    let edges: Vec<_> = triples.by_ref().collect();
    let leftover = triples.into_buffer().count();
    if leftover != 0 {
        bail!("{} trailing value(s) after the last complete edge", leftover);
    }
    Ok(edges)
}
