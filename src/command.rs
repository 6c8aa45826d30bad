use anyhow::{bail, Context};

use crate::session::Weight;

/// Data structures known to the command language. Only the graph is implemented.
const UNSUPPORTED_STRUCTURES: [&str; 4] = ["MINHEAP", "MAXHEAP", "AVLTREE", "HASHTABLE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Build { path: String },
    GetSize,
    Insert { source: i64, destination: i64, weight: Weight },
    Delete { source: i64, destination: i64 },
    ShortestPath { source: i64, destination: i64 },
    SpanningTree,
    ConnectedComponents,
    Print,
}

/// Parses one line of the command file. Blank lines and `#` comments give `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let action = tokens.next().context("expected an action")?;
    let structure = tokens
        .next()
        .with_context(|| format!("expected a data structure after {}", action))?;

    if UNSUPPORTED_STRUCTURES.contains(&structure) {
        bail!("unsupported data structure {}", structure);
    }
    if structure != "GRAPH" {
        bail!("unknown data structure {}", structure);
    }

    let command = match action {
        "BUILD" => Command::Build {
            path: tokens.next().context("expected a file name")?.to_string(),
        },
        "GETSIZE" => Command::GetSize,
        "INSERT" => {
            let source = next_number(&mut tokens, "source vertex")?;
            let destination = next_number(&mut tokens, "destination vertex")?;
            // the weight is optional, the classic driver always inserted weight 0
            let weight = match tokens.next() {
                Some(token) => parse_number(token, "weight")?,
                None => 0,
            };
            Command::Insert {
                source,
                destination,
                weight,
            }
        }
        "DELETE" => Command::Delete {
            source: next_number(&mut tokens, "source vertex")?,
            destination: next_number(&mut tokens, "destination vertex")?,
        },
        "COMPUTESHORTESTPATH" => Command::ShortestPath {
            source: next_number(&mut tokens, "source vertex")?,
            destination: next_number(&mut tokens, "destination vertex")?,
        },
        "COMPUTESPANNINGTREE" => Command::SpanningTree,
        "FINDCONNECTEDCOMPONENTS" => Command::ConnectedComponents,
        "PRINT" => Command::Print,
        _ => bail!("action {} is not supported for {}", action, structure),
    };

    if let Some(extra) = tokens.next() {
        bail!("unexpected argument {} in '{}'", extra, line);
    }
    Ok(Some(command))
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> anyhow::Result<i64> {
    let token = tokens
        .next()
        .with_context(|| format!("expected {}", what))?;
    parse_number(token, what)
}

fn parse_number(token: &str, what: &str) -> anyhow::Result<i64> {
    token
        .parse::<i64>()
        .with_context(|| format!("invalid {} '{}'", what, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \t").unwrap(), None);
        assert_eq!(parse_command("# BUILD GRAPH x").unwrap(), None);
    }

    #[test]
    fn parses_every_graph_action() {
        assert_eq!(
            parse_command("BUILD GRAPH edges.txt").unwrap(),
            Some(Command::Build {
                path: "edges.txt".to_string()
            })
        );
        assert_eq!(parse_command("GETSIZE GRAPH").unwrap(), Some(Command::GetSize));
        assert_eq!(
            parse_command("INSERT GRAPH 1 2 7").unwrap(),
            Some(Command::Insert {
                source: 1,
                destination: 2,
                weight: 7
            })
        );
        assert_eq!(
            parse_command("DELETE GRAPH 2 1").unwrap(),
            Some(Command::Delete {
                source: 2,
                destination: 1
            })
        );
        assert_eq!(
            parse_command("COMPUTESHORTESTPATH GRAPH 0 3").unwrap(),
            Some(Command::ShortestPath {
                source: 0,
                destination: 3
            })
        );
        assert_eq!(
            parse_command("COMPUTESPANNINGTREE GRAPH").unwrap(),
            Some(Command::SpanningTree)
        );
        assert_eq!(
            parse_command("  FINDCONNECTEDCOMPONENTS   GRAPH ").unwrap(),
            Some(Command::ConnectedComponents)
        );
        assert_eq!(parse_command("PRINT GRAPH").unwrap(), Some(Command::Print));
    }

    #[test]
    fn insert_weight_defaults_to_zero() {
        assert_eq!(
            parse_command("INSERT GRAPH 3 4").unwrap(),
            Some(Command::Insert {
                source: 3,
                destination: 4,
                weight: 0
            })
        );
    }

    #[test]
    fn negative_vertices_parse_and_are_left_to_the_graph() {
        assert_eq!(
            parse_command("DELETE GRAPH -1 2").unwrap(),
            Some(Command::Delete {
                source: -1,
                destination: 2
            })
        );
    }

    #[test]
    fn other_structures_are_rejected() {
        let err = parse_command("INSERT MINHEAP 5").unwrap_err();
        assert!(err.to_string().contains("unsupported data structure MINHEAP"));
        assert!(parse_command("BUILD TRIE x").is_err());
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert!(parse_command("GETSIZE").is_err());
        assert!(parse_command("FINDMIN GRAPH").is_err());
        assert!(parse_command("INSERT GRAPH 1").is_err());
        assert!(parse_command("INSERT GRAPH one 2").is_err());
        assert!(parse_command("COMPUTESPANNINGTREE GRAPH now").is_err());
        assert!(parse_command("BUILD GRAPH").is_err());
    }
}
