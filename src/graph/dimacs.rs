//! DIMACS `.col` graph parser.
//!
//! ## Format
//!
//! - Lines starting with `c` are comments
//! - `p edge N M` declares `N` nodes (only the third token is read). `N` must
//!   fit a signed 32-bit integer
//! - Lines are dispatched on their first character, so an indented line is
//!   ignored like any other unknown line
//! - `e U V` declares an edge between 1-indexed nodes `U` and `V`
//!
//! ```text
//! c Triangle
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```
//!
//! Each `e U V` line is stored as the single adjacency entry
//! `U-1 -> V-1`. Edges are neither mirrored nor deduplicated, which is what
//! [`conflicts`](crate::ga::conflicts) expects.
//!
//! Any malformed `p` or `e` line fails the whole load.

use super::Graph;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parses a DIMACS file from disk.
///
/// # Errors
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Parse`] on a malformed problem or edge line
///
/// ```no_run
/// use u_coloring::graph::dimacs::parse_dimacs_file;
///
/// let graph = parse_dimacs_file("dataset/data/queen7_7.col")?;
/// println!("{} nodes", graph.node_count());
/// # Ok::<(), u_coloring::Error>(())
/// ```
pub fn parse_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    parse_dimacs_str(&text)
}

/// Parses DIMACS text.
///
/// A document without a `p` line yields an empty graph.
pub fn parse_dimacs_str(text: &str) -> Result<Graph> {
    let mut graph: Option<Graph> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end();
        let Some(kind) = line.chars().next() else {
            continue;
        };

        match kind {
            'c' => continue,
            'p' => {
                if graph.is_some() {
                    return Err(Error::parse(line_no, "duplicate problem line"));
                }
                graph = Some(Graph::new(node_count(line, line_no)?));
            }
            'e' => {
                let Some(g) = graph.as_mut() else {
                    return Err(Error::parse(line_no, "edge line before problem line"));
                };
                let first = node_id(line, 1, line_no, g.node_count())?;
                let second = node_id(line, 2, line_no, g.node_count())?;
                g.add_edge(first - 1, second - 1);
            }
            other => {
                debug!(line = line_no, kind = %other, "ignoring unknown DIMACS line");
            }
        }
    }

    Ok(graph.unwrap_or_default())
}

fn token<T: FromStr>(line: &str, position: usize, line_no: usize, what: &str) -> Result<T> {
    let raw = line
        .split_whitespace()
        .nth(position)
        .ok_or_else(|| Error::parse(line_no, format!("missing {what} in '{line}'")))?;
    raw.parse::<T>()
        .map_err(|_| Error::parse(line_no, format!("invalid {what} '{raw}'")))
}

fn node_count(line: &str, line_no: usize) -> Result<usize> {
    let count: i32 = token(line, 2, line_no, "node count")?;
    usize::try_from(count)
        .map_err(|_| Error::parse(line_no, format!("negative node count {count}")))
}

fn node_id(line: &str, position: usize, line_no: usize, node_count: usize) -> Result<usize> {
    let id: usize = token(line, position, line_no, "node id")?;
    if id == 0 || id > node_count {
        return Err(Error::parse(
            line_no,
            format!("node id {id} out of range [1, {node_count}]"),
        ));
    }
    Ok(id)
}
