//! Graphviz output for colored graphs.
//!
//! Node colors are emitted as 1-based indices into the `accent8` palette,
//! so colorings with more than 8 colors wrap visually in the renderer.

use super::Graph;
use crate::error::Result;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "graph {\n\tnode [colorscheme=accent8]\n";

impl Graph {
    /// Renders the graph as an undirected Graphviz document.
    ///
    /// One `u -- v` statement per stored adjacency entry, then one style
    /// statement per node carrying `color + 1`.
    pub fn to_dot(&self) -> String {
        let mut out = String::from(HEADER);
        for (i, neighbors) in self.adjacency().iter().enumerate() {
            for j in neighbors {
                // Writing to a String cannot fail.
                let _ = writeln!(out, "\t{i} -- {j}");
            }
        }
        for (i, color) in self.colors().iter().enumerate() {
            let _ = writeln!(out, "\t{i} [style=filled, color={}]", color + 1);
        }
        out.push_str("}\n");
        out
    }

    /// Writes [`to_dot`](Self::to_dot) output to `path`, truncating it.
    pub fn save_dot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(self.to_dot().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Coloring;

    #[test]
    fn test_dot_layout() {
        let mut g = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        g.apply_coloring(&Coloring::from(vec![0, 1, 0]));

        let expected = "graph {\n\
\tnode [colorscheme=accent8]\n\
\t0 -- 1\n\
\t1 -- 2\n\
\t0 [style=filled, color=1]\n\
\t1 [style=filled, color=2]\n\
\t2 [style=filled, color=1]\n\
}\n";
        assert_eq!(g.to_dot(), expected);
    }

    #[test]
    fn test_dot_empty_graph() {
        assert_eq!(Graph::new(0).to_dot(), format!("{HEADER}}}\n"));
    }

    #[test]
    fn test_save_dot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viz.dot");
        let g = Graph::from_edges(2, &[(0, 1)]);
        g.save_dot(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), g.to_dot());
    }

    #[test]
    fn test_save_dot_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("viz.dot");
        assert!(Graph::new(1).save_dot(path).is_err());
    }
}
