//! DOT export for the command graph

use crate::graph::Graph;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the graph as a DOT directed-graph block: nodes first, a blank
/// separator line, then edges.
///
/// Labels are embedded verbatim between double quotes; quote characters
/// inside titles are not escaped (known gap, kept as-is).
pub fn write_dot<W: Write>(graph: &Graph, name: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph {} {{", name)?;
    for node in graph.nodes() {
        writeln!(out, "{} [label=\"{}\"];", node.id, node.title)?;
    }
    writeln!(out)?;
    for edge in graph.edges() {
        writeln!(
            out,
            "{} -> {} [label=\"{}: {}\"];",
            edge.src, edge.dst, edge.id, edge.title
        )?;
    }
    writeln!(out, "}}")
}

/// Write the DOT block to a file. The handle is flushed explicitly and
/// closed on every exit path.
pub fn save_dot(graph: &Graph, name: &str, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_dot(graph, name, &mut out)?;
    out.flush()
}
