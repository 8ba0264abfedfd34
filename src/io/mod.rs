//! Readers and writers for the persisted graph formats.
//!
//! Three formats are supported:
//!
//! * *Edge list*: one arc per line, two whitespace-separated non-negative
//!   integers `src dst`.
//! * *Adjacency list*: one source per line; the first integer is the source
//!   node, the remaining ones its successors. Sources with no successors
//!   may be omitted, which also omits their ids unless they appear as
//!   successors elsewhere.
//! * *DOT* (write-only): a `digraph G { … }` with one statement per node
//!   and one per arc.
//!
//! In both text formats, lines whose first non-whitespace character is `#`
//! are comments and blank lines are ignored; the largest id observed
//! defines the number of nodes. Duplicate arcs in the input are inserted
//! once. An input with no data yields [`Error::GraphEmpty`]; a line that
//! does not parse yields [`Error::InvalidParameter`] with the line number
//! in the error context.

use crate::error::Error;
use crate::graph::traits::RandomAccessGraph;
use crate::graph::DiGraph;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Splits a data line into non-negative integers.
fn parse_line(line: &str, line_number: usize) -> Result<Vec<usize>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| Error::InvalidParameter.record())
                .with_context(|| {
                    format!("line {}: {:?} is not a non-negative integer", line_number, token)
                })
        })
        .collect()
}

/// Returns the data lines of `reader`, skipping comments and blank lines
/// and keeping one-based line numbers.
fn data_lines(reader: impl BufRead) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("cannot read line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((index + 1, trimmed.to_owned()));
    }
    Ok(lines)
}

/// Builds a graph with `max_id + 1` nodes and the given arcs, inserting
/// duplicates once.
fn build(max_id: usize, arcs: Vec<(usize, usize)>) -> Result<DiGraph> {
    let mut graph = DiGraph::with_capacity(max_id + 1);
    for _ in 0..=max_id {
        graph.add_vertex()?;
    }
    for (src, dst) in arcs {
        match graph.add_edge(src, dst) {
            Ok(()) | Err(Error::EdgeExists) => {}
            Err(error) => return Err(error.into()),
        }
    }
    Ok(graph)
}

/// Reads a graph in edge-list format.
pub fn read_edge_list(reader: impl BufRead) -> Result<DiGraph> {
    let mut max_id = None;
    let mut arcs = Vec::new();
    for (line_number, line) in data_lines(reader)? {
        let numbers = parse_line(&line, line_number)?;
        let &[src, dst] = numbers.as_slice() else {
            return Err(Error::InvalidParameter.record())
                .with_context(|| format!("line {}: expected `src dst`", line_number));
        };
        max_id = Some(max_id.unwrap_or(0).max(src).max(dst));
        arcs.push((src, dst));
    }
    let Some(max_id) = max_id else {
        return Err(Error::GraphEmpty.record()).context("input contains no arcs");
    };
    build(max_id, arcs)
}

/// Reads a graph in adjacency-list format.
pub fn read_adjacency_list(reader: impl BufRead) -> Result<DiGraph> {
    let mut max_id = None;
    let mut arcs = Vec::new();
    for (line_number, line) in data_lines(reader)? {
        let numbers = parse_line(&line, line_number)?;
        let Some((&src, successors)) = numbers.split_first() else {
            continue;
        };
        // A lone source still defines a node.
        let line_max = successors.iter().fold(src, |max, &dst| max.max(dst));
        max_id = Some(max_id.unwrap_or(0).max(line_max));
        for &dst in successors {
            arcs.push((src, dst));
        }
    }
    let Some(max_id) = max_id else {
        return Err(Error::GraphEmpty.record()).context("input contains no nodes");
    };
    build(max_id, arcs)
}

/// Writes a graph in edge-list format.
pub fn write_edge_list(graph: &impl RandomAccessGraph, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "# edge list: src dst")?;
    writeln!(
        writer,
        "# nodes: {}, arcs: {}",
        graph.num_nodes(),
        graph.num_arcs()
    )?;
    writeln!(writer)?;
    for src in 0..graph.num_nodes() {
        for dst in graph.successors(src) {
            writeln!(writer, "{} {}", src, dst)?;
        }
    }
    Ok(())
}

/// Writes a graph in adjacency-list format, omitting sources with no
/// successors.
pub fn write_adjacency_list(graph: &impl RandomAccessGraph, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "# adjacency list: src dst dst ...")?;
    writeln!(
        writer,
        "# nodes: {}, arcs: {}",
        graph.num_nodes(),
        graph.num_arcs()
    )?;
    writeln!(writer)?;
    for src in 0..graph.num_nodes() {
        if graph.outdegree(src) == 0 {
            continue;
        }
        write!(writer, "{}", src)?;
        for dst in graph.successors(src) {
            write!(writer, " {}", dst)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes a graph in DOT format, for Graphviz.
pub fn write_dot(graph: &impl RandomAccessGraph, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "digraph G {{")?;
    writeln!(
        writer,
        "  // nodes: {}, arcs: {}",
        graph.num_nodes(),
        graph.num_arcs()
    )?;
    for node in 0..graph.num_nodes() {
        writeln!(writer, "  {} [label=\"{}\"];", node, node)?;
    }
    for src in 0..graph.num_nodes() {
        for dst in graph.successors(src) {
            writeln!(writer, "  {} -> {};", src, dst)?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}
