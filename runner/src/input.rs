use anyhow::{bail, Context};
use mst_solver::{parse_weight, Graph};
use std::io::BufRead;

/// One edge line as typed by the user, before label validation.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeLine {
    pub vertex_a: String,
    pub vertex_b: String,
    pub weight: i32,
}

/// Parses `A B 5` or `A, B, 5`. Blank lines and `#` comments give `None`.
///
/// Comma-separated lines keep empty fields, so `A,,5` parses with an empty
/// second label and is left for the graph to reject.
pub fn parse_edge_line(line: &str) -> anyhow::Result<Option<EdgeLine>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };
    let [vertex_a, vertex_b, weight] = fields.as_slice() else {
        bail!("expected `VERTEX VERTEX WEIGHT`, got {line:?}");
    };

    Ok(Some(EdgeLine {
        vertex_a: vertex_a.to_string(),
        vertex_b: vertex_b.to_string(),
        weight: parse_weight(weight)?,
    }))
}

/// Reads every edge line from `reader` into a new graph.
///
/// With `strict` set, an edge with a blank label aborts the read; otherwise
/// it is dropped by [`Graph::add_edge`].
pub fn read_graph(reader: impl BufRead, strict: bool) -> anyhow::Result<Graph> {
    let mut graph = Graph::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_number}"))?;
        let Some(edge) =
            parse_edge_line(&line).with_context(|| format!("line {line_number}"))?
        else {
            continue;
        };

        if strict {
            graph
                .try_add_edge(&edge.vertex_a, &edge.vertex_b, edge.weight)
                .with_context(|| format!("line {line_number}"))?;
        } else {
            graph.add_edge(&edge.vertex_a, &edge.vertex_b, edge.weight);
        }
    }
    log::info!(
        "Read {} edges over {} vertices",
        graph.len(),
        graph.vertex_count()
    );
    Ok(graph)
}
