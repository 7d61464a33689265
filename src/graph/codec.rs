//! GRA/WGRA text codec — line-oriented load/save for graphs.
//!
//! Both formats share the same header: zero or more `#key: value` comment
//! lines (collected into the graph's infos, with the reserved key `labels`
//! holding a comma-separated vertex-label list), then the directed flag as
//! an integer, then the order. GRA edge lines are `src dst`; WGRA edge
//! lines are `src dst cost`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::engine::Graph;

// ─── Decoding ───────────────────────────────────────────────────

/// Decode a graph from GRA text.
///
/// Fails with [`GraphError::MalformedInput`] on grammar violations and
/// propagates [`GraphError::IndexOutOfRange`] for edge endpoints outside
/// the declared order.
pub fn decode(text: &str) -> Result<Graph> {
    let lines: Vec<&str> = text.lines().collect();
    let header = parse_header(&lines)?;

    let mut graph = Graph::new(header.order, header.directed);
    attach_infos(&mut graph, &header)?;

    for (offset, raw) in lines[header.body_start..].iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = header.body_start + offset + 1;
        let mut fields = line.split(' ');
        let src = parse_endpoint(fields.next(), lineno)?;
        let dst = parse_endpoint(fields.next(), lineno)?;
        graph.add_edge(src, dst)?;
    }
    Ok(graph)
}

/// Decode a graph from WGRA text, parsing costs as `f64`.
pub fn decode_weighted(text: &str) -> Result<Graph> {
    decode_weighted_with(text, |token| token.parse::<f64>().ok())
}

/// Decode a graph from WGRA text with a caller-supplied cost parser.
///
/// The parser receives the raw cost token; returning `None` makes the
/// edge line count as [`GraphError::MalformedInput`]. The decoded graph is
/// always weighted.
pub fn decode_weighted_with<F>(text: &str, parse_cost: F) -> Result<Graph>
where
    F: Fn(&str) -> Option<f64>,
{
    let lines: Vec<&str> = text.lines().collect();
    let header = parse_header(&lines)?;

    let mut graph = Graph::new_weighted(header.order, header.directed);
    attach_infos(&mut graph, &header)?;

    for (offset, raw) in lines[header.body_start..].iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = header.body_start + offset + 1;
        let mut fields = line.split(' ');
        let src = parse_endpoint(fields.next(), lineno)?;
        let dst = parse_endpoint(fields.next(), lineno)?;
        let token = fields.next().ok_or_else(|| GraphError::MalformedInput {
            line: lineno,
            reason: "edge line is missing the cost field".into(),
        })?;
        let cost = parse_cost(token).ok_or_else(|| GraphError::MalformedInput {
            line: lineno,
            reason: format!("unparseable cost {token:?}"),
        })?;
        graph.add_edge_weighted(src, dst, cost)?;
    }
    Ok(graph)
}

// ─── Encoding ───────────────────────────────────────────────────

/// Encode a graph as GRA (unweighted) or WGRA (weighted) text.
///
/// One encoder covers both formats: the cost column is emitted exactly when
/// the graph is weighted. Labels, when present, come first as a
/// `#labels: ...` comment line; the directed flag and order follow; then
/// one line per edge in vertex-index and list order. Each undirected edge
/// is written once, from the `s >= adj` side. Every line is
/// newline-terminated.
pub fn encode(graph: &Graph) -> String {
    let mut out = String::new();
    if let Some(labels) = graph.labels() {
        if !labels.is_empty() {
            out.push_str("#labels: ");
            out.push_str(&labels.join(","));
            out.push('\n');
        }
    }
    out.push_str(if graph.directed() { "1\n" } else { "0\n" });
    out.push_str(&graph.order().to_string());
    out.push('\n');

    for s in 0..graph.order() {
        for &adj in graph.neighbors(s) {
            if graph.directed() || s >= adj {
                match graph.cost(s, adj) {
                    Some(cost) => out.push_str(&format!("{s} {adj} {cost}\n")),
                    None => out.push_str(&format!("{s} {adj}\n")),
                }
            }
        }
    }
    out
}

// ─── File I/O ───────────────────────────────────────────────────

/// Load a graph from a GRA file.
pub fn load(path: &Path) -> Result<Graph> {
    debug!(path = %path.display(), "loading GRA file");
    decode(&read_file(path)?)
}

/// Load a graph from a WGRA file, parsing costs as `f64`.
pub fn load_weighted(path: &Path) -> Result<Graph> {
    debug!(path = %path.display(), "loading WGRA file");
    decode_weighted(&read_file(path)?)
}

/// Load a graph from a WGRA file with a caller-supplied cost parser.
pub fn load_weighted_with<F>(path: &Path, parse_cost: F) -> Result<Graph>
where
    F: Fn(&str) -> Option<f64>,
{
    debug!(path = %path.display(), "loading WGRA file");
    decode_weighted_with(&read_file(path)?, parse_cost)
}

/// Save a graph to a GRA/WGRA file (format chosen by its weightedness).
pub fn save(graph: &Graph, path: &Path) -> Result<()> {
    let text = encode(graph);
    fs::write(path, &text).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "saved graph");
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ─── Header Parsing ─────────────────────────────────────────────

struct Header {
    infos: BTreeMap<String, String>,
    directed: bool,
    order: usize,
    /// Index of the first edge line.
    body_start: usize,
}

/// Parse the comment preamble plus the directed/order lines.
///
/// A comment line is any line *containing* `#`; its first character is
/// dropped and the remainder is split on the first `": "`.
fn parse_header(lines: &[&str]) -> Result<Header> {
    let mut infos = BTreeMap::new();
    let mut i = 0;
    while i < lines.len() && lines[i].contains('#') {
        let mut chars = lines[i].chars();
        chars.next();
        let body = chars.as_str().trim();
        let (key, value) = body.split_once(": ").ok_or_else(|| GraphError::MalformedInput {
            line: i + 1,
            reason: "comment line is missing the \": \" separator".into(),
        })?;
        infos.insert(key.to_string(), value.to_string());
        i += 1;
    }

    let directed_line = header_line(lines, i, "directed flag")?;
    let directed = directed_line
        .trim()
        .parse::<i64>()
        .map_err(|_| GraphError::MalformedInput {
            line: i + 1,
            reason: format!("directed flag {:?} is not an integer", directed_line.trim()),
        })?
        != 0;

    let order_line = header_line(lines, i + 1, "order")?;
    let order = order_line
        .trim()
        .parse::<usize>()
        .map_err(|_| GraphError::MalformedInput {
            line: i + 2,
            reason: format!("order {:?} is not a non-negative integer", order_line.trim()),
        })?;

    Ok(Header {
        infos,
        directed,
        order,
        body_start: i + 2,
    })
}

fn header_line<'a>(lines: &[&'a str], i: usize, what: &str) -> Result<&'a str> {
    lines.get(i).copied().ok_or_else(|| GraphError::MalformedInput {
        line: i + 1,
        reason: format!("missing {what} line"),
    })
}

fn parse_endpoint(field: Option<&str>, lineno: usize) -> Result<usize> {
    let token = field.ok_or_else(|| GraphError::MalformedInput {
        line: lineno,
        reason: "edge line has fewer than two fields".into(),
    })?;
    token.parse::<usize>().map_err(|_| GraphError::MalformedInput {
        line: lineno,
        reason: format!("unparseable vertex index {token:?}"),
    })
}

/// Move header infos onto the graph and attach labels from the reserved
/// `labels` key, validating the count against the declared order.
fn attach_infos(graph: &mut Graph, header: &Header) -> Result<()> {
    if let Some(joined) = header.infos.get("labels") {
        let labels: Vec<String> = joined.split(',').map(str::to_string).collect();
        let count = labels.len();
        graph.set_labels(labels).map_err(|_| GraphError::MalformedInput {
            line: 1,
            reason: format!(
                "label count {count} does not match the declared order {}",
                graph.order()
            ),
        })?;
    }
    for (key, value) in &header.infos {
        graph.set_info(key.clone(), value.clone());
    }
    Ok(())
}
