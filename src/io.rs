use crate::graph::{BaseGraph, Graph, GraphBuilder, GraphError};
use fxhash::FxHashMap;
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn parse_pair(line: &str, tokens: &[&str]) -> Result<(usize, usize), io::Error> {
    if tokens.len() != 2 {
        return Err(invalid(format!("Invalid line: {}", line)));
    }
    let u = tokens[0].parse::<usize>();
    let v = tokens[1].parse::<usize>();
    match (u, v) {
        (Ok(u), Ok(v)) => Ok((u, v)),
        _ => Err(invalid(format!("Invalid line: {}", line))),
    }
}

/// Parses `p tw n m` or `p edge n m` into `(n, m)`.
pub fn dimacs_p(line: &str) -> Result<(usize, usize), io::Error> {
    let tokens: Vec<&str> = line
        .trim_start_matches('p')
        .split_whitespace()
        .skip(1)
        .collect();
    parse_pair(line, &tokens)
}

/// Parses `e u v` or `u v` with 1-based ids into 0-based ids.
pub fn dimacs_e(line: &str) -> Result<(usize, usize), io::Error> {
    let tokens: Vec<&str> = line.trim_start_matches('e').split_whitespace().collect();
    let (u, v) = parse_pair(line, &tokens)?;
    if u == 0 || v == 0 {
        return Err(invalid(format!("Vertex ids start at 1: {}", line)));
    }
    Ok((u - 1, v - 1))
}

/// Reader for the DIMACS / PACE edge list format.
pub struct DimacsRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<DimacsRead<T>> for Graph {
    type Error = io::Error;

    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let mut builder: Option<GraphBuilder> = None;
        for line in reader.0.lines() {
            let line = line?;
            let line = line.trim();
            match line.chars().next() {
                None | Some('c') => {}
                Some('p') => {
                    let (n, _) = dimacs_p(line)?;
                    builder = Some(GraphBuilder::new(n));
                }
                _ => {
                    let (u, v) = dimacs_e(line)?;
                    let builder = match builder.as_mut() {
                        Some(builder) => builder,
                        None => return Err(invalid(String::from("Edge before problem line"))),
                    };
                    if u != v {
                        builder.add_edge(u, v)?;
                    }
                }
            }
        }
        match builder {
            Some(builder) => Ok(builder.build()),
            None => Err(invalid(String::from("Missing problem line"))),
        }
    }
}

/// Reader for named adjacency lists, one vertex per line:
///
/// ```text
/// a: b c
/// b: a
/// c: a
/// ```
///
/// The colon is optional. Lines starting with `#` are comments. Vertices are
/// numbered in order of their own line, every listed neighbor must have a line
/// and the lists have to be symmetric.
pub struct AdjacencyRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<AdjacencyRead<T>> for Graph {
    type Error = io::Error;

    fn try_from(reader: AdjacencyRead<T>) -> Result<Self, Self::Error> {
        let mut names: Vec<String> = Vec::new();
        let mut ids: FxHashMap<String, usize> = FxHashMap::default();
        let mut rows: Vec<Vec<String>> = Vec::new();
        for line in reader.0.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let name = match tokens.next() {
                Some(name) => name.trim_end_matches(':').to_string(),
                None => continue,
            };
            if ids.insert(name.clone(), names.len()).is_some() {
                return Err(invalid(format!("Vertex {} listed twice", name)));
            }
            names.push(name);
            rows.push(tokens.map(|t| t.to_string()).collect());
        }

        let mut lists = Vec::with_capacity(rows.len());
        for row in rows {
            let mut list = Vec::with_capacity(row.len());
            for name in row {
                match ids.get(&name) {
                    Some(id) => list.push(*id),
                    None => return Err(GraphError::UnknownVertex(name).into()),
                }
            }
            lists.push(list);
        }
        Ok(Graph::from_adjacency(lists)?.with_names(names))
    }
}

/// Writes `graph` as `p tw n m` followed by 1-based edge lines.
pub fn write_dimacs<G: BaseGraph, W: Write>(graph: &G, mut writer: W) -> io::Result<()> {
    writeln!(writer, "p tw {} {}", graph.order(), graph.size())?;
    for u in graph.vertices() {
        for v in graph.neighborhood(u).iter().copied().filter(|v| u < *v) {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }
    }
    Ok(())
}
