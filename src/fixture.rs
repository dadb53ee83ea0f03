use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::LabeledGraph;

/// One serialized test case: a pair of labeled graphs plus the flag telling
/// the consumer whether they were constructed to be isomorphic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
  /// `true` when graph B was derived from graph A by permutation. Pairs
  /// flagged `false` were sampled independently and may still be isomorphic
  /// by chance; that false-negative risk is accepted.
  pub isomorphic: bool,
  pub a: LabeledGraph,
  pub b: LabeledGraph,
  /// Shared label alphabet size for both graphs.
  pub labels: u32,
}

/// Renders one graph block: a `<nodes> <edges> <k>` header, one `<id>
/// <label>` line per node, one `<u> <v>` line per edge. Pure formatting.
pub fn dump_graph(g: &LabeledGraph, k: u32) -> String {
  let mut s = String::new();
  s.push_str(&format!("{} {} {}\n", g.node_count(), g.edge_count(), k));
  for (id, label) in g.labels() {
    s.push_str(&format!("{} {}\n", id, label));
  }
  for (u, v) in g.edges() {
    s.push_str(&format!("{} {}\n", u, v));
  }
  s
}

/// Reads one graph block from a whitespace token stream. Returns the graph
/// and the label alphabet size from its header.
pub fn parse_graph<'a, I>(tok: &mut I) -> Result<(LabeledGraph, u32)>
where
  I: Iterator<Item = &'a str>,
{
  let n: usize = next_num(tok, "node count")?;
  let m: usize = next_num(tok, "edge count")?;
  let k: u32 = next_num(tok, "label alphabet size")?;

  let mut g = LabeledGraph::with_capacity(n, m);
  for _ in 0..n {
    let id: u64 = next_num(tok, "node id")?;
    let label: u32 = next_num(tok, "node label")?;
    g.add_node(id, label).map_err(|e| Error::Parse(e.to_string()))?;
  }
  for _ in 0..m {
    let u: u64 = next_num(tok, "edge source")?;
    let v: u64 = next_num(tok, "edge target")?;
    g.add_edge(u, v).map_err(|e| Error::Parse(e.to_string()))?;
  }
  Ok((g, k))
}

fn next_num<'a, I, T>(tok: &mut I, what: &str) -> Result<T>
where
  I: Iterator<Item = &'a str>,
  T: FromStr,
  T::Err: Display,
{
  let t = tok
    .next()
    .ok_or_else(|| Error::Parse(format!("unexpected end of input, expected {}", what)))?;
  t.parse()
    .map_err(|e| Error::Parse(format!("bad {} {:?}: {}", what, t, e)))
}

impl FixtureRecord {
  /// Renders the record: flag line, block A, block B, terminating blank
  /// line. Pure formatting.
  pub fn render(&self) -> String {
    format!(
      "{}\n{}{}\n",
      if self.isomorphic { "t" } else { "f" },
      dump_graph(&self.a, self.labels),
      dump_graph(&self.b, self.labels),
    )
  }

  pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(self.render().as_bytes())?;
    writer.flush()?;
    Ok(())
  }

  pub fn parse(s: &str) -> Result<Self> {
    let mut tok = s.split_whitespace();
    let isomorphic = match tok.next() {
      Some("t") => true,
      Some("f") => false,
      Some(other) => return Err(Error::Parse(format!("bad pair flag {:?}", other))),
      None => return Err(Error::Parse("empty fixture".into())),
    };
    let (a, ka) = parse_graph(&mut tok)?;
    let (b, kb) = parse_graph(&mut tok)?;
    if ka != kb {
      return Err(Error::Parse(format!(
        "label alphabet size differs between blocks: {} vs {}",
        ka, kb
      )));
    }
    if let Some(extra) = tok.next() {
      return Err(Error::Parse(format!("trailing token {:?} after second block", extra)));
    }
    Ok(FixtureRecord { isomorphic, a, b, labels: ka })
  }

  pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
    let contents = std::fs::read_to_string(path)?;
    Self::parse(&contents)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn path_graph() -> LabeledGraph {
    let mut g = LabeledGraph::new();
    for &(id, label) in &[(0, 2), (1, 1), (2, 2)] {
      g.add_node(id, label).unwrap();
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g
  }

  #[test]
  fn renders_exact_format() {
    let g = path_graph();
    let record = FixtureRecord { isomorphic: true, a: g.clone(), b: g, labels: 2 };
    let expected = "t\n\
                    3 2 2\n0 2\n1 1\n2 2\n0 1\n1 2\n\
                    3 2 2\n0 2\n1 1\n2 2\n0 1\n1 2\n\
                    \n";
    assert_eq!(record.render(), expected);
  }

  #[test]
  fn round_trip_preserves_everything() {
    let a = path_graph();
    let mut b = LabeledGraph::new();
    for &(id, label) in &[(7, 1), (3, 2), (5, 2)] {
      b.add_node(id, label).unwrap();
    }
    b.add_edge(5, 7).unwrap();
    b.add_edge(7, 3).unwrap();

    let record = FixtureRecord { isomorphic: false, a, b, labels: 2 };
    let parsed = FixtureRecord::parse(&record.render()).unwrap();
    assert_eq!(parsed, record);
  }

  #[test]
  fn rejects_empty_input() {
    assert!(matches!(FixtureRecord::parse(""), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_bad_flag() {
    assert!(matches!(FixtureRecord::parse("x\n1 0 1\n0 1\n1 0 1\n0 1\n"), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_truncated_block() {
    // Header promises 3 nodes, body has 2.
    let s = "t\n3 0 1\n0 1\n1 1\n";
    assert!(matches!(FixtureRecord::parse(s), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_non_integer_token() {
    let s = "t\n1 0 1\n0 one\n1 0 1\n0 1\n";
    assert!(matches!(FixtureRecord::parse(s), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_mismatched_alphabet_sizes() {
    let s = "t\n1 0 2\n0 1\n1 0 3\n0 1\n";
    assert!(matches!(FixtureRecord::parse(s), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_trailing_tokens() {
    let s = "t\n1 0 1\n0 1\n1 0 1\n0 1\n99\n";
    assert!(matches!(FixtureRecord::parse(s), Err(Error::Parse(_))));
  }

  #[test]
  fn rejects_edge_to_unknown_node() {
    let s = "f\n2 1 1\n0 1\n1 1\n0 5\n2 0 1\n0 1\n1 1\n";
    assert!(matches!(FixtureRecord::parse(s), Err(Error::Parse(_))));
  }
}
