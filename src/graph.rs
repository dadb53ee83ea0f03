use std::fmt::{Display, Formatter, Result as FmtResult};

use fnv::FnvHashMap;

use crate::error::{Error, Result};

/// A directed graph whose nodes each carry one integer label.
///
/// Node identifiers are arbitrary `u64`s kept in insertion order, so a graph
/// serializes the same way every time for a given construction sequence.
/// Construction validates referential integrity: duplicate node identifiers
/// and edges naming unknown endpoints are rejected. Self-loops and parallel
/// edges are not rejected here; the samplers in [`crate::sample`] never
/// produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
  nodes: Vec<u64>,
  labels: FnvHashMap<u64, u32>,
  edges: Vec<(u64, u64)>,
}

impl LabeledGraph {
  pub fn new() -> Self {
    LabeledGraph {
      nodes: Vec::new(),
      labels: FnvHashMap::default(),
      edges: Vec::new(),
    }
  }

  pub fn with_capacity(nodes: usize, edges: usize) -> Self {
    LabeledGraph {
      nodes: Vec::with_capacity(nodes),
      labels: FnvHashMap::with_capacity_and_hasher(nodes, Default::default()),
      edges: Vec::with_capacity(edges),
    }
  }

  pub fn add_node(&mut self, id: u64, label: u32) -> Result<()> {
    if self.labels.contains_key(&id) {
      return Err(Error::InvalidInput(format!("duplicate node id {}", id)));
    }
    self.nodes.push(id);
    self.labels.insert(id, label);
    Ok(())
  }

  pub fn add_edge(&mut self, from: u64, to: u64) -> Result<()> {
    if !self.labels.contains_key(&from) {
      return Err(Error::InvalidInput(format!("edge source {} is not a node", from)));
    }
    if !self.labels.contains_key(&to) {
      return Err(Error::InvalidInput(format!("edge target {} is not a node", to)));
    }
    self.edges.push((from, to));
    Ok(())
  }

  /// Builds a graph from pre-validated parts. Callers must guarantee the
  /// same invariants `add_node`/`add_edge` enforce.
  pub(crate) fn from_parts(
    nodes: Vec<u64>,
    labels: FnvHashMap<u64, u32>,
    edges: Vec<(u64, u64)>,
  ) -> Self {
    debug_assert_eq!(nodes.len(), labels.len());
    debug_assert!(edges
      .iter()
      .all(|(u, v)| labels.contains_key(u) && labels.contains_key(v)));
    LabeledGraph { nodes, labels, edges }
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  pub fn contains_node(&self, id: u64) -> bool {
    self.labels.contains_key(&id)
  }

  pub fn label(&self, id: u64) -> Option<u32> {
    self.labels.get(&id).copied()
  }

  /// Node identifiers in insertion order.
  pub fn nodes(&self) -> impl Iterator<Item = u64> + '_ {
    self.nodes.iter().copied()
  }

  /// `(id, label)` pairs in node insertion order.
  pub fn labels(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
    self.nodes.iter().map(move |&id| (id, self.labels[&id]))
  }

  /// Directed edges in insertion order.
  pub fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
    self.edges.iter().copied()
  }
}

impl Default for LabeledGraph {
  fn default() -> Self {
    Self::new()
  }
}

impl Display for LabeledGraph {
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    write!(f, "nodes:")?;
    for (id, label) in self.labels() {
      write!(f, " [{}: {}]", id, label)?;
    }
    write!(f, " edges:")?;
    for (u, v) in self.edges() {
      write!(f, " {} -> {}", u, v)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_duplicate_node_id() {
    let mut g = LabeledGraph::new();
    g.add_node(3, 1).unwrap();
    assert!(matches!(g.add_node(3, 2), Err(Error::InvalidInput(_))));
    assert_eq!(g.node_count(), 1);
  }

  #[test]
  fn rejects_dangling_edge_endpoint() {
    let mut g = LabeledGraph::new();
    g.add_node(0, 1).unwrap();
    assert!(matches!(g.add_edge(0, 1), Err(Error::InvalidInput(_))));
    assert!(matches!(g.add_edge(1, 0), Err(Error::InvalidInput(_))));
    assert_eq!(g.edge_count(), 0);
  }

  #[test]
  fn preserves_insertion_order() {
    let mut g = LabeledGraph::new();
    for &(id, label) in &[(5, 2), (0, 1), (9, 3)] {
      g.add_node(id, label).unwrap();
    }
    g.add_edge(9, 5).unwrap();
    g.add_edge(0, 9).unwrap();

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec![5, 0, 9]);
    assert_eq!(g.labels().collect::<Vec<_>>(), vec![(5, 2), (0, 1), (9, 3)]);
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![(9, 5), (0, 9)]);
    assert_eq!(g.label(0), Some(1));
    assert_eq!(g.label(7), None);
  }
}
