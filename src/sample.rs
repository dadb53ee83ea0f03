use fnv::FnvHashMap;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::LabeledGraph;

/// Parameters for directed Erdős–Rényi sampling with uniform node labels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleParams {
  /// Number of nodes, at least 1.
  pub nodes: usize,
  /// Independent inclusion probability for each ordered pair of distinct
  /// nodes, in `[0, 1]`.
  pub edge_prob: f64,
  /// Label alphabet size; labels are drawn uniformly from `1..=labels`.
  pub labels: u32,
}

impl SampleParams {
  pub fn new(nodes: usize, edge_prob: f64, labels: u32) -> Result<Self> {
    let params = SampleParams { nodes, edge_prob, labels };
    params.validate()?;
    Ok(params)
  }

  pub fn validate(&self) -> Result<()> {
    if self.nodes == 0 {
      return Err(Error::InvalidInput("node count must be at least 1".into()));
    }
    if !(0.0..=1.0).contains(&self.edge_prob) {
      return Err(Error::InvalidInput(format!(
        "edge probability {} is not in [0, 1]",
        self.edge_prob
      )));
    }
    if self.labels == 0 {
      return Err(Error::InvalidInput("label alphabet size must be at least 1".into()));
    }
    Ok(())
  }
}

/// Samples a directed Erdős–Rényi graph: every ordered pair of distinct
/// nodes `u -> v` is an edge independently with probability
/// `params.edge_prob`, and every node gets a label uniform on
/// `1..=params.labels`. Node identifiers are `0..params.nodes`.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, params: &SampleParams) -> Result<LabeledGraph> {
  params.validate()?;
  let n = params.nodes as u64;
  let expected_edges =
    (params.edge_prob * (params.nodes * params.nodes.saturating_sub(1)) as f64) as usize;
  let mut g = LabeledGraph::with_capacity(params.nodes, expected_edges);

  for id in 0..n {
    g.add_node(id, rng.gen_range(1..=params.labels))?;
  }
  for u in 0..n {
    for v in 0..n {
      if u != v && rng.gen_bool(params.edge_prob) {
        g.add_edge(u, v)?;
      }
    }
  }
  Ok(g)
}

/// Applies a uniformly random permutation of the node identifier set as a
/// bijective rename. Labels travel with their node and every edge endpoint
/// is renamed consistently, so the result is isomorphic to the input by
/// construction. The mapping itself is not retained.
pub fn permute_graph<R: Rng + ?Sized>(rng: &mut R, g: &LabeledGraph) -> LabeledGraph {
  let old: Vec<u64> = g.nodes().collect();
  let mut renamed = old.clone();
  renamed.shuffle(rng);
  let mapping: FnvHashMap<u64, u64> = old.into_iter().zip(renamed).collect();

  let nodes = g.nodes().map(|id| mapping[&id]).collect();
  let labels = g.labels().map(|(id, label)| (mapping[&id], label)).collect();
  let edges = g.edges().map(|(u, v)| (mapping[&u], mapping[&v])).collect();
  LabeledGraph::from_parts(nodes, labels, edges)
}
