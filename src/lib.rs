//! Generates pairs of labeled directed graphs (isomorphic or not) and writes
//! them to disk as flat-text fixtures for graph-matching solvers.

mod batch;
mod error;
mod fixture;
mod graph;
mod sample;

pub use batch::{generate_batch, BatchConfig};
pub use error::{Error, Result};
pub use fixture::{dump_graph, parse_graph, FixtureRecord};
pub use graph::LabeledGraph;
pub use sample::{permute_graph, random_graph, SampleParams};
