use std::path::PathBuf;

use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::fixture::FixtureRecord;
use crate::sample::{permute_graph, random_graph, SampleParams};

/// Parameters for one batch run. `Default` pins the reference constants: 100
/// fixtures, sizes in `[8, 80]`, edge probability in `[0.1, 0.5)`, label
/// alphabet in `[4, size/2]`, output under `data/label_graph/simulation_test`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
  pub count: usize,
  pub min_size: usize,
  pub max_size: usize,
  pub min_edge_prob: f64,
  pub max_edge_prob: f64,
  pub min_labels: u32,
  pub output_dir: PathBuf,
}

impl Default for BatchConfig {
  fn default() -> Self {
    BatchConfig {
      count: 100,
      min_size: 8,
      max_size: 80,
      min_edge_prob: 0.1,
      max_edge_prob: 0.5,
      min_labels: 4,
      output_dir: PathBuf::from("data/label_graph/simulation_test"),
    }
  }
}

impl BatchConfig {
  pub fn validate(&self) -> Result<()> {
    if self.min_size < 1 || self.min_size > self.max_size {
      return Err(Error::InvalidInput(format!(
        "size range [{}, {}] is empty or starts below 1",
        self.min_size, self.max_size
      )));
    }
    if !(0.0..=1.0).contains(&self.min_edge_prob)
      || !(0.0..=1.0).contains(&self.max_edge_prob)
      || self.min_edge_prob > self.max_edge_prob
    {
      return Err(Error::InvalidInput(format!(
        "edge probability range [{}, {}] is not within [0, 1]",
        self.min_edge_prob, self.max_edge_prob
      )));
    }
    if self.min_labels < 1 || (self.min_size / 2) < self.min_labels as usize {
      return Err(Error::InvalidInput(format!(
        "label range [{}, size/2] is empty for the smallest size {}",
        self.min_labels, self.min_size
      )));
    }
    Ok(())
  }
}

/// Runs `config.count` independent fixture-generation iterations. Each
/// iteration draws size, edge probability and alphabet size from the
/// configured ranges, samples graph A, then flips a fair coin: heads derives
/// graph B from A by permutation (flag `t`), tails samples B independently
/// with the same parameters (flag `f`). One file `iso_<i>` is written per
/// iteration.
///
/// Failure policy is abort-all: the first I/O error ends the batch and is
/// returned. The output directory is not created here; writing into a
/// missing directory surfaces the underlying I/O error.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R, config: &BatchConfig) -> Result<Vec<PathBuf>> {
  config.validate()?;
  let mut written = Vec::with_capacity(config.count);

  for i in 0..config.count {
    let size = rng.gen_range(config.min_size..=config.max_size);
    let p = if config.min_edge_prob < config.max_edge_prob {
      rng.gen_range(config.min_edge_prob..config.max_edge_prob)
    } else {
      config.min_edge_prob
    };
    let k = rng.gen_range(config.min_labels..=(size / 2) as u32);
    debug!("fixture {}: size={} p={:.3} k={}", i, size, p, k);

    let params = SampleParams::new(size, p, k)?;
    let a = random_graph(rng, &params)?;
    let (isomorphic, b) = if rng.gen_bool(0.5) {
      (true, permute_graph(rng, &a))
    } else {
      (false, random_graph(rng, &params)?)
    };

    let record = FixtureRecord { isomorphic, a, b, labels: k };
    let path = config.output_dir.join(format!("iso_{}", i));
    record.save_to_file(&path)?;
    info!("wrote {} ({})", path.display(), if isomorphic { "t" } else { "f" });
    written.push(path);
  }
  Ok(written)
}
