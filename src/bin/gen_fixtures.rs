use iso_fixtures::{generate_batch, BatchConfig, Result};

fn main() -> Result<()> {
  env_logger::init();
  let config = BatchConfig::default();
  std::fs::create_dir_all(&config.output_dir)?;
  let written = generate_batch(&mut rand::thread_rng(), &config)?;
  println!("wrote {} fixtures to {}", written.len(), config.output_dir.display());
  Ok(())
}
