//! The `exambank generate` command.

use std::path::PathBuf;

use anyhow::Result;

use exambank_core::catalog::sample_buckets;
use exambank_core::config::load_config_from;
use exambank_core::parser::load_buckets;
use exambank_core::pipeline;

pub fn execute(
    buckets_path: Option<PathBuf>,
    output: Option<PathBuf>,
    id_base: Option<u32>,
    compact: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(output) = output {
        config.output = output;
    }
    if let Some(base) = id_base {
        config.id_base = base;
    }
    if compact {
        config.pretty = false;
    }

    tracing::debug!(?config, "resolved config");

    let buckets = match &buckets_path {
        Some(path) => load_buckets(path)?,
        None => sample_buckets(),
    };

    let output = config.output.clone();
    let receipt = pipeline::generate(&buckets, &config, &output)?;

    println!(
        "Generated {} questions from {} bucket(s) -> {}",
        receipt.count,
        buckets.len(),
        receipt.path.display()
    );

    Ok(())
}
