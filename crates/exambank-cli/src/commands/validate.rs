//! The `exambank validate` command.

use std::path::PathBuf;

use anyhow::Result;

use exambank_core::bank::QuestionBank;
use exambank_core::config::load_config_from;
use exambank_core::ids::IdAllocator;
use exambank_core::parser::{lint_bank, load_buckets, load_document};
use exambank_core::pipeline::build_bank;

pub fn execute(
    buckets_path: Option<PathBuf>,
    document_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let builder = config.record_builder();

    let bank = match (buckets_path, document_path) {
        (Some(path), _) => {
            let buckets = load_buckets(&path)?;
            for bucket in &buckets {
                println!("Bucket: {} ({} questions)", bucket.name, bucket.len());
            }
            build_bank(&buckets, &builder, &mut IdAllocator::new(config.id_base))?
        }
        (None, Some(path)) => {
            let bank = load_document(&path, &builder)?;
            println!("Document: {} ({} questions)", path.display(), bank.len());
            bank
        }
        (None, None) => anyhow::bail!("one of --buckets or --document is required"),
    };

    report(&bank);
    Ok(())
}

fn report(bank: &QuestionBank) {
    let warnings = lint_bank(bank);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.id, w.message);
    }

    if warnings.is_empty() {
        println!("All {} questions valid.", bank.len());
    } else {
        println!(
            "\nAll {} questions valid, {} warning(s) found.",
            bank.len(),
            warnings.len()
        );
    }
}
