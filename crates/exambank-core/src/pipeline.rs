//! The generation pipeline: build buckets, aggregate, validate ids, emit.

use std::path::Path;

use crate::bank::{aggregate, QuestionBank};
use crate::bucket::{assemble, Bucket};
use crate::builder::RecordBuilder;
use crate::config::ExambankConfig;
use crate::emitter::{emit, EmitReceipt};
use crate::error::BankError;
use crate::ids::IdAllocator;

/// Build and validate every bucket, then aggregate them into one bank.
///
/// Buckets are processed in order with a shared allocator, so allocated ids
/// continue across bucket boundaries.
pub fn build_bank(
    buckets: &[Bucket],
    builder: &RecordBuilder,
    ids: &mut IdAllocator,
) -> Result<QuestionBank, BankError> {
    let built = buckets
        .iter()
        .map(|bucket| assemble(bucket, builder, ids))
        .collect::<Result<Vec<_>, _>>()?;

    let bank = aggregate(built)?;
    tracing::info!(
        buckets = buckets.len(),
        questions = bank.len(),
        "validated question bank"
    );
    Ok(bank)
}

/// Run the whole pipeline and write the document to `output`.
pub fn generate(
    buckets: &[Bucket],
    config: &ExambankConfig,
    output: &Path,
) -> Result<EmitReceipt, BankError> {
    let builder = config.record_builder();
    let mut ids = IdAllocator::new(config.id_base);
    let bank = build_bank(buckets, &builder, &mut ids)?;
    emit(&bank, output, config.emit_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::draft;
    use crate::catalog::sample_buckets;
    use crate::model::ExamQuestion;

    #[test]
    fn generate_sample_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions_data.json");

        let receipt = generate(&sample_buckets(), &ExambankConfig::default(), &path).unwrap();
        assert_eq!(receipt.count, 5);

        let parsed: Vec<ExamQuestion> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rebuilt = build_bank(
            &sample_buckets(),
            &RecordBuilder::new(),
            &mut IdAllocator::new(1000),
        )
        .unwrap();
        assert_eq!(parsed, rebuilt.into_questions());
    }

    #[test]
    fn allocation_continues_across_buckets() {
        let buckets = vec![
            Bucket::new("a", vec![draft(None), draft(None)]),
            Bucket::new("b", vec![draft(None)]),
        ];
        let bank = build_bank(&buckets, &RecordBuilder::new(), &mut IdAllocator::new(10)).unwrap();
        let ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12, 13]);
    }

    #[test]
    fn duplicate_ids_across_buckets_abort_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let buckets = vec![
            Bucket::new("ethics_l1", vec![draft(Some(1042))]),
            Bucket::new("quant_l1", vec![draft(Some(1042))]),
        ];

        let err = generate(&buckets, &ExambankConfig::default(), &path).unwrap_err();
        match err {
            BankError::DuplicateId(e) => assert_eq!(e.ids, vec![1042]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn invalid_record_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut bad = draft(None);
        bad.difficulty = "Brutal".into();
        let buckets = vec![
            Bucket::new("good", vec![draft(None)]),
            Bucket::new("bad", vec![draft(None), bad]),
        ];

        let err = generate(&buckets, &ExambankConfig::default(), &path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bucket `bad`"), "{msg}");
        assert!(msg.contains("record #1"), "{msg}");
        assert!(msg.contains("Brutal"), "{msg}");
        assert!(!path.exists());
    }

    #[test]
    fn no_buckets_writes_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let receipt = generate(&[], &ExambankConfig::default(), &path).unwrap();
        assert_eq!(receipt.count, 0);
        let parsed: Vec<ExamQuestion> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
