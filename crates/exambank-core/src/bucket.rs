//! Category assembler: validates one topic/level bucket of drafts.

use crate::builder::RecordBuilder;
use crate::error::RecordError;
use crate::ids::IdAllocator;
use crate::model::{ExamQuestion, QuestionDraft};

/// An ordered group of drafts for one topic/level, e.g. `ethics_l1`.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub name: String,
    pub drafts: Vec<QuestionDraft>,
}

impl Bucket {
    pub fn new(name: impl Into<String>, drafts: Vec<QuestionDraft>) -> Self {
        Self {
            name: name.into(),
            drafts,
        }
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

/// Build every draft in `bucket`, in order.
///
/// Stops at the first invalid draft; a partially built bucket is never
/// returned.
pub fn assemble(
    bucket: &Bucket,
    builder: &RecordBuilder,
    ids: &mut IdAllocator,
) -> Result<Vec<ExamQuestion>, RecordError> {
    let mut questions = Vec::with_capacity(bucket.drafts.len());

    for (index, draft) in bucket.drafts.iter().enumerate() {
        let question = builder
            .build(draft.clone(), ids)
            .map_err(|reason| RecordError {
                bucket: bucket.name.clone(),
                index,
                id: draft.id,
                reason,
            })?;
        questions.push(question);
    }

    tracing::debug!(bucket = %bucket.name, count = questions.len(), "assembled bucket");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::draft;
    use crate::error::ValidationError;

    #[test]
    fn assembles_in_order() {
        let bucket = Bucket::new("quant_l1", vec![draft(Some(1016)), draft(None), draft(None)]);
        let mut ids = IdAllocator::new(1000);
        let questions = assemble(&bucket, &RecordBuilder::new(), &mut ids).unwrap();
        let got: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(got, vec![1016, 1017, 1018]);
    }

    #[test]
    fn fails_fast_with_index_and_reason() {
        let mut bad = draft(Some(1042));
        bad.answer_index = 5;
        let mut also_bad = draft(None);
        also_bad.level = "IV".into();

        let bucket = Bucket::new("quant_l1", vec![draft(Some(1041)), bad, also_bad]);
        let err = assemble(&bucket, &RecordBuilder::new(), &mut IdAllocator::default())
            .unwrap_err();

        assert_eq!(err.bucket, "quant_l1");
        assert_eq!(err.index, 1);
        assert_eq!(err.id, Some(1042));
        assert_eq!(
            err.reason,
            ValidationError::AnswerIndexOutOfRange { index: 5, len: 5 }
        );
    }

    #[test]
    fn empty_bucket_is_fine() {
        let bucket = Bucket::new("empty", vec![]);
        assert!(bucket.is_empty());
        let questions =
            assemble(&bucket, &RecordBuilder::new(), &mut IdAllocator::default()).unwrap();
        assert!(questions.is_empty());
    }
}
