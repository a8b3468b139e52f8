//! Record builder: turns one raw draft into one validated `ExamQuestion`.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::ids::IdAllocator;
use crate::model::{Difficulty, ExamQuestion, Level, QuestionDraft};

/// Topic areas of the CFA program curriculum.
pub const DEFAULT_TOPICS: &[&str] = &[
    "Ethics",
    "Quantitative Methods",
    "Economics",
    "Financial Statement Analysis",
    "Corporate Issuers",
    "Equity Investments",
    "Fixed Income",
    "Derivatives",
    "Alternative Investments",
    "Portfolio Management",
];

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Validates drafts against the per-record invariants.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    /// Accepted topics. Empty means any non-empty topic is accepted.
    topics: BTreeSet<String>,
}

impl RecordBuilder {
    /// A builder that accepts the default topic vocabulary.
    pub fn new() -> Self {
        Self::with_topics(DEFAULT_TOPICS.iter().copied())
    }

    pub fn with_topics<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }

    /// A builder that skips the vocabulary check.
    pub fn any_topic() -> Self {
        Self {
            topics: BTreeSet::new(),
        }
    }

    pub fn topics(&self) -> &BTreeSet<String> {
        &self.topics
    }

    /// Validate `draft` without allocating an id.
    pub fn check(
        &self,
        draft: &QuestionDraft,
    ) -> Result<(Level, Difficulty, usize), ValidationError> {
        require("level", &draft.level)?;
        require("difficulty", &draft.difficulty)?;
        let level: Level = draft
            .level
            .parse()
            .map_err(|_| ValidationError::UnknownLevel(draft.level.clone()))?;
        let difficulty: Difficulty = draft
            .difficulty
            .parse()
            .map_err(|_| ValidationError::UnknownDifficulty(draft.difficulty.clone()))?;

        require("topic", &draft.topic)?;
        if !self.topics.is_empty() && !self.topics.contains(&draft.topic) {
            return Err(ValidationError::UnknownTopic(draft.topic.clone()));
        }
        require("subtopic", &draft.subtopic)?;
        require("question", &draft.question)?;

        if draft.options.len() < MIN_OPTIONS {
            return Err(ValidationError::TooFewOptions(draft.options.len()));
        }
        for (i, option) in draft.options.iter().enumerate() {
            require(&format!("options[{i}]"), option)?;
        }

        let answer_index = usize::try_from(draft.answer_index)
            .ok()
            .filter(|&i| i < draft.options.len())
            .ok_or(ValidationError::AnswerIndexOutOfRange {
                index: draft.answer_index,
                len: draft.options.len(),
            })?;

        for (name, value) in draft.explanation.fields() {
            require(&format!("explanation.{name}"), value)?;
        }

        Ok((level, difficulty, answer_index))
    }

    /// Validate `draft` and produce the record, taking an id from `ids` when
    /// the draft carries none.
    pub fn build(
        &self,
        draft: QuestionDraft,
        ids: &mut IdAllocator,
    ) -> Result<ExamQuestion, ValidationError> {
        let (level, difficulty, answer_index) = self.check(&draft)?;
        let id = ids
            .resolve(draft.id)
            .ok_or(ValidationError::IdsExhausted(ids.last()))?;

        tracing::debug!(id, topic = %draft.topic, %level, "built question");

        Ok(ExamQuestion {
            id,
            level,
            topic: draft.topic,
            subtopic: draft.subtopic,
            reading: draft.reading,
            question: draft.question,
            options: draft.options,
            answer_index,
            explanation: draft.explanation,
            difficulty,
            kind: draft.kind,
            tags: draft.tags.into_iter().collect(),
            reference: draft.reference,
        })
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field.to_string()))
    } else {
        Ok(())
    }
}
