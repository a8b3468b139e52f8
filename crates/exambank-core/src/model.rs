//! Core data model types for exambank.
//!
//! `ExamQuestion` is the validated record written to the output document.
//! `QuestionDraft` is the raw field-set it is built from.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Certification level a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    I,
    II,
    III,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::I, Level::II, Level::III];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::I => "I",
            Level::II => "II",
            Level::III => "III",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(Level::I),
            "II" => Ok(Level::II),
            "III" => Ok(Level::III),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// Difficulty rating of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The five-part explanation attached to every question.
///
/// Missing sub-fields decode as empty and are rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Explanation {
    /// One-sentence answer rationale.
    pub concise: String,
    /// Full worked explanation.
    pub detailed: String,
    pub exam_tip: String,
    /// Why the tempting wrong options are wrong.
    pub misstep_alert: String,
    pub practical_insight: String,
}

impl Explanation {
    /// Sub-fields paired with their names, in document order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("concise", &self.concise),
            ("detailed", &self.detailed),
            ("exam_tip", &self.exam_tip),
            ("misstep_alert", &self.misstep_alert),
            ("practical_insight", &self.practical_insight),
        ]
    }
}

/// A validated multiple-choice exam question.
///
/// Only [`crate::builder::RecordBuilder`] constructs these from drafts, so a
/// value in hand has already passed per-record validation. Unknown fields in
/// a document are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub id: u32,
    pub level: Level,
    pub topic: String,
    pub subtopic: String,
    pub reading: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`; the sole grading key.
    pub answer_index: usize,
    pub explanation: Explanation,
    pub difficulty: Difficulty,
    /// Question style, e.g. "Core Concept" or "Calculation".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub reference: String,
}

impl ExamQuestion {
    /// The text of the correct option.
    pub fn answer(&self) -> &str {
        &self.options[self.answer_index]
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Raw field values for one question, before validation.
///
/// Enumerations are kept as strings and `answer_index` is signed so that
/// every bad value can be reported rather than rejected by the deserializer.
/// Every field defaults, so a missing value surfaces as a validation error
/// naming the field instead of a decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
    /// Explicit id; `None` lets the allocator assign one.
    pub id: Option<u32>,
    pub level: String,
    pub topic: String,
    pub subtopic: String,
    pub reading: String,
    pub question: String,
    pub options: Vec<String>,
    /// `-1` when absent.
    pub answer_index: i64,
    pub explanation: Explanation,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    pub reference: String,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            id: None,
            level: String::new(),
            topic: String::new(),
            subtopic: String::new(),
            reading: String::new(),
            question: String::new(),
            options: Vec::new(),
            answer_index: -1,
            explanation: Explanation::default(),
            difficulty: String::new(),
            kind: String::new(),
            tags: Vec::new(),
            reference: String::new(),
        }
    }
}

impl From<&ExamQuestion> for QuestionDraft {
    fn from(q: &ExamQuestion) -> Self {
        Self {
            id: Some(q.id),
            level: q.level.to_string(),
            topic: q.topic.clone(),
            subtopic: q.subtopic.clone(),
            reading: q.reading.clone(),
            question: q.question.clone(),
            options: q.options.clone(),
            answer_index: q.answer_index as i64,
            explanation: q.explanation.clone(),
            difficulty: q.difficulty.to_string(),
            kind: q.kind.clone(),
            tags: q.tags.iter().cloned().collect(),
            reference: q.reference.clone(),
        }
    }
}
