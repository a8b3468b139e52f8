//! Database aggregator and read-only lookup API.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::DuplicateIdError;
use crate::model::{Difficulty, ExamQuestion, Level};

/// The aggregated, globally validated question collection.
///
/// Iteration order is bucket order, then record order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<ExamQuestion>,
    by_id: HashMap<u32, usize>,
}

/// Concatenate buckets in order and check that every id is unique.
pub fn aggregate<I>(buckets: I) -> Result<QuestionBank, DuplicateIdError>
where
    I: IntoIterator<Item = Vec<ExamQuestion>>,
{
    let questions: Vec<ExamQuestion> = buckets.into_iter().flatten().collect();
    QuestionBank::from_questions(questions)
}

impl QuestionBank {
    /// Wrap an already ordered collection, checking id uniqueness.
    pub fn from_questions(questions: Vec<ExamQuestion>) -> Result<Self, DuplicateIdError> {
        let mut by_id = HashMap::with_capacity(questions.len());
        let mut duplicates = BTreeSet::new();

        for (pos, q) in questions.iter().enumerate() {
            if by_id.insert(q.id, pos).is_some() {
                duplicates.insert(q.id);
            }
        }

        if !duplicates.is_empty() {
            return Err(DuplicateIdError {
                ids: duplicates.into_iter().collect(),
            });
        }

        Ok(Self { questions, by_id })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExamQuestion> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<ExamQuestion> {
        self.questions
    }

    pub fn get(&self, id: u32) -> Option<&ExamQuestion> {
        self.by_id.get(&id).map(|&pos| &self.questions[pos])
    }

    pub fn by_level(&self, level: Level) -> Vec<&ExamQuestion> {
        self.iter().filter(|q| q.level == level).collect()
    }

    pub fn by_topic(&self, topic: &str) -> Vec<&ExamQuestion> {
        self.iter().filter(|q| q.topic == topic).collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&ExamQuestion> {
        self.iter().filter(|q| q.difficulty == difficulty).collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&ExamQuestion> {
        self.iter().filter(|q| q.has_tag(tag)).collect()
    }

    /// Questions matching every criterion set in `filter`, in bank order.
    pub fn filter(&self, filter: &QuestionFilter) -> Vec<&ExamQuestion> {
        let matches = self.iter().filter(|q| filter.matches(q));
        match filter.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }

    pub fn summary(&self) -> BankSummary {
        let mut summary = BankSummary {
            total: self.len(),
            ..Default::default()
        };
        for q in self.iter() {
            *summary.per_level.entry(q.level).or_default() += 1;
            *summary.per_topic.entry(q.topic.clone()).or_default() += 1;
            *summary.per_difficulty.entry(q.difficulty).or_default() += 1;
            *summary.per_type.entry(q.kind.clone()).or_default() += 1;
        }
        summary
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a ExamQuestion;
    type IntoIter = std::slice::Iter<'a, ExamQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Selection criteria for a study session; unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    pub level: Option<Level>,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Question style, matched against `ExamQuestion::kind`.
    pub kind: Option<String>,
    pub tag: Option<String>,
    /// Return at most this many questions.
    pub limit: Option<usize>,
}

impl QuestionFilter {
    pub fn matches(&self, q: &ExamQuestion) -> bool {
        self.level.is_none_or(|l| q.level == l)
            && self.topic.as_deref().is_none_or(|t| q.topic == t)
            && self.difficulty.is_none_or(|d| q.difficulty == d)
            && self.kind.as_deref().is_none_or(|k| q.kind == k)
            && self.tag.as_deref().is_none_or(|t| q.has_tag(t))
    }
}

/// Question counts broken down by level, topic, difficulty and type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub total: usize,
    pub per_level: BTreeMap<Level, usize>,
    pub per_topic: BTreeMap<String, usize>,
    pub per_difficulty: BTreeMap<Difficulty, usize>,
    pub per_type: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::draft;
    use crate::builder::RecordBuilder;
    use crate::ids::IdAllocator;

    fn question(id: u32, level: &str, topic: &str, difficulty: &str) -> ExamQuestion {
        let mut d = draft(Some(id));
        d.level = level.into();
        d.topic = topic.into();
        d.difficulty = difficulty.into();
        RecordBuilder::new()
            .build(d, &mut IdAllocator::default())
            .unwrap()
    }

    fn sample_bank() -> QuestionBank {
        aggregate(vec![
            vec![
                question(1001, "I", "Ethics", "Medium"),
                question(1002, "I", "Ethics", "Hard"),
            ],
            vec![question(1081, "II", "Fixed Income", "Medium")],
            vec![question(1151, "III", "Portfolio Management", "Easy")],
        ])
        .unwrap()
    }

    #[test]
    fn aggregate_preserves_order() {
        let bank = sample_bank();
        let ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1001, 1002, 1081, 1151]);
    }

    #[test]
    fn aggregate_detects_cross_bucket_duplicates() {
        let err = aggregate(vec![
            vec![question(1042, "I", "Ethics", "Easy")],
            vec![question(1042, "II", "Fixed Income", "Hard")],
        ])
        .unwrap_err();
        assert_eq!(err.ids, vec![1042]);
        assert!(err.to_string().contains("1042"));
    }

    #[test]
    fn duplicate_error_names_each_id_once() {
        let err = aggregate(vec![vec![
            question(7, "I", "Ethics", "Easy"),
            question(3, "I", "Ethics", "Easy"),
            question(7, "I", "Ethics", "Easy"),
            question(3, "I", "Ethics", "Easy"),
            question(7, "I", "Ethics", "Easy"),
        ]])
        .unwrap_err();
        assert_eq!(err.ids, vec![3, 7]);
    }

    #[test]
    fn aggregate_empty() {
        let bank = aggregate(Vec::<Vec<ExamQuestion>>::new()).unwrap();
        assert!(bank.is_empty());
        assert_eq!(bank.summary().total, 0);
    }

    #[test]
    fn lookups() {
        let bank = sample_bank();
        assert_eq!(bank.get(1081).unwrap().topic, "Fixed Income");
        assert!(bank.get(9999).is_none());
        assert_eq!(bank.by_level(Level::I).len(), 2);
        assert_eq!(bank.by_topic("Portfolio Management").len(), 1);
        assert_eq!(bank.by_difficulty(Difficulty::Medium).len(), 2);
        assert_eq!(bank.with_tag("Compounding").len(), 4);
        assert!(bank.with_tag("Derivatives").is_empty());
    }

    #[test]
    fn filter_combines_criteria() {
        let bank = sample_bank();
        let filter = QuestionFilter {
            level: Some(Level::I),
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        };
        let hits: Vec<u32> = bank.filter(&filter).iter().map(|q| q.id).collect();
        assert_eq!(hits, vec![1002]);

        let limited = QuestionFilter {
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(bank.filter(&limited).len(), 3);

        let none = QuestionFilter {
            kind: Some("Analysis".into()),
            ..Default::default()
        };
        assert!(bank.filter(&none).is_empty());
    }

    #[test]
    fn summary_counts() {
        let summary = sample_bank().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.per_level[&Level::I], 2);
        assert_eq!(summary.per_level[&Level::III], 1);
        assert_eq!(summary.per_topic["Ethics"], 2);
        assert_eq!(summary.per_difficulty[&Difficulty::Medium], 2);
        assert_eq!(summary.per_type["Calculation"], 4);
    }
}
