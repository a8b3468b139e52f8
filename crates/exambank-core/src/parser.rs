//! Bucket and document loading.
//!
//! Loads question buckets from TOML files and directories, reads an emitted
//! JSON document back into a [`QuestionBank`], and lints banks for
//! suspicious but valid content.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bank::QuestionBank;
use crate::bucket::Bucket;
use crate::builder::RecordBuilder;
use crate::error::{BankError, RecordError};
use crate::model::{ExamQuestion, QuestionDraft};

/// Intermediate TOML structure for bucket files.
#[derive(Debug, Deserialize)]
struct TomlBucketFile {
    bucket: TomlBucketHeader,
    #[serde(default)]
    questions: Vec<QuestionDraft>,
}

#[derive(Debug, Deserialize)]
struct TomlBucketHeader {
    name: String,
}

/// Parse a single TOML bucket file.
pub fn parse_bucket(path: &Path) -> Result<Bucket> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bucket file: {}", path.display()))?;

    Ok(parse_bucket_str(&content, path)?)
}

/// Parse a TOML string into a `Bucket` (useful for testing).
pub fn parse_bucket_str(content: &str, source_path: &Path) -> Result<Bucket, BankError> {
    let parsed: TomlBucketFile =
        toml::from_str(content).map_err(|e| BankError::parse(source_path, e))?;

    Ok(Bucket::new(parsed.bucket.name, parsed.questions))
}

/// Recursively load all `.toml` bucket files under `dir`, ordered by path.
///
/// A file that fails to parse aborts the load: a bank must never be built
/// from a silently partial set of buckets.
pub fn load_bucket_directory(dir: &Path) -> Result<Vec<Bucket>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    collect_toml_files(dir, &mut files)?;
    files.sort();

    files.iter().map(|path| parse_bucket(path)).collect()
}

fn collect_toml_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            collect_toml_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            out.push(path);
        }
    }
    Ok(())
}

/// Load buckets from a single file or a directory of files.
pub fn load_buckets(path: &Path) -> Result<Vec<Bucket>> {
    if path.is_dir() {
        load_bucket_directory(path)
    } else {
        Ok(vec![parse_bucket(path)?])
    }
}

/// Read an emitted JSON document back into a validated bank.
///
/// Unknown fields are ignored. Each record is re-checked with `builder`
/// and ids must be unique.
pub fn load_document(path: &Path, builder: &RecordBuilder) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document: {}", path.display()))?;
    let questions: Vec<ExamQuestion> =
        serde_json::from_str(&content).map_err(|e| BankError::parse(path, e))?;

    for (index, q) in questions.iter().enumerate() {
        builder
            .check(&QuestionDraft::from(q))
            .map_err(|reason| RecordError {
                bucket: path.display().to_string(),
                index,
                id: Some(q.id),
                reason,
            })?;
    }

    let bank = QuestionBank::from_questions(questions)
        .with_context(|| format!("invalid document: {}", path.display()))?;
    Ok(bank)
}

/// A non-fatal finding about otherwise valid content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub id: u32,
    pub message: String,
}

/// Flag content that passes validation but is probably an authoring slip.
pub fn lint_bank(bank: &QuestionBank) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    for q in bank {
        let mut seen = HashSet::new();
        for option in &q.options {
            if !seen.insert(option.trim()) {
                warnings.push(LintWarning {
                    id: q.id,
                    message: format!("duplicate option text: {}", option.trim()),
                });
            }
        }

        if q.tags.is_empty() {
            warnings.push(LintWarning {
                id: q.id,
                message: "no tags".into(),
            });
        }

        if q.reference.trim().is_empty() {
            warnings.push(LintWarning {
                id: q.id,
                message: "reference is empty".into(),
            });
        }
    }

    warnings
}
