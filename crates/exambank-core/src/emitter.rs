//! Emitter: writes the question bank as a single JSON document.
//!
//! The document is written to a temporary file next to the destination and
//! renamed into place, so the destination holds either the previous content
//! or the complete new document. A replaced document keeps its permissions;
//! a new one gets the same mode as any file created by the process.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::bank::QuestionBank;
use crate::error::BankError;

/// Output formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Two-space indented output; compact when false.
    pub pretty: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// What was written, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitReceipt {
    pub path: PathBuf,
    /// Number of questions in the document.
    pub count: usize,
    pub bytes: usize,
    pub written_at: DateTime<Utc>,
}

/// Render the bank as a JSON array.
pub fn to_json(bank: &QuestionBank, options: EmitOptions) -> Result<String, BankError> {
    let json = if options.pretty {
        serde_json::to_string_pretty(bank.questions())?
    } else {
        serde_json::to_string(bank.questions())?
    };
    Ok(json)
}

/// Serialize `bank` and atomically replace `path` with it.
///
/// The parent directory must already exist. On failure nothing is left at
/// `path` that was not there before, and the temporary file is removed.
pub fn emit(
    bank: &QuestionBank,
    path: &Path,
    options: EmitOptions,
) -> Result<EmitReceipt, BankError> {
    let json = to_json(bank, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_for(dir, path).map_err(|e| BankError::io(path, e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.write_all(b"\n"))
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| BankError::io(path, e))?;
    tmp.persist(path).map_err(|e| BankError::io(path, e.error))?;

    let receipt = EmitReceipt {
        path: path.to_path_buf(),
        count: bank.len(),
        bytes: json.len() + 1,
        written_at: Utc::now(),
    };
    tracing::info!(
        path = %path.display(),
        count = receipt.count,
        bytes = receipt.bytes,
        "wrote question bank"
    );
    Ok(receipt)
}

/// Create the staging file in `dir` with the permissions `dest` should end
/// up with.
fn temp_file_for(dir: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask, like `File::create`.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.prefix(".exambank").tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(dest) {
        if existing.is_file() {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
    }
    Ok(tmp)
}
