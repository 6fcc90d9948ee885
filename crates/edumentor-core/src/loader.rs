//! JSON loaders for learner profiles, answer sheets, and content files.
//!
//! Validation of individual records happens during deserialization (see
//! [`crate::model`]); [`validate_content`] adds collection-level checks such
//! as duplicate ids and malformed alignment codes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::assessment::AnswerRecord;
use crate::model::{LearnerProfile, LearningContent};

/// Parse a learner profile from a JSON file.
pub fn load_learner(path: &Path) -> Result<LearnerProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read learner file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid learner profile: {}", path.display()))
}

/// Parse a list of answers from a JSON file. A `null` document is treated
/// as an empty answer sheet.
pub fn load_answers(path: &Path) -> Result<Vec<AnswerRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    parse_answers_str(&content, path)
}

/// Parse answers from a JSON string (useful for testing).
pub fn parse_answers_str(content: &str, source_path: &Path) -> Result<Vec<AnswerRecord>> {
    let answers: Option<Vec<AnswerRecord>> = serde_json::from_str(content)
        .with_context(|| format!("invalid answers JSON: {}", source_path.display()))?;
    Ok(answers.unwrap_or_default())
}

/// Parse a JSON array of content records from a file.
pub fn load_content_file(path: &Path) -> Result<Vec<LearningContent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid content file: {}", path.display()))
}

/// Recursively load all `.json` content files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_content_directory(dir: &Path) -> Result<Vec<LearningContent>> {
    let mut contents = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    // Directory order is platform-dependent; keep loading deterministic.
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            contents.extend(load_content_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_content_file(&path) {
                Ok(units) => {
                    tracing::debug!("loaded {} content units from {}", units.len(), path.display());
                    contents.extend(units);
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(contents)
}

/// Load content from a single file or, for a directory, every file below it.
pub fn load_content(path: &Path) -> Result<Vec<LearningContent>> {
    if path.is_dir() {
        load_content_directory(path)
    } else {
        load_content_file(path)
    }
}

/// A warning from content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The content ID (if applicable).
    pub content_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Grade encoded in an `NCF-<SUBJECT>-G<GRADE>-<DOMAIN>-<INDEX>` code, or
/// `None` when the code is malformed.
pub fn alignment_grade(code: &str) -> Option<u8> {
    let parts: Vec<&str> = code.split('-').collect();
    let [prefix, subject, grade, domain, index] = parts.as_slice() else {
        return None;
    };

    let is_tag = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    };
    if *prefix != "NCF" || !is_tag(*subject) || !is_tag(*domain) {
        return None;
    }
    if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    grade.strip_prefix('G')?.parse().ok()
}

/// Check a content collection for common authoring issues.
pub fn validate_content(contents: &[LearningContent]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |content: &LearningContent, message: String| ValidationWarning {
        content_id: Some(content.content_id.clone()),
        message,
    };

    // Check for duplicate content IDs
    let mut seen_ids = HashSet::new();
    for content in contents {
        if !seen_ids.insert(content.content_id.as_str()) {
            warnings.push(warn(
                content,
                format!("duplicate content ID: {}", content.content_id),
            ));
        }
    }

    for content in contents {
        if content.body.trim().is_empty() {
            warnings.push(warn(content, "content body is empty".into()));
        }

        if content.ncf_alignment.is_empty() {
            warnings.push(warn(content, "no NCF alignment codes".into()));
        }

        for code in &content.ncf_alignment {
            match alignment_grade(code) {
                None => warnings.push(warn(
                    content,
                    format!("malformed alignment code '{code}', expected NCF-<SUBJECT>-G<GRADE>-<DOMAIN>-<INDEX>"),
                )),
                Some(grade) if grade != content.grade_level.get() => warnings.push(warn(
                    content,
                    format!(
                        "alignment code '{code}' targets grade {grade} but grade_level is {}",
                        content.grade_level
                    ),
                )),
                Some(_) => {}
            }
        }
    }

    warnings
}
