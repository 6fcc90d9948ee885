//! Append-only store of learning content.

use std::collections::BTreeSet;

use crate::model::{Difficulty, LearningContent};
use crate::seed::builtin_content;

/// Stores and queries learning content aligned with NCF 2023.
///
/// `add` does not check for duplicate content ids; path generation drops
/// repeats when it assembles a sequence. A library is not internally
/// synchronized: share it read-only (e.g. behind an `Arc`) or serialize
/// writers externally.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    contents: Vec<LearningContent>,
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentLibrary {
    /// A library seeded with the built-in content.
    pub fn new() -> Self {
        Self {
            contents: builtin_content(),
        }
    }

    /// A library with no content at all.
    pub fn empty() -> Self {
        Self {
            contents: Vec::new(),
        }
    }

    /// Append one content unit.
    pub fn add(&mut self, content: LearningContent) {
        self.contents.push(content);
    }

    /// Append several content units, in order.
    pub fn extend<I>(&mut self, contents: I)
    where
        I: IntoIterator<Item = LearningContent>,
    {
        self.contents.extend(contents);
    }

    /// Search by subject (case-insensitive) with optional exact difficulty
    /// and grade filters.
    ///
    /// Results are ordered by grade, then by the difficulty's name
    /// (so "advanced" sorts before "beginner"). Ties keep insertion order.
    pub fn search(
        &self,
        subject: &str,
        difficulty: Option<Difficulty>,
        grade: Option<u8>,
    ) -> Vec<&LearningContent> {
        let mut results: Vec<&LearningContent> = self
            .contents
            .iter()
            .filter(|c| c.is_subject(subject))
            .filter(|c| difficulty.map_or(true, |d| c.difficulty == d))
            .filter(|c| grade.map_or(true, |g| c.grade_level.get() == g))
            .collect();

        results.sort_by(|a, b| {
            a.grade_level
                .cmp(&b.grade_level)
                .then_with(|| a.difficulty.as_str().cmp(b.difficulty.as_str()))
        });
        results
    }

    /// Distinct subject names, alphabetically.
    pub fn all_subjects(&self) -> Vec<String> {
        self.contents
            .iter()
            .map(|c| c.subject.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Each subject with the number of units a search for it returns.
    pub fn subject_counts(&self) -> Vec<(String, usize)> {
        self.all_subjects()
            .into_iter()
            .map(|s| {
                let count = self.search(&s, None, None).len();
                (s, count)
            })
            .collect()
    }

    /// An owned copy of every content unit, in insertion order.
    pub fn all_content(&self) -> Vec<LearningContent> {
        self.contents.clone()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
