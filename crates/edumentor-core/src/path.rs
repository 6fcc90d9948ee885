//! Personalised learning-path generation.
//!
//! A path is built in five deterministic stages:
//!
//! 1. keep the units of the requested subject (case-insensitive);
//! 2. keep units within one grade of the learner, falling back to the whole
//!    subject when none are that close;
//! 3. pick a target difficulty: beginner for a weak subject, otherwise
//!    intermediate;
//! 4. stable-sort by (distance from the target difficulty, grade);
//! 5. move units of the learner's preferred content type to the front and
//!    drop repeated content ids.

use std::collections::HashSet;
use std::sync::Arc;

use crate::library::ContentLibrary;
use crate::model::{Difficulty, LearnerProfile, LearningContent, LearningPath};

/// Generates personalised learning paths from a shared content library.
#[derive(Debug, Clone)]
pub struct PathGenerator {
    library: Arc<ContentLibrary>,
}

impl Default for PathGenerator {
    fn default() -> Self {
        Self::new(ContentLibrary::new())
    }
}

impl PathGenerator {
    pub fn new(library: impl Into<Arc<ContentLibrary>>) -> Self {
        Self {
            library: library.into(),
        }
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Build a path for `learner` in `subject`.
    ///
    /// Never fails: a subject with no content yields an empty sequence.
    pub fn generate(&self, learner: &LearnerProfile, subject: &str) -> LearningPath {
        let subject_units = self.library.search(subject, None, None);

        let low = learner.grade.lower_neighbour();
        let high = learner.grade.upper_neighbour();
        let mut units: Vec<&LearningContent> = subject_units
            .iter()
            .copied()
            .filter(|c| (low..=high).contains(&c.grade_level))
            .collect();

        if units.is_empty() {
            tracing::debug!(
                subject,
                grade = learner.grade.get(),
                "no content within one grade, using the whole subject"
            );
            units = subject_units;
        }

        let target = target_difficulty(learner, subject);
        units.sort_by_key(|c| (c.difficulty.distance(target), c.grade_level));

        let preferred = learner.learning_style.preferred_content_type();
        let (mut ordered, others): (Vec<&LearningContent>, Vec<&LearningContent>) = units
            .into_iter()
            .partition(|c| c.content_type == preferred);
        ordered.extend(others);

        let mut seen = HashSet::new();
        let content_sequence: Vec<LearningContent> = ordered
            .into_iter()
            .filter(|c| seen.insert(c.content_id.as_str()))
            .cloned()
            .collect();

        tracing::debug!(
            learner_id = %learner.learner_id,
            subject,
            target = %target,
            units = content_sequence.len(),
            "generated learning path"
        );

        LearningPath::new(learner.clone(), content_sequence)
    }
}

/// The difficulty a path starts from.
///
/// Advanced is never a starting target.
pub fn target_difficulty(learner: &LearnerProfile, subject: &str) -> Difficulty {
    if learner.is_weak_in(subject) {
        Difficulty::Beginner
    } else {
        Difficulty::Intermediate
    }
}
