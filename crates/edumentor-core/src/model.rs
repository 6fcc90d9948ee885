//! Core data model types for edumentor.
//!
//! Learner profiles and content records are validated when they are built,
//! either through their constructors or through deserialization, so the
//! path generator and assessment engine can treat every value they receive
//! as well-formed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::PerformanceBand;
use crate::error::ValidationError;

/// A school grade, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    /// Build a grade, rejecting values outside 1..=12.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        Self::checked("grade", i64::from(value))
    }

    pub(crate) fn checked(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        let value = check_range(field, value, Self::MIN, Self::MAX, "between 1 and 12")?;
        Ok(Grade(value))
    }

    /// Saturate `value` into 1..=12. Used for trusted static data.
    pub(crate) const fn clamped(value: u8) -> Self {
        if value < Self::MIN {
            Grade(Self::MIN)
        } else if value > Self::MAX {
            Grade(Self::MAX)
        } else {
            Grade(value)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The grade one below this one, clamped to grade 1.
    pub fn lower_neighbour(self) -> Grade {
        Grade(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// The grade one above this one, clamped to grade 12.
    pub fn upper_neighbour(self) -> Grade {
        Grade(self.0.saturating_add(1).min(Self::MAX))
    }
}

impl TryFrom<i64> for Grade {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::checked("grade", value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_range(
    field: &'static str,
    value: i64,
    min: u8,
    max: u8,
    constraint: &'static str,
) -> Result<u8, ValidationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field,
            constraint,
            value,
        });
    }
    // In range, so the narrowing cannot truncate.
    Ok(value as u8)
}

fn check_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Content difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Position on the beginner < intermediate < advanced scale.
    pub fn ordinal(self) -> u8 {
        match self {
            Difficulty::Beginner => 0,
            Difficulty::Intermediate => 1,
            Difficulty::Advanced => 2,
        }
    }

    /// Absolute distance between two difficulties on the ordinal scale.
    pub fn distance(self, other: Difficulty) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(ValidationError::UnknownVariant {
                field: "difficulty",
                expected: "beginner, intermediate, advanced",
                value: s.to_string(),
            }),
        }
    }
}

/// Content format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Quiz,
    Activity,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Quiz => "quiz",
            ContentType::Activity => "activity",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learner-declared content-format preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Kinesthetic,
    ReadWrite,
}

impl LearningStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::ReadWrite => "read-write",
        }
    }

    /// The content type placed first in a path for this style.
    pub fn preferred_content_type(self) -> ContentType {
        match self {
            LearningStyle::Visual | LearningStyle::Kinesthetic => ContentType::Activity,
            LearningStyle::Auditory | LearningStyle::ReadWrite => ContentType::Text,
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            "read-write" => Ok(LearningStyle::ReadWrite),
            _ => Err(ValidationError::UnknownVariant {
                field: "learning_style",
                expected: "visual, auditory, kinesthetic, read-write",
                value: s.to_string(),
            }),
        }
    }
}

/// Profile of a learner for personalised path generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LearnerProfileRecord")]
pub struct LearnerProfile {
    /// Unique learner identifier.
    pub learner_id: String,
    /// Learner's display name.
    pub name: String,
    /// Age in years (4..=25).
    pub age: u8,
    /// Current grade.
    pub grade: Grade,
    /// Preferred language tag.
    pub language: String,
    /// Subjects the learner is strong in.
    pub strengths: Vec<String>,
    /// Subjects the learner is weak in.
    pub weaknesses: Vec<String>,
    /// Declared learning style.
    pub learning_style: LearningStyle,
}

impl LearnerProfile {
    pub const MIN_AGE: u8 = 4;
    pub const MAX_AGE: u8 = 25;

    /// Build a profile with default language ("en"), no strengths or
    /// weaknesses, and the visual learning style.
    pub fn new(
        learner_id: impl Into<String>,
        name: impl Into<String>,
        age: u8,
        grade: u8,
    ) -> Result<Self, ValidationError> {
        LearnerProfileRecord {
            learner_id: learner_id.into(),
            name: name.into(),
            age: i64::from(age),
            grade: i64::from(grade),
            language: default_language(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            learning_style: LearningStyle::default(),
        }
        .try_into()
    }

    pub fn with_weaknesses<I, S>(mut self, weaknesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weaknesses = weaknesses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_learning_style(mut self, style: LearningStyle) -> Self {
        self.learning_style = style;
        self
    }

    /// Whether `subject` appears among the learner's weaknesses, ignoring case.
    pub fn is_weak_in(&self, subject: &str) -> bool {
        self.weaknesses
            .iter()
            .any(|w| w.to_lowercase() == subject.to_lowercase())
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Unvalidated wire shape of a learner profile.
#[derive(Debug, Deserialize)]
struct LearnerProfileRecord {
    learner_id: String,
    name: String,
    age: i64,
    grade: i64,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    learning_style: LearningStyle,
}

impl TryFrom<LearnerProfileRecord> for LearnerProfile {
    type Error = ValidationError;

    fn try_from(record: LearnerProfileRecord) -> Result<Self, Self::Error> {
        check_not_empty("learner_id", &record.learner_id)?;
        let age = check_range(
            "age",
            record.age,
            LearnerProfile::MIN_AGE,
            LearnerProfile::MAX_AGE,
            "between 4 and 25",
        )?;
        let grade = Grade::checked("grade", record.grade)?;

        Ok(LearnerProfile {
            learner_id: record.learner_id,
            name: record.name,
            age,
            grade,
            language: record.language,
            strengths: record.strengths,
            weaknesses: record.weaknesses,
            learning_style: record.learning_style,
        })
    }
}

/// A single unit of learning content aligned with NCF 2023.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LearningContentRecord")]
pub struct LearningContent {
    /// Unique content identifier.
    pub content_id: String,
    /// Subject name (e.g. "math", "science").
    pub subject: String,
    /// Topic within the subject.
    pub topic: String,
    pub difficulty: Difficulty,
    pub content_type: ContentType,
    /// Lesson text, quiz JSON, or activity description.
    #[serde(rename = "content")]
    pub body: String,
    /// NCF competency codes, e.g. `NCF-MATH-G5-FRA-1`.
    pub ncf_alignment: Vec<String>,
    /// Target grade.
    pub grade_level: Grade,
}

impl LearningContent {
    pub const DEFAULT_GRADE_LEVEL: u8 = 5;

    pub fn new(
        content_id: impl Into<String>,
        subject: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        content_type: ContentType,
        body: impl Into<String>,
        grade_level: u8,
    ) -> Result<Self, ValidationError> {
        LearningContentRecord {
            content_id: content_id.into(),
            subject: subject.into(),
            topic: topic.into(),
            difficulty,
            content_type,
            content: body.into(),
            ncf_alignment: Vec::new(),
            grade_level: i64::from(grade_level),
        }
        .try_into()
    }

    pub fn with_alignment<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ncf_alignment = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive subject comparison.
    pub fn is_subject(&self, subject: &str) -> bool {
        self.subject.to_lowercase() == subject.to_lowercase()
    }
}

fn default_grade_level() -> i64 {
    i64::from(LearningContent::DEFAULT_GRADE_LEVEL)
}

/// Unvalidated wire shape of a content record.
#[derive(Debug, Deserialize)]
struct LearningContentRecord {
    content_id: String,
    subject: String,
    topic: String,
    difficulty: Difficulty,
    content_type: ContentType,
    content: String,
    #[serde(default)]
    ncf_alignment: Vec<String>,
    #[serde(default = "default_grade_level")]
    grade_level: i64,
}

impl TryFrom<LearningContentRecord> for LearningContent {
    type Error = ValidationError;

    fn try_from(record: LearningContentRecord) -> Result<Self, Self::Error> {
        check_not_empty("content_id", &record.content_id)?;
        check_not_empty("subject", &record.subject)?;
        let grade_level = Grade::checked("grade_level", record.grade_level)?;

        Ok(LearningContent {
            content_id: record.content_id,
            subject: record.subject,
            topic: record.topic,
            difficulty: record.difficulty,
            content_type: record.content_type,
            body: record.content,
            ncf_alignment: record.ncf_alignment,
            grade_level,
        })
    }
}

/// A personalised sequence of learning content for a learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub learner: LearnerProfile,
    /// Ordered content units, no content id repeated.
    pub content_sequence: Vec<LearningContent>,
    /// Completion percentage (0..=100).
    #[serde(default)]
    pub progress_pct: f64,
}

impl LearningPath {
    /// A fresh path with no progress.
    pub fn new(learner: LearnerProfile, content_sequence: Vec<LearningContent>) -> Self {
        Self {
            learner,
            content_sequence,
            progress_pct: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.content_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_sequence.is_empty()
    }
}

/// Result of a learning assessment for a learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub learner_id: String,
    pub subject: String,
    /// Percentage of correct answers (0..=100), one decimal place.
    pub score: f64,
    /// Topics or messages needing attention, in first-seen order.
    pub areas_to_improve: Vec<String>,
}

impl AssessmentResult {
    pub fn performance(&self) -> PerformanceBand {
        PerformanceBand::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display_parse_and_ordinal() {
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!("Advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Beginner.ordinal(), 0);
        assert_eq!(Difficulty::Advanced.ordinal(), 2);
        assert_eq!(Difficulty::Advanced.distance(Difficulty::Beginner), 2);
        assert_eq!(Difficulty::Beginner.distance(Difficulty::Intermediate), 1);
    }

    #[test]
    fn learning_style_preferences() {
        assert_eq!(
            LearningStyle::Visual.preferred_content_type(),
            ContentType::Activity
        );
        assert_eq!(
            LearningStyle::Kinesthetic.preferred_content_type(),
            ContentType::Activity
        );
        assert_eq!(
            LearningStyle::Auditory.preferred_content_type(),
            ContentType::Text
        );
        assert_eq!(
            LearningStyle::ReadWrite.preferred_content_type(),
            ContentType::Text
        );
        assert_eq!(
            "read-write".parse::<LearningStyle>().unwrap(),
            LearningStyle::ReadWrite
        );
        assert_eq!(LearningStyle::default(), LearningStyle::Visual);
    }

    #[test]
    fn grade_bounds_and_neighbours() {
        assert!(Grade::new(0).is_err());
        assert!(Grade::new(13).is_err());
        let one = Grade::new(1).unwrap();
        let twelve = Grade::new(12).unwrap();
        assert_eq!(one.lower_neighbour().get(), 1);
        assert_eq!(one.upper_neighbour().get(), 2);
        assert_eq!(twelve.upper_neighbour().get(), 12);
        assert_eq!(twelve.lower_neighbour().get(), 11);
    }

    #[test]
    fn learner_profile_defaults_from_json() {
        let json = r#"{"learner_id": "l-1", "name": "Asha", "age": 10, "grade": 5}"#;
        let learner: LearnerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(learner.language, "en");
        assert!(learner.strengths.is_empty());
        assert!(learner.weaknesses.is_empty());
        assert_eq!(learner.learning_style, LearningStyle::Visual);
        assert_eq!(learner.grade.get(), 5);
    }

    #[test]
    fn learner_profile_rejects_out_of_range_age() {
        let json = r#"{"learner_id": "l-1", "name": "Asha", "age": 3, "grade": 5}"#;
        let err = serde_json::from_str::<LearnerProfile>(json).unwrap_err();
        assert!(err.to_string().contains("invalid age"));

        let err = LearnerProfile::new("l-1", "Asha", 26, 5).unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn learner_profile_rejects_out_of_range_grade() {
        let err = LearnerProfile::new("l-1", "Asha", 10, 13).unwrap_err();
        assert_eq!(err.field(), "grade");

        let json = r#"{"learner_id": "l-1", "name": "Asha", "age": 10, "grade": -1}"#;
        assert!(serde_json::from_str::<LearnerProfile>(json).is_err());
    }

    #[test]
    fn learner_profile_rejects_unknown_style() {
        let json = r#"{"learner_id": "l-1", "name": "A", "age": 10, "grade": 5, "learning_style": "osmosis"}"#;
        assert!(serde_json::from_str::<LearnerProfile>(json).is_err());
    }

    #[test]
    fn weakness_check_ignores_case() {
        let learner = LearnerProfile::new("l-1", "Asha", 10, 5)
            .unwrap()
            .with_weaknesses(["Math"]);
        assert!(learner.is_weak_in("math"));
        assert!(learner.is_weak_in("MATH"));
        assert!(!learner.is_weak_in("science"));
    }

    #[test]
    fn content_uses_content_field_for_body() {
        let json = r#"{
            "content_id": "x-1",
            "subject": "math",
            "topic": "Counting",
            "difficulty": "beginner",
            "content_type": "text",
            "content": "Count to ten."
        }"#;
        let content: LearningContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.body, "Count to ten.");
        assert_eq!(content.grade_level.get(), LearningContent::DEFAULT_GRADE_LEVEL);
        assert!(content.ncf_alignment.is_empty());

        let out = serde_json::to_value(&content).unwrap();
        assert_eq!(out["content"], "Count to ten.");
        assert_eq!(out["grade_level"], 5);
        assert_eq!(out["difficulty"], "beginner");
    }

    #[test]
    fn content_rejects_bad_difficulty_and_grade() {
        let json = r#"{
            "content_id": "x-1", "subject": "math", "topic": "T",
            "difficulty": "expert", "content_type": "text", "content": ""
        }"#;
        assert!(serde_json::from_str::<LearningContent>(json).is_err());

        let err = LearningContent::new(
            "x-1",
            "math",
            "T",
            Difficulty::Beginner,
            ContentType::Text,
            "",
            0,
        )
        .unwrap_err();
        assert_eq!(err.field(), "grade_level");
    }

    #[test]
    fn content_rejects_empty_subject() {
        let err = LearningContent::new(
            "x-1",
            "  ",
            "T",
            Difficulty::Beginner,
            ContentType::Text,
            "",
            3,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "subject" });
    }

    #[test]
    fn new_path_has_no_progress() {
        let learner = LearnerProfile::new("l-1", "Asha", 10, 5).unwrap();
        let path = LearningPath::new(learner, vec![]);
        assert_eq!(path.progress_pct, 0.0);
        assert!(path.is_empty());
    }
}
