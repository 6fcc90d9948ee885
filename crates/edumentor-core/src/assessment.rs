//! Assessment scoring.
//!
//! Answers arrive as loosely typed JSON, so the `correct` flag is kept as a
//! raw [`serde_json::Value`] and normalised by [`is_correct`] instead of
//! being coerced by serde.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::AssessmentResult;

/// Message returned when no answers were submitted.
pub const NO_ANSWERS_MESSAGE: &str = "No answers provided — please attempt the assessment.";

/// Message returned when every answer is correct.
pub const ALL_CORRECT_MESSAGE: &str = "Continue to advanced topics — excellent performance!";

/// Scores below this percentage also flag the subject's fundamentals.
pub const FUNDAMENTALS_THRESHOLD: f64 = 40.0;

/// One submitted answer.
///
/// Every field is kept as raw JSON so a sheet with odd field types still
/// scores instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Carried through but never read when scoring.
    #[serde(default)]
    pub question_id: Value,
    /// Raw correctness flag: a bool, number, or string. Absent means false.
    #[serde(default)]
    pub correct: Value,
    /// Topic of the question; the assessed subject is used when absent or null.
    #[serde(default)]
    pub topic: Option<Value>,
}

impl AnswerRecord {
    pub fn new(
        question_id: impl Into<String>,
        correct: impl Into<Value>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            question_id: Value::String(question_id.into()),
            correct: correct.into(),
            topic: Some(Value::String(topic.into())),
        }
    }

    pub fn is_correct(&self) -> bool {
        is_correct(&self.correct)
    }

    /// Topic label for reporting. Strings are used as-is, other values are
    /// rendered as JSON text.
    pub fn topic_or<'a>(&'a self, subject: &'a str) -> Cow<'a, str> {
        match &self.topic {
            None | Some(Value::Null) => Cow::Borrowed(subject),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// Normalise a raw correctness flag.
///
/// False for `false`, numeric zero, null, and the exact strings `"false"`,
/// `"0"`, `"no"` and `""`. Everything else is true, including `"False"`,
/// `"yes"`, non-zero numbers, arrays and objects.
pub fn is_correct(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !matches!(s.as_str(), "false" | "0" | "no" | ""),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coarse label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            PerformanceBand::Excellent
        } else if score >= 60.0 {
            PerformanceBand::Good
        } else {
            PerformanceBand::NeedsImprovement
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceBand::Excellent => write!(f, "Excellent"),
            PerformanceBand::Good => write!(f, "Good"),
            PerformanceBand::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Evaluates learner answers into an [`AssessmentResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentEngine;

impl AssessmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score `answers` for `learner_id` in `subject`.
    ///
    /// Never fails. An empty answer list scores zero with a prompt to attempt
    /// the assessment.
    pub fn evaluate(
        &self,
        learner_id: &str,
        subject: &str,
        answers: &[AnswerRecord],
    ) -> AssessmentResult {
        if answers.is_empty() {
            tracing::debug!(learner_id, subject, "no answers submitted");
            return AssessmentResult {
                learner_id: learner_id.to_string(),
                subject: subject.to_string(),
                score: 0.0,
                areas_to_improve: vec![NO_ANSWERS_MESSAGE.to_string()],
            };
        }

        let correct_count = answers.iter().filter(|a| a.is_correct()).count();
        let score = round_one_decimal(correct_count as f64 / answers.len() as f64 * 100.0);

        let mut areas_to_improve: Vec<String> = Vec::new();
        for answer in answers.iter().filter(|a| !a.is_correct()) {
            let topic = answer.topic_or(subject);
            if !areas_to_improve.iter().any(|t| *t == topic) {
                areas_to_improve.push(topic.into_owned());
            }
        }

        if score < FUNDAMENTALS_THRESHOLD {
            areas_to_improve.push(format!("Fundamental concepts in {subject}"));
        }
        if areas_to_improve.is_empty() {
            areas_to_improve.push(ALL_CORRECT_MESSAGE.to_string());
        }

        tracing::debug!(
            learner_id,
            subject,
            score,
            correct = correct_count,
            total = answers.len(),
            "evaluated assessment"
        );

        AssessmentResult {
            learner_id: learner_id.to_string(),
            subject: subject.to_string(),
            score,
            areas_to_improve,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(!is_correct(&json!(false)));
        assert!(!is_correct(&json!(0)));
        assert!(!is_correct(&json!(0.0)));
        assert!(!is_correct(&json!("false")));
        assert!(!is_correct(&json!("0")));
        assert!(!is_correct(&json!("no")));
        assert!(!is_correct(&json!("")));
        assert!(!is_correct(&Value::Null));
    }

    #[test]
    fn truthy_values() {
        assert!(is_correct(&json!(true)));
        assert!(is_correct(&json!(1)));
        assert!(is_correct(&json!(-3)));
        assert!(is_correct(&json!(0.5)));
        assert!(is_correct(&json!("true")));
        assert!(is_correct(&json!("yes")));
        assert!(is_correct(&json!("False")));
        assert!(is_correct(&json!([])));
    }

    #[test]
    fn empty_answers() {
        let result = AssessmentEngine::new().evaluate("l-1", "math", &[]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.areas_to_improve, vec![NO_ANSWERS_MESSAGE]);
        assert_eq!(result.performance(), PerformanceBand::NeedsImprovement);
    }

    #[test]
    fn half_correct_lists_distinct_incorrect_topics() {
        let answers = vec![
            AnswerRecord::new("q1", true, "Counting"),
            AnswerRecord::new("q2", true, "Addition"),
            AnswerRecord::new("q3", false, "Subtraction"),
            AnswerRecord::new("q4", false, "Subtraction"),
        ];
        let result = AssessmentEngine::new().evaluate("l-1", "math", &answers);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.areas_to_improve, vec!["Subtraction"]);
        assert_eq!(result.learner_id, "l-1");
        assert_eq!(result.subject, "math");
    }

    #[test]
    fn all_correct_replaces_areas() {
        let answers = vec![
            AnswerRecord::new("q1", true, "Fractions"),
            AnswerRecord::new("q2", "true", "Algebra"),
            AnswerRecord::new("q3", 1, "Geometry"),
        ];
        let result = AssessmentEngine::new().evaluate("l-1", "math", &answers);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.areas_to_improve, vec![ALL_CORRECT_MESSAGE]);
        assert_eq!(result.performance(), PerformanceBand::Excellent);
    }

    #[test]
    fn low_score_appends_fundamentals() {
        let answers = vec![
            AnswerRecord::new("q1", "false", "Algebra"),
            AnswerRecord::new("q2", "no", "Geometry"),
            AnswerRecord::new("q3", 0, "Algebra"),
            AnswerRecord::new("q4", true, "Fractions"),
        ];
        let result = AssessmentEngine::new().evaluate("l-1", "math", &answers);
        assert_eq!(result.score, 25.0);
        assert_eq!(
            result.areas_to_improve,
            vec!["Algebra", "Geometry", "Fundamental concepts in math"]
        );
    }

    #[test]
    fn topics_keep_first_appearance_order() {
        let answers = vec![
            AnswerRecord::new("q1", false, "Zebra"),
            AnswerRecord::new("q2", false, "Apple"),
            AnswerRecord::new("q3", false, "Zebra"),
            AnswerRecord::new("q4", true, "Mango"),
            AnswerRecord::new("q5", true, "Mango"),
            AnswerRecord::new("q6", true, "Mango"),
        ];
        let result = AssessmentEngine::new().evaluate("l-1", "science", &answers);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.areas_to_improve, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        let answers = vec![
            AnswerRecord::new("q1", true, "A"),
            AnswerRecord::new("q2", true, "B"),
            AnswerRecord::new("q3", false, "C"),
        ];
        let result = AssessmentEngine::new().evaluate("l-1", "math", &answers);
        assert_eq!(result.score, 66.7);
        assert_eq!(result.performance(), PerformanceBand::Good);
    }

    #[test]
    fn missing_fields_from_json() {
        let answers: Vec<AnswerRecord> = serde_json::from_str(
            r#"[{"question_id": "q1"}, {"question_id": "q2", "correct": "yes", "topic": "Maps"}]"#,
        )
        .unwrap();
        assert_eq!(answers[0].correct, Value::Null);
        assert!(answers[0].topic.is_none());

        let result = AssessmentEngine::new().evaluate("l-1", "social_studies", &answers);
        assert_eq!(result.score, 50.0);
        // The missing topic falls back to the subject.
        assert_eq!(result.areas_to_improve, vec!["social_studies"]);
    }

    #[test]
    fn non_string_fields_still_score() {
        let answers: Vec<AnswerRecord> = serde_json::from_str(
            r#"[{"question_id": 1, "correct": true, "topic": "Counting"},
                {"question_id": "q2", "correct": false, "topic": 7},
                {"question_id": null, "correct": "no", "topic": null},
                {"question_id": [3], "correct": 0, "topic": {"name": "Maps"}}]"#,
        )
        .unwrap();
        assert_eq!(answers[0].question_id, json!(1));

        let result = AssessmentEngine::new().evaluate("l-1", "math", &answers);
        assert_eq!(result.score, 25.0);
        assert_eq!(
            result.areas_to_improve,
            vec![
                "7",
                "math",
                r#"{"name":"Maps"}"#,
                "Fundamental concepts in math"
            ]
        );
    }

    #[test]
    fn performance_bands() {
        assert_eq!(PerformanceBand::from_score(80.0), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_score(79.9), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_score(60.0), PerformanceBand::Good);
        assert_eq!(
            PerformanceBand::from_score(59.9),
            PerformanceBand::NeedsImprovement
        );
        assert_eq!(PerformanceBand::NeedsImprovement.to_string(), "Needs Improvement");
    }
}
