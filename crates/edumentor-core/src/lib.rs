//! edumentor-core: Content library, path generation, and assessment scoring.
//!
//! This crate defines the learner and content data model, the built-in
//! NCF 2023 aligned content library, and the two pure pipelines that the
//! CLI and HTTP layers call into:
//!
//! - [`path::PathGenerator`] turns a learner profile into an ordered path.
//! - [`assessment::AssessmentEngine`] scores a list of raw answers.

pub mod assessment;
pub mod error;
pub mod library;
pub mod loader;
pub mod model;
pub mod path;

mod seed;

pub use assessment::{is_correct, AnswerRecord, AssessmentEngine, PerformanceBand};
pub use error::ValidationError;
pub use library::ContentLibrary;
pub use model::{
    AssessmentResult, ContentType, Difficulty, Grade, LearnerProfile, LearningContent,
    LearningPath, LearningStyle,
};
pub use path::PathGenerator;
