//! Request handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use edumentor_core::{
    AnswerRecord, AssessmentResult, Difficulty, LearnerProfile, LearningContent, LearningPath,
    PerformanceBand,
};

use crate::{AppState, EDUCATIONAL_DISCLAIMER};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub disclaimer: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "edumentor".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        disclaimer: EDUCATIONAL_DISCLAIMER.to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub content_units: usize,
}

/// GET /api/subjects
pub async fn list_subjects(State(state): State<AppState>) -> Json<Vec<SubjectSummary>> {
    let subjects = state
        .library()
        .subject_counts()
        .into_iter()
        .map(|(subject, content_units)| SubjectSummary {
            subject,
            content_units,
        })
        .collect();
    Json(subjects)
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub subject: String,
    pub difficulty: Option<Difficulty>,
    pub grade: Option<u8>,
}

/// GET /api/content?subject=..&difficulty=..&grade=..
pub async fn search_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Json<Vec<LearningContent>> {
    let results = state
        .library()
        .search(&query.subject, query.difficulty, query.grade)
        .into_iter()
        .cloned()
        .collect();
    Json(results)
}

#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub learner: LearnerProfile,
    pub subject: String,
}

/// POST /api/path
pub async fn generate_path(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> Json<LearningPath> {
    Json(state.generator.generate(&request.learner, &request.subject))
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub learner_id: String,
    pub subject: String,
    /// Absent or `null` is scored as an empty answer sheet.
    #[serde(default)]
    pub answers: Option<Vec<AnswerRecord>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessResponse {
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub performance: PerformanceBand,
}

/// POST /api/assess
pub async fn run_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Json<AssessResponse> {
    let answers = request.answers.unwrap_or_default();
    let result = state
        .engine
        .evaluate(&request.learner_id, &request.subject, &answers);
    let performance = result.performance();
    Json(AssessResponse {
        result,
        performance,
    })
}
