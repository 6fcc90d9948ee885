//! The `edumentor assess` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use edumentor_core::loader::load_answers;
use edumentor_core::{AssessmentEngine, AssessmentResult, PerformanceBand};

use crate::OutputFormat;

#[derive(Serialize)]
struct AssessmentOutput<'a> {
    #[serde(flatten)]
    result: &'a AssessmentResult,
    performance: PerformanceBand,
}

pub fn execute(
    learner_id: String,
    subject: String,
    answers_path: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let answers = load_answers(&answers_path)?;
    let result = AssessmentEngine::new().evaluate(&learner_id, &subject, &answers);

    match format {
        OutputFormat::Json => {
            let output = AssessmentOutput {
                result: &result,
                performance: result.performance(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("\nASSESSMENT RESULT");
            println!(
                "Learner ID: {} | Subject: {}",
                result.learner_id, result.subject
            );
            println!("Score: {:.1}%", result.score);
            println!("Performance: {}", result.performance());

            println!("\nAREAS TO IMPROVE:");
            for area in &result.areas_to_improve {
                println!("  - {area}");
            }
            println!();
        }
    }

    Ok(())
}
