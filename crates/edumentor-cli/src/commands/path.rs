//! The `edumentor path` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use edumentor_core::loader::load_learner;
use edumentor_core::{LearningPath, PathGenerator};

use crate::config::load_config_from;
use crate::OutputFormat;

pub fn execute(
    learner_path: PathBuf,
    subject: String,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config_from(config_path)?;
    let learner = load_learner(&learner_path)?;
    let generator = PathGenerator::new(config.build_library()?);

    let learning_path = generator.generate(&learner, &subject);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&learning_path)?);
        }
        OutputFormat::Text => print_path(&learning_path, &subject, config.preview_chars),
    }

    Ok(())
}

fn print_path(path: &LearningPath, subject: &str, preview_chars: usize) {
    let learner = &path.learner;
    println!(
        "\nLEARNING PATH: {} | {}",
        learner.name,
        subject.to_uppercase()
    );
    println!(
        "Grade: {} | Learning Style: {}",
        learner.grade, learner.learning_style
    );
    println!("Total units: {}", path.len());
    println!("{}", "=".repeat(60));

    for (i, content) in path.content_sequence.iter().enumerate() {
        println!(
            "\n{}. [{}] {}",
            i + 1,
            content.difficulty.as_str().to_uppercase(),
            content.topic
        );
        println!(
            "   Type: {} | Grade: {}",
            content.content_type, content.grade_level
        );
        println!("   NCF: {}", content.ncf_alignment.join(", "));
        println!("   Preview: {}", preview(&content.body, preview_chars));
    }
    println!();
}

/// The first `max_chars` characters of `body`, with "..." when truncated.
fn preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_bodies() {
        assert_eq!(preview("short", 150), "short");
        assert_eq!(preview("exactly", 7), "exactly");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("abcdef", 3), "abc...");
        // Multi-byte characters are counted once.
        assert_eq!(preview("ax²+bx+c=0", 3), "ax²...");
    }
}
