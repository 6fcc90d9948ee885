//! The `edumentor init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let files = [
        ("edumentor.toml", SAMPLE_CONFIG),
        ("learner.json", SAMPLE_LEARNER),
        ("answers.json", SAMPLE_ANSWERS),
    ];

    for (name, content) in files {
        if Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content)?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Edit learner.json with the learner's grade and learning style");
    println!("  2. Run: edumentor path --learner learner.json --subject math");
    println!("  3. Run: edumentor assess --learner-id student-001 --subject math --answers answers.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# edumentor configuration

# Extra directories of JSON content files, added after the built-in content.
content_dirs = []
include_builtin = true

# Characters of each unit shown by `edumentor path`.
preview_chars = 150

[server]
host = "127.0.0.1"
port = 8000
"#;

const SAMPLE_LEARNER: &str = r#"{
  "learner_id": "student-001",
  "name": "Sample Learner",
  "age": 10,
  "grade": 5,
  "language": "en",
  "strengths": ["english"],
  "weaknesses": ["math"],
  "learning_style": "visual"
}
"#;

const SAMPLE_ANSWERS: &str = r#"[
  {"question_id": "q1", "correct": true, "topic": "Fractions"},
  {"question_id": "q2", "correct": "false", "topic": "Fractions"},
  {"question_id": "q3", "correct": true, "topic": "Geometry"}
]
"#;
