//! The `edumentor validate` command.

use std::path::PathBuf;

use anyhow::Result;

use edumentor_core::loader::{load_content, validate_content};

pub fn execute(content_path: PathBuf) -> Result<()> {
    let contents = load_content(&content_path)?;
    println!(
        "Content: {} ({} units)",
        content_path.display(),
        contents.len()
    );

    let warnings = validate_content(&contents);
    for w in &warnings {
        let prefix = w
            .content_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All content valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
