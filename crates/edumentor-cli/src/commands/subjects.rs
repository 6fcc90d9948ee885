//! The `edumentor subjects` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::config::load_config_from;

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = load_config_from(config_path)?;
    let library = config.build_library()?;

    println!("\nAVAILABLE SUBJECTS:");

    let counts = library.subject_counts();
    if counts.is_empty() {
        println!("  (no content loaded)");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Subject", "Content units"]);
    for (subject, count) in &counts {
        table.add_row(vec![Cell::new(subject), Cell::new(count)]);
    }
    println!("{table}");

    Ok(())
}
