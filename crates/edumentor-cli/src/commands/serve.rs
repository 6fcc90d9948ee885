//! The `edumentor serve` command.

use std::path::Path;

use anyhow::Result;

use edumentor_server::{AppState, EDUCATIONAL_DISCLAIMER};

use crate::config::load_config_from;

pub async fn execute(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = load_config_from(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("\nDISCLAIMER: {EDUCATIONAL_DISCLAIMER}\n");

    let library = config.build_library()?;
    tracing::info!(
        "serving {} content units across {} subjects",
        library.len(),
        library.all_subjects().len()
    );

    edumentor_server::start(&config.server.bind_addr(), AppState::new(library)).await
}
