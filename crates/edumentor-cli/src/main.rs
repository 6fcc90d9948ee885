//! edumentor CLI: personalised learning paths and assessments.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "edumentor",
    version,
    about = "Personalised learning paths and assessments aligned with NCF 2023"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List available subjects in the content library
    Subjects,

    /// Generate a personalised learning path for a learner
    Path {
        /// Path to JSON file with the learner profile
        #[arg(long)]
        learner: PathBuf,

        /// Subject name (e.g. math, science, hindi)
        #[arg(long)]
        subject: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Evaluate learner answers and print an assessment result
    Assess {
        /// Learner identifier
        #[arg(long)]
        learner_id: String,

        /// Subject being assessed
        #[arg(long)]
        subject: String,

        /// Path to JSON file with a list of answer objects
        #[arg(long)]
        answers: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate content JSON files
    Validate {
        /// Path to a content file or directory
        #[arg(long)]
        content: PathBuf,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to serve on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create a starter config and sample learner/answer files
    Init,
}

#[tokio::main]
async fn main() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "edumentor=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Subjects => commands::subjects::execute(config_path),
        Commands::Path {
            learner,
            subject,
            format,
        } => commands::path::execute(learner, subject, format, config_path),
        Commands::Assess {
            learner_id,
            subject,
            answers,
            format,
        } => commands::assess::execute(learner_id, subject, answers, format),
        Commands::Validate { content } => commands::validate::execute(content),
        Commands::Serve { host, port } => commands::serve::execute(host, port, config_path).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
