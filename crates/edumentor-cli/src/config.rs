//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use edumentor_core::loader::load_content;
use edumentor_core::ContentLibrary;

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Top-level edumentor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdumentorConfig {
    /// Extra directories (or files) of JSON content to load.
    #[serde(default)]
    pub content_dirs: Vec<PathBuf>,
    /// Whether to start from the built-in content.
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    /// Characters of each unit's body shown by `edumentor path`.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_true() -> bool {
    true
}
fn default_preview_chars() -> usize {
    150
}

impl Default for EdumentorConfig {
    fn default() -> Self {
        Self {
            content_dirs: Vec::new(),
            include_builtin: true,
            preview_chars: default_preview_chars(),
            server: ServerConfig::default(),
        }
    }
}

impl EdumentorConfig {
    /// Build the content library this configuration describes.
    pub fn build_library(&self) -> Result<ContentLibrary> {
        let mut library = if self.include_builtin {
            ContentLibrary::new()
        } else {
            ContentLibrary::empty()
        };

        for dir in &self.content_dirs {
            let contents = load_content(dir)
                .with_context(|| format!("failed to load content from {}", dir.display()))?;
            tracing::debug!("adding {} content units from {}", contents.len(), dir.display());
            library.extend(contents);
        }

        Ok(library)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never rescanned. Unset
/// variables become empty; an unterminated `${` is left as-is.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `edumentor.toml` in the current directory
/// 2. `~/.config/edumentor/config.toml`
///
/// Environment variable overrides: `EDUMENTOR_HOST`, `EDUMENTOR_PORT`.
pub fn load_config_from(path: Option<&Path>) -> Result<EdumentorConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("edumentor.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<EdumentorConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => EdumentorConfig::default(),
    };

    // Apply env var overrides
    if let Ok(host) = std::env::var("EDUMENTOR_HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("EDUMENTOR_PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("invalid EDUMENTOR_PORT: '{port}'"))?;
    }

    config.content_dirs = config
        .content_dirs
        .iter()
        .map(|d| PathBuf::from(resolve_env_vars(&d.to_string_lossy())))
        .collect();

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("edumentor"))
}
