//! Configuration management for the pdfchunk pipeline.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The resulting `Config` is handed to the pipeline at construction
//! time; nothing reads settings from globals.

use crate::core::error::{ChunkError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input/output locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding per-page JSON files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving chunk files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// PDFs whose page files are materialized on demand
    #[serde(default)]
    pub pdf_sources: Vec<PathBuf>,

    /// Page file patterns to include (glob syntax, matched on file name)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Page file patterns to exclude (glob syntax, matched on file name)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Chunk size thresholds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Minimum characters before a chunk may be emitted
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Soft upper bound on characters per chunk
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Split page text on newlines before normalizing it
    #[serde(default = "default_preserve_paragraphs")]
    pub preserve_paragraphs: bool,
}

/// How chunk files are partitioned on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// One chunk file per page file
    #[default]
    PerSourceFile,
    /// One chunk file per document
    PerDocument,
}

impl std::str::FromStr for OutputLayout {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "per_source_file" => Ok(OutputLayout::PerSourceFile),
            "per_document" => Ok(OutputLayout::PerDocument),
            other => Err(ChunkError::ConfigError(format!(
                "Unknown output layout '{other}'"
            ))),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub layout: OutputLayout,

    /// Pretty-print chunk files
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// Default value functions
fn default_input_dir() -> PathBuf {
    PathBuf::from("output/parsed_pdf")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output/chunks")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.json".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec!["*_chunks.json".to_string()]
}

fn default_min_chars() -> usize {
    200
}

fn default_max_chars() -> usize {
    600
}

fn default_preserve_paragraphs() -> bool {
    true
}

fn default_pretty() -> bool {
    true
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            pdf_sources: Vec::new(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
            preserve_paragraphs: default_preserve_paragraphs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: OutputLayout::default(),
            pretty: default_pretty(),
        }
    }
}

/// Parse an environment variable, if set
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|e| {
            ChunkError::ConfigError(format!("Invalid value '{value}' for {name}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChunkError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// The result is not validated: callers apply their own overrides
    /// first and then call [`Config::validate`].
    ///
    /// Priority order:
    /// 1. PDFCHUNK_CONFIG env var
    /// 2. XDG config file (~/.config/pdfchunk/config.toml)
    /// 3. ./pdfchunk.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PDFCHUNK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("pdfchunk.toml").exists() {
                Self::from_file("pdfchunk.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(dir) = env::var("PDFCHUNK_INPUT_DIR") {
            self.paths.input_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("PDFCHUNK_OUTPUT_DIR") {
            self.paths.output_dir = PathBuf::from(dir);
        }

        if let Some(n) = parse_env("PDFCHUNK_MIN_CHARS")? {
            self.chunking.min_chars = n;
        }
        if let Some(n) = parse_env("PDFCHUNK_MAX_CHARS")? {
            self.chunking.max_chars = n;
        }
        if let Some(b) = parse_env("PDFCHUNK_PRESERVE_PARAGRAPHS")? {
            self.chunking.preserve_paragraphs = b;
        }

        if let Ok(layout) = env::var("PDFCHUNK_OUTPUT_LAYOUT") {
            self.output.layout = layout.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.min_chars == 0 {
            return Err(ChunkError::ConfigError(
                "Minimum chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.min_chars >= self.chunking.max_chars {
            return Err(ChunkError::ConfigError(format!(
                "Minimum chunk size ({}) must be less than maximum ({})",
                self.chunking.min_chars, self.chunking.max_chars
            )));
        }

        if self.paths.input_dir.as_os_str().is_empty() {
            return Err(ChunkError::ConfigError(
                "Input directory must be set".to_string(),
            ));
        }

        if self.paths.output_dir.as_os_str().is_empty() {
            return Err(ChunkError::ConfigError(
                "Output directory must be set".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Input dir: {:?}", self.paths.input_dir);
        tracing::info!("  Output dir: {:?}", self.paths.output_dir);
        tracing::info!("  PDF sources: {}", self.paths.pdf_sources.len());
        tracing::info!(
            "  Include patterns: {:?}, exclude patterns: {:?}",
            self.paths.include_patterns,
            self.paths.exclude_patterns
        );
        tracing::info!(
            "  Chunk size: {}-{} chars",
            self.chunking.min_chars,
            self.chunking.max_chars
        );
        tracing::info!(
            "  Preserve paragraphs: {}",
            self.chunking.preserve_paragraphs
        );
        tracing::info!("  Output layout: {:?}", self.output.layout);
    }
}
