//! Page file discovery with pattern-based filtering.
//!
//! Lists the page files directly inside the input directory in
//! lexical file-name order. Unreadable entries are logged and
//! skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{ChunkError, Result};

/// Input directory walker
pub struct PageFileWalker {
    /// Patterns to include (e.g., "*.json")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "*_chunks.json")
    exclude_patterns: Vec<Pattern>,
}

impl PageFileWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for file names to include
    /// * `exclude_patterns` - Glob patterns for file names to exclude
    ///
    /// # Returns
    ///
    /// A new `PageFileWalker` or an error if a pattern is invalid
    pub fn new(include_patterns: Vec<String>, exclude_patterns: Vec<String>) -> Result<Self> {
        let include = include_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    ChunkError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    ChunkError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            exclude_patterns: exclude,
        })
    }

    /// Collect matching page files from `dir`, sorted by file name.
    ///
    /// Only regular files directly inside `dir` are considered;
    /// hidden files are ignored.
    pub fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ChunkError::InvalidPath(format!(
                "Input directory {} does not exist or is not a directory",
                dir.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() || is_hidden(&entry) {
                        continue;
                    }

                    if self.matches_patterns(entry.path()) {
                        files.push(entry.into_path());
                    } else {
                        tracing::debug!("Skipping non-matching file: {:?}", entry.path());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        Ok(files)
    }

    /// Check a file name against the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => return false,
        };

        // If no include patterns, include all
        let matches_include =
            self.include_patterns.is_empty() || self.include_patterns.iter().any(|p| p.matches(name));

        matches_include && !self.exclude_patterns.iter().any(|p| p.matches(name))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
