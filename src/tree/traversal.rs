//! Per-directory traversal helpers used by the walker.

use std::io;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;

/// Prefix segment below an entry that still has siblings after it.
pub const CONTINUATION_SEGMENT: &str = "│   ";
/// Prefix segment below the last entry of a directory.
pub const BLANK_SEGMENT: &str = "    ";

/// A directory entry that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check if we're at maximum depth
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Get the name of a path, defaulting to "." for root
    pub fn get_name(&self, path: &Path) -> String {
        path.file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string())
    }

    /// Read, filter, and sort directory entries.
    ///
    /// Only the listing itself can fail; entries that cannot be read are skipped.
    /// Names are sorted by code point so output does not depend on locale.
    pub fn read_and_filter_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = std::fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .map(|e| {
                let name = e.file_name().to_string_lossy().to_string();
                (name, e.path())
            })
            .filter(|(name, path)| !self.config.rules.is_ignored(name) && !self.is_excluded(path))
            .map(|(name, path)| Entry {
                is_dir: path.is_dir(),
                name,
                path,
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.config.exclude_path.as_deref() == Some(path)
    }

    /// Calculate the prefix for child entries
    pub fn calculate_child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", current_prefix, BLANK_SEGMENT)
        } else {
            format!("{}{}", current_prefix, CONTINUATION_SEGMENT)
        }
    }
}
