//! Configuration types for the tree walker

use std::path::PathBuf;

use super::filter::IgnoreRules;

/// File name the tree is written to when no other name is given.
pub const DEFAULT_OUTPUT_NAME: &str = "project_structure.txt";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub rules: IgnoreRules,
    pub max_depth: Option<usize>,
    /// Descend into directories reached through symbolic links.
    /// Cycles are cut either way.
    pub follow_symlinks: bool,
    /// One exact path left out of the tree, normally the file being written.
    /// Other entries with the same name are still listed.
    pub exclude_path: Option<PathBuf>,
}

impl WalkerConfig {
    pub fn with_rules(rules: IgnoreRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            rules: IgnoreRules::default(),
            max_depth: None,
            follow_symlinks: true,
            exclude_path: None,
        }
    }
}
