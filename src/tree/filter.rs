//! Name-based ignore rules for tree walking

use std::collections::BTreeSet;

use super::config::DEFAULT_OUTPUT_NAME;

/// Patterns ignored when no other rule set is supplied.
const DEFAULT_PATTERNS: &[&str] = &[
    // Directories
    ".git",
    ".vscode",
    "node_modules",
    "__pycache__",
    "dist",
    "build",
    "venv",
    ".venv",
    "env",
    ".env",
    "target",
    "out",
    "bin",
    "obj",
    // Files
    ".DS_Store",
    "*.pyc",
    "*.log",
    "*.tmp",
    "*.swp",
    "*.swo",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    DEFAULT_OUTPUT_NAME,
];

const HIDDEN_MARKER: char = '.';

/// Immutable set of ignore rules.
///
/// A pattern is either an exact name or a suffix pattern of the form `*.ext`.
/// The two kinds live in separate collections and are never cross-checked:
/// `*.log` does not match an entry literally named `*.log` through the literal
/// set, and `yarn.lock` is never treated as a suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    literals: BTreeSet<String>,
    /// Stored without the leading `*`, e.g. `.pyc`.
    suffixes: Vec<String>,
    hidden_marker: Option<char>,
}

impl IgnoreRules {
    /// Build a rule set from patterns. Hidden entries are ignored.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .fold(Self::empty(), |rules, p| rules.with_pattern(p.as_ref()))
            .with_hidden_marker(Some(HIDDEN_MARKER))
    }

    /// A rule set that ignores nothing, not even hidden entries.
    pub fn empty() -> Self {
        Self {
            literals: BTreeSet::new(),
            suffixes: Vec::new(),
            hidden_marker: None,
        }
    }

    /// Add one more pattern, classified the same way as in `new`.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        if let Some(suffix) = pattern.strip_prefix("*.") {
            let suffix = format!(".{}", suffix);
            if !self.suffixes.contains(&suffix) {
                self.suffixes.push(suffix);
            }
        } else if !pattern.is_empty() {
            self.literals.insert(pattern.to_string());
        }
        self
    }

    /// Set the leading character that marks a hidden entry; `None` shows hidden entries.
    pub fn with_hidden_marker(mut self, marker: Option<char>) -> Self {
        self.hidden_marker = marker;
        self
    }

    /// Check if an entry with this name must be left out of the tree.
    pub fn is_ignored(&self, name: &str) -> bool {
        if self.hidden_marker.is_some_and(|m| name.starts_with(m)) {
            return true;
        }
        if self.literals.contains(name) {
            return true;
        }
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn hidden_marker(&self) -> Option<char> {
        self.hidden_marker
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS)
    }
}
