//! TreeWalker - streams the tree depth-first without building it in memory

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::traversal::BaseTraversal;

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// Called once, before any other node, with the root directory's name.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// Called once per kept entry, in render order.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// A directory whose contents could not be listed.
#[derive(Debug)]
pub struct ListingError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot access '{}': {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result of a completed walk.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Subtrees left out because they could not be listed, in walk order.
    pub errors: Vec<ListingError>,
}

impl WalkSummary {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Mutable bookkeeping threaded through the recursion.
struct WalkState<'a> {
    /// Canonical paths of the directories being listed, root first.
    ancestors: &'a mut Vec<PathBuf>,
    summary: &'a mut WalkSummary,
    on_error: &'a mut dyn FnMut(&ListingError),
}

/// Depth-first tree walker.
/// Uses O(depth) memory: one sorted listing per directory on the current path.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every kept entry to `output`.
    ///
    /// Directories that cannot be listed are recorded in the summary and skipped.
    /// Errors from `output` abort the walk.
    pub fn walk<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> io::Result<WalkSummary> {
        self.walk_with(root, output, &mut |_| {})
    }

    /// Like `walk`, but also hands each listing failure to `on_error` as soon as
    /// it happens, so it is reported even if `output` fails later.
    pub fn walk_with<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
        on_error: &mut dyn FnMut(&ListingError),
    ) -> io::Result<WalkSummary> {
        let traversal = BaseTraversal::new(&self.config);
        let mut summary = WalkSummary::default();

        output.output_root(&traversal.get_name(root))?;

        if !traversal.at_max_depth(0) {
            let mut ancestors: Vec<PathBuf> = root.canonicalize().into_iter().collect();
            let mut state = WalkState {
                ancestors: &mut ancestors,
                summary: &mut summary,
                on_error,
            };
            self.walk_dir(&traversal, root, 0, "", output, &mut state)?;
        }

        output.finish(summary.dirs, summary.files)?;
        Ok(summary)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        traversal: &BaseTraversal<'_>,
        path: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
        state: &mut WalkState<'_>,
    ) -> io::Result<()> {
        let entries = match traversal.read_and_filter_entries(path) {
            Ok(e) => e,
            Err(source) => {
                log::debug!("skipping '{}': {}", path.display(), source);
                let error = ListingError {
                    path: path.to_path_buf(),
                    source,
                };
                (state.on_error)(&error);
                state.summary.errors.push(error);
                return Ok(());
            }
        };
        log::debug!("{}: {} entries", path.display(), entries.len());

        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            output.output_node(&entry.name, entry.is_dir, is_last, prefix)?;

            if !entry.is_dir {
                state.summary.files += 1;
                continue;
            }
            state.summary.dirs += 1;

            // Directories at the depth limit are shown but not descended
            if traversal.at_max_depth(depth + 1) {
                continue;
            }

            if entry.path.is_symlink() && !self.config.follow_symlinks {
                log::debug!("not following symlink '{}'", entry.path.display());
                continue;
            }

            // An unresolvable path is still listed so the failure gets reported
            let canonical = entry.path.canonicalize().ok();
            if let Some(ref c) = canonical {
                if state.ancestors.contains(c) {
                    log::warn!(
                        "not descending into '{}': it leads back to '{}'",
                        entry.path.display(),
                        c.display()
                    );
                    continue;
                }
            }

            let child_prefix = traversal.calculate_child_prefix(prefix, is_last);
            let pushed = match canonical {
                Some(c) => {
                    state.ancestors.push(c);
                    true
                }
                None => false,
            };
            let result =
                self.walk_dir(traversal, &entry.path, depth + 1, &child_prefix, output, state);
            if pushed {
                state.ancestors.pop();
            }
            result?;
        }

        Ok(())
    }
}
