//! Sprout - writes a filtered ASCII tree of a project directory to a file

pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

pub use output::{FileFormatter, StatusPrinter};
pub use tree::{
    DEFAULT_OUTPUT_NAME, IgnoreRules, ListingError, StreamingOutput, TreeWalker, WalkSummary,
    WalkerConfig,
};

/// Render the tree rooted at `root` into `output_path`, truncating any previous content.
///
/// The output file itself is never listed. Listing failures inside the tree are
/// passed to `on_error` as they happen and collected in the returned summary;
/// only failures to create or write the output file are returned as errors.
pub fn write_structure<F>(
    root: &Path,
    output_path: &Path,
    mut config: WalkerConfig,
    mut on_error: F,
) -> io::Result<WalkSummary>
where
    F: FnMut(&ListingError),
{
    let file = File::create(output_path)?;
    config.exclude_path = Some(output_path.to_path_buf());
    let mut formatter = FileFormatter::new(BufWriter::new(file));
    TreeWalker::new(config).walk_with(root, &mut formatter, &mut on_error)
}
