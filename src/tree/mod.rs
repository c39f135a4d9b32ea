//! Directory tree walking logic
//!
//! - `IgnoreRules`: decides which entry names are left out of the tree
//! - `TreeWalker`: depth-first walk that streams every kept entry to a `StreamingOutput`

mod config;
mod filter;
mod traversal;
mod walker;

pub use config::{DEFAULT_OUTPUT_NAME, WalkerConfig};
pub use filter::IgnoreRules;
pub use walker::{ListingError, StreamingOutput, TreeWalker, WalkSummary};
