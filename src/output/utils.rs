//! Shared helpers for laying out tree lines

/// Glyph for an entry that has siblings after it.
pub const MIDDLE_BRANCH: &str = "├── ";
/// Glyph for the last entry of a directory.
pub const FINAL_BRANCH: &str = "└── ";

/// Pick the branch glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { FINAL_BRANCH } else { MIDDLE_BRANCH }
}

/// Full line for an entry, without the trailing newline.
pub fn format_line(prefix: &str, is_last: bool, name: &str) -> String {
    format!("{}{}{}", prefix, connector(is_last), name)
}

/// First line of the tree: the root's base name marked as a directory.
pub fn format_root(name: &str) -> String {
    format!("{}/", name)
}
