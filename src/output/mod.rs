//! Tree formatting and console reporting
//!
//! - `file` - `FileFormatter`, renders walker output as ASCII tree lines into any writer
//! - `status` - colored confirmation and error messages for the terminal
//! - `utils` - branch glyphs and line layout

mod file;
mod status;
mod utils;

pub use file::FileFormatter;
pub use status::StatusPrinter;
pub use utils::{format_line, format_root};
