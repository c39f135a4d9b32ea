//! Plain-text tree formatter
//!
//! `FileFormatter` writes one line per node, with no colors and no summary
//! footer, so the result can be committed or diffed as is.

use std::io::{self, Write};

use crate::tree::StreamingOutput;

use super::utils::{format_line, format_root};

/// Streaming formatter that renders nodes into any writer.
pub struct FileFormatter<W: Write> {
    writer: W,
}

impl<W: Write> FileFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for FileFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", format_root(name))
    }

    fn output_node(
        &mut self,
        name: &str,
        _is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}", format_line(prefix, is_last, name))
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        self.writer.flush()
    }
}
