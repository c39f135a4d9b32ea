//! Console messages: the confirmation on stdout and errors on stderr

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{ListingError, WalkSummary};

const PROGRAM: &str = "sprout";

/// Writes user-facing status messages, colored when the streams allow it.
pub struct StatusPrinter<O: WriteColor, E: WriteColor> {
    out: O,
    err: E,
}

impl StatusPrinter<StandardStream, StandardStream> {
    /// Printer bound to the process's stdout and stderr.
    pub fn console(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), StandardStream::stderr(choice))
    }
}

impl<O: WriteColor, E: WriteColor> StatusPrinter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Confirm a finished run, naming the file that was written.
    pub fn success(&mut self, output_path: &Path, summary: &WalkSummary) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "Project structure written to:")?;
        self.out.reset()?;
        writeln!(self.out, " {}", output_path.display())?;
        writeln!(
            self.out,
            "{} directories, {} files",
            summary.dirs, summary.files
        )?;
        self.out.flush()
    }

    /// Report a subtree the walk had to leave out.
    pub fn listing_error(&mut self, error: &ListingError) -> io::Result<()> {
        self.warning(error)
    }

    /// A non-fatal problem; the run still produces output.
    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        self.tagged(Color::Yellow, "warning", message)
    }

    /// A fatal problem; nothing useful was produced.
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        self.tagged(Color::Red, "error", message)
    }

    fn tagged(&mut self, color: Color, tag: &str, message: impl Display) -> io::Result<()> {
        write!(self.err, "{}: ", PROGRAM)?;
        self.err
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.err, "{}:", tag)?;
        self.err.reset()?;
        writeln!(self.err, " {}", message)?;
        self.err.flush()
    }
}
