//! Handles all user-facing report output.
//!
//! The suite runner never writes text directly. It builds a sequence of
//! [`Line`] descriptors and hands them to an [`OutputSink`] in one flush.
//! Sinks decide how the four line kinds look on their surface.

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ============================================================================
// LINE DESCRIPTORS
// ============================================================================

/// Style of a rendered report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Text,
    Error,
    Success,
    Blank,
}

/// One report line, composed from fragments joined by a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub fragments: Vec<String>,
}

impl Line {
    fn new<S: Into<String>>(kind: LineKind, fragments: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn text<S: Into<String>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(LineKind::Text, fragments)
    }

    pub fn error<S: Into<String>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(LineKind::Error, fragments)
    }

    pub fn success<S: Into<String>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(LineKind::Success, fragments)
    }

    pub fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            fragments: Vec::new(),
        }
    }

    /// Returns the plain text of the line, without styling.
    pub fn render(&self) -> String {
        self.fragments.join(" ")
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportConfig {
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    pub fn colored() -> Self {
        Self { use_colors: true }
    }

    /// Renders a line with ANSI styling when colors are enabled.
    pub fn colorize(&self, line: &Line) -> String {
        let mut buffer = if self.use_colors {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        // an in-memory buffer only fails on allocation
        if write_styled(&mut buffer, line).is_err() {
            return line.render();
        }
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

/// Style for a line kind, or `None` for unstyled lines.
fn line_spec(kind: LineKind) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match kind {
        LineKind::Error => spec.set_fg(Some(Color::Red)),
        LineKind::Success => spec.set_fg(Some(Color::Green)).set_bold(true),
        LineKind::Text | LineKind::Blank => return None,
    };
    Some(spec)
}

/// Writes one line, without its newline, styled by its kind.
fn write_styled<W: WriteColor>(out: &mut W, line: &Line) -> io::Result<()> {
    match line_spec(line.kind) {
        Some(spec) => {
            out.set_color(&spec)?;
            write!(out, "{}", line.render())?;
            out.reset()
        }
        None => write!(out, "{}", line.render()),
    }
}

// ============================================================================
// OUTPUT SINKS: OutputBuffer, StdoutSink and NullSink implementations
// ============================================================================

/// Destination for a rendered report.
pub trait OutputSink {
    /// Writes every line, in order.
    fn flush(&mut self, lines: &[Line]) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn flush(&mut self, lines: &[Line]) -> io::Result<()> {
        (**self).flush(lines)
    }
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
    pub config: Option<ReportConfig>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that keeps ANSI color codes according to `config`.
    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            buffer: String::new(),
            config: Some(config),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.lines()
    }
}

impl OutputSink for OutputBuffer {
    fn flush(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            let text = match &self.config {
                Some(config) => config.colorize(line),
                None => line.render(),
            };
            self.buffer.push_str(&text);
            self.buffer.push('\n');
        }
        Ok(())
    }
}

/// StdoutSink: writes colored output to stdout for the CLI and `define`.
pub struct StdoutSink {
    config: ReportConfig,
}

impl StdoutSink {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl OutputSink for StdoutSink {
    fn flush(&mut self, lines: &[Line]) -> io::Result<()> {
        let stdout = StandardStream::stdout(self.config.color_choice());
        let mut stdout = stdout.lock();
        for line in lines {
            write_styled(&mut stdout, line)?;
            writeln!(stdout)?;
        }
        stdout.flush()
    }
}

/// A null output sink for running without output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn flush(&mut self, _lines: &[Line]) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_join_with_a_space() {
        let line = Line::text(["Test:", "sums"]);
        assert_eq!(line.render(), "Test: sums");
        assert_eq!(Line::blank().render(), "");
    }

    #[test]
    fn buffer_writes_one_line_per_descriptor() {
        let mut buffer = OutputBuffer::new();
        buffer
            .flush(&[Line::text(["a"]), Line::blank(), Line::error(["b"])])
            .unwrap();
        assert_eq!(buffer.as_str(), "a\n\nb\n");
    }

    #[test]
    fn colorize_wraps_styled_lines_only() {
        let config = ReportConfig::colored();
        let error = config.colorize(&Line::error(["x"]));
        assert!(error.contains("\x1b[31m"));
        assert!(error.ends_with("x\x1b[0m"));
        assert!(!error.contains("\x1b[1m"));
        let success = config.colorize(&Line::success(["y"]));
        assert!(success.contains("\x1b[32m"));
        assert!(success.contains("\x1b[1m"));
        assert!(success.ends_with("y\x1b[0m"));
        assert_eq!(config.colorize(&Line::text(["z"])), "z");
        assert_eq!(ReportConfig::plain().colorize(&Line::error(["x"])), "x");
        assert_eq!(ReportConfig::plain().colorize(&Line::success(["y"])), "y");
    }

    #[test]
    fn colored_buffer_matches_terminal_styling() {
        let line = Line::success(["done"]);
        let mut expected = Buffer::ansi();
        write_styled(&mut expected, &line).unwrap();
        writeln!(expected).unwrap();

        let mut buffer = OutputBuffer::with_config(ReportConfig::colored());
        buffer.flush(&[line]).unwrap();
        assert_eq!(buffer.as_str().as_bytes(), expected.as_slice());
    }
}
