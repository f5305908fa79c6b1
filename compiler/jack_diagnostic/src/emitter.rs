//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and,
//! when the source text is attached, a snippet of the offending line.

use std::io::Write;

use crate::{Diagnostic, Label, LineIndex};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source file the diagnostics point into.
struct SourceContext<'src> {
    path: &'src str,
    index: LineIndex<'src>,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render as `path:line:col` with a
    /// snippet instead of raw byte ranges.
    #[must_use]
    pub fn with_source(mut self, path: &'src str, text: &'src str) -> Self {
        self.source = Some(SourceContext {
            path,
            index: LineIndex::new(text),
        });
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let color = colors::ERROR;
        let marker = "-->";

        let Some(source) = &self.source else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let start = source.index.line_col(label.span.start);
        let path = source.path;
        let line_text = source.index.line_text(start.line).unwrap_or("");
        let gutter = " ".repeat(start.line.to_string().len());

        // Underline at least one column, at most to the end of the line.
        let line_chars = line_text.chars().count();
        let col = start.col as usize;
        let span_chars = if label.span.end > label.span.start {
            let end = source.index.line_col(label.span.end);
            if end.line == start.line {
                (end.col as usize).saturating_sub(col)
            } else {
                line_chars.saturating_sub(col - 1)
            }
        } else {
            0
        };
        let carets = "^".repeat(span_chars.max(1));
        let padding = " ".repeat(col - 1);

        let _ = writeln!(self.writer, "{gutter}{marker} {path}:{start}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{} | {line_text}", start.line);
        let _ = write!(self.writer, "{gutter} | {padding}");
        self.write_colored(&carets, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
