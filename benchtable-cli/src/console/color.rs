//! Colored Output Sinks
//!
//! Rows are written through the [`ColorSink`] capability so the reporter can
//! target a real terminal ([`TerminalSink`], ANSI colors via `colored`) or
//! record its output in memory ([`CaptureSink`]).

use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Terminal colors used by the console table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default foreground
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn ansi(self) -> Option<colored::Color> {
        match self {
            Color::Default => None,
            Color::Red => Some(colored::Color::Red),
            Color::Green => Some(colored::Color::Green),
            Color::Yellow => Some(colored::Color::Yellow),
            Color::Blue => Some(colored::Color::Blue),
            Color::Magenta => Some(colored::Color::Magenta),
            Color::Cyan => Some(colored::Color::Cyan),
            Color::White => Some(colored::Color::White),
        }
    }
}

/// Destination for colored table text
pub trait ColorSink {
    /// Write formatted text in the given color
    fn emit(&mut self, color: Color, args: fmt::Arguments<'_>) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    fn emit(&mut self, color: Color, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).emit(color, args)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// ANSI terminal sink.
///
/// Whether escape codes are written follows `colored`'s global control
/// (TTY detection, `NO_COLOR`, `CLICOLOR_FORCE`, or an explicit override).
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    writer: W,
}

impl<W: Write> TerminalSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalSink<io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ColorSink for TerminalSink<W> {
    fn emit(&mut self, color: Color, args: fmt::Arguments<'_>) -> io::Result<()> {
        match color.ansi() {
            None => self.writer.write_fmt(args),
            Some(ansi) => write!(self.writer, "{}", args.to_string().color(ansi)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// One emitted piece of text with its color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub color: Color,
    pub text: String,
}

impl Segment {
    /// Create a segment
    pub fn new(color: Color, text: impl Into<String>) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }
}

/// In-memory sink that records every emitted segment
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    segments: Vec<Segment>,
}

impl CaptureSink {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in emission order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All captured text without color information
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Captured text split into lines
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Forget everything captured so far
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl ColorSink for CaptureSink {
    fn emit(&mut self, color: Color, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.segments.push(Segment::new(color, args.to_string()));
        Ok(())
    }
}
