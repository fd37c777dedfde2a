//! Input and output surfaces for the game loop.
//!
//! The game never touches stdin/stdout directly. It reads lines from an
//! [`InputSource`] and writes `(text, Emphasis)` pairs to an [`OutputSink`];
//! the console implementations live here alongside in-memory ones for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// Presentation hint attached to each piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Banner,
    Prompt,
    Info,
    Success,
    Warning,
    Treasure,
    Muted,
}

impl Emphasis {
    fn color(self) -> Option<Color> {
        match self {
            Emphasis::Plain => None,
            Emphasis::Banner => Some(Color::Yellow),
            Emphasis::Prompt | Emphasis::Info => Some(Color::Cyan),
            Emphasis::Success => Some(Color::Green),
            Emphasis::Warning => Some(Color::Red),
            Emphasis::Treasure => Some(Color::Magenta),
            Emphasis::Muted => Some(Color::DarkGrey),
        }
    }
}

pub trait OutputSink {
    /// Write `text` as-is; callers supply their own newlines.
    fn emit(&mut self, text: &str, emphasis: Emphasis);

    /// Start a fresh screen. No-op unless the surface supports it.
    fn clear(&mut self) {}
}

pub trait InputSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        (**self).emit(text, emphasis)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Writes to a terminal, colouring output when it is one.
pub struct ConsoleOutput<W = io::Stdout> {
    color: bool,
    out: W,
}

impl ConsoleOutput {
    pub fn new(color_wanted: bool) -> Self {
        ConsoleOutput::with_writer(io::stdout(), color_wanted && atty::is(atty::Stream::Stdout))
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Write to `out`; `color` is taken as given, with no terminal check.
    pub fn with_writer(out: W, color: bool) -> Self {
        ConsoleOutput { color, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        let res = match emphasis.color().filter(|_| self.color) {
            Some(color) => queue!(self.out, SetForegroundColor(color), Print(text), ResetColor),
            None => queue!(self.out, Print(text)),
        };
        if let Err(e) = res.and_then(|_| self.out.flush()) {
            log::warn!("console write failed: {}", e);
        }
    }

    fn clear(&mut self) {
        self.emit("\n", Emphasis::Plain);
    }
}

/// Reads lines from any buffered reader (stdin in the binary).
pub struct LineInput<B> {
    reader: B,
}

impl<B: BufRead> LineInput<B> {
    pub fn new(reader: B) -> Self {
        LineInput { reader }
    }
}

impl<B: BufRead> InputSource for LineInput<B> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Pre-recorded answers, consumed in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Keeps everything emitted, for inspection in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingOutput {
    pub entries: Vec<(String, Emphasis)>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text concatenated in emission order.
    pub fn text(&self) -> String {
        self.entries.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(t, _)| t.contains(needle))
    }

    pub fn emphasis_of(&self, needle: &str) -> Option<Emphasis> {
        self.entries
            .iter()
            .find(|(t, _)| t.contains(needle))
            .map(|(_, e)| *e)
    }
}

impl OutputSink for RecordingOutput {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        self.entries.push((text.to_string(), emphasis));
    }
}
