//! Physical line sources for directive files
//!
//! A [`LineSource`] yields successive physical lines and says whether the
//! logical value they belong to is complete or continues on the next read.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::{Error, LineSourceConfig, Result};

/// Outcome of a single physical read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A line that finishes its logical value.
    Complete(String),
    /// A line whose logical value continues on the next physical line.
    NeedsContinuation(String),
    /// A piece of a physical line longer than the read limit. The rest of
    /// the same physical line follows on the next read.
    Truncated(String),
    /// No more input, either end of file or a read failure.
    EndOrFailure,
}

/// What follows a delivered piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// The logical value is finished.
    Done,
    /// The value continues on the next physical line.
    NextLine,
    /// The current physical line continues, mid-token if need be.
    SameLine,
}

impl LineRead {
    /// The delivered text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Complete(text) | Self::NeedsContinuation(text) | Self::Truncated(text) => {
                Some(text)
            }
            Self::EndOrFailure => None,
        }
    }

    /// True when more text is pending for the current logical value.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::NeedsContinuation(_) | Self::Truncated(_))
    }

    /// Split into the delivered text and what follows it.
    ///
    /// ```
    /// use optfile_source::{LineRead, Tail};
    ///
    /// let read = LineRead::Truncated("10.0".into());
    /// assert_eq!(read.into_parts(), Some(("10.0".to_string(), Tail::SameLine)));
    /// assert_eq!(LineRead::EndOrFailure.into_parts(), None);
    /// ```
    pub fn into_parts(self) -> Option<(String, Tail)> {
        match self {
            Self::Complete(text) => Some((text, Tail::Done)),
            Self::NeedsContinuation(text) => Some((text, Tail::NextLine)),
            Self::Truncated(text) => Some((text, Tail::SameLine)),
            Self::EndOrFailure => None,
        }
    }
}

/// Source of physical lines for the directive loader.
pub trait LineSource {
    /// Read the next physical line.
    fn read_line(&mut self) -> LineRead;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> LineRead {
        (**self).read_line()
    }
}

/// Line source over any buffered reader.
///
/// Strips line terminators, honours a trailing continuation character and
/// splits physical lines longer than the configured maximum into chunks.
/// Every chunk but the last is [`LineRead::Truncated`]; the last one carries
/// the line's own continuation state.
#[derive(Debug)]
pub struct TextLineSource<R> {
    reader: R,
    config: LineSourceConfig,
    /// Unsent remainder of the current physical line, with its continuation flag.
    pending: Option<(String, bool)>,
}

impl<R: BufRead> TextLineSource<R> {
    pub fn new(reader: R, config: LineSourceConfig) -> Self {
        Self {
            reader,
            config,
            pending: None,
        }
    }

    fn next_physical(&mut self) -> Option<(String, bool)> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                let continued = match self.config.continuation {
                    Some(marker) if buf.ends_with(marker) => {
                        buf.pop();
                        true
                    }
                    _ => false,
                };
                Some((buf, continued))
            }
            Err(e) => {
                tracing::warn!("Line read failed, treating as end of input: {}", e);
                None
            }
        }
    }

    fn take_chunk(&mut self, mut text: String, continued: bool) -> LineRead {
        let max = self.config.max_line_len.max(1);
        if text.len() <= max {
            return if continued {
                LineRead::NeedsContinuation(text)
            } else {
                LineRead::Complete(text)
            };
        }

        let mut cut = max;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            // A single character wider than the limit still has to make progress
            cut = text.chars().next().map(char::len_utf8).unwrap_or(text.len());
        }

        let rest = text.split_off(cut);
        self.pending = Some((rest, continued));
        LineRead::Truncated(text)
    }
}

impl<R: BufRead> LineSource for TextLineSource<R> {
    fn read_line(&mut self) -> LineRead {
        let (text, continued) = match self.pending.take() {
            Some(pending) => pending,
            None => match self.next_physical() {
                Some(line) => line,
                None => return LineRead::EndOrFailure,
            },
        };
        self.take_chunk(text, continued)
    }
}

/// In-memory line source with pre-classified reads.
///
/// # Example
///
/// ```
/// use optfile_source::{LineRead, LineSource, ScriptedLineSource};
///
/// let mut source = ScriptedLineSource::new()
///     .continued("Hosts a,")
///     .complete("b");
/// assert_eq!(source.read_line(), LineRead::NeedsContinuation("Hosts a,".into()));
/// assert_eq!(source.read_line(), LineRead::Complete("b".into()));
/// assert_eq!(source.read_line(), LineRead::EndOrFailure);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedLineSource {
    reads: VecDeque<LineRead>,
}

impl ScriptedLineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source where every line is complete on its own.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reads: lines
                .into_iter()
                .map(|line| LineRead::Complete(line.into()))
                .collect(),
        }
    }

    /// Queue a line that finishes its logical value.
    pub fn complete(mut self, line: impl Into<String>) -> Self {
        self.reads.push_back(LineRead::Complete(line.into()));
        self
    }

    /// Queue a line whose logical value continues on the next read.
    pub fn continued(mut self, line: impl Into<String>) -> Self {
        self.reads.push_back(LineRead::NeedsContinuation(line.into()));
        self
    }

    /// Queue a piece of a physical line cut at the read limit.
    pub fn truncated(mut self, chunk: impl Into<String>) -> Self {
        self.reads.push_back(LineRead::Truncated(chunk.into()));
        self
    }

    /// Number of reads still queued.
    pub fn remaining(&self) -> usize {
        self.reads.len()
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> LineRead {
        self.reads.pop_front().unwrap_or(LineRead::EndOrFailure)
    }
}

/// An opened directive file.
///
/// Closing is dropping: the handle is released with the value.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    file: File,
}

impl ConfigFile {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_open(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn the handle into a line source with the given settings.
    pub fn into_line_source(self, config: LineSourceConfig) -> TextLineSource<BufReader<File>> {
        TextLineSource::new(BufReader::new(self.file), config)
    }
}
