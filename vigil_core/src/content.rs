//! Best-effort text content loading for diff display.

use std::fs;
use std::path::Path;

/// The result of reading a file's text content.
///
/// Reading is deliberately best-effort: a file that cannot be opened, or that
/// looks binary, yields `Unreadable` rather than an error so that one odd file
/// never aborts a whole walk. Such files are still tracked by digest; their
/// changes are simply reported as not detectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Text content as an ordered sequence of lines (no terminators).
    Readable(Vec<String>),
    /// The file could not be opened or holds binary content.
    Unreadable,
}

impl FileContent {
    /// Read a file's content as lines, never failing.
    ///
    /// Bytes are decoded lossily (malformed UTF-8 sequences are replaced).
    /// A NUL byte anywhere in the payload marks the file as binary.
    pub fn read(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => return FileContent::Unreadable,
        };

        if bytes.contains(&0) {
            return FileContent::Unreadable;
        }

        let text = String::from_utf8_lossy(&bytes);
        FileContent::Readable(text.lines().map(str::to_string).collect())
    }

    /// The lines of this content; empty for unreadable files.
    pub fn lines(&self) -> &[String] {
        match self {
            FileContent::Readable(lines) => lines,
            FileContent::Unreadable => &[],
        }
    }

    /// Collapse to a plain line list for persistence.
    ///
    /// Unreadable content becomes an empty list, which is how it is stored in
    /// the content snapshot artifact.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            FileContent::Readable(lines) => lines,
            FileContent::Unreadable => Vec::new(),
        }
    }

    /// Whether the file's text could be read.
    pub fn is_readable(&self) -> bool {
        matches!(self, FileContent::Readable(_))
    }
}
