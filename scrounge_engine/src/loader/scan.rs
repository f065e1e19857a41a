//! Line scanning over the game's data files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Observable failure conditions while reading a data file.
///
/// Only open failures cross the reader boundary. Everything else the
/// extractor runs into (odd lines, missing fields, unparseable numbers) is
/// absorbed so a parse pass always runs to end of input.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open data file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether scanned lines keep or shed surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Lines are yielded exactly as read.
    Preserve,
    /// Leading and trailing whitespace is removed from each line.
    Trimmed,
}

/// Lazy iterator over the lines of one data file.
///
/// The stream is finite and not restartable; re-open to scan again. A read
/// error mid-file ends the stream early rather than surfacing, keeping the
/// parse total. The underlying handle closes when the scanner drops, on
/// every exit path.
pub struct LineScanner {
    lines: Lines<BufReader<File>>,
    trim: Trim,
}

impl LineScanner {
    /// Open `path` for scanning.
    ///
    /// # Errors
    /// [`DataError::Open`] if the file cannot be opened.
    pub fn open(path: &Path, trim: Trim) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            trim,
        })
    }
}

impl Iterator for LineScanner {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.lines.next()? {
            Ok(line) => Some(match self.trim {
                Trim::Preserve => line,
                Trim::Trimmed => line.trim().to_string(),
            }),
            Err(_) => None,
        }
    }
}
