//! Cell boundary resolution
//!
//! A cell is a run of lines introduced by a delimiter comment such as `#%%`
//! or `# %% Load data`. The delimiter line belongs to the cell it opens; the
//! next delimiter opens the following cell.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use ropey::Rope;

use crate::error::CellError;

/// Read-only, line-oriented view of a document
pub trait DocumentLines {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Text of the line at `index`; callers stay below `line_count()`
    fn line(&self, index: usize) -> Cow<'_, str>;
}

impl<S: AsRef<str>> DocumentLines for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[index].as_ref())
    }
}

impl<S: AsRef<str>> DocumentLines for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}

impl<S: AsRef<str>, const N: usize> DocumentLines for [S; N] {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}

/// Ropes count lines the way editors do: a trailing newline opens a final empty line.
impl DocumentLines for Rope {
    fn line_count(&self) -> usize {
        self.len_lines()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::from(Rope::line(self, index))
    }
}

/// Inclusive, 0-indexed line range of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBoundaries {
    pub start_line: usize,
    pub end_line: usize,
}

impl CellBoundaries {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self { start_line, end_line }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.lines().contains(&line)
    }

    /// Number of lines covered, delimiter included
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }
}

/// Check whether a line opens a new cell (`^#\s*%%`)
///
/// Only the prefix matters; anything after the `%%` marker is a cell title.
pub fn is_cell_delimiter(line: &str) -> bool {
    line.strip_prefix('#')
        .map(|rest| rest.trim_start().starts_with("%%"))
        .unwrap_or(false)
}

/// Find the cell enclosing `cursor_line`
///
/// A delimiter under the cursor starts the cell. Otherwise the nearest
/// delimiter above does, or the first line when there is none. The cell ends
/// on the line before the next delimiter below the cursor, or on the last line.
pub fn find_cell_boundaries<D>(document: &D, cursor_line: usize) -> Result<CellBoundaries, CellError>
where
    D: DocumentLines + ?Sized,
{
    let line_count = document.line_count();
    if cursor_line >= line_count {
        return Err(CellError::CursorOutOfBounds {
            cursor_line,
            line_count,
        });
    }

    let is_delimiter = |index: usize| is_cell_delimiter(&document.line(index));

    let start_line = if is_delimiter(cursor_line) {
        cursor_line
    } else {
        (0..cursor_line).rev().find(|&i| is_delimiter(i)).unwrap_or(0)
    };

    // The next delimiter belongs to the following cell
    let end_line = (cursor_line + 1..line_count)
        .find(|&i| is_delimiter(i))
        .map_or(line_count - 1, |next| next - 1);

    Ok(CellBoundaries { start_line, end_line })
}
