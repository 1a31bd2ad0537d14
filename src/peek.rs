//! Non-advancing line inspection on seekable readers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;

/// Read the next line of `reader` without advancing its position.
///
/// The returned string includes the trailing newline, if present. After the
/// call the stream is back where it started, so a subsequent read sees the
/// same line.
pub fn peek_line<R: BufRead + Seek>(reader: &mut R) -> io::Result<String> {
    let pos = reader.stream_position()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    reader.seek(SeekFrom::Start(pos))?;
    Ok(line)
}

/// Indices of the leading `#` comment lines of a file.
///
/// Stops at the first non-comment line, so a file whose first two lines are
/// comments yields `[0, 1]` regardless of later content.
pub fn comment_lines_to_skip(path: &Path) -> Result<Vec<usize>> {
    let reader = BufReader::new(File::open(path)?);
    let mut indices = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if line?.starts_with('#') {
            indices.push(i);
        } else {
            break;
        }
    }
    Ok(indices)
}
