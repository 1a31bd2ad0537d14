use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Append one input file to the combined output, filtering comment lines.
///
/// Leading `#` lines are discarded, except that the first comment line seen
/// across the whole run (tracked by `header_written`) is copied verbatim as
/// the shared header. From the first non-comment line onward the remainder
/// of the file is copied byte-for-byte.
pub(super) fn append_file(
    path: &Path,
    out: &mut impl Write,
    header_written: &mut bool,
) -> Result<()> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            // Nothing but comments (or an empty file): no body to copy.
            return Ok(());
        }
        if line.first() == Some(&b'#') {
            if !*header_written {
                debug!("captured shared header from {}", path.display());
                out.write_all(&line)?;
                *header_written = true;
            }
            continue;
        }
        // First data line: emit it, then stream the rest verbatim.
        out.write_all(&line)?;
        break;
    }
    io::copy(&mut reader, out)?;
    Ok(())
}
