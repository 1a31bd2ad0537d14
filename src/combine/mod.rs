//! File combination: concatenate a date-bounded set of detector day-files
//! into one output file, deduplicating `#` comment headers.
//!
//! Architecture:
//! ```text
//!  source directory
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  name → prefix/suffix + embedded-date match
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ FileDescriptor │  decoded day-file name (model)
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  strip comments, keep one shared header, copy bodies
//!   └──────────┘
//! ```
//!
//! The pass is single-threaded and makes no attempt at recovery: the first
//! unreadable input aborts the run and leaves the partially written output
//! in place.

pub mod filter;
pub mod model;
mod writer;

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;

pub use model::{DateRange, FileDescriptor};

use crate::error::{Error, Result};

/// Combine all qualifying day-files of `from_dir` into a single output file.
///
/// Qualifying entries end with `file_type`, start with `detector_id`, and
/// embed a date inside `range` (inclusive); entries whose name contains
/// `"combine"` are never read. Entries are processed in lexicographic name
/// order, so the run is reproducible across platforms.
///
/// The output is named `{detector_id}.combine{identifier}.{file_type}` and
/// written into `to_dir` (default: `from_dir`), truncating any previous run.
/// `identifier` must be exactly two characters; downstream readers rely on
/// that width.
///
/// Returns the output path. On failure the partially written output stays on
/// disk.
pub fn combine_files(
    file_type: &str,
    detector_id: &str,
    range: &DateRange,
    from_dir: &Path,
    identifier: &str,
    to_dir: Option<&Path>,
) -> Result<PathBuf> {
    if file_type.is_empty() {
        return Err(Error::invalid("file type must not be empty"));
    }
    if detector_id.is_empty() {
        return Err(Error::invalid("detector id must not be empty"));
    }
    if identifier.chars().count() != 2 {
        return Err(Error::invalid(format!(
            "identifier must be exactly two characters (got {identifier:?})"
        )));
    }

    let mut names: Vec<String> = std::fs::read_dir(from_dir)
        .map_err(|e| match e.kind() {
            // Missing and unlistable both mean the source is unusable.
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                Error::NotFound(format!("source directory {}: {e}", from_dir.display()))
            }
            _ => Error::Io(e),
        })?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_>>()?;
    names.sort();

    let out_name = format!("{detector_id}.combine{identifier}.{file_type}");
    let out_path = to_dir.unwrap_or(from_dir).join(&out_name);
    let mut out = BufWriter::new(File::create(&out_path)?);

    let mut header_written = false;
    let mut included = 0usize;
    for name in &names {
        if let Some(descriptor) = filter::select_entry(name, file_type, detector_id, range)? {
            writer::append_file(&from_dir.join(&descriptor.name), &mut out, &mut header_written)?;
            included += 1;
        }
    }
    out.flush()?;

    info!(
        "combined {included} of {} entries into {}",
        names.len(),
        out_path.display()
    );
    Ok(out_path)
}
