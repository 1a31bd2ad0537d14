use log::debug;

use super::model::{is_prior_output, DateRange, FileDescriptor};
use crate::error::Result;

/// Decide whether a directory entry belongs in the combined output.
///
/// An entry qualifies when:
/// * its name does not contain `"combine"` (prior outputs are never re-read),
/// * it carries the requested `detector_id` prefix and `file_type` suffix,
/// * the date embedded in its name falls inside `range`, inclusive.
///
/// The embedded date is only decoded once the prefix/suffix match holds; a
/// content-matching name without the fixed-width date digits is a hard
/// [`Parse`](crate::Error::Parse) error, never a silent skip.
pub fn select_entry(
    name: &str,
    file_type: &str,
    detector_id: &str,
    range: &DateRange,
) -> Result<Option<FileDescriptor>> {
    if is_prior_output(name) {
        debug!("skipping prior combine output {name:?}");
        return Ok(None);
    }

    if !(name.ends_with(file_type) && name.starts_with(detector_id)) {
        debug!("skipping {name:?}: wrong detector or file type");
        return Ok(None);
    }

    let descriptor = FileDescriptor::parse(name)?;
    if !range.contains(descriptor.date) {
        debug!("skipping {name:?}: {} outside range", descriptor.date);
        return Ok(None);
    }

    Ok(Some(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn range() -> DateRange {
        DateRange::from_compact("2021.0101", "2021.0102").unwrap()
    }

    #[test]
    fn qualifying_entry_is_selected() {
        let fd = select_entry("6148_2021.0101_00.thresh", "thresh", "6148", &range())
            .unwrap()
            .expect("entry should qualify");
        assert_eq!(fd.name, "6148_2021.0101_00.thresh");
    }

    #[test]
    fn prior_output_is_never_selected() {
        // Even though the name also carries a valid prefix and suffix.
        let fd = select_entry("6148.combine__.thresh", "thresh", "6148", &range()).unwrap();
        assert!(fd.is_none());
    }

    #[test]
    fn wrong_prefix_or_suffix_is_skipped() {
        assert!(select_entry("6119_2021.0101_00.thresh", "thresh", "6148", &range())
            .unwrap()
            .is_none());
        assert!(select_entry("6148_2021.0101_00.csv", "thresh", "6148", &range())
            .unwrap()
            .is_none());
    }

    #[test]
    fn out_of_range_date_is_skipped() {
        assert!(select_entry("6148_2021.0215_00.thresh", "thresh", "6148", &range())
            .unwrap()
            .is_none());
    }

    #[test]
    fn content_match_with_bad_date_is_an_error() {
        assert!(matches!(
            select_entry("6148_x.thresh", "thresh", "6148", &range()),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn mismatched_entry_with_bad_date_is_not_parsed() {
        // Date decoding only happens after the content match.
        assert!(select_entry("README.thresh.bak", "thresh", "6148", &range())
            .unwrap()
            .is_none());
    }
}
