use chrono::NaiveDate;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// FileDescriptor – what a day-file name encodes
// ---------------------------------------------------------------------------

/// A detector day-file name, with the calendar date decoded from its fixed
/// character positions.
///
/// Names follow the acquisition layout `DDDD_YYYY.MMDD_C.ext`: bytes `[5..9]`
/// hold the year, `[10..12]` the month, `[12..14]` the day. The slicing is
/// positional by contract; names that deviate from the layout fail with
/// [`Error::Parse`] rather than being guessed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// The full file name as listed.
    pub name: String,
    /// Calendar date embedded in the name.
    pub date: NaiveDate,
}

impl FileDescriptor {
    /// Decode the embedded date of a day-file name.
    pub fn parse(name: &str) -> Result<Self> {
        let date = embedded_date(name)?;
        Ok(FileDescriptor {
            name: name.to_string(),
            date,
        })
    }

    /// Content match: the name carries the requested detector prefix and
    /// file-type suffix.
    pub fn matches(&self, file_type: &str, detector_id: &str) -> bool {
        self.name.ends_with(file_type) && self.name.starts_with(detector_id)
    }
}

/// Whether a directory entry is the output of a previous combine run (or the
/// file currently being written) and must never be re-ingested.
pub fn is_prior_output(name: &str) -> bool {
    name.contains("combine")
}

fn embedded_date(name: &str) -> Result<NaiveDate> {
    let year: i32 = date_field(name, 5..9)?;
    let month: u32 = date_field(name, 10..12)?;
    let day: u32 = date_field(name, 12..14)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::parse(format!("file name {name:?} encodes no valid date")))
}

fn date_field<T: std::str::FromStr>(name: &str, range: std::ops::Range<usize>) -> Result<T> {
    name.get(range.clone()).and_then(|f| f.parse().ok()).ok_or_else(|| {
        Error::parse(format!(
            "file name {name:?} has no date digits at positions {range:?}"
        ))
    })
}

// ---------------------------------------------------------------------------
// DateRange – inclusive calendar interval
// ---------------------------------------------------------------------------

/// An inclusive calendar date interval. `start <= stop` is the caller's
/// responsibility; an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub stop: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, stop: NaiveDate) -> Self {
        DateRange { start, stop }
    }

    /// Build a range from two compact `"YYYY.MMDD"` strings, the same layout
    /// the day-file names embed.
    pub fn from_compact(start: &str, stop: &str) -> Result<Self> {
        Ok(DateRange {
            start: compact_date(start)?,
            stop: compact_date(stop)?,
        })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.stop
    }
}

fn compact_date(s: &str) -> Result<NaiveDate> {
    let year: i32 = date_field(s, 0..4)?;
    let month: u32 = date_field(s, 5..7)?;
    let day: u32 = date_field(s, 7..9)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::parse(format!("{s:?} is not a valid YYYY.MMDD date")))
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_decodes_fixed_positions() {
        let fd = FileDescriptor::parse("6148_2021.0103_00.thresh").unwrap();
        assert_eq!(fd.date, NaiveDate::from_ymd_opt(2021, 1, 3).unwrap());
        assert!(fd.matches("thresh", "6148"));
        assert!(fd.matches("0.thresh", "6148_"));
        assert!(!fd.matches("csv", "6148"));
        assert!(!fd.matches("thresh", "6119"));
    }

    #[test]
    fn short_name_is_a_parse_error() {
        assert!(matches!(
            FileDescriptor::parse("notes.txt"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn non_digit_date_is_a_parse_error() {
        assert!(matches!(
            FileDescriptor::parse("6148_20xx.0101_00.thresh"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn prior_output_is_flagged() {
        assert!(is_prior_output("6148.combine__.thresh"));
        assert!(!is_prior_output("6148_2021.0101_00.thresh"));
    }

    #[test]
    fn compact_range_is_inclusive() {
        let r = DateRange::from_compact("2021.0101", "2021.0103").unwrap();
        assert!(r.contains(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));
        assert!(r.contains(NaiveDate::from_ymd_opt(2021, 1, 3).unwrap()));
        assert!(!r.contains(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()));
        assert!(!r.contains(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()));
    }

    #[test]
    fn compact_range_rejects_short_strings() {
        assert!(matches!(
            DateRange::from_compact("2021", "2021.0103"),
            Err(Error::Parse(_))
        ));
    }
}
