//! Calendar timestamp ↔ fractional Julian day conversions.
//!
//! A Julian day here is the continuous day count from the standard epoch,
//! with the time of day carried as a fraction. Julian days start at noon,
//! so calendar midnight always lands on a `.5` boundary. All calendar
//! arithmetic is proleptic Gregorian via [`chrono::NaiveDate`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Julian day of 0001-01-01 CE at 00:00 (proleptic Gregorian), so that
/// `jd = days_from_ce + CE_EPOCH_JD` holds for midnight of any date.
const CE_EPOCH_JD: f64 = 1_721_424.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

// ---------------------------------------------------------------------------
// Calendar → Julian day
// ---------------------------------------------------------------------------

/// Convert calendar components to a fractional Julian day.
///
/// The fractional part is `(hour*3600 + minute*60 + second + µs/1e6) / 86400`.
/// Out-of-range calendar or clock components fail with
/// [`Error::InvalidArgument`].
pub fn to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> Result<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::invalid(format!("invalid calendar date {year:04}-{month:02}-{day:02}"))
    })?;
    if hour > 23 || minute > 59 || second > 59 || microsecond > 999_999 {
        return Err(Error::invalid(format!(
            "invalid clock time {hour:02}:{minute:02}:{second:02}.{microsecond:06}"
        )));
    }

    let seconds =
        f64::from(hour * 3600 + minute * 60 + second) + f64::from(microsecond) / 1_000_000.0;
    Ok(whole_day(date) + seconds / SECONDS_PER_DAY)
}

/// Convert a [`NaiveDateTime`] to a fractional Julian day.
///
/// Infallible: the datetime's components are valid by construction.
pub fn from_datetime(dt: &NaiveDateTime) -> f64 {
    let seconds = f64::from(dt.num_seconds_from_midnight())
        + f64::from(dt.nanosecond()) / 1_000_000_000.0;
    whole_day(dt.date()) + seconds / SECONDS_PER_DAY
}

fn whole_day(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_EPOCH_JD
}

// ---------------------------------------------------------------------------
// Julian day → calendar
// ---------------------------------------------------------------------------

/// Convert a fractional Julian day back to (`"MM/DD/YYYY"`, `"HH:MM:SS"`).
///
/// Seconds are obtained by rounding the fractional day to the nearest whole
/// second, then decomposed into hour/minute/second. Day, month, hour, minute
/// and second are zero-padded to two digits.
pub fn from_julian_day(jd: f64) -> Result<(String, String)> {
    let days_from_ce = (jd - CE_EPOCH_JD).floor();
    let frac = jd - CE_EPOCH_JD - days_from_ce;

    let date = NaiveDate::from_num_days_from_ce_opt(days_from_ce as i32)
        .ok_or_else(|| Error::invalid(format!("julian day {jd} out of calendar range")))?;

    let secs = (frac * SECONDS_PER_DAY).round() as u32;
    let hour = secs / 3600;
    let minute = (secs - hour * 3600) / 60;
    let second = secs - hour * 3600 - minute * 60;

    let date_str = format!("{:02}/{:02}/{}", date.month(), date.day(), date.year());
    let time_str = format!("{hour:02}:{minute:02}:{second:02}");
    Ok((date_str, time_str))
}

// ---------------------------------------------------------------------------
// String parsing
// ---------------------------------------------------------------------------

/// Parse `"MM/DD/YYYY"` (or `"MM/DD/YY"`, interpreted as 2000+YY) and
/// `"HH:MM:SS"` (seconds may carry a fractional part) into a fractional
/// Julian day.
///
/// Fields are sliced at fixed character positions, matching the file formats
/// the detector workflow emits; anything that does not fit fails with
/// [`Error::Parse`].
pub fn parse_julian_day(date: &str, time: &str) -> Result<f64> {
    let month: u32 = parse_field(date, 0..2, "month")?;
    let day: u32 = parse_field(date, 3..5, "day")?;
    let mut year: i32 = date
        .get(6..)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::parse(format!("bad year in date string {date:?}")))?;
    if date.len() - 6 == 2 {
        year += 2000;
    }

    let hour: f64 = parse_field(time, 0..2, "hour")?;
    let minute: f64 = parse_field(time, 3..5, "minute")?;
    let seconds: f64 = time
        .get(6..)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::parse(format!("bad seconds in time string {time:?}")))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::parse(format!("invalid calendar date {month:02}/{day:02}/{year}")))?;

    let partial = (hour * 3600.0 + minute * 60.0 + seconds) / SECONDS_PER_DAY;
    Ok(whole_day(date) + partial)
}

fn parse_field<T: std::str::FromStr>(
    s: &str,
    range: std::ops::Range<usize>,
    what: &str,
) -> Result<T> {
    s.get(range)
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| Error::parse(format!("bad {what} in string {s:?}")))
}

// ---------------------------------------------------------------------------
