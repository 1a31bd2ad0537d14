//! Normalisation of compact clock strings from the weather API.
//!
//! The API reports times as bare digit strings (`"900"` for 9:00, `"1430"`
//! for 14:30, `"0"` for midnight) that downstream date parsers cannot read.

use crate::error::{Error, Result};

/// Reformat a compact digit string as `"H:MM"` / `"HH:MM"`.
///
/// Length 4 splits as two hour digits plus two minute digits; length 3 as
/// one hour digit plus two minute digits (the hour is *not* zero-padded, so
/// `"900"` becomes `"9:00"`); length 1 always yields `"00:00"`. Any other
/// length fails with [`Error::InvalidArgument`].
pub fn normalize_time(compact: &str) -> Result<String> {
    match compact.len() {
        4 => Ok(format!("{}:{}", &compact[0..2], &compact[2..])),
        3 => Ok(format!("{}:{}", &compact[0..1], &compact[1..])),
        1 => Ok("00:00".to_string()),
        n => Err(Error::invalid(format!(
            "compact time must have 1, 3 or 4 digits (got {n}: {compact:?})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digit_hour_is_not_padded() {
        assert_eq!(normalize_time("900").unwrap(), "9:00");
    }

    #[test]
    fn four_digit_splits_evenly() {
        assert_eq!(normalize_time("1430").unwrap(), "14:30");
    }

    #[test]
    fn single_digit_is_midnight() {
        assert_eq!(normalize_time("5").unwrap(), "00:00");
    }

    #[test]
    fn other_lengths_are_rejected() {
        for bad in ["", "12", "12345"] {
            assert!(matches!(
                normalize_time(bad),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}
