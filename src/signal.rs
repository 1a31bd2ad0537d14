//! 1-D signal smoothing by convolution with a scaled window.
//!
//! The input is reflect-padded by `window_len - 1` samples at each end,
//! convolved in valid mode with a sum-normalised window, and trimmed back to
//! the input length. A flat window gives a plain moving average.

use std::f64::consts::PI;
use std::str::FromStr;

use ndarray::Array1;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Window kinds
// ---------------------------------------------------------------------------

/// Supported smoothing window shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// All-ones window (moving average).
    Flat,
    Hanning,
    Hamming,
    Bartlett,
    Blackman,
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(Window::Flat),
            "hanning" => Ok(Window::Hanning),
            "hamming" => Ok(Window::Hamming),
            "bartlett" => Ok(Window::Bartlett),
            "blackman" => Ok(Window::Blackman),
            other => Err(Error::invalid(format!(
                "window must be one of flat, hanning, hamming, bartlett, blackman (got {other:?})"
            ))),
        }
    }
}

impl Window {
    /// Window coefficients of length `len`, matching numpy's generators.
    fn coefficients(self, len: usize) -> Array1<f64> {
        let m = len as f64;
        Array1::from_shape_fn(len, |k| {
            let k = k as f64;
            match self {
                Window::Flat => 1.0,
                Window::Hanning => 0.5 - 0.5 * (2.0 * PI * k / (m - 1.0)).cos(),
                Window::Hamming => 0.54 - 0.46 * (2.0 * PI * k / (m - 1.0)).cos(),
                Window::Bartlett => {
                    let half = (m - 1.0) / 2.0;
                    (half - (k - half).abs()) / half
                }
                Window::Blackman => {
                    0.42 - 0.5 * (2.0 * PI * k / (m - 1.0)).cos()
                        + 0.08 * (4.0 * PI * k / (m - 1.0)).cos()
                }
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Smoothing
// ---------------------------------------------------------------------------

/// Smooth `x` with a window of odd length `window_len`.
///
/// Returns a signal of the same length as the input. `window_len < 3`
/// returns the input unchanged; an even `window_len` or one not smaller than
/// the signal fails with [`Error::InvalidArgument`].
pub fn smooth(x: &Array1<f64>, window_len: usize, window: Window) -> Result<Array1<f64>> {
    if x.len() < window_len {
        return Err(Error::invalid(
            "input vector needs to be bigger than window size",
        ));
    }
    if window_len < 3 {
        return Ok(x.clone());
    }
    if window_len % 2 == 0 {
        return Err(Error::invalid("window length must be odd"));
    }

    let n = x.len();
    let pad = window_len - 1;

    // Reflect-pad `pad` samples at each end: the left mirror excludes the
    // first sample, the right mirror starts from the last one.
    let mut s = Vec::with_capacity(n + 2 * pad);
    for i in (1..=pad).rev() {
        s.push(x[i]);
    }
    s.extend(x.iter().copied());
    for i in (n - pad..n).rev() {
        s.push(x[i]);
    }

    let w = window.coefficients(window_len);
    let norm: f64 = w.sum();

    // Valid-mode convolution (the windows are symmetric, so correlation and
    // convolution coincide).
    let full = s.len() - window_len + 1;
    let y: Vec<f64> = (0..full)
        .map(|i| {
            let acc: f64 = (0..window_len).map(|k| s[i + k] * w[k]).sum();
            acc / norm
        })
        .collect();

    // Trim back toward the input length.
    let lo = window_len / 2 - 1;
    let hi = y.len() - (window_len / 2 + 1);
    Ok(Array1::from_iter(y[lo..hi].iter().copied()))
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_window_returns_input_unchanged() {
        let x = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
        let y = smooth(&x, 1, Window::Hanning).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn output_length_matches_input() {
        let x = Array1::from_shape_fn(50, |i| (i as f64 * 0.3).sin());
        for w in [Window::Flat, Window::Hanning, Window::Hamming, Window::Bartlett, Window::Blackman] {
            let y = smooth(&x, 11, w).unwrap();
            assert_eq!(y.len(), x.len());
        }
    }

    #[test]
    fn constant_signal_is_preserved() {
        let x = Array1::from_elem(30, 7.5);
        let y = smooth(&x, 9, Window::Blackman).unwrap();
        for v in y.iter() {
            assert!((v - 7.5).abs() < 1e-12);
        }
    }

    #[test]
    fn flat_window_is_moving_average() {
        // A moving average leaves a linear ramp linear; the trim slice sits
        // one sample behind centre, so interior samples read x[i] - 1.
        let x = Array1::from_shape_fn(20, |i| i as f64);
        let y = smooth(&x, 5, Window::Flat).unwrap();
        for i in 5..15 {
            assert!(
                (y[i] - (x[i] - 1.0)).abs() < 1e-9,
                "i={i} y={} x={}",
                y[i],
                x[i]
            );
        }
    }

    #[test]
    fn window_longer_than_signal_is_rejected() {
        let x = Array1::from(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            smooth(&x, 5, Window::Flat),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn even_window_is_rejected() {
        let x = Array1::from_elem(20, 1.0);
        assert!(matches!(
            smooth(&x, 4, Window::Flat),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn window_names_parse() {
        assert_eq!("hanning".parse::<Window>().unwrap(), Window::Hanning);
        assert!(matches!(
            "gaussian".parse::<Window>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
