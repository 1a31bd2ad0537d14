//! detkit – utilities for a detector data-processing workflow.
//!
//! The crate bundles the small tools the workflow needs around its raw
//! day-files:
//!
//! * [`combine`] – concatenate time-bounded detector log files into one
//!   output file, deduplicating `#` comment headers (the core);
//! * [`julian`] – calendar timestamp ↔ fractional Julian day conversions;
//! * [`signal`] – 1-D smoothing via windowed convolution;
//! * [`timefmt`] – normalisation of compact weather-API clock strings;
//! * [`peek`] – non-advancing line peeking on seekable readers.
//!
//! All operations are synchronous and single-threaded; failures surface as
//! the typed [`Error`] with no local recovery.

pub mod combine;
pub mod error;
pub mod julian;
pub mod peek;
pub mod signal;
pub mod timefmt;

pub use combine::{combine_files, DateRange, FileDescriptor};
pub use error::{Error, Result};
pub use signal::Window;
