//! # u-stats
//!
//! Descriptive statistics over integer samples.
//!
//! Computes the arithmetic mean, the median, and every mode (with its
//! frequency) of a non-empty collection of `i32` observations.
//!
//! ## Modules
//!
//! - [`sample`] — Parsing and validating a non-empty [`Sample`]
//! - [`stats`] — Mean, median, and the combined [`Summary`]
//! - [`modes`] — Run-length mode detection over sorted data
//! - [`report`] — Plain-text rendering of a summary
//! - [`error`] — The shared [`StatsError`]
//!
//! ## Design Philosophy
//!
//! - **Caller order is preserved**: sorting always happens on a private copy
//! - **Empty input is an error**, never NaN
//! - **Property-based testing**: invariants verified via proptest
//!
//! [`Sample`]: sample::Sample
//! [`Summary`]: stats::Summary
//! [`StatsError`]: error::StatsError

pub mod error;
pub mod modes;
pub mod report;
pub mod sample;
pub mod stats;

pub use error::{Result, StatsError};
