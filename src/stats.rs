//! Central tendency over integer samples: mean, median, and a combined summary.
//!
//! All functions reject empty input with [`StatsError::InvalidInput`]
//! instead of producing NaN or infinity.
//!
//! # Algorithms
//!
//! - **Mean**: exact `i64` accumulation, one division at the end.
//! - **Median**: sort a private copy, then read the middle order statistic
//!   (average of the two middle values for even lengths).
//! - **Modes**: see [`crate::modes`].

use crate::error::{Result, StatsError};
use crate::modes::{modes_sorted, ModeSet};
use crate::sample::{sorted_copy, Sample};

/// Computes the arithmetic mean.
///
/// The sum is accumulated in `i64`, which cannot overflow for fewer than
/// 2³² observations of `i32`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::InvalidInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_stats::stats::mean;
/// assert!((mean(&[5, 1, 4, 1, 2]).unwrap() - 2.6).abs() < 1e-12);
/// ```
pub fn mean(data: &[i32]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::InvalidInput);
    }
    let sum: i64 = data.iter().map(|&x| i64::from(x)).sum();
    Ok(sum as f64 / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a private copy and reads the middle order statistic. For an even
/// count the two middle values are averaged in `f64`, so `[1, 2]` gives 1.5.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// [`StatsError::InvalidInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_stats::stats::median;
/// assert_eq!(median(&[3, 1, 2]).unwrap(), 2.0);
/// assert_eq!(median(&[4, 1, 3, 2]).unwrap(), 2.5);
/// ```
pub fn median(data: &[i32]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::InvalidInput);
    }
    median_sorted(&sorted_copy(data))
}

/// Computes the median of **pre-sorted** data.
///
/// Avoids a second sort when the caller already holds an ascending copy.
/// The caller must guarantee `sorted_data` is in non-decreasing order.
///
/// # Errors
/// [`StatsError::InvalidInput`] if `sorted_data` is empty.
pub fn median_sorted(sorted_data: &[i32]) -> Result<f64> {
    let n = sorted_data.len();
    if n == 0 {
        return Err(StatsError::InvalidInput);
    }
    debug_assert!(sorted_data.windows(2).all(|w| w[0] <= w[1]));
    if n % 2 == 1 {
        Ok(f64::from(sorted_data[n / 2]))
    } else {
        // Widen before adding: i32::MAX + i32::MAX must not wrap.
        Ok((f64::from(sorted_data[n / 2 - 1]) + f64::from(sorted_data[n / 2])) / 2.0)
    }
}

/// Mean, median, and modes of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub modes: ModeSet,
}

impl Summary {
    /// Computes all three statistics, sorting a single copy of the sample.
    ///
    /// The mean is taken over the original order; median and modes share
    /// the sorted copy, which is dropped before returning.
    ///
    /// # Examples
    /// ```
    /// use u_stats::sample::Sample;
    /// use u_stats::stats::Summary;
    /// let sample = Sample::new(vec![10, 20]).unwrap();
    /// let summary = Summary::of(&sample).unwrap();
    /// assert_eq!(summary.median, 15.0);
    /// assert_eq!(summary.modes.values(), &[10, 20]);
    /// ```
    pub fn of(sample: &Sample) -> Result<Self> {
        Self::from_values(sample.values())
    }

    /// Same as [`Summary::of`] for a raw slice.
    ///
    /// # Errors
    /// [`StatsError::InvalidInput`] if `data` is empty.
    pub fn from_values(data: &[i32]) -> Result<Self> {
        let mean = mean(data)?;
        let sorted = sorted_copy(data);
        let median = median_sorted(&sorted)?;
        let modes = modes_sorted(&sorted)?;
        log::debug!(
            "summary of {} observations: mean={mean}, median={median}, modes={modes}",
            data.len()
        );
        Ok(Self {
            count: data.len(),
            mean,
            median,
            modes,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert!(approx(mean(&[5, 1, 4, 1, 2]).unwrap(), 2.6));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[7]).unwrap(), 7.0);
    }

    #[test]
    fn test_mean_negative() {
        assert_eq!(mean(&[-3, -1]).unwrap(), -2.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(StatsError::InvalidInput));
    }

    #[test]
    fn test_mean_no_overflow() {
        let data = [i32::MAX; 4];
        assert_eq!(mean(&data).unwrap(), f64::from(i32::MAX));
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5, 1, 4, 1, 2]).unwrap(), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[10, 20]).unwrap(), 15.0);
        assert_eq!(median(&[1, 2]).unwrap(), 1.5);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7]).unwrap(), 7.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), Err(StatsError::InvalidInput));
        assert_eq!(median_sorted(&[]), Err(StatsError::InvalidInput));
    }

    #[test]
    fn test_median_extremes_do_not_wrap() {
        assert_eq!(
            median(&[i32::MAX, i32::MAX]).unwrap(),
            f64::from(i32::MAX)
        );
        assert_eq!(median(&[i32::MIN, i32::MAX]).unwrap(), -0.5);
    }

    #[test]
    fn test_median_leaves_input_unsorted() {
        let data = vec![3, 1, 2];
        let _ = median(&data).unwrap();
        assert_eq!(data, vec![3, 1, 2]);
    }

    // --- summary ---

    #[test]
    fn test_summary_scenarios() {
        let s = Summary::from_values(&[5, 1, 4, 1, 2]).unwrap();
        assert_eq!(s.count, 5);
        assert!(approx(s.mean, 2.6));
        assert_eq!(s.median, 2.0);
        assert_eq!(s.modes.values(), &[1]);
        assert_eq!(s.modes.frequency(), 2);

        let s = Summary::from_values(&[3, 3, 3, 3]).unwrap();
        assert_eq!((s.mean, s.median), (3.0, 3.0));
        assert_eq!(s.modes.values(), &[3]);
        assert_eq!(s.modes.frequency(), 4);

        let s = Summary::from_values(&[7]).unwrap();
        assert_eq!((s.mean, s.median), (7.0, 7.0));
        assert_eq!(s.modes.values(), &[7]);
        assert_eq!(s.modes.frequency(), 1);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::from_values(&[]), Err(StatsError::InvalidInput));
    }

    #[test]
    fn test_summary_of_sample_preserves_order() {
        let sample = Sample::new(vec![9, -2, 9, 0]).unwrap();
        let summary = Summary::of(&sample).unwrap();
        assert_eq!(summary.median, 4.5);
        assert_eq!(sample.values(), &[9, -2, 9, 0]);
    }
}
