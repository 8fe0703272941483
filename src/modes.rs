//! Mode detection by run-length scanning of sorted data.
//!
//! In ascending data every distinct value occupies exactly one maximal
//! span of equal elements, a [`Run`]. The modes are the values of the
//! longest runs. [`Runs`] yields the spans lazily in a single pass, and
//! [`modes_sorted`] folds them into a [`ModeSet`] without materialising
//! any run table.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Result, StatsError};
use crate::sample::sorted_copy;

/// A maximal span of equal values in sorted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: i32,
    pub length: usize,
}

/// Iterator over the [`Run`]s of a slice.
///
/// Adjacent equal elements are grouped; the final run is yielded once the
/// slice is exhausted. On unsorted input the same value may appear in
/// several runs.
///
/// # Examples
/// ```
/// use u_stats::modes::{Run, Runs};
/// let runs: Vec<Run> = Runs::new(&[1, 1, 2, 4, 4, 4]).collect();
/// assert_eq!(runs, vec![
///     Run { value: 1, length: 2 },
///     Run { value: 2, length: 1 },
///     Run { value: 4, length: 3 },
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a [i32],
}

impl<'a> Runs<'a> {
    pub fn new(data: &'a [i32]) -> Self {
        Self { rest: data }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (&value, tail) = self.rest.split_first()?;
        let length = 1 + tail.iter().take_while(|&&x| x == value).count();
        self.rest = &self.rest[length..];
        Some(Run { value, length })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl FusedIterator for Runs<'_> {}

/// The most frequent values of a sample and their shared frequency.
///
/// Values are unique and ascending. A sample in which every value is
/// distinct has every value as a mode with frequency 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    values: Vec<i32>,
    frequency: usize,
}

impl ModeSet {
    /// Mode values in ascending order. Never empty.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of occurrences of each mode.
    pub fn frequency(&self) -> usize {
        self.frequency
    }
}

/// Renders as `v1, v2, ... (frequency: M)`.
impl fmt::Display for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " (frequency: {})", self.frequency)
    }
}

/// Finds the modes of `data` without mutating the input.
///
/// # Complexity
/// Time: O(n log n) (dominated by sort), Space: O(n)
///
/// # Errors
/// [`StatsError::InvalidInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_stats::modes::modes;
/// let m = modes(&[5, 1, 4, 1, 2]).unwrap();
/// assert_eq!(m.values(), &[1]);
/// assert_eq!(m.frequency(), 2);
/// assert_eq!(m.to_string(), "1 (frequency: 2)");
/// ```
pub fn modes(data: &[i32]) -> Result<ModeSet> {
    if data.is_empty() {
        return Err(StatsError::InvalidInput);
    }
    modes_sorted(&sorted_copy(data))
}

/// Finds the modes of **pre-sorted** data in one linear scan.
///
/// A run longer than the current best replaces the collected values; a run
/// of equal length is appended. Because the input is ascending, the
/// collected values are ascending too.
///
/// The caller must guarantee `sorted_data` is in non-decreasing order.
///
/// # Errors
/// [`StatsError::InvalidInput`] if `sorted_data` is empty.
pub fn modes_sorted(sorted_data: &[i32]) -> Result<ModeSet> {
    if sorted_data.is_empty() {
        return Err(StatsError::InvalidInput);
    }
    debug_assert!(sorted_data.windows(2).all(|w| w[0] <= w[1]));

    let (values, frequency) = Runs::new(sorted_data).fold(
        (Vec::new(), 0_usize),
        |(mut values, best), run| {
            if run.length > best {
                values.clear();
                values.push(run.value);
                (values, run.length)
            } else {
                if run.length == best {
                    values.push(run.value);
                }
                (values, best)
            }
        },
    );
    log::trace!("{} mode(s) with frequency {frequency}", values.len());
    Ok(ModeSet { values, frequency })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
