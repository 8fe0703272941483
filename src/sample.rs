//! Loading integer observations into a validated, non-empty sample.

use crate::error::{Result, StatsError};

/// A non-empty, ordered collection of integer observations.
///
/// The original order is preserved for the lifetime of the sample.
/// Operations that need sorted data work on a copy obtained from
/// [`Sample::sorted`].
///
/// # Examples
/// ```
/// use u_stats::sample::Sample;
/// let sample = Sample::parse(["5", "-1", "4"]).unwrap();
/// assert_eq!(sample.values(), &[5, -1, 4]);
/// assert_eq!(sample.sorted(), vec![-1, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    values: Vec<i32>,
}

impl Sample {
    /// Wraps `values`, rejecting an empty vector with [`StatsError::InvalidInput`].
    pub fn new(values: Vec<i32>) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::InvalidInput);
        }
        Ok(Self { values })
    }

    /// Parses every token as an `i32`.
    ///
    /// Fails on the first token that is not an integer (including values
    /// outside the `i32` range), or with [`StatsError::InvalidInput`] when
    /// there are no tokens at all.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                token
                    .parse::<i32>()
                    .map_err(|source| StatsError::InvalidObservation {
                        token: token.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("parsed {} observations", values.len());
        Self::new(values)
    }

    /// Observations in their original order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of observations. Always at least 1.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a sample is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an ascending copy, leaving the sample untouched.
    ///
    /// # Complexity
    /// Time: O(n log n), Space: O(n)
    pub fn sorted(&self) -> Vec<i32> {
        sorted_copy(&self.values)
    }
}

pub(crate) fn sorted_copy(data: &[i32]) -> Vec<i32> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    log::trace!("sorted copy of {} observations", sorted.len());
    sorted
}
