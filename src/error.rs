//! Error type shared by the loader and the statistics engine.

use core::num::ParseIntError;
use thiserror::Error;

/// Errors raised while loading a sample or computing a statistic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No observations were supplied.
    #[error("no observations supplied")]
    InvalidInput,

    /// A token could not be read as a signed integer.
    #[error("`{token}` is not a valid integer: {source}")]
    InvalidObservation {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = core::result::Result<T, StatsError>;
