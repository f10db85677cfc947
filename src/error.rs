//! Error types.

use thiserror::Error;

/// Invalid input to the gradient functions.
///
/// Degenerate geometry (zero width ranges, coincident stops) is never
/// an error; only inputs violating the ordering preconditions are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("A gradient needs at least one color stop")]
    TooFewStops,

    #[error("Stop {index} is not finite or lies before the previous stop")]
    StopsNotSorted { index: usize },

    #[error("Tick {index} is not greater than the previous tick")]
    TicksNotIncreasing { index: usize },

    #[error("Tick {index} ({value}) is outside [0, 1]")]
    TickOutOfRange { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
