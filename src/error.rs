//! Error types for the compass and level estimator

use thiserror::Error;

/// Why a gravity/geomagnetic pair cannot produce a rotation estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// One of the vectors is still the zero "no sample yet" sentinel
    MissingSample,
    /// A vector has a NaN or infinite component
    NonFinite,
    /// Gravity magnitude is below the free-fall threshold
    FreeFall,
    /// Gravity and geomagnetic vectors are (nearly) parallel
    NearParallel,
}

/// Errors that can occur while estimating orientation or classifying a heading.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompassError {
    /// Heading outside `[0, 360)` or not a number.
    #[error("invalid heading: {0} is not in [0, 360)")]
    InvalidHeading(f32),

    /// Input vectors cannot produce a rotation estimate.
    #[error("degenerate sensor input: {0:?}")]
    DegenerateInput(DegenerateReason),
}

impl CompassError {
    /// Creates an invalid heading error.
    #[must_use]
    pub const fn invalid_heading(heading: f32) -> Self {
        Self::InvalidHeading(heading)
    }

    /// Creates a degenerate input error.
    #[must_use]
    pub const fn degenerate(reason: DegenerateReason) -> Self {
        Self::DegenerateInput(reason)
    }
}

/// Result type for compass operations.
pub type Result<T> = core::result::Result<T, CompassError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn error_invalid_heading() {
        let err = CompassError::invalid_heading(400.0);
        assert!(err.to_string().contains("invalid heading"));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn error_degenerate_input() {
        let err = CompassError::degenerate(DegenerateReason::NearParallel);
        assert!(err.to_string().contains("degenerate sensor input"));
        assert!(err.to_string().contains("NearParallel"));
    }
}
