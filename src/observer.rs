//! Change notification for rendering collaborators

use crate::types::OrientationAngles;

/// Receives orientation updates
///
/// Called once for every sample that changes the published angles. Closures
/// taking an [`OrientationAngles`] implement this trait.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::{OrientationAngles, OrientationEstimator, SensorKind};
///
/// let mut estimator = OrientationEstimator::new();
/// let mut redraws = 0;
/// let mut redraw = |_: OrientationAngles| redraws += 1;
///
/// estimator.on_sample_observed(SensorKind::Accelerometer, Vector3::new(0.0, 0.0, 9.8), &mut redraw);
/// estimator.on_sample_observed(SensorKind::Magnetometer, Vector3::new(0.0, 10.0, 0.0), &mut redraw);
///
/// assert_eq!(redraws, 1);
/// ```
pub trait OrientationObserver {
    /// Handle newly published angles
    fn on_orientation(&mut self, angles: OrientationAngles);
}

impl<F> OrientationObserver for F
where
    F: FnMut(OrientationAngles),
{
    fn on_orientation(&mut self, angles: OrientationAngles) {
        self(angles)
    }
}

/// Observer that keeps only the most recent update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestAngles {
    latest: Option<OrientationAngles>,
    updates: u32,
}

impl LatestAngles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last angles received, if any
    pub fn latest(&self) -> Option<OrientationAngles> {
        self.latest
    }

    /// Number of updates received
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl OrientationObserver for LatestAngles {
    fn on_orientation(&mut self, angles: OrientationAngles) {
        self.latest = Some(angles);
        self.updates = self.updates.saturating_add(1);
    }
}
