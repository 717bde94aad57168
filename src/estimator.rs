//! Orientation estimator driving the compass and the digital level

use crate::buffer::SampleBuffer;
use crate::compass::{CompassPoint, classify};
use crate::error::Result;
use crate::observer::OrientationObserver;
use crate::rotation::RotationEstimate;
use crate::types::{
    EstimatorSettings, EstimatorStatistics, GyroscopePolicy, OrientationAngles, SensorKind,
};
use log::{debug, trace};
use nalgebra::Vector3;

/// Which published angles a recompute may overwrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecomputeScope {
    All,
    Heading,
    Level,
}

/// Orientation estimator
///
/// Holds the latest gravity and geomagnetic samples and the last published
/// heading, roll and pitch. Each accepted sample triggers a recompute from
/// the stored vectors. When the vectors are degenerate (no sample yet, free
/// fall, or gravity nearly parallel to the field) the recompute is skipped
/// and the previous angles stay in place.
///
/// The estimator owns all of its state and performs no locking. A
/// multi-threaded host should wrap it in a single mutex.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::{CompassPoint, OrientationEstimator, SensorKind};
///
/// let mut estimator = OrientationEstimator::new();
/// estimator.on_sample(SensorKind::Accelerometer, Vector3::new(0.0, 0.0, 9.8));
/// estimator.on_sample(SensorKind::Magnetometer, Vector3::new(-10.0, 0.0, -30.0));
///
/// assert!((estimator.heading() - 90.0).abs() < 1e-3);
/// assert_eq!(estimator.direction().unwrap(), CompassPoint::East);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    /// Estimator settings
    settings: EstimatorSettings,
    /// Latest gravity and geomagnetic vectors
    buffer: SampleBuffer,
    /// Last published angles
    angles: OrientationAngles,
    /// Rotation behind the last successful recompute
    rotation: Option<RotationEstimate>,
    /// Sample and recompute counters
    statistics: EstimatorStatistics,
}

impl OrientationEstimator {
    /// Create a new estimator with default settings
    pub fn new() -> Self {
        Self::with_settings(EstimatorSettings::default())
    }

    /// Create a new estimator with specified settings
    pub fn with_settings(settings: EstimatorSettings) -> Self {
        Self {
            settings,
            buffer: SampleBuffer::new(),
            angles: OrientationAngles::default(),
            rotation: None,
            statistics: EstimatorStatistics::default(),
        }
    }

    /// Clear stored samples, angles and counters
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.angles = OrientationAngles::default();
        self.rotation = None;
        self.statistics = EstimatorStatistics::default();
    }

    /// Replace the estimator settings
    ///
    /// Stored samples and published angles are kept; new thresholds apply
    /// from the next sample.
    pub fn set_settings(&mut self, settings: EstimatorSettings) {
        debug!("estimator settings changed: {:?}", settings);
        self.settings = settings;
    }

    /// Get current estimator settings
    pub fn settings(&self) -> EstimatorSettings {
        self.settings
    }

    /// Process one sensor sample
    ///
    /// Returns the published angles when this sample changed them, or `None`
    /// when the recompute was skipped (degenerate input) or the sample does
    /// not trigger one.
    ///
    /// # Arguments
    /// * `kind` - Sensor that produced the sample
    /// * `vector` - Raw sensor reading
    pub fn on_sample(&mut self, kind: SensorKind, vector: Vector3<f32>) -> Option<OrientationAngles> {
        match kind {
            SensorKind::Accelerometer | SensorKind::Magnetometer => {
                if kind == SensorKind::Accelerometer {
                    self.statistics.accelerometer_samples =
                        self.statistics.accelerometer_samples.saturating_add(1);
                } else {
                    self.statistics.magnetometer_samples =
                        self.statistics.magnetometer_samples.saturating_add(1);
                }
                self.buffer.update(kind, vector);
                trace!("{:?} sample stored: {:?}", kind, vector);

                match self.settings.gyroscope_policy {
                    GyroscopePolicy::Ignore => self.recompute(RecomputeScope::All),
                    GyroscopePolicy::SplitLevelUpdate => self.recompute(RecomputeScope::Heading),
                }
            }
            SensorKind::Gyroscope => {
                self.statistics.gyroscope_samples =
                    self.statistics.gyroscope_samples.saturating_add(1);

                match self.settings.gyroscope_policy {
                    GyroscopePolicy::Ignore => None,
                    GyroscopePolicy::SplitLevelUpdate => self.recompute(RecomputeScope::Level),
                }
            }
        }
    }

    /// Process one sensor sample and notify `observer` if the angles changed
    pub fn on_sample_observed<O>(
        &mut self,
        kind: SensorKind,
        vector: Vector3<f32>,
        observer: &mut O,
    ) -> Option<OrientationAngles>
    where
        O: OrientationObserver + ?Sized,
    {
        let updated = self.on_sample(kind, vector);
        if let Some(angles) = updated {
            observer.on_orientation(angles);
        }
        updated
    }

    /// Process an accelerometer sample (m/s²)
    pub fn on_accelerometer(&mut self, accelerometer: Vector3<f32>) -> Option<OrientationAngles> {
        self.on_sample(SensorKind::Accelerometer, accelerometer)
    }

    /// Process a magnetometer sample (µT)
    pub fn on_magnetometer(&mut self, magnetometer: Vector3<f32>) -> Option<OrientationAngles> {
        self.on_sample(SensorKind::Magnetometer, magnetometer)
    }

    /// Process a gyroscope sample (rad/s); the reading itself is not used
    pub fn on_gyroscope(&mut self, gyroscope: Vector3<f32>) -> Option<OrientationAngles> {
        self.on_sample(SensorKind::Gyroscope, gyroscope)
    }

    /// Last published angles
    pub fn angles(&self) -> OrientationAngles {
        self.angles
    }

    /// Heading in degrees, `[0, 360)`
    pub fn heading(&self) -> f32 {
        self.angles.heading
    }

    /// Roll in degrees
    pub fn roll(&self) -> f32 {
        self.angles.roll
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.angles.pitch
    }

    /// Compass point of the current heading
    pub fn direction(&self) -> Result<CompassPoint> {
        classify(self.angles.heading)
    }

    /// Rotation behind the last successful recompute, if any
    pub fn rotation(&self) -> Option<RotationEstimate> {
        self.rotation
    }

    /// Latest stored samples
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Sample and recompute counters
    pub fn statistics(&self) -> EstimatorStatistics {
        self.statistics
    }

    /// Recompute from the buffered vectors, keeping prior angles on failure
    fn recompute(&mut self, scope: RecomputeScope) -> Option<OrientationAngles> {
        let rotation = match RotationEstimate::try_from_vectors(
            self.buffer.gravity(),
            self.buffer.geomagnetic(),
            &self.settings,
        ) {
            Ok(rotation) => rotation,
            Err(err) => {
                self.statistics.skipped_recomputes =
                    self.statistics.skipped_recomputes.saturating_add(1);
                debug!("orientation recompute skipped: {}", err);
                return None;
            }
        };

        let computed = rotation.angles();
        match scope {
            RecomputeScope::All => self.angles = computed,
            RecomputeScope::Heading => self.angles.heading = computed.heading,
            RecomputeScope::Level => {
                self.angles.roll = computed.roll;
                self.angles.pitch = computed.pitch;
            }
        }

        self.rotation = Some(rotation);
        self.buffer.mark_clean();
        self.statistics.recomputes = self.statistics.recomputes.saturating_add(1);
        trace!(
            "orientation updated: heading={:.1} roll={:.1} pitch={:.1}",
            self.angles.heading, self.angles.roll, self.angles.pitch
        );

        Some(self.angles)
    }
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::LatestAngles;

    const EPSILON: f32 = 1e-3;

    fn level_north() -> OrientationEstimator {
        let mut estimator = OrientationEstimator::new();
        estimator.on_accelerometer(Vector3::new(0.0, 0.0, 9.8));
        estimator.on_magnetometer(Vector3::new(0.0, 10.0, 0.0));
        estimator
    }

    #[test]
    fn test_new_estimator() {
        let estimator = OrientationEstimator::new();
        assert_eq!(estimator.angles(), OrientationAngles::default());
        assert!(estimator.rotation().is_none());
        assert_eq!(estimator.direction(), Ok(CompassPoint::North));
    }

    #[test]
    fn test_first_sample_is_skipped() {
        let mut estimator = OrientationEstimator::new();
        let updated = estimator.on_accelerometer(Vector3::new(0.0, 0.0, 9.8));

        assert_eq!(updated, None);
        assert_eq!(estimator.statistics().skipped_recomputes, 1);
        assert_eq!(estimator.statistics().recomputes, 0);
        assert!(estimator.buffer().is_dirty());
    }

    #[test]
    fn test_both_samples_publish() {
        let estimator = level_north();
        let angles = estimator.angles();

        assert!(angles.heading.abs() < EPSILON);
        assert!(angles.roll.abs() < EPSILON);
        assert!(angles.pitch.abs() < EPSILON);
        assert!(estimator.rotation().is_some());
        assert!(!estimator.buffer().is_dirty());
    }

    #[test]
    fn test_degenerate_sample_keeps_angles() {
        let mut estimator = OrientationEstimator::new();
        estimator.on_accelerometer(Vector3::new(0.0, 0.0, 9.8));
        estimator.on_magnetometer(Vector3::new(-10.0, 0.0, -30.0));
        let before = estimator.angles();
        assert!((before.heading - 90.0).abs() < EPSILON);

        // Field parallel to gravity
        assert_eq!(estimator.on_magnetometer(Vector3::new(0.0, 0.0, -45.0)), None);
        assert_eq!(estimator.angles(), before);

        // Free fall
        assert_eq!(estimator.on_accelerometer(Vector3::new(0.0, 0.0, 0.1)), None);
        assert_eq!(estimator.angles(), before);

        assert_eq!(estimator.statistics().skipped_recomputes, 3);
    }

    #[test]
    fn test_gyroscope_ignored_by_default() {
        let mut estimator = level_north();
        let before = estimator.angles();

        assert_eq!(estimator.on_gyroscope(Vector3::new(1.0, 2.0, 3.0)), None);
        assert_eq!(estimator.angles(), before);
        assert_eq!(estimator.statistics().gyroscope_samples, 1);
        assert_eq!(estimator.statistics().recomputes, 1);
    }

    #[test]
    fn test_split_level_update() {
        let settings = EstimatorSettings {
            gyroscope_policy: GyroscopePolicy::SplitLevelUpdate,
            ..Default::default()
        };
        let mut estimator = OrientationEstimator::with_settings(settings);

        // Device on its side facing East: heading updates, level does not
        estimator.on_accelerometer(Vector3::new(9.8, 0.0, 0.0));
        let updated = estimator.on_magnetometer(Vector3::new(0.0, 0.0, 10.0));
        let angles = updated.expect("heading should update");
        assert!((angles.heading - 90.0).abs() < EPSILON);
        assert_eq!(angles.roll, 0.0);
        assert_eq!(angles.pitch, 0.0);

        // Gyroscope sample pulls roll and pitch from the same stored vectors
        let angles = estimator
            .on_gyroscope(Vector3::zeros())
            .expect("level should update");
        assert!((angles.heading - 90.0).abs() < EPSILON);
        assert!((angles.roll + 90.0).abs() < EPSILON);
        assert!(angles.pitch.abs() < EPSILON);
    }

    #[test]
    fn test_observer_notified_on_change_only() {
        let mut estimator = OrientationEstimator::new();
        let mut observer = LatestAngles::new();

        estimator.on_sample_observed(
            SensorKind::Accelerometer,
            Vector3::new(0.0, 0.0, 9.8),
            &mut observer,
        );
        assert_eq!(observer.updates(), 0);

        estimator.on_sample_observed(
            SensorKind::Magnetometer,
            Vector3::new(0.0, 10.0, 0.0),
            &mut observer,
        );
        estimator.on_sample_observed(SensorKind::Gyroscope, Vector3::zeros(), &mut observer);

        assert_eq!(observer.updates(), 1);
        assert_eq!(observer.latest(), Some(estimator.angles()));
    }

    #[test]
    fn test_settings_change_applies_to_next_sample() {
        let mut estimator = level_north();
        estimator.set_settings(EstimatorSettings {
            minimum_field_cross_norm: 1000.0,
            ..Default::default()
        });
        assert_eq!(estimator.settings().minimum_field_cross_norm, 1000.0);

        assert_eq!(estimator.on_magnetometer(Vector3::new(0.0, 10.0, 0.0)), None);
    }

    #[test]
    fn test_reset() {
        let mut estimator = level_north();
        estimator.on_magnetometer(Vector3::new(10.0, 0.0, 0.0));
        assert!(estimator.heading() > 0.0);

        estimator.reset();
        assert_eq!(estimator.angles(), OrientationAngles::default());
        assert_eq!(estimator.statistics(), EstimatorStatistics::default());
        assert_eq!(*estimator.buffer(), SampleBuffer::new());
        assert!(estimator.rotation().is_none());
    }
}
