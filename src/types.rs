//! Core types and settings for the compass and level estimator

/// Gravitational acceleration used to derive the default free-fall threshold (m/s²)
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Kind of motion sensor that produced a sample
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::{OrientationEstimator, SensorKind};
///
/// let mut estimator = OrientationEstimator::new();
/// estimator.on_sample(SensorKind::Accelerometer, Vector3::new(0.0, 0.0, 9.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Acceleration including gravity (m/s²), stored as the gravity estimate
    Accelerometer,
    /// Ambient magnetic field (µT), stored as the geomagnetic estimate
    Magnetometer,
    /// Angular rate (rad/s); accepted but never read for fusion
    Gyroscope,
}

/// Orientation derived from the latest gravity and geomagnetic samples
///
/// All angles are in degrees. `heading` is normalized to `[0, 360)` and
/// measured clockwise from magnetic North. `pitch` is the rotation about the
/// device X axis and `roll` the rotation about the device Y axis, using the
/// sign conventions of the mobile platform orientation routine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationAngles {
    /// Heading in degrees, `[0, 360)`, 0 = magnetic North
    pub heading: f32,
    /// Roll in degrees, `[-180, 180]`
    pub roll: f32,
    /// Pitch in degrees, `[-90, 90]`
    pub pitch: f32,
}

/// How gyroscope samples affect the published angles
///
/// The gyroscope vector itself is never used by either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroscopePolicy {
    /// Accelerometer and magnetometer samples recompute heading, roll and
    /// pitch together; gyroscope samples are counted and otherwise ignored.
    #[default]
    Ignore,
    /// Accelerometer and magnetometer samples recompute heading only.
    /// Gyroscope samples recompute roll and pitch only, from the stored
    /// gravity and geomagnetic vectors.
    SplitLevelUpdate,
}

/// Estimator settings
///
/// # Example
/// ```
/// use compass_level::{EstimatorSettings, GyroscopePolicy, OrientationEstimator};
///
/// let settings = EstimatorSettings {
///     gyroscope_policy: GyroscopePolicy::SplitLevelUpdate,
///     ..Default::default()
/// };
/// let estimator = OrientationEstimator::with_settings(settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorSettings {
    /// Squared gravity magnitude below which the device is considered in free fall
    ///
    /// Readings under this threshold carry no usable "down" direction and
    /// the recompute is skipped. The zero vector is always rejected.
    pub free_fall_gravity_squared: f32,
    /// Minimum magnitude of `geomagnetic × gravity`
    ///
    /// Smaller values mean the two vectors are nearly parallel (for example
    /// close to a magnetic pole) and East cannot be resolved.
    pub minimum_field_cross_norm: f32,
    /// Gyroscope handling, see [`GyroscopePolicy`]
    pub gyroscope_policy: GyroscopePolicy,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            free_fall_gravity_squared: 0.01 * STANDARD_GRAVITY * STANDARD_GRAVITY,
            minimum_field_cross_norm: 0.1,
            gyroscope_policy: GyroscopePolicy::default(),
        }
    }
}

/// Sample and recompute counters
///
/// Diagnostic information about the sample stream. Useful for telling a
/// device that never delivers magnetometer data apart from one that keeps
/// producing degenerate readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatorStatistics {
    /// Accelerometer samples received
    pub accelerometer_samples: u32,
    /// Magnetometer samples received
    pub magnetometer_samples: u32,
    /// Gyroscope samples received
    pub gyroscope_samples: u32,
    /// Recomputes that produced new angles
    pub recomputes: u32,
    /// Recomputes skipped because the input was degenerate
    pub skipped_recomputes: u32,
}
