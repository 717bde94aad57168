//! Latest-sample storage for gravity and geomagnetic vectors

use crate::math::Vector3Ext;
use crate::types::SensorKind;
use nalgebra::Vector3;

/// Most recent accelerometer and magnetometer readings
///
/// Each slot holds either the zero vector (no sample yet) or the last raw
/// reading of that kind. There is no smoothing and no history: every update
/// replaces the slot wholesale.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::{SampleBuffer, SensorKind};
///
/// let mut buffer = SampleBuffer::new();
/// buffer.update(SensorKind::Magnetometer, Vector3::new(0.0, 22.0, -40.0));
///
/// assert_eq!(buffer.geomagnetic(), Vector3::new(0.0, 22.0, -40.0));
/// assert!(buffer.is_dirty());
/// assert!(!buffer.is_ready());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleBuffer {
    /// Gravity estimate from the accelerometer
    gravity: Vector3<f32>,
    /// Geomagnetic field estimate from the magnetometer
    geomagnetic: Vector3<f32>,
    /// Set on every stored sample, cleared by the estimator after a recompute
    dirty: bool,
}

impl SampleBuffer {
    /// Create an empty buffer with both slots set to the zero vector
    pub fn new() -> Self {
        Self {
            gravity: Vector3::zeros(),
            geomagnetic: Vector3::zeros(),
            dirty: false,
        }
    }

    /// Store a sample in the slot for its kind
    ///
    /// Returns `true` if the sample was stored. Gyroscope samples have no
    /// slot and are not stored.
    pub fn update(&mut self, kind: SensorKind, vector: Vector3<f32>) -> bool {
        match kind {
            SensorKind::Accelerometer => self.gravity = vector,
            SensorKind::Magnetometer => self.geomagnetic = vector,
            SensorKind::Gyroscope => return false,
        }
        self.dirty = true;
        true
    }

    /// Latest gravity vector (zero until the first accelerometer sample)
    pub fn gravity(&self) -> Vector3<f32> {
        self.gravity
    }

    /// Latest geomagnetic vector (zero until the first magnetometer sample)
    pub fn geomagnetic(&self) -> Vector3<f32> {
        self.geomagnetic
    }

    /// Whether a sample was stored since the last [`mark_clean`](Self::mark_clean)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge the stored samples
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Whether both slots have received at least one non-zero sample
    pub fn is_ready(&self) -> bool {
        !self.gravity.is_zero_vector() && !self.geomagnetic.is_zero_vector()
    }

    /// Reset both slots to the zero vector
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
