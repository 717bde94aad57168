//! Mathematical utilities and nalgebra extensions

use nalgebra::{ComplexField, Vector3};

/// Radians to degrees
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Whether every component is exactly zero (the "no sample yet" sentinel)
    fn is_zero_vector(&self) -> bool;

    /// Normalize the vector, returning zero vector if magnitude is zero
    fn safe_normalize(&self) -> Vector3<f32>;

    /// Convert radians to degrees
    fn rad_to_deg(&self) -> Vector3<f32>;
}

impl Vector3Ext for Vector3<f32> {
    fn is_zero_vector(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    fn safe_normalize(&self) -> Vector3<f32> {
        let magnitude_squared = self.magnitude_squared();
        if magnitude_squared > 0.0 {
            *self * (1.0 / ComplexField::sqrt(magnitude_squared))
        } else {
            Vector3::zeros()
        }
    }

    fn rad_to_deg(&self) -> Vector3<f32> {
        *self * RAD_TO_DEG
    }
}

/// Wrap an angle in degrees into `[0, 360)`
///
/// For azimuths produced by `atan2` (within ±180°) this is exactly
/// `(azimuth + 360) % 360`. Other inputs are wrapped the same way.
///
/// # Example
/// ```
/// use compass_level::normalize_heading;
///
/// assert_eq!(normalize_heading(-90.0), 270.0);
/// assert_eq!(normalize_heading(45.0), 45.0);
/// assert_eq!(normalize_heading(720.0), 0.0);
/// ```
pub fn normalize_heading(degrees: f32) -> f32 {
    let wrapped = (degrees + 360.0) % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };

    // Tiny negative remainders round up to exactly 360.0 in f32
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
