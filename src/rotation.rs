//! Rotation matrix from gravity and geomagnetic vectors
//!
//! The matrix maps device coordinates to world coordinates. Its rows are the
//! world East, North and Up axes expressed in device coordinates:
//!
//! ```text
//! East  = normalize(geomagnetic × gravity)
//! Up    = normalize(gravity)
//! North = Up × East
//! ```
//!
//! Orientation is extracted with the mobile platform convention, using
//! row-major indices into the matrix:
//!
//! ```text
//! azimuth = atan2(R[1], R[4])
//! pitch   = asin(-R[7])
//! roll    = atan2(-R[6], R[8])
//! ```

use crate::error::{CompassError, DegenerateReason, Result};
use crate::math::{RAD_TO_DEG, Vector3Ext, normalize_heading};
use crate::types::{EstimatorSettings, OrientationAngles};
use nalgebra::{ComplexField, Matrix3, RealField, Vector3};

/// Device-to-world rotation estimated from one gravity/geomagnetic pair
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::RotationEstimate;
///
/// let gravity = Vector3::new(0.0, 0.0, 9.8);      // lying flat, screen up
/// let geomagnetic = Vector3::new(0.0, 10.0, 0.0); // North straight ahead
///
/// let rotation = RotationEstimate::from_vectors(gravity, geomagnetic).unwrap();
/// let angles = rotation.angles();
/// assert!(angles.heading.abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationEstimate {
    /// Rows [East, North, Up] in device coordinates
    matrix: Matrix3<f32>,
    /// Cosine and sine of the magnetic dip angle
    inclination: (f32, f32),
}

impl RotationEstimate {
    /// Compute the rotation with default thresholds
    ///
    /// Returns `None` when the vectors are degenerate.
    pub fn from_vectors(gravity: Vector3<f32>, geomagnetic: Vector3<f32>) -> Option<Self> {
        Self::try_from_vectors(gravity, geomagnetic, &EstimatorSettings::default()).ok()
    }

    /// Compute the rotation, reporting why degenerate vectors were rejected
    ///
    /// # Errors
    /// [`CompassError::DegenerateInput`] when either vector is zero or not
    /// finite, gravity is below the free-fall threshold, or the two vectors
    /// are too close to parallel to resolve East.
    pub fn try_from_vectors(
        gravity: Vector3<f32>,
        geomagnetic: Vector3<f32>,
        settings: &EstimatorSettings,
    ) -> Result<Self> {
        if gravity.is_zero_vector() || geomagnetic.is_zero_vector() {
            return Err(CompassError::degenerate(DegenerateReason::MissingSample));
        }

        let gravity_squared = gravity.magnitude_squared();
        if !gravity_squared.is_finite() || !geomagnetic.magnitude_squared().is_finite() {
            return Err(CompassError::degenerate(DegenerateReason::NonFinite));
        }
        if gravity_squared < settings.free_fall_gravity_squared {
            return Err(CompassError::degenerate(DegenerateReason::FreeFall));
        }

        let east = geomagnetic.cross(&gravity);
        let east_norm = ComplexField::sqrt(east.magnitude_squared());
        if east_norm <= 0.0 || east_norm < settings.minimum_field_cross_norm {
            return Err(CompassError::degenerate(DegenerateReason::NearParallel));
        }

        let east = east * (1.0 / east_norm);
        let up = gravity.safe_normalize();
        let north = up.cross(&east);

        let matrix = Matrix3::from_rows(&[east.transpose(), north.transpose(), up.transpose()]);

        let field_reciprocal = 1.0 / ComplexField::sqrt(geomagnetic.magnitude_squared());
        let inclination = (
            geomagnetic.dot(&north) * field_reciprocal,
            geomagnetic.dot(&up) * field_reciprocal,
        );

        Ok(Self {
            matrix,
            inclination,
        })
    }

    /// Rotation matrix with rows [East, North, Up]
    pub fn matrix(&self) -> Matrix3<f32> {
        self.matrix
    }

    /// Matrix elements in row-major order
    pub fn to_row_major(&self) -> [f32; 9] {
        let m = &self.matrix;
        [
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
        ]
    }

    /// World East axis in device coordinates
    pub fn east(&self) -> Vector3<f32> {
        self.matrix.row(0).transpose()
    }

    /// World (magnetic) North axis in device coordinates
    pub fn north(&self) -> Vector3<f32> {
        self.matrix.row(1).transpose()
    }

    /// World Up axis in device coordinates
    pub fn up(&self) -> Vector3<f32> {
        self.matrix.row(2).transpose()
    }

    /// Azimuth, pitch and roll in radians, in that order
    pub fn orientation(&self) -> Vector3<f32> {
        let r = self.to_row_major();

        let azimuth = RealField::atan2(r[1], r[4]);
        // Rounding can push a unit component fractionally past ±1
        let pitch = ComplexField::asin((-r[7]).clamp(-1.0, 1.0));
        let roll = RealField::atan2(-r[6], r[8]);

        Vector3::new(azimuth, pitch, roll)
    }

    /// Heading, roll and pitch in degrees, heading normalized to `[0, 360)`
    pub fn angles(&self) -> OrientationAngles {
        let degrees = self.orientation().rad_to_deg();

        OrientationAngles {
            heading: normalize_heading(degrees.x),
            roll: degrees.z,
            pitch: degrees.y,
        }
    }

    /// Inclination matrix rotating the geomagnetic vector into the North/Up plane
    pub fn inclination_matrix(&self) -> Matrix3<f32> {
        let (c, s) = self.inclination;
        Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        )
    }

    /// Magnetic dip angle in degrees
    ///
    /// Negative when the field points below the horizon, as it does in the
    /// northern hemisphere.
    pub fn inclination(&self) -> f32 {
        let (c, s) = self.inclination;
        RealField::atan2(s, c) * RAD_TO_DEG
    }
}
