#![no_std]

//! Compass Level - heading and two-axis level from motion sensors
//!
//! This library turns raw accelerometer and magnetometer readings into a
//! compass heading, a roll/pitch pair for a digital level, and an
//! eight-point compass label. It contains no rendering and no sensor
//! subscription code: the host feeds samples in and reads angles out.
//!
//! # Features
//!
//! - Rotation matrix from gravity and geomagnetic vectors (rows East, North, Up)
//! - Azimuth, pitch and roll extraction using the mobile platform convention
//! - Heading normalized to `[0, 360)` degrees
//! - Eight-point compass classification with fixed 45° sectors
//! - Silent skip of degenerate input (no sample yet, free fall, field parallel to gravity)
//! - Observer hook for redraw-on-change
//! - `#![no_std]` compatible for embedded systems
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_level::{CompassPoint, OrientationEstimator, SensorKind};
//!
//! let mut estimator = OrientationEstimator::new();
//!
//! // Sensor readings
//! let accelerometer = Vector3::new(0.0, 0.0, 9.8); // m/s², device flat
//! let magnetometer = Vector3::new(0.0, 22.0, -40.0); // µT, North ahead
//!
//! estimator.on_sample(SensorKind::Accelerometer, accelerometer);
//! estimator.on_sample(SensorKind::Magnetometer, magnetometer);
//!
//! let angles = estimator.angles();
//! assert!(angles.heading < 1.0);
//! assert_eq!(estimator.direction().unwrap(), CompassPoint::North);
//! ```

pub mod buffer;
pub mod compass;
mod error;
mod estimator;
mod math;
pub mod observer;
pub mod rotation;
mod types;

// Re-export all public types and functions
pub use buffer::SampleBuffer;
pub use compass::{CompassPoint, classify};
pub use error::{CompassError, DegenerateReason, Result};
pub use estimator::OrientationEstimator;
pub use math::{RAD_TO_DEG, Vector3Ext, normalize_heading};
pub use observer::{LatestAngles, OrientationObserver};
pub use rotation::RotationEstimate;
pub use types::*;
