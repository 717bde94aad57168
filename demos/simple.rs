//! Compass and digital level demonstration
//!
//! Feeds a short synthetic sample stream (a level phone turned slowly to the
//! right, then tipped forward) into the estimator and prints what a compass
//! screen would show after each update.
//!
//! Run with: `cargo run --example simple`

use compass_level::{OrientationAngles, OrientationEstimator, SensorKind};
use nalgebra::{Rotation3, Vector3};

const GRAVITY: f32 = 9.81; // m/s²

/// Earth field with a 60° dip, in world East/North/Up coordinates (µT)
const FIELD_NORTH: f32 = 22.5;
const FIELD_UP: f32 = -39.0;

fn main() {
    let mut estimator = OrientationEstimator::new();
    let mut redraw = |angles: OrientationAngles| {
        let label = compass_level::classify(angles.heading)
            .map(|point| point.label())
            .unwrap_or("Unknown");
        println!(
            "Heading: {:>3}° {:<9}  Roll: {:>4}°  Pitch: {:>4}°",
            angles.heading as i32, label, angles.roll as i32, angles.pitch as i32
        );
    };

    for step in 0..=12 {
        // First turn through 180°, then tip the top edge down in 15° steps
        let heading = (step.min(6) * 30) as f32;
        let tip = (step.max(6) - 6) as f32 * 15.0;

        // Device attitude: yaw about world Up, then pitch about device X
        let attitude = Rotation3::from_axis_angle(&Vector3::z_axis(), -heading.to_radians())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), -tip.to_radians());
        let to_device = attitude.inverse();

        let accelerometer = to_device * Vector3::new(0.0, 0.0, GRAVITY);
        let magnetometer = to_device * Vector3::new(0.0, FIELD_NORTH, FIELD_UP);

        estimator.on_sample_observed(SensorKind::Accelerometer, accelerometer, &mut redraw);
        estimator.on_sample_observed(SensorKind::Magnetometer, magnetometer, &mut redraw);
    }

    let statistics = estimator.statistics();
    println!(
        "{} recomputes, {} skipped",
        statistics.recomputes, statistics.skipped_recomputes
    );
}
