//! Eight-point compass classification of a heading

use crate::error::{CompassError, Result};
use core::fmt;

/// Width of one compass sector in degrees
const SECTOR_WIDTH: f32 = 45.0;

/// One of the eight principal compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassPoint {
    /// All points in clockwise order starting at North
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::Northeast,
        CompassPoint::East,
        CompassPoint::Southeast,
        CompassPoint::South,
        CompassPoint::Southwest,
        CompassPoint::West,
        CompassPoint::Northwest,
    ];

    /// Full display name, e.g. "Northeast"
    pub const fn label(self) -> &'static str {
        match self {
            CompassPoint::North => "North",
            CompassPoint::Northeast => "Northeast",
            CompassPoint::East => "East",
            CompassPoint::Southeast => "Southeast",
            CompassPoint::South => "South",
            CompassPoint::Southwest => "Southwest",
            CompassPoint::West => "West",
            CompassPoint::Northwest => "Northwest",
        }
    }

    /// Short form, e.g. "NE"
    pub const fn abbreviation(self) -> &'static str {
        match self {
            CompassPoint::North => "N",
            CompassPoint::Northeast => "NE",
            CompassPoint::East => "E",
            CompassPoint::Southeast => "SE",
            CompassPoint::South => "S",
            CompassPoint::Southwest => "SW",
            CompassPoint::West => "W",
            CompassPoint::Northwest => "NW",
        }
    }

    /// Heading at the center of this point's sector, in degrees
    pub fn center(self) -> f32 {
        self as u8 as f32 * SECTOR_WIDTH
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a heading into one of eight 45° sectors
///
/// Sectors are centered on the compass points and closed at their lower
/// bound: North covers `[337.5, 360)` and `[0, 22.5)`, Northeast covers
/// `[22.5, 67.5)`, and so on clockwise.
///
/// # Arguments
/// * `heading` - Heading in degrees, normalized to `[0, 360)`
///
/// # Errors
/// [`CompassError::InvalidHeading`] if `heading` is negative, at least 360,
/// or NaN. Normalize with [`normalize_heading`](crate::normalize_heading)
/// first.
///
/// # Example
/// ```
/// use compass_level::{CompassPoint, classify};
///
/// assert_eq!(classify(22.5).unwrap(), CompassPoint::Northeast);
/// assert_eq!(classify(337.5).unwrap(), CompassPoint::North);
/// assert!(classify(360.0).is_err());
/// ```
pub fn classify(heading: f32) -> Result<CompassPoint> {
    // Written so that NaN fails the range check
    if !(0.0..360.0).contains(&heading) {
        return Err(CompassError::invalid_heading(heading));
    }

    let point = match heading {
        h if h >= 337.5 || h < 22.5 => CompassPoint::North,
        h if h < 67.5 => CompassPoint::Northeast,
        h if h < 112.5 => CompassPoint::East,
        h if h < 157.5 => CompassPoint::Southeast,
        h if h < 202.5 => CompassPoint::South,
        h if h < 247.5 => CompassPoint::Southwest,
        h if h < 292.5 => CompassPoint::West,
        _ => CompassPoint::Northwest,
    };

    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_and_intercardinal_centers() {
        for point in CompassPoint::ALL {
            assert_eq!(classify(point.center()), Ok(point), "center of {}", point);
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(classify(0.0), Ok(CompassPoint::North));
        assert_eq!(classify(22.4999), Ok(CompassPoint::North));
        assert_eq!(classify(22.5), Ok(CompassPoint::Northeast));
        assert_eq!(classify(67.5), Ok(CompassPoint::East));
        assert_eq!(classify(112.5), Ok(CompassPoint::Southeast));
        assert_eq!(classify(157.5), Ok(CompassPoint::South));
        assert_eq!(classify(180.0), Ok(CompassPoint::South));
        assert_eq!(classify(202.5), Ok(CompassPoint::Southwest));
        assert_eq!(classify(247.5), Ok(CompassPoint::West));
        assert_eq!(classify(292.5), Ok(CompassPoint::Northwest));
        assert_eq!(classify(337.4999), Ok(CompassPoint::Northwest));
        assert_eq!(classify(337.5), Ok(CompassPoint::North));
        assert_eq!(classify(359.999), Ok(CompassPoint::North));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(classify(-0.1), Err(CompassError::InvalidHeading(-0.1)));
        assert_eq!(classify(360.0), Err(CompassError::InvalidHeading(360.0)));
        assert!(classify(f32::NAN).is_err());
        assert!(classify(f32::INFINITY).is_err());
    }

    #[test]
    fn test_every_degree_is_classified() {
        let mut counts = [0u32; 8];
        for tenth in 0..3600 {
            let point = classify(tenth as f32 / 10.0).unwrap();
            counts[point as usize] += 1;
        }
        // Each sector is 45° wide
        assert!(counts.iter().all(|&count| count == 450), "{:?}", counts);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CompassPoint::Southwest.label(), "Southwest");
        assert_eq!(CompassPoint::Southwest.abbreviation(), "SW");
        assert_eq!(CompassPoint::Northwest.center(), 315.0);
    }
}
