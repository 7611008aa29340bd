//! The two coordinate representations: Geodetic (latitude, longitude, height)
//! and earth centered, earth fixed cartesian (X, Y, Z).
//!
//! Both are plain `Copy` value types. Angular elements are stored in
//! degrees, linear elements in metres.

/// A geodetic coordinate tuple.
///
/// Neither latitude nor longitude is clamped or normalized: A longitude of
/// 375° is perfectly acceptable, and comes out as the same ECEF position as
/// a longitude of 15°.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeodeticCoordinate {
    /// Latitude, in degrees
    pub latitude: f64,
    /// Longitude, in degrees
    pub longitude: f64,
    /// Height above the ellipsoid, in metres. Negative below.
    pub height: f64,
}

/// An earth centered, earth fixed cartesian coordinate tuple, in metres
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct EcefCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl GeodeticCoordinate {
    /// A `GeodeticCoordinate` from latitude/longitude/height, with the angular
    /// input in degrees
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, height: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude,
            longitude,
            height,
        }
    }

    /// A `GeodeticCoordinate` from latitude/longitude/height, with the angular
    /// input in radians
    #[must_use]
    pub fn from_radians(latitude: f64, longitude: f64, height: f64) -> GeodeticCoordinate {
        GeodeticCoordinate::new(latitude.to_degrees(), longitude.to_degrees(), height)
    }

    /// Latitude and longitude, in that order, converted to radians
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// True if none of the elements are NaN or infinite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.height.is_finite()
    }
}

impl EcefCoordinate {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> EcefCoordinate {
        EcefCoordinate { x, y, z }
    }

    /// The geocenter
    #[must_use]
    pub fn origin() -> EcefCoordinate {
        EcefCoordinate::default()
    }

    /// True if none of the elements are NaN or infinite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The perpendicular distance from the coordinate to the Z-axis
    #[must_use]
    pub fn axial_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The euclidean distance between two cartesian coordinates
    #[must_use]
    pub fn distance(&self, other: &EcefCoordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for EcefCoordinate {
    fn from(xyz: [f64; 3]) -> Self {
        EcefCoordinate::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<[f64; 3]> for GeodeticCoordinate {
    fn from(latlonh: [f64; 3]) -> Self {
        GeodeticCoordinate::new(latlonh[0], latlonh[1], latlonh[2])
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians() {
        let geo = GeodeticCoordinate::new(55., 12., 100.);
        let (phi, lam) = geo.to_radians();
        assert_eq!(phi, 55f64.to_radians());
        assert_eq!(lam, 12f64.to_radians());

        let back = GeodeticCoordinate::from_radians(phi, lam, 100.);
        assert!((back.latitude - 55.).abs() < 1e-12);
        assert!((back.longitude - 12.).abs() < 1e-12);
        assert_eq!(back.height, 100.);
    }

    #[test]
    fn finiteness() {
        assert!(GeodeticCoordinate::default().is_finite());
        assert!(!GeodeticCoordinate::new(f64::NAN, 0., 0.).is_finite());
        assert!(EcefCoordinate::origin().is_finite());
        assert!(!EcefCoordinate::new(0., f64::INFINITY, 0.).is_finite());
    }

    #[test]
    fn distances() {
        let a = EcefCoordinate::from([3., 4., 0.]);
        assert_eq!(a.axial_distance(), 5.);
        assert_eq!(a.distance(&EcefCoordinate::origin()), 5.);
        let b = EcefCoordinate::new(3., 4., 12.);
        assert_eq!(b.distance(&EcefCoordinate::origin()), 13.);
        assert_eq!(a.distance(&b), 12.);
    }
}
