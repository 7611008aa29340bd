pub(crate) mod geocart;

use crate::Error;
use std::fmt;

pub use geocart::GeoCart;

/// An ellipsoid of revolution, given by its semimajor and semiminor axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
}

/// GRS80 is the default ellipsoid. The semiminor axis is given to the tenth
/// of a millimetre, as commonly tabulated.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid {
            a: 6_378_137.0,
            b: 6_356_752.3141,
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid. Both axes must be finite, and
    /// `semimajor_axis > semiminor_axis > 0`: A sphere, or a prolate
    /// ellipsoid, leaves the squared eccentricity outside of (0, 1).
    pub fn new(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
        let (a, b) = (semimajor_axis, semiminor_axis);
        if !(a.is_finite() && b.is_finite()) || b <= 0.0 || a <= b {
            return Err(Error::InvalidEllipsoid { a, b });
        }
        Ok(Ellipsoid { a, b })
    }
}

impl EllipsoidBase for Ellipsoid {
    fn semimajor_axis(&self) -> f64 {
        self.a
    }

    fn semiminor_axis(&self) -> f64 {
        self.b
    }
}

/// The fundamental size and shape parameters of a biaxial ellipsoid, and
/// the derived quantities needed by the [`GeoCart`] conversions.
pub trait EllipsoidBase {
    /// The semimajor axis, *a*
    fn semimajor_axis(&self) -> f64;

    /// The semiminor axis, *b*
    fn semiminor_axis(&self) -> f64;

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    ///
    /// Computed directly from the axes, not from the flattening, so the
    /// result is the same to the last bit for identical (a, b)-pairs.
    #[must_use]
    fn eccentricity_squared(&self) -> f64 {
        let a = self.semimajor_axis();
        let b = self.semiminor_axis();
        (a.powi(2) - b.powi(2)) / a.powi(2)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    fn flattening(&self) -> f64 {
        let a = self.semimajor_axis();
        (a - self.semiminor_axis()) / a
    }

    /// The radius of curvature in the prime vertical, *N*, at the
    /// latitude given in radians
    #[must_use]
    fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        self.semimajor_axis() / (1.0 - es * latitude.sin().powi(2)).sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() -> Result<(), Error> {
        let ellps = Ellipsoid::new(6_378_388.0, 6_356_911.946)?;
        assert_eq!(ellps.semimajor_axis(), 6_378_388.0);
        assert_eq!(ellps.semiminor_axis(), 6_356_911.946);

        let ellps = Ellipsoid::default();
        assert_eq!(ellps.semimajor_axis(), 6_378_137.0);
        assert_eq!(ellps.semiminor_axis(), 6_356_752.3141);
        assert_eq!(ellps.to_string(), "(6378137, 6356752.3141)");
        Ok(())
    }

    #[test]
    fn invalid() {
        // Prolate
        assert_eq!(
            Ellipsoid::new(1., 2.),
            Err(Error::InvalidEllipsoid { a: 1., b: 2. })
        );
        // Spherical
        assert!(Ellipsoid::new(1., 1.).is_err());
        // Non-positive axes
        assert!(Ellipsoid::new(0., -1.).is_err());
        assert!(Ellipsoid::new(1., 0.).is_err());
        assert!(Ellipsoid::new(-1., -2.).is_err());
        // Non-finite axes
        assert!(Ellipsoid::new(f64::INFINITY, 1.).is_err());
        assert!(Ellipsoid::new(f64::NAN, 1.).is_err());
        assert!(Ellipsoid::new(2., f64::NAN).is_err());
    }

    #[test]
    fn shape() {
        let ellps = Ellipsoid::default();
        assert!((ellps.eccentricity_squared() - 0.006_694_380_035_5).abs() < 1.0e-12);
        assert!((1. / ellps.flattening() - 298.257_221_538).abs() < 1.0e-6);
    }

    #[test]
    fn curvatures() {
        let ellps = Ellipsoid::default();
        // At the Equator, N equals the semimajor axis
        assert_eq!(ellps.prime_vertical_radius_of_curvature(0.0), 6_378_137.0);
        // At the poles, N equals the polar radius of curvature, a²/b
        let a = ellps.semimajor_axis();
        let b = ellps.semiminor_axis();
        let n = ellps.prime_vertical_radius_of_curvature(90_f64.to_radians());
        assert!((n - a * a / b).abs() < 1e-6);
        assert!((n - 6_399_593.6259).abs() < 1e-3);
    }
}
