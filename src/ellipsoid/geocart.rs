use super::*;
use crate::coordinate::{EcefCoordinate, GeodeticCoordinate};
use log::{debug, trace, warn};

use std::f64::consts::FRAC_PI_2;

/// The maximum number of latitude refinements carried out by
/// [`GeoCart::geographic`]
pub const MAX_ITERATIONS: usize = 10;

/// Successive latitude estimates closer than this (in radians) terminate
/// the refinement early
pub const CONVERGENCE_THRESHOLD: f64 = 1e-9;

/// What happened during an inverse (cartesian to geographic) conversion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Inversion {
    /// Number of refinement iterations carried out: 0 for points on the
    /// polar axis, otherwise 1..=[`MAX_ITERATIONS`]
    pub iterations: usize,
    /// Whether the last two latitude estimates agreed to within
    /// [`CONVERGENCE_THRESHOLD`]
    pub converged: bool,
}

/// Geographic <--> Cartesian conversion
pub trait GeoCart: EllipsoidBase {
    /// Geographic to cartesian conversion.
    ///
    /// Closed form, cf. Heiskanen & Moritz ([1967](crate::Bibliography::Hm67))
    /// eq. (5-27). No validation: angles of any magnitude are accepted,
    /// and non-finite input gives non-finite output.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    #[allow(clippy::many_single_char_names)] // ditto
    fn cartesian(&self, geodetic: &GeodeticCoordinate) -> EcefCoordinate {
        let (phi, lam) = geodetic.to_radians();
        let h = geodetic.height;

        let es = self.eccentricity_squared();
        let N = self.prime_vertical_radius_of_curvature(phi);
        let cosphi = phi.cos();
        let sinphi = phi.sin();
        let coslam = lam.cos();
        let sinlam = lam.sin();

        let X = (N + h) * cosphi * coslam;
        let Y = (N + h) * cosphi * sinlam;
        let Z = (N * (1.0 - es) + h) * sinphi;

        let cartesian = EcefCoordinate::new(X, Y, Z);
        if !cartesian.is_finite() {
            warn!("cartesian: non-finite result for {geodetic:?}");
        }
        cartesian
    }

    /// Cartesian to geographic conversion.
    ///
    /// Follows the fixed point iteration given by
    /// Bowring ([1976](crate::Bibliography::Bow76) and
    /// [1985](crate::Bibliography::Bow85)). See
    /// [`geographic_with_report`](GeoCart::geographic_with_report) for
    /// the details.
    #[must_use]
    fn geographic(&self, cartesian: &EcefCoordinate) -> GeodeticCoordinate {
        self.geographic_with_report(cartesian).0
    }

    /// Cartesian to geographic conversion, reporting the number of
    /// refinement iterations needed.
    ///
    /// The latitude is seeded by the geocentric latitude, and refined at most
    /// [`MAX_ITERATIONS`] times, stopping early when two successive estimates
    /// differ by less than [`CONVERGENCE_THRESHOLD`] radians.
    ///
    /// Points on the polar axis are placed at the pole given by the sign of
    /// Z, with longitude `atan2(Y, X)`, i.e. 0 for X = Y = 0.
    /// Points close to the geocenter may exhaust the iteration budget
    /// without converging. The result is returned anyway, with
    /// `converged == false`.
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    #[allow(clippy::many_single_char_names)] // ditto
    fn geographic_with_report(&self, cartesian: &EcefCoordinate) -> (GeodeticCoordinate, Inversion) {
        let EcefCoordinate { x: X, y: Y, z: Z } = *cartesian;

        let a = self.semimajor_axis();
        let b = self.semiminor_axis();
        let es = self.eccentricity_squared();

        // The longitude is straightforward: Plain geometry in the equatoreal plane
        let lam = Y.atan2(X);

        // The perpendicular distance from the point coordinate to the Z-axis
        // (HM eq. 5-28)
        let p = (X * X + Y * Y).sqrt();

        // On the Z-axis the iteration divides 0 by 0. So we force the latitude
        // to the relevant pole and compute the height as |Z| - b
        if p < a * 1e-16 {
            let phi = FRAC_PI_2.copysign(Z);
            let h = Z.abs() - b;
            debug!("geographic: {cartesian:?} on the polar axis");
            let report = Inversion {
                iterations: 0,
                converged: true,
            };
            return (GeodeticCoordinate::from_radians(phi, lam, h), report);
        }

        let mut report = Inversion::default();
        let mut phi_prev = Z.atan2(p);
        let mut phi = phi_prev;
        for i in 1..=MAX_ITERATIONS {
            let N = self.prime_vertical_radius_of_curvature(phi_prev);
            let h = p / phi_prev.cos() - N;
            phi = Z.atan2(p * (1.0 - es * N / (N + h)));
            trace!("geographic: iteration {i}: phi = {phi:.15}, h = {h:.6}");

            report.iterations = i;
            if (phi - phi_prev).abs() < CONVERGENCE_THRESHOLD {
                report.converged = true;
                break;
            }
            phi_prev = phi;
        }

        if !report.converged {
            debug!(
                "geographic: no convergence after {} iterations for {cartesian:?}",
                report.iterations
            );
        }

        // The height from the iteration lags one latitude estimate behind.
        // Bowring (1985), as quoted by Burtch (2006), suggests this expression
        // as more accurate than the commonly used h = p / cosphi - N;
        let N = self.prime_vertical_radius_of_curvature(phi);
        let (sinphi, cosphi) = phi.sin_cos();
        let h = p * cosphi + Z * sinphi - a * a / N;

        let geodetic = GeodeticCoordinate::from_radians(phi, lam, h);
        if !geodetic.is_finite() {
            warn!("geographic: non-finite result for {cartesian:?}");
        }
        (geodetic, report)
    }
}

impl<T: EllipsoidBase> GeoCart for T {}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ellipsoid, Error};
    use float_eq::assert_float_eq;

    #[test]
    fn geo_to_cart() -> Result<(), Error> {
        let ellps = Ellipsoid::new(6_378_137.0, 6_356_752.3141)?;

        let geo = [
            GeodeticCoordinate::new(85., 0., 100_000.),
            GeodeticCoordinate::new(55., 10., -100_000.),
            GeodeticCoordinate::new(25., 20., 0.),
            GeodeticCoordinate::new(0., -20., 0.),
            GeodeticCoordinate::new(-25., 20., 10.),
        ];

        let cart = [
            EcefCoordinate::new(566_462.633_540_990_6, 0.0, 6_432_020.333_649_619_5),
            EcefCoordinate::new(
                3_554_403.475_887_279_5,
                626_737.233_122_877_2,
                5_119_468.318_615_324,
            ),
            EcefCoordinate::new(
                5_435_195.382_151_345,
                1_978_249.336_524_206,
                2_679_074.462_846_282_4,
            ),
            EcefCoordinate::new(5_993_488.273_261_571, -2_181_451.330_890_750_5, 0.0),
            EcefCoordinate::new(
                5_435_203.898_658_741,
                1_978_252.436_279_398_4,
                -2_679_078.689_028_899_7,
            ),
        ];

        for i in 0..geo.len() {
            let c = ellps.cartesian(&geo[i]);
            assert_float_eq!(c.x, cart[i].x, abs <= 1e-6);
            assert_float_eq!(c.y, cart[i].y, abs <= 1e-6);
            assert_float_eq!(c.z, cart[i].z, abs <= 1e-6);

            // Roundtrip
            let g = ellps.geographic(&c);
            assert_float_eq!(g.latitude, geo[i].latitude, abs <= 1e-9);
            assert_float_eq!(g.longitude, geo[i].longitude, abs <= 1e-9);
            assert_float_eq!(g.height, geo[i].height, abs <= 1e-6);
        }
        Ok(())
    }

    #[test]
    fn equator() -> Result<(), Error> {
        let ellps = Ellipsoid::default();
        let (geo, report) = ellps.geographic_with_report(&EcefCoordinate::new(6_378_137.0, 0., 0.));
        assert_eq!(geo, GeodeticCoordinate::new(0., 0., 0.));
        assert_eq!(report.iterations, 1);
        assert!(report.converged);

        let geo = ellps.geographic(&EcefCoordinate::new(-6_378_137.0, 0., 0.));
        assert_float_eq!(geo.longitude, 180., abs <= 1e-12);
        assert_float_eq!(geo.height, 0., abs <= 1e-6);

        let geo = ellps.geographic(&EcefCoordinate::new(0., 6_378_147.0, 0.));
        assert_float_eq!(geo.longitude, 90., abs <= 1e-12);
        assert_float_eq!(geo.height, 10., abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn polar_axis() -> Result<(), Error> {
        let ellps = Ellipsoid::default();
        let b = ellps.semiminor_axis();

        let (geo, report) = ellps.geographic_with_report(&EcefCoordinate::new(0., 0., b));
        assert_eq!(geo, GeodeticCoordinate::new(90., 0., 0.));
        assert_eq!(report.iterations, 0);

        let geo = ellps.geographic(&EcefCoordinate::new(0., 0., -b - 100.));
        assert_eq!(geo.latitude, -90.);
        assert_float_eq!(geo.height, 100., abs <= 1e-8);

        // The geocenter is placed at the north pole
        let geo = ellps.geographic(&EcefCoordinate::origin());
        assert_eq!(geo, GeodeticCoordinate::new(90., 0., -b));

        // Close to, but not on, the axis, the iteration takes over
        let (geo, report) = ellps.geographic_with_report(&EcefCoordinate::new(1e-3, 0., b));
        assert!(geo.is_finite());
        assert_float_eq!(geo.latitude, 90., abs <= 1e-7);
        assert_float_eq!(geo.height, 0., abs <= 1e-6);
        assert_eq!(report.iterations, 1);
        Ok(())
    }

    #[test]
    fn iteration_cap() -> Result<(), Error> {
        let ellps = Ellipsoid::default();

        // A typical mid-latitude point converges in a handful of iterations
        let ecef = ellps.cartesian(&GeodeticCoordinate::new(47., 15., 2000.));
        let (_, report) = ellps.geographic_with_report(&ecef);
        assert_eq!(report.iterations, 4);
        assert!(report.converged);

        // Close to the geocenter, the budget is exhausted
        let (geo, report) = ellps.geographic_with_report(&EcefCoordinate::new(1., 1., 1.));
        assert_eq!(report.iterations, MAX_ITERATIONS);
        assert!(!report.converged);
        assert!(geo.is_finite());
        Ok(())
    }

    #[test]
    fn non_finite_input() {
        let ellps = Ellipsoid::default();
        let ecef = ellps.cartesian(&GeodeticCoordinate::new(f64::NAN, 0., 0.));
        assert!(!ecef.is_finite());

        let (geo, report) = ellps.geographic_with_report(&EcefCoordinate::new(f64::NAN, 0., 0.));
        assert!(!geo.is_finite());
        assert_eq!(report.iterations, MAX_ITERATIONS);
        assert!(!report.converged);
    }
}
