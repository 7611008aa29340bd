//! *Conversion between geodetic and earth centered, earth fixed (ECEF)
//! cartesian coordinates*.
//!
//! Geodetic coordinates
//! ====================
//!
//! A geodetic coordinate is a (latitude, longitude, height)-triplet, given
//! with respect to a biaxial reference ellipsoid described by its semimajor
//! axis, *a*, and its semiminor axis, *b*. The corresponding cartesian
//! coordinate is an (X, Y, Z)-triplet in a right handed, earth centered,
//! earth fixed system.
//!
//! The two directions are:
//!
//! - [`GeoCart::cartesian`]: geodetic to ECEF, a closed form expression
//! - [`GeoCart::geographic`]: ECEF to geodetic, a fixed point iteration
//!   capped at [`MAX_ITERATIONS`] refinements
//!
//! ```
//! use geocart::prelude::*;
//! let ellps = Ellipsoid::new(6_378_137.0, 6_356_752.3141)?;
//! let geo = GeodeticCoordinate::new(47., 15., 2000.);
//! let ecef = ellps.cartesian(&geo);
//! let back = ellps.geographic(&ecef);
//! assert!((back.latitude - 47.).abs() < 1e-9);
//! # Ok::<(), geocart::Error>(())
//! ```
//!
//! Text in, text out
//! -----------------
//!
//! The [`form`] module holds the thin adapter turning text fields into
//! numbers and back. It is what the `gc` command line program is built on.

mod bibliography;
mod coordinate;
mod ellipsoid;
pub mod form;

pub use bibliography::Bibliography;
pub use coordinate::EcefCoordinate;
pub use coordinate::GeodeticCoordinate;
pub use ellipsoid::geocart::Inversion;
pub use ellipsoid::geocart::CONVERGENCE_THRESHOLD;
pub use ellipsoid::geocart::MAX_ITERATIONS;
pub use ellipsoid::Ellipsoid;
pub use ellipsoid::EllipsoidBase;
pub use ellipsoid::GeoCart;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::form::Form;
    pub use crate::EcefCoordinate;
    pub use crate::Ellipsoid;
    pub use crate::EllipsoidBase;
    pub use crate::Error;
    pub use crate::GeoCart;
    pub use crate::GeodeticCoordinate;
}

/// The things that can go wrong when preparing a conversion.
///
/// Points near the polar axis, or near the poles, are not errors: They are
/// converted as well as the numerics allow, and may come out non-finite.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid ellipsoid (a = {a}, b = {b}): requires a > b > 0")]
    InvalidEllipsoid { a: f64, b: f64 },

    #[error("invalid numeric input for {field}: '{text}'")]
    InvalidNumericInput { field: String, text: String },

    #[error("missing input: {0}")]
    MissingInput(String),
}
