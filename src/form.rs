//! Text in, text out: The adapter between textual input fields and the
//! numerical conversions.
//!
//! A [`Form`] holds the eleven text fields of an interactive converter:
//! Five inputs for the forward conversion, the three ECEF fields (written
//! by the forward conversion, read by the inverse), and three output fields
//! for the inverse conversion. The fields are plain `String`s, so any
//! front end (terminal, GUI, web) can bind to them directly.
use crate::prelude::*;
use log::{debug, warn};

/// Number of decimals for the linear elements of an ECEF coordinate
pub const ECEF_DECIMALS: usize = 3;

/// Number of decimals for latitude and longitude, in degrees
pub const ANGULAR_DECIMALS: usize = 6;

/// Number of decimals for the height
pub const LINEAR_DECIMALS: usize = 3;

/// Displayed in the ECEF fields when a forward conversion fails
pub const INVALID_INPUT: &str = "Invalid Input";

/// Displayed in the geodetic output fields when an inverse conversion fails
pub const INVALID_ECEF_INPUT: &str = "Invalid ECEF Input";

// ----- P A R S I N G   A N D   F O R M A T T I N G --------------------------

/// Parse the text of a named input field into a finite number.
/// Surrounding whitespace is ignored.
pub fn parse_field(field: &str, text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingInput(field.to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumericInput {
            field: field.to_string(),
            text: text.to_string(),
        }),
    }
}

/// The X, Y, Z elements of `ecef`, each with `decimals` decimals
#[must_use]
pub fn format_ecef(ecef: &EcefCoordinate, decimals: usize) -> [String; 3] {
    [
        format!("{:.*}", decimals, ecef.x),
        format!("{:.*}", decimals, ecef.y),
        format!("{:.*}", decimals, ecef.z),
    ]
}

/// The latitude, longitude and height of `geodetic`, with `angular_decimals`
/// decimals for the first two, and `linear_decimals` for the height
#[must_use]
pub fn format_geodetic(
    geodetic: &GeodeticCoordinate,
    angular_decimals: usize,
    linear_decimals: usize,
) -> [String; 3] {
    [
        format!("{:.*}", angular_decimals, geodetic.latitude),
        format!("{:.*}", angular_decimals, geodetic.longitude),
        format!("{:.*}", linear_decimals, geodetic.height),
    ]
}

// ----- T H E   F O R M -------------------------------------------------------

/// The state of an interactive converter: All fields are text, exactly as
/// typed by the user or written by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub a: String,
    pub b: String,
    pub latitude: String,
    pub longitude: String,
    pub height: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub latitude_out: String,
    pub longitude_out: String,
    pub height_out: String,
}

/// The GRS80 ellipsoid, and a point at 47°N, 15°E, 2000 m
impl Default for Form {
    fn default() -> Form {
        Form {
            a: "6378137.0000".to_string(),
            b: "6356752.3141".to_string(),
            latitude: "47".to_string(),
            longitude: "15".to_string(),
            height: "2000".to_string(),
            x: String::new(),
            y: String::new(),
            z: String::new(),
            latitude_out: String::new(),
            longitude_out: String::new(),
            height_out: String::new(),
        }
    }
}

impl Form {
    #[must_use]
    pub fn new() -> Form {
        Form::default()
    }

    /// The ellipsoid described by the `a` and `b` fields
    pub fn ellipsoid(&self) -> Result<Ellipsoid, Error> {
        let a = parse_field("a", &self.a)?;
        let b = parse_field("b", &self.b)?;
        Ellipsoid::new(a, b)
    }

    /// The geodetic input fields, parsed
    pub fn geodetic(&self) -> Result<GeodeticCoordinate, Error> {
        Ok(GeodeticCoordinate::new(
            parse_field("latitude", &self.latitude)?,
            parse_field("longitude", &self.longitude)?,
            parse_field("height", &self.height)?,
        ))
    }

    /// The ECEF fields, parsed
    pub fn ecef(&self) -> Result<EcefCoordinate, Error> {
        Ok(EcefCoordinate::new(
            parse_field("x", &self.x)?,
            parse_field("y", &self.y)?,
            parse_field("z", &self.z)?,
        ))
    }

    /// Geodetic to ECEF: Read a, b, latitude, longitude, height, and write
    /// x, y, z. On failure, x, y, z all read [`INVALID_INPUT`], and the
    /// cause is returned. No other fields are touched.
    pub fn forward(&mut self) -> Result<EcefCoordinate, Error> {
        let result = self
            .ellipsoid()
            .and_then(|ellps| Ok(ellps.cartesian(&self.geodetic()?)));

        match result {
            Ok(ecef) => {
                debug!("forward: {ecef:?}");
                let [x, y, z] = format_ecef(&ecef, ECEF_DECIMALS);
                self.x = x;
                self.y = y;
                self.z = z;
            }
            Err(ref e) => {
                warn!("forward: {e}");
                self.x = INVALID_INPUT.to_string();
                self.y = INVALID_INPUT.to_string();
                self.z = INVALID_INPUT.to_string();
            }
        }
        result
    }

    /// ECEF to geodetic: Read a, b, x, y, z, and write the three output
    /// fields. On failure, the output fields all read
    /// [`INVALID_ECEF_INPUT`], and the cause is returned.
    pub fn inverse(&mut self) -> Result<GeodeticCoordinate, Error> {
        let result = self
            .ellipsoid()
            .and_then(|ellps| Ok(ellps.geographic(&self.ecef()?)));

        match result {
            Ok(geodetic) => {
                debug!("inverse: {geodetic:?}");
                let [latitude, longitude, height] =
                    format_geodetic(&geodetic, ANGULAR_DECIMALS, LINEAR_DECIMALS);
                self.latitude_out = latitude;
                self.longitude_out = longitude;
                self.height_out = height;
            }
            Err(ref e) => {
                warn!("inverse: {e}");
                self.latitude_out = INVALID_ECEF_INPUT.to_string();
                self.longitude_out = INVALID_ECEF_INPUT.to_string();
                self.height_out = INVALID_ECEF_INPUT.to_string();
            }
        }
        result
    }
}

// ----- T E S T S ------------------------------------------------------------------
