//! GC: Geodetic/Cartesian conversion from the command line.
//!
//! ```sh
//! gc 47 15 2000
//! gc --inv 4210520.621 1128205.600 4643227.496
//! gc -a 6378388 -b 6356911.946 -- -33.9 18.4 10
//! ```
use anyhow::bail;
use clap::Parser;
use geocart::form::{self, parse_field};
use geocart::prelude::*;
use log::{debug, info, trace};

/// Convert a single coordinate between geodetic latitude, longitude, height
/// and earth centered, earth fixed X, Y, Z. Latitude and longitude in
/// degrees, everything else in metres.
#[derive(Parser, Debug)]
#[clap(name = "gc")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Inverse operation: X, Y, Z to latitude, longitude, height
    #[clap(long = "inv")]
    inverse: bool,

    /// Semimajor axis of the ellipsoid (default GRS80)
    #[clap(short = 'a', long, default_value = "6378137.0000")]
    semimajor: String,

    /// Semiminor axis of the ellipsoid (default GRS80)
    #[clap(short = 'b', long, default_value = "6356752.3141")]
    semiminor: String,

    /// Number of decimals in the output. Defaults to 3 for linear and 6 for
    /// angular elements
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Report fwd-inv roundtrip deviation
    #[clap(short, long)]
    roundtrip: bool,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The three elements of the coordinate to convert
    #[clap(allow_negative_numbers = true)]
    args: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{:#?}", options);

    if options.args.len() != 3 {
        bail!(
            "expected 3 coordinate elements, found {}",
            options.args.len()
        );
    }

    let a = parse_field("a", &options.semimajor)?;
    let b = parse_field("b", &options.semiminor)?;
    let ellps = Ellipsoid::new(a, b)?;
    debug!("ellipsoid: {ellps}, e² = {}", ellps.eccentricity_squared());

    let output = if options.inverse {
        inverse(&options, &ellps)?
    } else {
        forward(&options, &ellps)?
    };

    if options.echo {
        print!("{} ", options.args.join(" "));
    }
    println!("{}", output.join(" "));
    Ok(())
}

fn forward(options: &Cli, ellps: &Ellipsoid) -> Result<[String; 3], anyhow::Error> {
    let geo = GeodeticCoordinate::new(
        parse_field("latitude", &options.args[0])?,
        parse_field("longitude", &options.args[1])?,
        parse_field("height", &options.args[2])?,
    );
    let ecef = ellps.cartesian(&geo);
    info!("{geo:?} -> {ecef:?}");

    if options.roundtrip {
        let back = ellps.cartesian(&ellps.geographic(&ecef));
        println!("roundtrip deviation: {:.6e} m", ecef.distance(&back));
    }

    let decimals = options.decimals.unwrap_or(form::ECEF_DECIMALS);
    Ok(form::format_ecef(&ecef, decimals))
}

fn inverse(options: &Cli, ellps: &Ellipsoid) -> Result<[String; 3], anyhow::Error> {
    let ecef = EcefCoordinate::new(
        parse_field("x", &options.args[0])?,
        parse_field("y", &options.args[1])?,
        parse_field("z", &options.args[2])?,
    );
    let (geo, report) = ellps.geographic_with_report(&ecef);
    info!("{ecef:?} -> {geo:?}");
    debug!(
        "{} iterations, {}",
        report.iterations,
        if report.converged { "converged" } else { "not converged" }
    );
    if options.roundtrip {
        let back = ellps.cartesian(&geo);
        println!("roundtrip deviation: {:.6e} m", ecef.distance(&back));
    }

    let angular = options.decimals.unwrap_or(form::ANGULAR_DECIMALS);
    let linear = options.decimals.unwrap_or(form::LINEAR_DECIMALS);
    Ok(form::format_geodetic(&geo, angular, linear))
}
