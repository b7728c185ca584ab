//! # Inertial to geodetic coordinates
//!
//! Converts an ECI (TEME) position into a sub-satellite point over the **WGS84** ellipsoid
//! (`a = 6378.137 km`, `f = 1/298.257223563`).
//!
//! ## Longitude
//! -----------------
//! The longitude is the right ascension of the position minus an Earth rotation angle:
//! - [`EarthRotation::Gmst`] (default) subtracts the Greenwich mean sidereal time of the
//!   instant, giving an Earth-fixed longitude,
//! - [`EarthRotation::Inertial`] subtracts nothing, giving the longitude in the inertial frame.
//!
//! The result is always normalized to `[-180, 180)` degrees.
//!
//! ## Latitude and altitude
//! -----------------
//! - [`LatitudeMethod::Iterative`] (default) solves the geodetic latitude by fixed-point
//!   iteration on the ellipsoid normal (tolerance `1e-12` rad, at most 10 iterations).
//! - [`LatitudeMethod::Spherical`] takes the geocentric latitude `atan2(z, √(x²+y²))` as the
//!   geodetic one. It is cheaper but off by up to ~0.19° at mid latitudes, with a
//!   corresponding altitude error.
//!
//! In both cases the altitude is measured along the ellipsoid normal from the latitude found:
//! `p / cos φ − N(φ)`, or `z / sin φ − N(φ)(1 − e²)` above 45° of latitude where the cosine
//! form loses precision.
use std::{f64::consts::FRAC_PI_4, fmt, str::FromStr};

use nalgebra::Vector3;
use thiserror::Error;

use crate::{
    constants::{Degree, Kilometer, Radian, EARTH_ECCENTRICITY_SQUARED, EARTH_MAJOR_AXIS},
    time::{gmst, UtcInstant},
};

const LATITUDE_TOLERANCE: Radian = 1e-12;
const LATITUDE_MAX_ITERATIONS: usize = 10;

/// A point given by geodetic coordinates over WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    /// Geodetic latitude, degrees in `[-90, 90]`.
    pub latitude: Degree,
    /// Longitude, degrees in `[-180, 180)`.
    pub longitude: Degree,
    /// Height above the ellipsoid (km).
    pub altitude: Kilometer,
}

/// How the geodetic latitude is derived from the Cartesian position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LatitudeMethod {
    Spherical,
    #[default]
    Iterative,
}

/// Which rotation angle separates the inertial frame from the reported longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EarthRotation {
    Inertial,
    #[default]
    Gmst,
}

impl EarthRotation {
    /// Rotation angle to subtract from the right ascension at `instant` (radians).
    pub fn angle_at(&self, instant: &UtcInstant) -> Radian {
        match self {
            EarthRotation::Inertial => 0.0,
            EarthRotation::Gmst => gmst(instant.to_mjd()),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseOptionError {
    #[error("Unknown latitude method '{0}', expected 'spherical' or 'iterative'")]
    LatitudeMethod(String),
    #[error("Unknown Earth rotation '{0}', expected 'inertial' or 'gmst'")]
    EarthRotation(String),
}

impl FromStr for LatitudeMethod {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spherical" => Ok(LatitudeMethod::Spherical),
            "iterative" => Ok(LatitudeMethod::Iterative),
            other => Err(ParseOptionError::LatitudeMethod(other.to_string())),
        }
    }
}

impl FromStr for EarthRotation {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inertial" | "none" => Ok(EarthRotation::Inertial),
            "gmst" => Ok(EarthRotation::Gmst),
            other => Err(ParseOptionError::EarthRotation(other.to_string())),
        }
    }
}

impl fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat: {:.6}°, lon: {:.6}°, alt: {:.3} km",
            self.latitude, self.longitude, self.altitude
        )
    }
}

/// Wrap a longitude in degrees to `[-180, 180)`.
pub fn normalize_longitude(longitude: Degree) -> Degree {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid rounds to 360 for tiny negative inputs
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Prime vertical radius of curvature `N(φ)` (km).
fn prime_vertical_radius(sin_lat: f64) -> Kilometer {
    EARTH_MAJOR_AXIS / (1.0 - EARTH_ECCENTRICITY_SQUARED * sin_lat * sin_lat).sqrt()
}

fn iterative_latitude(p: f64, z: f64) -> Radian {
    let mut latitude = z.atan2(p * (1.0 - EARTH_ECCENTRICITY_SQUARED));
    for _ in 0..LATITUDE_MAX_ITERATIONS {
        let sin_lat = latitude.sin();
        let n = prime_vertical_radius(sin_lat);
        let next = (z + n * EARTH_ECCENTRICITY_SQUARED * sin_lat).atan2(p);
        let delta = (next - latitude).abs();
        latitude = next;
        if delta < LATITUDE_TOLERANCE {
            break;
        }
    }
    latitude
}

fn ellipsoid_height(p: f64, z: f64, latitude: Radian) -> Kilometer {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let n = prime_vertical_radius(sin_lat);
    if latitude.abs() <= FRAC_PI_4 {
        p / cos_lat - n
    } else {
        z / sin_lat - n * (1.0 - EARTH_ECCENTRICITY_SQUARED)
    }
}

/// Convert an ECI position into geodetic coordinates.
///
/// Arguments
/// -----------------
/// * `position`: ECI position (km).
/// * `rotation_angle`: angle between the inertial x axis and the Greenwich meridian
///   (radians), see [`EarthRotation::angle_at`]. Zero keeps inertial longitudes.
/// * `method`: latitude determination, see the module documentation.
///
/// Return
/// ----------
/// * The [`GeodeticPosition`] of the point.
///
/// Examples
/// ----------
/// ```
/// use nalgebra::Vector3;
/// use groundtrace::geodetic::{eci_to_geodetic, LatitudeMethod};
///
/// let point = eci_to_geodetic(&Vector3::new(6778.137, 0.0, 0.0), 0.0, LatitudeMethod::Iterative);
/// assert!(point.latitude.abs() < 1e-9);
/// assert!((point.altitude - 400.0).abs() < 1e-9);
/// ```
pub fn eci_to_geodetic(
    position: &Vector3<f64>,
    rotation_angle: Radian,
    method: LatitudeMethod,
) -> GeodeticPosition {
    let (x, y, z) = (position.x, position.y, position.z);
    let p = x.hypot(y);

    let latitude = match method {
        LatitudeMethod::Spherical => z.atan2(p),
        LatitudeMethod::Iterative => iterative_latitude(p, z),
    };
    let longitude = normalize_longitude((y.atan2(x) - rotation_angle).to_degrees());

    GeodeticPosition {
        latitude: latitude.to_degrees(),
        longitude,
        altitude: ellipsoid_height(p, z, latitude),
    }
}
