//! Earth gravity models usable by the SGP4 propagator.
//!
//! The published element sets are fitted with WGS-72 constants, so [`GravityModel::Wgs72`] is
//! the default. WGS-84 and the historical WGS-72 variant (with its truncated `xke`) are kept
//! for comparison with other SGP4 implementations.
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Selection of the geopotential constants used by SGP4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GravityModel {
    Wgs72Old,
    #[default]
    Wgs72,
    Wgs84,
}

/// Numerical constants of one gravity model.
///
/// Fields
/// -----------------
/// * `mu`: Earth gravitational parameter (km³/s²).
/// * `radius`: Earth equatorial radius (km).
/// * `xke`: `60 / sqrt(radius³ / mu)`, in earth radii^1.5 per minute.
/// * `tumin`: minutes per time unit, `1 / xke`.
/// * `j2`, `j3`, `j4`: zonal harmonics, and `j3oj2 = j3 / j2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityConstants {
    pub mu: f64,
    pub radius: f64,
    pub xke: f64,
    pub tumin: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
}

impl GravityConstants {
    fn new(mu: f64, radius: f64, xke: f64, j2: f64, j3: f64, j4: f64) -> Self {
        GravityConstants {
            mu,
            radius,
            xke,
            tumin: 1.0 / xke,
            j2,
            j3,
            j4,
            j3oj2: j3 / j2,
        }
    }
}

fn xke(mu: f64, radius: f64) -> f64 {
    60.0 / (radius * radius * radius / mu).sqrt()
}

impl GravityModel {
    /// Constants of the selected model.
    pub fn constants(&self) -> GravityConstants {
        match self {
            GravityModel::Wgs72Old => GravityConstants::new(
                398_600.799_64,
                6_378.135,
                0.074_366_916_1,
                0.001_082_616,
                -0.000_002_538_81,
                -0.000_001_655_97,
            ),
            GravityModel::Wgs72 => {
                let (mu, radius) = (398_600.8, 6_378.135);
                GravityConstants::new(
                    mu,
                    radius,
                    xke(mu, radius),
                    0.001_082_616,
                    -0.000_002_538_81,
                    -0.000_001_655_97,
                )
            }
            GravityModel::Wgs84 => {
                let (mu, radius) = (398_600.5, 6_378.137);
                GravityConstants::new(
                    mu,
                    radius,
                    xke(mu, radius),
                    0.001_082_629_989_05,
                    -0.000_002_532_153_06,
                    -0.000_001_610_987_61,
                )
            }
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown gravity model '{0}', expected one of: wgs72old, wgs72, wgs84")]
pub struct UnknownGravityModel(pub String);

impl FromStr for GravityModel {
    type Err = UnknownGravityModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs72old" => Ok(GravityModel::Wgs72Old),
            "wgs72" => Ok(GravityModel::Wgs72),
            "wgs84" => Ok(GravityModel::Wgs84),
            other => Err(UnknownGravityModel(other.to_string())),
        }
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GravityModel::Wgs72Old => "wgs72old",
            GravityModel::Wgs72 => "wgs72",
            GravityModel::Wgs84 => "wgs84",
        };
        write!(f, "{name}")
    }
}
