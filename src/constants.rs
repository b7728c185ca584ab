//! # Constants and type definitions for groundtrace
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Time-scale constants (Julian / Modified Julian Date offsets, day lengths)
//! - WGS84 reference ellipsoid used by the geodetic transform
//! - Unit conversions (degrees ↔ radians, revolutions/day ↔ radians/minute)
//! - Core type aliases used across the crate
//!
//! Gravity-model constants used by the propagator live with the propagator itself in
//! [`crate::sgp4::gravity`], because several historical variants must coexist.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of minutes in a Julian day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Revolutions per day → radians per minute (the SGP4 internal mean motion unit)
pub const XPDOTP: f64 = MINUTES_PER_DAY / DPI;

/// Earth equatorial radius in kilometers (WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378.137;

/// Earth flattening (WGS84)
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Earth polar radius in kilometers (WGS84)
pub const EARTH_MINOR_AXIS: f64 = EARTH_MAJOR_AXIS * (1.0 - EARTH_FLATTENING);

/// First eccentricity squared of the WGS84 ellipsoid
pub const EARTH_ECCENTRICITY_SQUARED: f64 = EARTH_FLATTENING * (2.0 - EARTH_FLATTENING);

/// Two-digit TLE epoch years below this pivot belong to the 2000s
pub const TLE_CENTURY_PIVOT: i32 = 57;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Elapsed time in minutes (SGP4 `tsince`)
pub type Minute = f64;
/// Julian Date (days)
pub type JD = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
