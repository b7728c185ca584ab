//! # groundtrace
//!
//! Satellite ground-track prediction from NORAD Two-Line Element sets.
//!
//! Given an element set and a UTC time window, the crate propagates the orbit with SGP4 and
//! converts every sample into a sub-satellite point (latitude, longitude, altitude over
//! WGS84), producing a chronological [`ground_track::GroundTrace`].
//!
//! ## Pipeline
//! -----------------
//! ```text
//! TLE text ──► tle::ElementSet ──► satellite::Satellite (sgp4::Sgp4)
//!                                        │
//! time::UtcInstant ──► tsince (min) ─────┤
//!                                        ▼
//!                         TEME position ──► geodetic::eci_to_geodetic ──► GroundTraceEntry
//! ```
//!
//! ## Modules
//! -----------------
//! - [`time`]: calendar UTC instants, Julian dates, sidereal time.
//! - [`tle`]: element set parsing, checksums, Alpha-5 catalog numbers.
//! - [`sgp4`]: near-Earth SGP4 propagator and its gravity models.
//! - [`geodetic`]: ECI to geodetic transform.
//! - [`satellite`]: element set + propagator aggregate.
//! - [`ground_track`]: time windows, configuration, trace generation and CSV export.
//! - [`tle_file`]: catalog files and satellite selection by name.
//! - [`trace_errors`]: the crate-level error type.
//!
//! ## Logging
//! -----------------
//! Diagnostics are emitted through [`tracing`]; the library never installs a subscriber.
pub mod constants;
pub mod geodetic;
pub mod ground_track;
pub mod kepler;
pub mod satellite;
pub mod sgp4;
pub mod time;
pub mod tle;
pub mod tle_file;
pub mod trace_errors;

pub use ground_track::{generate_trace, generate_trace_with, GroundTrace, TraceConfig};
pub use satellite::Satellite;
pub use time::UtcInstant;
pub use tle::ElementSet;
pub use trace_errors::TraceError;
