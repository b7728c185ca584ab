//! # Ground track generation
//!
//! Steps the propagation pipeline across a time window and collects the sub-satellite points.
//!
//! ## Overview
//! -----------------
//! - [`TimeWindow`]: validated `[start, end]` window with a strictly positive step. The end is
//!   inclusive and the number of samples is known up front.
//! - [`TraceConfig`]: step, gravity model, latitude method, Earth rotation and checksum
//!   verification, with `with_*` builder methods.
//! - [`GroundTrace`]: chronological [`GroundTraceEntry`] records for one satellite, with a
//!   `;`-separated CSV writer.
//! - [`generate_trace`], [`generate_trace_with`], [`trace_element_set`] and
//!   [`trace_satellite`]: the generator entry points, from raw TLE text down to an already
//!   initialized [`Satellite`].
//!
//! ## Failure policy
//! -----------------
//! Malformed TLE text, malformed timestamps and invalid windows are reported before any
//! propagation. A propagation failure at any instant aborts the whole trace with
//! [`TraceError::Propagation`] carrying that instant: no partial trace is returned.
//! Kepler non-convergence is not a failure; the sample is kept and a warning is logged.
//!
//! ## Example
//! -----------------
//! ```
//! use groundtrace::ground_track::generate_trace;
//!
//! let tle = "1 25544U 98067A   23187.00000000  .00012345  00000-0  22131-3 0  9998
//! 2 25544  51.6416 275.4800 0003891 102.3514  35.4300 15.49814231405123";
//!
//! let trace = generate_trace(tle, "2023-07-06 00:00:00", "2023-07-06 00:05:00", 60).unwrap();
//! assert_eq!(trace.len(), 6);
//! assert_eq!(trace.entries()[5].timestamp, "2023-07-06 00:05:00");
//! ```
use std::io;

use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{Degree, Kilometer},
    geodetic::{EarthRotation, LatitudeMethod},
    satellite::Satellite,
    sgp4::gravity::GravityModel,
    time::UtcInstant,
    tle::{verify_checksum, ElementSet},
    trace_errors::TraceError,
};

/// Sampling step used when none is given (seconds).
pub const DEFAULT_STEP_SECONDS: i64 = 60;

/// Length of the window built by [`TimeWindow::one_day`] (seconds).
const ONE_DAY_SECONDS: i64 = 86_400;

/// An inclusive time window sampled every `step_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: UtcInstant,
    end: UtcInstant,
    step_seconds: i64,
}

impl TimeWindow {
    /// Build a window, rejecting non-positive steps and an end before the start.
    pub fn new(start: UtcInstant, end: UtcInstant, step_seconds: i64) -> Result<Self, TraceError> {
        if step_seconds <= 0 {
            return Err(TraceError::NonPositiveStep(step_seconds));
        }
        if end < start {
            return Err(TraceError::EndBeforeStart { start, end });
        }
        Ok(TimeWindow {
            start,
            end,
            step_seconds,
        })
    }

    /// Window covering the 24 hours following `start`.
    pub fn one_day(start: UtcInstant, step_seconds: i64) -> Result<Self, TraceError> {
        TimeWindow::new(start, start.add_seconds(ONE_DAY_SECONDS), step_seconds)
    }

    /// Build a window from two `YYYY-MM-DD HH:MM:SS` timestamps.
    pub fn parse(start: &str, end: &str, step_seconds: i64) -> Result<Self, TraceError> {
        TimeWindow::new(start.parse()?, end.parse()?, step_seconds)
    }

    pub fn start(&self) -> UtcInstant {
        self.start
    }

    pub fn end(&self) -> UtcInstant {
        self.end
    }

    pub fn step_seconds(&self) -> i64 {
        self.step_seconds
    }

    /// Number of sampled instants: `⌊(end − start) / step⌋ + 1`.
    pub fn sample_count(&self) -> usize {
        (self.start.seconds_until(&self.end) / self.step_seconds) as usize + 1
    }

    /// Iterate over `start, start + step, …` while the instant is not after `end`.
    pub fn instants(&self) -> Instants {
        Instants {
            next: self.start,
            end: self.end,
            step_seconds: self.step_seconds,
            remaining: self.sample_count(),
        }
    }
}

impl IntoIterator for &TimeWindow {
    type Item = UtcInstant;
    type IntoIter = Instants;

    fn into_iter(self) -> Self::IntoIter {
        self.instants()
    }
}

/// Iterator over the instants of a [`TimeWindow`].
#[derive(Debug, Clone)]
pub struct Instants {
    next: UtcInstant,
    end: UtcInstant,
    step_seconds: i64,
    remaining: usize,
}

impl Iterator for Instants {
    type Item = UtcInstant;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.next > self.end {
            return None;
        }
        let current = self.next;
        self.next = current.add_seconds(self.step_seconds);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Instants {}

/// Options of the trace generator.
///
/// Fields
/// -----------------
/// * `step_seconds`: sampling step, default 60 s. Only used by the entry points that build the
///   [`TimeWindow`] themselves.
/// * `gravity_model`: SGP4 constants, default WGS-72.
/// * `latitude_method`: default [`LatitudeMethod::Iterative`].
/// * `earth_rotation`: default [`EarthRotation::Gmst`] (Earth-fixed longitudes).
/// * `verify_checksums`: check column 69 of both TLE lines, default `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    pub step_seconds: i64,
    pub gravity_model: GravityModel,
    pub latitude_method: LatitudeMethod,
    pub earth_rotation: EarthRotation,
    pub verify_checksums: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            step_seconds: DEFAULT_STEP_SECONDS,
            gravity_model: GravityModel::default(),
            latitude_method: LatitudeMethod::default(),
            earth_rotation: EarthRotation::default(),
            verify_checksums: false,
        }
    }
}

impl TraceConfig {
    pub fn with_step_seconds(mut self, step_seconds: i64) -> Self {
        self.step_seconds = step_seconds;
        self
    }

    pub fn with_gravity_model(mut self, gravity_model: GravityModel) -> Self {
        self.gravity_model = gravity_model;
        self
    }

    pub fn with_latitude_method(mut self, latitude_method: LatitudeMethod) -> Self {
        self.latitude_method = latitude_method;
        self
    }

    pub fn with_earth_rotation(mut self, earth_rotation: EarthRotation) -> Self {
        self.earth_rotation = earth_rotation;
        self
    }

    pub fn with_checksum_verification(mut self, verify_checksums: bool) -> Self {
        self.verify_checksums = verify_checksums;
        self
    }
}

/// One sample of a ground trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundTraceEntry {
    /// `YYYY-MM-DD HH:MM:SS` (UTC).
    pub timestamp: String,
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
}

/// Chronological sub-satellite points of one satellite.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTrace {
    designator: String,
    entries: Vec<GroundTraceEntry>,
}

impl GroundTrace {
    /// Satellite name, or catalog number when the TLE had no title line.
    pub fn designator(&self) -> &str {
        &self.designator
    }

    pub fn entries(&self) -> &[GroundTraceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<GroundTraceEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroundTraceEntry> {
        self.entries.iter()
    }

    /// Write the trace as `;`-separated records with a
    /// `timestamp;latitude;longitude;altitude` header row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), TraceError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(writer);
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a GroundTrace {
    type Item = &'a GroundTraceEntry;
    type IntoIter = std::slice::Iter<'a, GroundTraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Generate the ground trace of a TLE with the default configuration and a given step.
///
/// Arguments
/// -----------------
/// * `tle_text`: one element set, 2 lines or 3 lines with a title line.
/// * `start`, `end`: `YYYY-MM-DD HH:MM:SS` UTC timestamps, `end` included.
/// * `step_seconds`: sampling step, strictly positive.
///
/// Return
/// ----------
/// * The [`GroundTrace`], or a [`TraceError`] describing the bad input or the failing instant.
pub fn generate_trace(
    tle_text: &str,
    start: &str,
    end: &str,
    step_seconds: i64,
) -> Result<GroundTrace, TraceError> {
    let config = TraceConfig::default().with_step_seconds(step_seconds);
    generate_trace_with(tle_text, start, end, &config)
}

/// Generate the ground trace of a TLE with an explicit configuration.
pub fn generate_trace_with(
    tle_text: &str,
    start: &str,
    end: &str,
    config: &TraceConfig,
) -> Result<GroundTrace, TraceError> {
    let elements = parse_element_set(tle_text, config.verify_checksums)?;
    let window = TimeWindow::parse(start, end, config.step_seconds)?;
    trace_element_set(&elements, &window, config)
}

fn parse_element_set(tle_text: &str, verify_checksums: bool) -> Result<ElementSet, TraceError> {
    if verify_checksums {
        for line in tle_text.lines().map(str::trim_start) {
            if line.starts_with("1 ") {
                verify_checksum(1, line)?;
            } else if line.starts_with("2 ") {
                verify_checksum(2, line)?;
            }
        }
    }
    Ok(tle_text.parse()?)
}

/// Generate the ground trace of a parsed element set over `window`.
///
/// The step of `window` is used; `config.step_seconds` is ignored.
pub fn trace_element_set(
    elements: &ElementSet,
    window: &TimeWindow,
    config: &TraceConfig,
) -> Result<GroundTrace, TraceError> {
    let satellite = Satellite::with_gravity_model(elements.clone(), config.gravity_model)
        .map_err(|source| TraceError::Propagation {
            timestamp: elements.epoch(),
            source,
        })?;
    trace_satellite(&satellite, window, config)
}

/// Generate the ground trace of an initialized satellite over `window`.
pub fn trace_satellite(
    satellite: &Satellite,
    window: &TimeWindow,
    config: &TraceConfig,
) -> Result<GroundTrace, TraceError> {
    let designator = satellite.designator();
    debug!(
        satellite = %designator,
        start = %window.start(),
        end = %window.end(),
        step_seconds = window.step_seconds(),
        samples = window.sample_count(),
        latitude_method = ?config.latitude_method,
        earth_rotation = ?config.earth_rotation,
        "generating ground trace"
    );

    let entries = window
        .instants()
        .map(|instant| {
            satellite
                .position_at(&instant, config.latitude_method, config.earth_rotation)
                .map(|point| GroundTraceEntry {
                    timestamp: instant.to_string(),
                    latitude: point.latitude,
                    longitude: point.longitude,
                    altitude: point.altitude,
                })
                .map_err(|source| TraceError::Propagation {
                    timestamp: instant,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroundTrace {
        designator,
        entries,
    })
}
