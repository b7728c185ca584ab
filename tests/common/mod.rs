#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use camino::Utf8Path;
use groundtrace::ground_track::{GroundTrace, GroundTraceEntry};
use groundtrace::time::UtcInstant;

pub const STATIONS_FILE: &str = "tests/data/stations.tle";

/// ISS element set with its epoch exactly at 2023-07-06 00:00:00 UTC.
pub const ISS_TLE: &str = "ISS (ZARYA)
1 25544U 98067A   23187.00000000  .00012345  00000-0  22131-3 0  9998
2 25544  51.6416 275.4800 0003891 102.3514  35.4300 15.49814231405123";

pub fn stations_path() -> &'static Utf8Path {
    Utf8Path::new(STATIONS_FILE)
}

pub fn instant(text: &str) -> UtcInstant {
    text.parse().unwrap()
}

/// Every entry is a valid geodetic point.
pub fn assert_entries_in_range(trace: &GroundTrace) {
    for entry in trace {
        assert!(
            (-90.0..=90.0).contains(&entry.latitude),
            "latitude out of range: {entry:?}"
        );
        assert!(
            (-180.0..180.0).contains(&entry.longitude),
            "longitude out of range: {entry:?}"
        );
        assert!(entry.altitude > 0.0, "negative altitude: {entry:?}");
    }
}

/// Consecutive entries are exactly `step_seconds` apart.
pub fn assert_regular_steps(trace: &GroundTrace, step_seconds: i64) {
    for pair in trace.entries().windows(2) {
        let start = instant(&pair[0].timestamp);
        let end = instant(&pair[1].timestamp);
        assert_eq!(start.seconds_until(&end), step_seconds);
    }
}

pub fn assert_entry_close(actual: &GroundTraceEntry, expected: &GroundTraceEntry, epsilon: f64) {
    assert_eq!(actual.timestamp, expected.timestamp);
    assert_abs_diff_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_abs_diff_eq!(actual.longitude, expected.longitude, epsilon = epsilon);
    assert_abs_diff_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
}
