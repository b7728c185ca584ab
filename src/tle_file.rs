//! # TLE catalog files
//!
//! File access for element set catalogs (for example the CelesTrak `stations.txt` layout:
//! a title line followed by the two data lines, repeated).
//!
//! The file is read once, then parsed with [`crate::tle::parse_catalog`]. Propagation never
//! touches the file system.
use camino::Utf8Path;
use itertools::Itertools;
use tracing::debug;

use crate::{
    tle::{parse_catalog, ElementSet},
    trace_errors::TraceError,
};

/// Read every element set of a TLE catalog file.
///
/// Arguments
/// -----------------
/// * `path` – Path to a text file holding 2-line or 3-line element sets.
///
/// Return
/// ----------
/// * The element sets in file order, [`TraceError::IoError`] if the file cannot be read or
///   [`TraceError::TleParsing`] on the first malformed record.
pub fn read_tle_file(path: &Utf8Path) -> Result<Vec<ElementSet>, TraceError> {
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    debug!(path = %path, satellites = catalog.len(), "loaded TLE catalog");
    Ok(catalog)
}

/// Normalized form used to compare satellite names: case-insensitive, `_` read as a space.
fn name_key(name: &str) -> String {
    name.replace('_', " ").trim().to_uppercase()
}

/// Split a comma-separated satellite list, e.g. `ISS_(ZARYA),CSS_(TIANHE)`.
pub fn parse_satellite_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|name| name.replace('_', " ").trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Pick satellites of a catalog by name, in the order of `names`.
///
/// Names are matched against the title line of each element set, ignoring case and treating
/// `_` as a space. Every requested name must be present.
///
/// Return
/// ----------
/// * The matching element sets, or [`TraceError::SatelliteNotFound`] listing the missing names.
pub fn select_by_name<'a, S: AsRef<str>>(
    catalog: &'a [ElementSet],
    names: &[S],
) -> Result<Vec<&'a ElementSet>, TraceError> {
    let (found, missing): (Vec<_>, Vec<_>) = names
        .iter()
        .map(|name| {
            let key = name_key(name.as_ref());
            catalog
                .iter()
                .find(|elements| elements.name.as_deref().is_some_and(|n| name_key(n) == key))
                .ok_or_else(|| name.as_ref().to_string())
        })
        .partition_result();

    if !missing.is_empty() {
        return Err(TraceError::SatelliteNotFound(missing.iter().join(", ")));
    }
    Ok(found)
}

#[cfg(test)]
mod tle_file_test {
    use super::*;
    use camino::Utf8PathBuf;

    const STATIONS: &str = "ISS (ZARYA)
1 25544U 98067A   19343.69339541  .00001764  00000-0  38792-4 0  9991
2 25544  51.6439 211.2001 0007417  17.6667  85.6398 15.50103472202482
VANGUARD 1
1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753
2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667
";

    #[test]
    fn test_select_by_name() {
        let catalog = parse_catalog(STATIONS).unwrap();

        let selected = select_by_name(&catalog, &["vanguard_1", "ISS (ZARYA)"]).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].satellite_number, 5);
        assert_eq!(selected[1].satellite_number, 25544);

        assert_eq!(
            select_by_name(&catalog, &["ISS_(ZARYA)", "HUBBLE", "NOAA 19"]),
            Err(TraceError::SatelliteNotFound("HUBBLE, NOAA 19".into()))
        );
    }

    #[test]
    fn test_parse_satellite_list() {
        assert_eq!(
            parse_satellite_list("ISS_(ZARYA),VANGUARD_1,"),
            vec!["ISS (ZARYA)".to_string(), "VANGUARD 1".to_string()]
        );
    }

    #[test]
    fn test_missing_file() {
        let path = Utf8PathBuf::from("this/file/does/not/exist.tle");
        assert!(matches!(
            read_tle_file(&path),
            Err(TraceError::IoError(_))
        ));
    }
}
