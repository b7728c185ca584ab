//! # Two-Line Element set reader
//!
//! Utilities to parse **NORAD Two-Line Element sets** (TLE) into [`ElementSet`] values usable
//! by the SGP4 propagator.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A line-level error type [`ParseTleError`] describing TLE parsing failures with the
//!   offending line, field name and text.
//! - [`ElementSet::parse`] / [`ElementSet::parse_with_name`] for one record, and a
//!   [`FromStr`] implementation for a 2-line or 3-line text block.
//! - [`parse_catalog`] to read any number of records (2LE or 3LE, blank lines ignored) into a
//!   caller-owned `Vec`.
//! - Checksum helpers ([`compute_checksum`], [`verify_checksum`]) and the Alpha-5 catalog
//!   number encoding ([`to_alpha5`], [`from_alpha5`]).
//!
//! ## Field Layout
//! -----------------
//! Fixed 0-based column slices of the published format:
//!
//! ```text
//! 1 NNNNNC NNNNNAAA NNNNN.NNNNNNNN +.NNNNNNNN +NNNNN-N +NNNNN-N N NNNNN
//! 2 NNNNN NNN.NNNN NNN.NNNN NNNNNNN NNN.NNNN NNN.NNNN NN.NNNNNNNNNNNNNN
//! ```
//!
//! * line 1 – `2..7` catalog number, `7` classification, `9..17` international designator,
//!   `18..20` epoch year, `20..32` epoch day, `33..43` ṅ/2, `44..52` n̈/6, `53..61` B*,
//!   `62` ephemeris type, `64..68` element set number.
//! * line 2 – `8..16` inclination, `17..25` RAAN, `26..33` eccentricity, `34..42` argument of
//!   perigee, `43..51` mean anomaly, `52..63` mean motion, `63..68` revolution number.
//!
//! Column 69 holds the checksum. It is not checked by the parser itself; see
//! [`verify_checksum`].
//!
//! ## Units & Conventions
//! -----------------
//! Values are kept in the units of the published format (degrees, revolutions per day,
//! earth radii⁻¹ for B*). Conversion to SGP4 internal units happens in [`crate::sgp4`].
//! Two-digit epoch years below 57 are in the 2000s, the others in the 1900s.
use std::{ops::Range, str::FromStr};

use thiserror::Error;

use crate::{
    constants::{Degree, JD, MINUTES_PER_DAY, TLE_CENTURY_PIVOT},
    time::UtcInstant,
};

/// Minimum number of columns of both TLE lines (everything but the checksum).
pub const TLE_MIN_LINE_LENGTH: usize = 68;

/// Line-level parsing errors for Two-Line Element sets.
///
/// Variants
/// -----------------
/// * `MissingLine` – Line 1 or 2 is empty or absent.
/// * `TooShortLine` – The line does not reach 68 columns.
/// * `NonAscii` – The line contains non-ASCII characters, so fixed columns are meaningless.
/// * `WrongLineNumber` – The line does not start with its line number.
/// * `InvalidField` – A fixed-column field failed to parse; payload carries the field name and slice.
/// * `SatelliteNumberMismatch` – Catalog numbers of both lines differ.
/// * `ChecksumMismatch` – Column 69 disagrees with the modulo-10 checksum.
/// * `MultipleElementSets` – A single record was expected but the text holds several.
#[derive(Error, Debug, PartialEq)]
pub enum ParseTleError {
    #[error("TLE line {0} is missing")]
    MissingLine(u8),
    #[error("TLE line {line} is too short: {length} columns, expected at least {TLE_MIN_LINE_LENGTH}")]
    TooShortLine { line: u8, length: usize },
    #[error("TLE line {line} contains non-ASCII characters: {text}")]
    NonAscii { line: u8, text: String },
    #[error("TLE line {line} must start with '{line} ', found: {text}")]
    WrongLineNumber { line: u8, text: String },
    #[error("TLE line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: u8,
        field: &'static str,
        value: String,
    },
    #[error("Satellite numbers of TLE lines differ: {line1} on line 1, {line2} on line 2")]
    SatelliteNumberMismatch { line1: String, line2: String },
    #[error("TLE line {line} checksum is {found} but the line tallies to {expected}")]
    ChecksumMismatch { line: u8, expected: u32, found: u32 },
    #[error("Expected a single element set, found {0}")]
    MultipleElementSets(usize),
}

/// One parsed Two-Line Element set.
///
/// Units
/// -----
/// * `epoch_year`: four-digit year, `epoch_day`: fractional day of year (1.0 = Jan 1, 0h UTC).
/// * `mean_motion_dot`: first derivative of mean motion divided by 2 (rev/day²).
/// * `mean_motion_ddot`: second derivative of mean motion divided by 6 (rev/day³).
/// * `bstar`: drag term (earth radii⁻¹).
/// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: degrees.
/// * `mean_motion`: revolutions per day (Kozai mean motion).
///
/// See also
/// --------
/// * [`crate::satellite::Satellite`] – Owns an element set together with its propagator.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSet {
    pub name: Option<String>,
    pub satellite_number: u32,
    pub classification: char,
    pub international_designator: String,
    pub epoch_year: i32,
    pub epoch_day: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub bstar: f64,
    pub ephemeris_type: char,
    pub element_set_number: u32,
    pub inclination: Degree,
    pub right_ascension: Degree,
    pub eccentricity: f64,
    pub argument_of_perigee: Degree,
    pub mean_anomaly: Degree,
    pub mean_motion: f64,
    pub revolution_number: u32,
}

fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Shape checks shared by both lines: presence, ASCII, width and line number.
fn check_line(line: &str, line_number: u8) -> Result<(), ParseTleError> {
    if line.trim().is_empty() {
        return Err(ParseTleError::MissingLine(line_number));
    }
    if !line.is_ascii() {
        return Err(ParseTleError::NonAscii {
            line: line_number,
            text: line.to_string(),
        });
    }
    if line.len() < TLE_MIN_LINE_LENGTH {
        return Err(ParseTleError::TooShortLine {
            line: line_number,
            length: line.len(),
        });
    }
    let expected = [b'0' + line_number, b' '];
    if !line.as_bytes().starts_with(&expected) {
        return Err(ParseTleError::WrongLineNumber {
            line: line_number,
            text: line.to_string(),
        });
    }
    Ok(())
}

/// A fixed-column view over one validated TLE line.
struct TleLine<'a> {
    text: &'a str,
    number: u8,
}

impl<'a> TleLine<'a> {
    fn new(text: &'a str, number: u8) -> Result<Self, ParseTleError> {
        let text = trim_line_end(text);
        check_line(text, number)?;
        Ok(TleLine { text, number })
    }

    fn slice(&self, range: Range<usize>) -> &'a str {
        &self.text[range]
    }

    fn char_at(&self, index: usize) -> char {
        self.text.as_bytes()[index] as char
    }

    fn invalid(&self, field: &'static str, value: &str) -> ParseTleError {
        ParseTleError::InvalidField {
            line: self.number,
            field,
            value: value.to_string(),
        }
    }

    /// Decimal field; `nan`, `inf` and overflowing literals are rejected.
    fn float(&self, field: &'static str, range: Range<usize>) -> Result<f64, ParseTleError> {
        let value = self.slice(range);
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(field, value))
    }

    fn integer(&self, field: &'static str, range: Range<usize>) -> Result<i32, ParseTleError> {
        let value = self.slice(range);
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| self.invalid(field, value))
    }

    /// Unsigned counter where a blank field means zero.
    fn counter(&self, field: &'static str, range: Range<usize>) -> Result<u32, ParseTleError> {
        let value = self.slice(range);
        match value.trim() {
            "" => Ok(0),
            digits => digits.parse().map_err(|_| self.invalid(field, value)),
        }
    }

    /// Implied-decimal field with exponent, e.g. ` 28098-4` → `0.28098e-4`.
    fn exponential(&self, field: &'static str, start: usize) -> Result<f64, ParseTleError> {
        let value = self.slice(start..start + 8);
        let sign = value[0..1].trim();
        let mantissa = value[1..6].replace(' ', "0");
        let exponent = value[6..8].trim();

        let mantissa: f64 = format!("{sign}.{mantissa}")
            .parse()
            .map_err(|_| self.invalid(field, value))?;
        let exponent: i32 = exponent.parse().map_err(|_| self.invalid(field, value))?;
        Ok(mantissa * 10f64.powi(exponent))
    }

    fn satellite_number(&self) -> Result<u32, ParseTleError> {
        let value = self.slice(2..7);
        from_alpha5(value).ok_or_else(|| self.invalid("satellite number", value))
    }
}

impl ElementSet {
    /// Parse a TLE record from its two data lines.
    ///
    /// Arguments
    /// -----------------
    /// * `line1`, `line2` – The two fixed-format lines; trailing `\r`/`\n` are ignored and the
    ///   checksum column is optional.
    ///
    /// Return
    /// ----------
    /// * The parsed [`ElementSet`] (without name), or a [`ParseTleError`] naming the line and
    ///   field at fault.
    ///
    /// Examples
    /// ----------
    /// ```
    /// use groundtrace::tle::ElementSet;
    ///
    /// let elements = ElementSet::parse(
    ///     "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
    ///     "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
    /// )
    /// .unwrap();
    /// assert_eq!(elements.satellite_number, 5);
    /// assert_eq!(elements.epoch_year, 2000);
    /// ```
    pub fn parse(line1: &str, line2: &str) -> Result<Self, ParseTleError> {
        let l1 = TleLine::new(line1, 1)?;
        let l2 = TleLine::new(line2, 2)?;

        let satellite_number = l1.satellite_number()?;
        let satellite_number_2 = l2.satellite_number()?;
        if satellite_number != satellite_number_2 {
            return Err(ParseTleError::SatelliteNumberMismatch {
                line1: l1.slice(2..7).to_string(),
                line2: l2.slice(2..7).to_string(),
            });
        }

        let two_digit_year = l1.integer("epoch year", 18..20)?;
        let epoch_year = if two_digit_year < TLE_CENTURY_PIVOT {
            two_digit_year + 2000
        } else {
            two_digit_year + 1900
        };

        let eccentricity_field = l2.slice(26..33);
        let eccentricity = format!("0.{}", eccentricity_field.replace(' ', "0"))
            .parse::<f64>()
            .map_err(|_| l2.invalid("eccentricity", eccentricity_field))?;

        Ok(ElementSet {
            name: None,
            satellite_number,
            classification: l1.char_at(7),
            international_designator: l1.slice(9..17).trim().to_string(),
            epoch_year,
            epoch_day: l1.float("epoch day", 20..32)?,
            mean_motion_dot: l1.float("first derivative of mean motion", 33..43)?,
            mean_motion_ddot: l1.exponential("second derivative of mean motion", 44)?,
            bstar: l1.exponential("drag term", 53)?,
            ephemeris_type: l1.char_at(62),
            element_set_number: l1.counter("element set number", 64..68)?,
            inclination: l2.float("inclination", 8..16)?,
            right_ascension: l2.float("right ascension of ascending node", 17..25)?,
            eccentricity,
            argument_of_perigee: l2.float("argument of perigee", 34..42)?,
            mean_anomaly: l2.float("mean anomaly", 43..51)?,
            mean_motion: l2.float("mean motion", 52..63)?,
            revolution_number: l2.counter("revolution number", 63..68)?,
        })
    }

    /// Parse a 3-line record: a title line followed by the two data lines.
    ///
    /// The optional `0 ` prefix used by some catalogs on the title line is stripped.
    pub fn parse_with_name(name: &str, line1: &str, line2: &str) -> Result<Self, ParseTleError> {
        let name = name.trim();
        let name = name.strip_prefix("0 ").unwrap_or(name).trim();

        let mut element_set = ElementSet::parse(line1, line2)?;
        if !name.is_empty() {
            element_set.name = Some(name.to_string());
        }
        Ok(element_set)
    }

    /// Julian Date of the element set epoch.
    ///
    /// Day-of-year 1.0 is January 1st at 0h UTC, so the epoch is the Julian Date of
    /// January 1st minus one day plus the fractional day of year.
    pub fn epoch_julian_date(&self) -> JD {
        UtcInstant::new(self.epoch_year, 1, 1, 0, 0, 0).to_julian_date() - 1.0 + self.epoch_day
    }

    /// Epoch as a calendar instant, rounded to the nearest second.
    pub fn epoch(&self) -> UtcInstant {
        let seconds = ((self.epoch_day - 1.0) * 86_400.0).round() as i64;
        UtcInstant::new(self.epoch_year, 1, 1, 0, 0, 0).add_seconds(seconds)
    }

    /// Human-readable identifier: the title line if any, otherwise the catalog number.
    pub fn designator(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => to_alpha5(self.satellite_number)
                .unwrap_or_else(|| self.satellite_number.to_string()),
        }
    }

    /// Orbital period in minutes derived from the Kozai mean motion.
    pub fn period_minutes(&self) -> f64 {
        MINUTES_PER_DAY / self.mean_motion
    }
}

impl FromStr for ElementSet {
    type Err = ParseTleError;

    /// Parse exactly one record from a 2-line or 3-line text block.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut catalog = parse_catalog(s)?;
        match catalog.len() {
            0 => Err(ParseTleError::MissingLine(1)),
            1 => Ok(catalog.remove(0)),
            n => Err(ParseTleError::MultipleElementSets(n)),
        }
    }
}

/// Parse every element set of a catalog text.
///
/// Records may be bare 2-line sets or 3-line sets with a title line; both forms can be mixed.
/// Blank lines are ignored. The returned collection is owned by the caller and has no size
/// limit.
///
/// Return
/// ----------
/// * All element sets in file order, or the first [`ParseTleError`] encountered.
pub fn parse_catalog(text: &str) -> Result<Vec<ElementSet>, ParseTleError> {
    let mut lines = text
        .lines()
        .map(trim_line_end)
        .filter(|line| !line.trim().is_empty());

    let mut catalog = Vec::new();
    while let Some(first) = lines.next() {
        let element_set = if first.starts_with("1 ") {
            let line2 = lines.next().ok_or(ParseTleError::MissingLine(2))?;
            ElementSet::parse(first, line2)?
        } else {
            let line1 = lines.next().ok_or(ParseTleError::MissingLine(1))?;
            let line2 = lines.next().ok_or(ParseTleError::MissingLine(2))?;
            ElementSet::parse_with_name(first, line1, line2)?
        };
        catalog.push(element_set);
    }
    Ok(catalog)
}

/// Modulo-10 checksum of the first 68 columns: digits count their value, `-` counts 1.
pub fn compute_checksum(line: &str) -> u32 {
    line.chars()
        .take(TLE_MIN_LINE_LENGTH)
        .map(|c| match c {
            '0'..='9' => c as u32 - '0' as u32,
            '-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

/// Check column 69 of a TLE line against [`compute_checksum`].
///
/// Lines without a checksum digit are accepted.
pub fn verify_checksum(line_number: u8, line: &str) -> Result<(), ParseTleError> {
    let line = trim_line_end(line);
    let Some(found) = line.chars().nth(TLE_MIN_LINE_LENGTH).and_then(|c| c.to_digit(10)) else {
        return Ok(());
    };

    let expected = compute_checksum(line);
    if found != expected {
        return Err(ParseTleError::ChecksumMismatch {
            line: line_number,
            expected,
            found,
        });
    }
    Ok(())
}

/// Encode a catalog number on five columns (Alpha-5 above 99999).
///
/// Return
/// ----------
/// * `None` for numbers above 339999 (`Z9999`).
pub fn to_alpha5(number: u32) -> Option<String> {
    if number < 100_000 {
        return Some(format!("{number:05}"));
    }
    if number > 339_999 {
        return None;
    }

    // letters I and O are skipped
    let mut code = (number / 10_000) as u8 + b'A' - 10;
    if code >= b'I' {
        code += 1;
    }
    if code >= b'O' {
        code += 1;
    }
    Some(format!("{}{:04}", code as char, number % 10_000))
}

/// Decode a five-column catalog number, plain digits or Alpha-5.
pub fn from_alpha5(text: &str) -> Option<u32> {
    let text = text.trim();
    let first = text.chars().next()?;
    if first.is_ascii_digit() {
        return text.parse().ok();
    }
    if !first.is_ascii_uppercase() || first == 'I' || first == 'O' {
        return None;
    }

    let digits = &text[1..];
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut code = first as u32 - 'A' as u32 + 10;
    if first > 'I' {
        code -= 1;
    }
    if first > 'O' {
        code -= 1;
    }
    Some(code * 10_000 + digits.parse::<u32>().ok()?)
}

#[cfg(test)]
mod tle_test {
    use super::*;
    use approx::assert_relative_eq;

    const LINE1: &str = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
    const LINE2: &str = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

    fn with_field(line: &str, range: Range<usize>, value: &str) -> String {
        let mut line = line.to_string();
        line.replace_range(range, value);
        line
    }

    #[test]
    fn test_parse_vanguard() {
        let elements = ElementSet::parse(LINE1, LINE2).unwrap();

        assert_eq!(elements.name, None);
        assert_eq!(elements.satellite_number, 5);
        assert_eq!(elements.classification, 'U');
        assert_eq!(elements.international_designator, "58002B");
        assert_eq!(elements.epoch_year, 2000);
        assert_relative_eq!(elements.epoch_day, 179.78495062);
        assert_relative_eq!(elements.mean_motion_dot, 2.3e-7);
        assert_eq!(elements.mean_motion_ddot, 0.0);
        assert_relative_eq!(elements.bstar, 2.8098e-5, epsilon = 1e-15);
        assert_eq!(elements.ephemeris_type, '0');
        assert_eq!(elements.element_set_number, 475);
        assert_relative_eq!(elements.inclination, 34.2682);
        assert_relative_eq!(elements.right_ascension, 348.7242);
        assert_relative_eq!(elements.eccentricity, 0.1859667);
        assert_relative_eq!(elements.argument_of_perigee, 331.7664);
        assert_relative_eq!(elements.mean_anomaly, 19.3264);
        assert_relative_eq!(elements.mean_motion, 10.82419157);
        assert_eq!(elements.revolution_number, 41366);
    }

    #[test]
    fn test_epoch() {
        let elements = ElementSet::parse(LINE1, LINE2).unwrap();
        assert_relative_eq!(elements.epoch_julian_date(), 2451723.28495062, epsilon = 1e-8);
        assert_eq!(elements.epoch().to_string(), "2000-06-27 18:50:20");
        assert_relative_eq!(elements.period_minutes(), 133.0354, epsilon = 1e-4);
    }

    #[test]
    fn test_century_pivot() {
        let line1 = with_field(LINE1, 18..20, "57");
        assert_eq!(ElementSet::parse(&line1, LINE2).unwrap().epoch_year, 1957);
        let line1 = with_field(LINE1, 18..20, "56");
        assert_eq!(ElementSet::parse(&line1, LINE2).unwrap().epoch_year, 2056);
    }

    #[test]
    fn test_negative_exponential_fields() {
        let line1 = "1 11801U 80230A   98355.85634836 -.00000095  12345-6 -11606-4 0  3018";
        let line2 = "2 11801  46.7916 230.4354 7318036  47.4722  10.4117  2.28537848    13";
        let elements = ElementSet::parse(line1, line2).unwrap();
        assert_relative_eq!(elements.mean_motion_dot, -9.5e-7);
        assert_relative_eq!(elements.mean_motion_ddot, 0.12345e-6, epsilon = 1e-18);
        assert_relative_eq!(elements.bstar, -0.11606e-4, epsilon = 1e-15);
        assert_eq!(elements.revolution_number, 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = ElementSet::parse(LINE1, LINE2).unwrap();
        let second = ElementSet::parse(LINE1, LINE2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_and_short_lines() {
        assert_eq!(ElementSet::parse("", LINE2), Err(ParseTleError::MissingLine(1)));
        assert_eq!(ElementSet::parse(LINE1, "   "), Err(ParseTleError::MissingLine(2)));
        assert_eq!(
            ElementSet::parse(LINE1, &LINE2[..50]),
            Err(ParseTleError::TooShortLine { line: 2, length: 50 })
        );
    }

    #[test]
    fn test_wrong_line_number() {
        assert!(matches!(
            ElementSet::parse(LINE2, LINE1),
            Err(ParseTleError::WrongLineNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let bad = LINE1.replacen("23 ", "23\u{a0}", 1);
        assert!(matches!(
            ElementSet::parse(&bad, LINE2),
            Err(ParseTleError::NonAscii { line: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_numeric_field() {
        let line2 = with_field(LINE2, 8..16, " 34.2x82");
        assert_eq!(
            ElementSet::parse(LINE1, &line2),
            Err(ParseTleError::InvalidField {
                line: 2,
                field: "inclination",
                value: " 34.2x82".into()
            })
        );

        let line1 = with_field(LINE1, 53..61, " 2809a-4");
        assert!(matches!(
            ElementSet::parse(&line1, LINE2),
            Err(ParseTleError::InvalidField {
                line: 1,
                field: "drag term",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        for (range, value, field) in [
            (20..32, "         inf", "epoch day"),
            (33..43, "       NaN", "first derivative of mean motion"),
        ] {
            let line1 = with_field(LINE1, range, value);
            assert_eq!(
                ElementSet::parse(&line1, LINE2),
                Err(ParseTleError::InvalidField {
                    line: 1,
                    field,
                    value: value.into()
                })
            );
        }

        for (range, value, field) in [
            (8..16, "     nan", "inclination"),
            (17..25, "     NaN", "right ascension of ascending node"),
            (43..51, "   1e999", "mean anomaly"),
            (52..63, "   infinity", "mean motion"),
        ] {
            let line2 = with_field(LINE2, range, value);
            assert_eq!(
                ElementSet::parse(LINE1, &line2),
                Err(ParseTleError::InvalidField {
                    line: 2,
                    field,
                    value: value.into()
                })
            );
        }
    }

    #[test]
    fn test_satellite_number_mismatch() {
        let line2 = with_field(LINE2, 2..7, "00007");
        assert_eq!(
            ElementSet::parse(LINE1, &line2),
            Err(ParseTleError::SatelliteNumberMismatch {
                line1: "00005".into(),
                line2: "00007".into()
            })
        );
    }

    #[test]
    fn test_checksum() {
        assert_eq!(compute_checksum(LINE1), 3);
        assert_eq!(compute_checksum(LINE2), 7);
        assert_eq!(verify_checksum(1, LINE1), Ok(()));
        assert_eq!(verify_checksum(2, &LINE2[..68]), Ok(()));

        let corrupted = with_field(LINE2, 68..69, "9");
        assert_eq!(
            verify_checksum(2, &corrupted),
            Err(ParseTleError::ChecksumMismatch {
                line: 2,
                expected: 7,
                found: 9
            })
        );
    }

    #[test]
    fn test_alpha5() {
        assert_eq!(to_alpha5(5).as_deref(), Some("00005"));
        assert_eq!(to_alpha5(100_000).as_deref(), Some("A0000"));
        assert_eq!(to_alpha5(148_493).as_deref(), Some("E8493"));
        assert_eq!(to_alpha5(182_931).as_deref(), Some("J2931"));
        assert_eq!(to_alpha5(234_018).as_deref(), Some("P4018"));
        assert_eq!(to_alpha5(339_999).as_deref(), Some("Z9999"));
        assert_eq!(to_alpha5(340_000), None);

        assert_eq!(from_alpha5("00005"), Some(5));
        assert_eq!(from_alpha5("A0000"), Some(100_000));
        assert_eq!(from_alpha5("J2931"), Some(182_931));
        assert_eq!(from_alpha5("P4018"), Some(234_018));
        assert_eq!(from_alpha5("Z9999"), Some(339_999));
        assert_eq!(from_alpha5("I0000"), None);
        assert_eq!(from_alpha5("A00x0"), None);
        assert_eq!(from_alpha5(""), None);
    }

    #[test]
    fn test_from_str_and_catalog() {
        let three_lines = format!("VANGUARD 1\n{LINE1}\n{LINE2}\n");
        let elements: ElementSet = three_lines.parse().unwrap();
        assert_eq!(elements.name.as_deref(), Some("VANGUARD 1"));
        assert_eq!(elements.designator(), "VANGUARD 1");

        let two_lines = format!("{LINE1}\r\n{LINE2}\r\n");
        let elements: ElementSet = two_lines.parse().unwrap();
        assert_eq!(elements.designator(), "00005");

        let catalog = parse_catalog(&format!("0 VANGUARD 1\n{LINE1}\n{LINE2}\n\n{LINE1}\n{LINE2}"))
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name.as_deref(), Some("VANGUARD 1"));
        assert_eq!(catalog[1].name, None);

        assert_eq!(
            format!("{LINE1}\n{LINE2}\n{LINE1}\n{LINE2}").parse::<ElementSet>(),
            Err(ParseTleError::MultipleElementSets(2))
        );
        assert_eq!("".parse::<ElementSet>(), Err(ParseTleError::MissingLine(1)));
        assert_eq!(
            parse_catalog(&format!("VANGUARD 1\n{LINE1}")),
            Err(ParseTleError::MissingLine(2))
        );
    }
}
