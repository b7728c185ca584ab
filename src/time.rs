//! # UTC time model
//!
//! This module provides [`UtcInstant`], a calendar UTC instant with whole-second
//! resolution, and the time-scale helpers used by the propagation pipeline.
//!
//! ## Overview
//! -----------------
//! - Parsing of `YYYY-MM-DD HH:MM:SS` timestamps (any single non-digit separator between
//!   fields) with a small [`nom`] grammar.
//! - Loose construction: out-of-range fields (second 75, day 32, negative minutes…) are
//!   accepted and **normalized** with full Gregorian calendar rules (month lengths, leap years).
//! - Duration arithmetic through [`UtcInstant::add_seconds`], with carries and borrows that
//!   cascade all the way to the year.
//! - A total order (derived, lexicographic on `(year, month, day, hour, minute, second)`).
//! - Conversion to the astronomical Julian Date (day starting at noon) and to MJD.
//! - Interoperability with [`hifitime::Epoch`] in the UTC time scale.
//! - Instants outside the `i32` year range saturate to [`UtcInstant::MIN`] or
//!   [`UtcInstant::MAX`].
//! - Greenwich mean sidereal time ([`gmst`]) to rotate inertial positions into the
//!   Earth-fixed frame.
//!
//! ## Units & Conventions
//! -----------------
//! - Julian dates are plain `f64` days ([`JD`]); MJD = JD − 2400000.5.
//! - UTC is used as a proxy for UT1 when computing sidereal time (|UT1 − UTC| < 0.9 s).
//!
//! ## See also
//! ------------
//! * [`crate::tle::ElementSet::epoch_julian_date`] – TLE epoch on the same Julian scale.
//! * [`crate::ground_track::TimeWindow`] – Steps an instant across a window.
use std::{fmt, str::FromStr};

use hifitime::{DurationError, Epoch, HifitimeError, TimeScale};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::satisfy,
    combinator::{all_consuming, map, map_res},
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

use crate::constants::{Radian, DPI, JD, JDTOMJD, MJD, SECONDS_PER_DAY, T2000};

/// Errors raised while parsing a timestamp string.
#[derive(Error, Debug, PartialEq)]
pub enum ParseTimeError {
    #[error("Invalid timestamp '{0}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidFormat(String),
}

/// A calendar UTC instant with whole-second resolution.
///
/// Fields are always normalized: `0 ≤ second < 60`, `0 ≤ minute < 60`, `0 ≤ hour < 24`,
/// `1 ≤ month ≤ 12` and `1 ≤ day ≤ days_in_month(year, month)`.
///
/// The derived ordering compares fields in declaration order, which is exactly the
/// chronological order of normalized instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcInstant {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of `month` (1-12) in `year`.
///
/// Return
/// ----------
/// * The month length, or `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date (month in `1..=12`, day may overflow).
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // months counted from March so that the leap day is the last day of the year
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)` of a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Day counts of [`UtcInstant::MIN`] and [`UtcInstant::MAX`].
const FIRST_DAY: i64 = days_from_civil(i32::MIN as i64, 1, 1);
const LAST_DAY: i64 = days_from_civil(i32::MAX as i64, 12, 31);

impl UtcInstant {
    /// Earliest representable instant, `-2147483648-01-01 00:00:00`.
    pub const MIN: UtcInstant = UtcInstant {
        year: i32::MIN,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Latest representable instant, `2147483647-12-31 23:59:59`.
    pub const MAX: UtcInstant = UtcInstant {
        year: i32::MAX,
        month: 12,
        day: 31,
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Build an instant from possibly out-of-range calendar fields.
    ///
    /// Every field is normalized with carries and borrows: seconds into minutes, minutes
    /// into hours, hours into days, months into years, and finally days into months using
    /// the Gregorian month lengths of the resulting year.
    ///
    /// Arguments
    /// -----------------
    /// * `year` – Calendar year (proleptic Gregorian).
    /// * `month`, `day`, `hour`, `minute`, `second` – Loose calendar fields; any value is accepted.
    ///
    /// Return
    /// ----------
    /// * A normalized [`UtcInstant`]. Instants before [`UtcInstant::MIN`] or after
    ///   [`UtcInstant::MAX`] saturate to that bound.
    ///
    /// Examples
    /// ----------
    /// ```
    /// use groundtrace::time::UtcInstant;
    ///
    /// let instant = UtcInstant::new(2023, 7, 6, 23, 59, 61);
    /// assert_eq!(instant.to_string(), "2023-07-07 00:00:01");
    /// ```
    pub fn new(year: i32, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        let minute = minute.saturating_add(second.div_euclid(60));
        let second = second.rem_euclid(60);
        let hour = hour.saturating_add(minute.div_euclid(60));
        let minute = minute.rem_euclid(60);
        let day_carry = hour.div_euclid(24);
        let hour = hour.rem_euclid(24);

        let month = month.saturating_sub(1);
        let year = i64::from(year).saturating_add(month.div_euclid(12));
        if year < i64::from(i32::MIN) {
            return UtcInstant::MIN;
        }
        if year > i64::from(i32::MAX) {
            return UtcInstant::MAX;
        }
        let month = month.rem_euclid(12) + 1;

        let days = days_from_civil(year, month, 1)
            .saturating_add(day.saturating_sub(1))
            .saturating_add(day_carry);
        if days < FIRST_DAY {
            return UtcInstant::MIN;
        }
        if days > LAST_DAY {
            return UtcInstant::MAX;
        }
        let (year, month, day) = civil_from_days(days);

        UtcInstant {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        }
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
    ///
    /// Any single non-digit character is accepted as a separator, so
    /// `2023-07-06T00:00:00`, `2023-07-06-00:00:00` and `2023/07/06 00:00:00` are all
    /// valid. Calendar correctness is not checked: `2023-07-32 00:00:00` is normalized
    /// to `2023-08-01 00:00:00`.
    ///
    /// Return
    /// ----------
    /// * The normalized instant, or [`ParseTimeError::InvalidFormat`] when a field is
    ///   missing, non-numeric, too long, or trailing text remains.
    pub fn parse(text: &str) -> Result<Self, ParseTimeError> {
        let (_, [year, month, day, hour, minute, second]) = all_consuming(timestamp)
            .parse(text.trim())
            .map_err(|_| ParseTimeError::InvalidFormat(text.to_string()))?;

        Ok(UtcInstant::new(
            year as i32,
            month,
            day,
            hour,
            minute,
            second,
        ))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Return a new instant shifted by `seconds` (negative values move backwards).
    pub fn add_seconds(&self, seconds: i64) -> Self {
        UtcInstant::new(
            self.year,
            i64::from(self.month),
            i64::from(self.day),
            i64::from(self.hour),
            i64::from(self.minute),
            i64::from(self.second).saturating_add(seconds),
        )
    }

    /// Whole days since 1970-01-01 of this instant's calendar date.
    fn days_since_unix_epoch(&self) -> i64 {
        days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Signed number of seconds from `self` to `other` (positive when `other` is later).
    pub fn seconds_until(&self, other: &UtcInstant) -> i64 {
        let day_seconds = |instant: &UtcInstant| {
            i64::from(instant.hour) * 3600
                + i64::from(instant.minute) * 60
                + i64::from(instant.second)
        };
        (other.days_since_unix_epoch() - self.days_since_unix_epoch()) * 86_400
            + day_seconds(other)
            - day_seconds(self)
    }

    /// Astronomical Julian Date of this instant (the Julian day starts at noon).
    ///
    /// Uses the standard Gregorian-calendar-to-Julian-Day-Number conversion and adds the
    /// fraction `(hour − 12)/24 + minute/1440 + second/86400`.
    ///
    /// Examples
    /// ----------
    /// ```
    /// use groundtrace::time::UtcInstant;
    ///
    /// let j2000 = UtcInstant::new(2000, 1, 1, 12, 0, 0);
    /// assert_eq!(j2000.to_julian_date(), 2451545.0);
    /// ```
    pub fn to_julian_date(&self) -> JD {
        let month = i64::from(self.month);
        let a = (14 - month) / 12;
        let y = i64::from(self.year) + 4800 - a;
        let m = month + 12 * a - 3;
        let jdn = i64::from(self.day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;

        jdn as f64
            + (f64::from(self.hour) - 12.0) / 24.0
            + f64::from(self.minute) / 1440.0
            + f64::from(self.second) / SECONDS_PER_DAY
    }

    /// Modified Julian Date of this instant.
    pub fn to_mjd(&self) -> MJD {
        self.to_julian_date() - JDTOMJD
    }

    /// Build an instant from a UTC [`Epoch`], truncating sub-second digits.
    ///
    /// A leap second (`23:59:60`) is carried into the following minute.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        UtcInstant::new(
            year,
            month.into(),
            day.into(),
            hour.into(),
            minute.into(),
            second.into(),
        )
    }
}

impl TryFrom<&UtcInstant> for Epoch {
    type Error = HifitimeError;

    /// Fails for years beyond the range hifitime can represent.
    fn try_from(instant: &UtcInstant) -> Result<Self, Self::Error> {
        // hifitime checks for a leap second in `year + 1`
        if instant.year == i32::MAX {
            return Err(HifitimeError::Duration {
                source: DurationError::Overflow,
            });
        }
        Epoch::maybe_from_gregorian(
            instant.year,
            instant.month,
            instant.day,
            instant.hour,
            instant.minute,
            instant.second,
            0,
            TimeScale::UTC,
        )
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for UtcInstant {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UtcInstant::parse(s)
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn field(max_digits: usize) -> impl FnMut(&str) -> IResult<&str, i64> {
    move |input| {
        map_res(take_while_m_n(1, max_digits, is_digit), str::parse::<i64>).parse(input)
    }
}

fn separator(input: &str) -> IResult<&str, char> {
    satisfy(|c| !c.is_ascii_digit()).parse(input)
}

fn timestamp(input: &str) -> IResult<&str, [i64; 6]> {
    map(
        (
            field(4),
            preceded(separator, field(2)),
            preceded(separator, field(2)),
            preceded(separator, field(2)),
            preceded(separator, field(2)),
            preceded(separator, field(2)),
        ),
        |(year, month, day, hour, minute, second)| [year, month, day, hour, minute, second],
    )
    .parse(input)
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT1
///    in seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: MJD) -> Radian {
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;

    // GMST at 0h UT1, seconds → radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    // Sidereal rotation accumulated since 0h UT1
    let h = (tjm - itjm) * DPI;
    (gmst0 + h * RAP).rem_euclid(DPI)
}
