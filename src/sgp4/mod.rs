//! # SGP4 near-Earth propagator
//!
//! Analytic propagation of a Two-Line Element set with the **Simplified General Perturbations
//! model 4** (Spacetrack Report #3, as revised by Vallado, Crawford, Hujsak & Kelso, 2006).
//!
//! ## Overview
//! -----------------
//! Initialization ([`Sgp4::new`]) recovers the Brouwer ("un-Kozai") mean motion from the
//! published Kozai value, then precomputes:
//! - the secular rates of mean anomaly, argument of perigee and ascending node due to the
//!   J2 and J4 zonal harmonics,
//! - the atmospheric drag coefficients `C1`, `C4`, `C5` and, unless the perigee is below
//!   220 km, the higher-order terms `D2`–`D4`,
//! - the density parameter `s*`, lowered for perigees below 156 km.
//!
//! [`Sgp4::propagate`] then applies, for a time `tsince` in minutes from epoch:
//! 1. the secular gravity and drag update of the mean elements,
//! 2. the long-period periodics (J3),
//! 3. Kepler's equation for `E + ω` ([`crate::kepler::solve_kepler_equation`]),
//! 4. the short-period periodics (J2),
//! 5. the orientation vectors giving the TEME position (km) and velocity (km/s).
//!
//! ## Deep space
//! -----------------
//! Element sets with a period of 225 minutes or more normally require the SDP4 lunar-solar
//! and resonance terms. They are accepted and propagated with the near-Earth equations above,
//! and a warning is logged at initialization.
//!
//! ## Errors
//! -----------------
//! Initialization fails on eccentricity outside `[0, 1)` or a non-positive mean motion.
//! Propagation fails when the mean motion turns non-positive, the mean eccentricity leaves
//! `[-0.001, 1)` or the semi-latus rectum becomes negative. A decayed orbit (radius below one
//! Earth radius) and a Kepler solve that exhausts its iteration budget are logged but still
//! produce a [`Prediction`].
pub mod gravity;

use nalgebra::Vector3;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    constants::{Kilometer, Minute, DPI, RADEG, XPDOTP},
    kepler::{solve_with_budget, KEPLER_MAX_ITERATIONS},
    sgp4::gravity::{GravityConstants, GravityModel},
    tle::ElementSet,
};

/// Periods at or above this value (minutes) belong to the deep-space regime.
pub const DEEP_SPACE_PERIOD: Minute = 225.0;

const X2O3: f64 = 2.0 / 3.0;
const TEMP4: f64 = 1.5e-12;

/// Failures of SGP4 initialization or propagation.
#[derive(Error, Debug, PartialEq)]
pub enum PropagationError {
    #[error("Eccentricity {0} is outside [0, 1)")]
    InvalidEccentricity(f64),
    #[error("Mean motion {mean_motion} rad/min is not positive at tsince = {tsince} min")]
    NonPositiveMeanMotion { tsince: Minute, mean_motion: f64 },
    #[error("Mean eccentricity {eccentricity} is outside [-0.001, 1) at tsince = {tsince} min")]
    MeanEccentricityOutOfRange { tsince: Minute, eccentricity: f64 },
    #[error("Semi-latus rectum {semi_latus_rectum} is negative at tsince = {tsince} min")]
    NegativeSemiLatusRectum {
        tsince: Minute,
        semi_latus_rectum: f64,
    },
}

/// State vector produced by one propagation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// TEME position (km).
    pub position: Vector3<f64>,
    /// TEME velocity (km/s).
    pub velocity: Vector3<f64>,
    /// Whether the Kepler solver reached its tolerance.
    pub kepler_converged: bool,
}

/// Initialized SGP4 state for one element set.
///
/// All angles are stored in radians and the mean motion in radians per minute. Distances are
/// in Earth radii of the selected [`GravityModel`] until the final scaling to kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sgp4 {
    gravity: GravityConstants,
    simplified_drag: bool,
    deep_space: bool,

    // mean elements at epoch
    bstar: f64,
    ecco: f64,
    argpo: f64,
    inclo: f64,
    mo: f64,
    nodeo: f64,
    no_unkozai: f64,

    // semi-major axis, apogee and perigee altitudes (earth radii)
    a: f64,
    alta: f64,
    altp: f64,

    // precomputed coefficients
    aycof: f64,
    con41: f64,
    cc1: f64,
    cc4: f64,
    cc5: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    delmo: f64,
    eta: f64,
    argpdot: f64,
    omgcof: f64,
    sinmao: f64,
    t2cof: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
    x1mth2: f64,
    x7thm1: f64,
    mdot: f64,
    nodedot: f64,
    xlcof: f64,
    xmcof: f64,
    nodecf: f64,
}

impl Sgp4 {
    /// Initialize the propagator from an element set.
    ///
    /// Arguments
    /// -----------------
    /// * `elements`: the parsed TLE.
    /// * `model`: geopotential constants, [`GravityModel::Wgs72`] for standard element sets.
    ///
    /// Return
    /// ----------
    /// * The initialized propagator, already checked by a propagation at `tsince = 0`.
    pub fn new(elements: &ElementSet, model: GravityModel) -> Result<Self, PropagationError> {
        let gravity = model.constants();
        let ecco = elements.eccentricity;
        if !(0.0..1.0).contains(&ecco) {
            return Err(PropagationError::InvalidEccentricity(ecco));
        }
        let no_kozai = elements.mean_motion / XPDOTP;
        if no_kozai <= 0.0 || !no_kozai.is_finite() {
            return Err(PropagationError::NonPositiveMeanMotion {
                tsince: 0.0,
                mean_motion: no_kozai,
            });
        }

        let bstar = elements.bstar;
        let inclo = elements.inclination * RADEG;
        let nodeo = elements.right_ascension * RADEG;
        let argpo = elements.argument_of_perigee * RADEG;
        let mo = elements.mean_anomaly * RADEG;
        let (j2, j3oj2, j4, radius) = (gravity.j2, gravity.j3oj2, gravity.j4, gravity.radius);

        // recover the Brouwer mean motion
        let eccsq = ecco * ecco;
        let omeosq = 1.0 - eccsq;
        let rteosq = omeosq.sqrt();
        let cosio = inclo.cos();
        let cosio2 = cosio * cosio;

        let ak = (gravity.xke / no_kozai).powf(X2O3);
        let d1 = 0.75 * j2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
        let mut del = d1 / (ak * ak);
        let adel = ak * (1.0 - del * del - del * (1.0 / 3.0 + 134.0 * del * del / 81.0));
        del = d1 / (adel * adel);
        let no_unkozai = no_kozai / (1.0 + del);

        let ao = (gravity.xke / no_unkozai).powf(X2O3);
        let sinio = inclo.sin();
        let po = ao * omeosq;
        let con42 = 1.0 - 5.0 * cosio2;
        let con41 = -con42 - cosio2 - cosio2;
        let posq = po * po;
        let rp = ao * (1.0 - ecco);

        let a = (no_unkozai * gravity.tumin).powf(-X2O3);
        let alta = a * (1.0 + ecco) - 1.0;
        let altp = a * (1.0 - ecco) - 1.0;

        let simplified_drag = rp < 220.0 / radius + 1.0;

        // s* and (q0 - s*)^4, adjusted for low perigees
        let mut sfour = 78.0 / radius + 1.0;
        let mut qzms24 = ((120.0 - 78.0) / radius).powi(4);
        let perigee = (rp - 1.0) * radius;
        if perigee < 156.0 {
            sfour = if perigee < 98.0 { 20.0 } else { perigee - 78.0 };
            qzms24 = ((120.0 - sfour) / radius).powi(4);
            sfour = sfour / radius + 1.0;
        }

        let pinvsq = 1.0 / posq;
        let tsi = 1.0 / (ao - sfour);
        let eta = ao * ecco * tsi;
        let etasq = eta * eta;
        let eeta = ecco * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qzms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let cc2 = coef1
            * no_unkozai
            * (ao * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.375 * j2 * tsi / psisq * con41 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let cc1 = bstar * cc2;
        let cc3 = if ecco > 1.0e-4 {
            -2.0 * coef * tsi * j3oj2 * no_unkozai * sinio / ecco
        } else {
            0.0
        };
        let x1mth2 = 1.0 - cosio2;
        let cc4 = 2.0
            * no_unkozai
            * coef1
            * ao
            * omeosq
            * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
                - j2 * tsi / (ao * psisq)
                    * (-3.0 * con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * argpo).cos()));
        let cc5 = 2.0 * coef1 * ao * omeosq * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        // secular rates
        let cosio4 = cosio2 * cosio2;
        let temp1 = 1.5 * j2 * pinvsq * no_unkozai;
        let temp2 = 0.5 * temp1 * j2 * pinvsq;
        let temp3 = -0.46875 * j4 * pinvsq * pinvsq * no_unkozai;
        let mdot = no_unkozai
            + 0.5 * temp1 * rteosq * con41
            + 0.0625 * temp2 * rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
        let argpdot = -0.5 * temp1 * con42
            + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
            + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
        let xhdot1 = -temp1 * cosio;
        let nodedot =
            xhdot1 + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2)) * cosio;

        let omgcof = bstar * cc3 * argpo.cos();
        let xmcof = if ecco > 1.0e-4 {
            -X2O3 * coef * bstar / eeta
        } else {
            0.0
        };
        let nodecf = 3.5 * omeosq * xhdot1 * cc1;
        let t2cof = 1.5 * cc1;
        // avoid division by zero for inclination = 180 deg
        let xlcof = if (cosio + 1.0).abs() > TEMP4 {
            -0.25 * j3oj2 * sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio)
        } else {
            -0.25 * j3oj2 * sinio * (3.0 + 5.0 * cosio) / TEMP4
        };
        let aycof = -0.5 * j3oj2 * sinio;
        let delmo = (1.0 + eta * mo.cos()).powi(3);
        let sinmao = mo.sin();
        let x7thm1 = 7.0 * cosio2 - 1.0;

        let deep_space = DPI / no_unkozai >= DEEP_SPACE_PERIOD;
        if deep_space {
            warn!(
                satellite = elements.satellite_number,
                period_minutes = DPI / no_unkozai,
                "deep-space element set propagated with the near-Earth model"
            );
        }

        let (mut d2, mut d3, mut d4) = (0.0, 0.0, 0.0);
        let (mut t3cof, mut t4cof, mut t5cof) = (0.0, 0.0, 0.0);
        if !simplified_drag {
            let cc1sq = cc1 * cc1;
            d2 = 4.0 * ao * tsi * cc1sq;
            let temp = d2 * tsi * cc1 / 3.0;
            d3 = (17.0 * ao + sfour) * temp;
            d4 = 0.5 * temp * ao * tsi * (221.0 * ao + 31.0 * sfour) * cc1;
            t3cof = d2 + 2.0 * cc1sq;
            t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * cc1sq));
            t5cof = 0.2
                * (3.0 * d4 + 12.0 * cc1 * d3 + 6.0 * d2 * d2 + 15.0 * cc1sq * (2.0 * d2 + cc1sq));
        }

        let sgp4 = Sgp4 {
            gravity,
            simplified_drag,
            deep_space,
            bstar,
            ecco,
            argpo,
            inclo,
            mo,
            nodeo,
            no_unkozai,
            a,
            alta,
            altp,
            aycof,
            con41,
            cc1,
            cc4,
            cc5,
            d2,
            d3,
            d4,
            delmo,
            eta,
            argpdot,
            omgcof,
            sinmao,
            t2cof,
            t3cof,
            t4cof,
            t5cof,
            x1mth2,
            x7thm1,
            mdot,
            nodedot,
            xlcof,
            xmcof,
            nodecf,
        };

        debug!(
            satellite = elements.satellite_number,
            gravity_model = %model,
            simplified_drag,
            perigee_km = sgp4.perigee_altitude(),
            apogee_km = sgp4.apogee_altitude(),
            "SGP4 initialized"
        );

        sgp4.propagate(0.0)?;
        Ok(sgp4)
    }

    /// Propagate to `tsince` minutes after the element set epoch.
    ///
    /// Arguments
    /// -----------------
    /// * `tsince`: minutes since epoch, negative values propagate backwards.
    ///
    /// Return
    /// ----------
    /// * The TEME position and velocity, or a [`PropagationError`] when the propagated
    ///   elements are no longer physical.
    ///
    /// Examples
    /// ----------
    /// ```
    /// use groundtrace::sgp4::{gravity::GravityModel, Sgp4};
    /// use groundtrace::tle::ElementSet;
    ///
    /// let elements = ElementSet::parse(
    ///     "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
    ///     "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
    /// )
    /// .unwrap();
    /// let sgp4 = Sgp4::new(&elements, GravityModel::Wgs72).unwrap();
    /// let prediction = sgp4.propagate(360.0).unwrap();
    /// assert!((prediction.position.x + 7154.031).abs() < 1e-2);
    /// ```
    pub fn propagate(&self, tsince: Minute) -> Result<Prediction, PropagationError> {
        self.propagate_with_kepler_budget(tsince, KEPLER_MAX_ITERATIONS)
    }

    fn propagate_with_kepler_budget(
        &self,
        tsince: Minute,
        kepler_iterations: usize,
    ) -> Result<Prediction, PropagationError> {
        let GravityConstants {
            xke,
            j2,
            radius,
            ..
        } = self.gravity;
        let vkmpersec = radius * xke / 60.0;

        // secular gravity and atmospheric drag
        let t = tsince;
        let xmdf = self.mo + self.mdot * t;
        let argpdf = self.argpo + self.argpdot * t;
        let nodedf = self.nodeo + self.nodedot * t;
        let mut argpm = argpdf;
        let mut mm = xmdf;
        let t2 = t * t;
        let mut nodem = nodedf + self.nodecf * t2;
        let mut tempa = 1.0 - self.cc1 * t;
        let mut tempe = self.bstar * self.cc4 * t;
        let mut templ = self.t2cof * t2;

        if !self.simplified_drag {
            let delomg = self.omgcof * t;
            let delm = self.xmcof * ((1.0 + self.eta * xmdf.cos()).powi(3) - self.delmo);
            let temp = delomg + delm;
            mm = xmdf + temp;
            argpm = argpdf - temp;
            let t3 = t2 * t;
            let t4 = t3 * t;
            tempa -= self.d2 * t2 + self.d3 * t3 + self.d4 * t4;
            tempe += self.bstar * self.cc5 * (mm.sin() - self.sinmao);
            templ += self.t3cof * t3 + t4 * (self.t4cof + t * self.t5cof);
        }

        let mut nm = self.no_unkozai;
        if nm <= 0.0 {
            return Err(PropagationError::NonPositiveMeanMotion {
                tsince,
                mean_motion: nm,
            });
        }

        let am = (xke / nm).powf(X2O3) * tempa * tempa;
        nm = xke / am.powf(1.5);
        let mut em = self.ecco - tempe;
        if !(-0.001..1.0).contains(&em) {
            return Err(PropagationError::MeanEccentricityOutOfRange {
                tsince,
                eccentricity: em,
            });
        }
        em = em.max(1.0e-6);

        mm += self.no_unkozai * templ;
        let mut xlm = mm + argpm + nodem;
        nodem %= DPI;
        argpm %= DPI;
        xlm %= DPI;
        mm = (xlm - argpm - nodem) % DPI;

        let inclm = self.inclo;
        let sinip = inclm.sin();
        let cosip = inclm.cos();

        // long-period periodics
        let axnl = em * argpm.cos();
        let temp = 1.0 / (am * (1.0 - em * em));
        let aynl = em * argpm.sin() + temp * self.aycof;
        let xl = mm + argpm + nodem + temp * self.xlcof * axnl;

        let u = (xl - nodem) % DPI;
        let kepler = solve_with_budget(u, axnl, aynl, kepler_iterations);
        if !kepler.converged {
            warn!(
                tsince,
                iterations = kepler.iterations,
                "Kepler equation did not converge, using the last iterate"
            );
        }
        let (sineo1, coseo1) = kepler.eccentric_longitude.sin_cos();

        // short-period preliminary quantities
        let ecose = axnl * coseo1 + aynl * sineo1;
        let esine = axnl * sineo1 - aynl * coseo1;
        let el2 = axnl * axnl + aynl * aynl;
        let pl = am * (1.0 - el2);
        if pl < 0.0 {
            return Err(PropagationError::NegativeSemiLatusRectum {
                tsince,
                semi_latus_rectum: pl,
            });
        }

        let rl = am * (1.0 - ecose);
        let rdotl = am.sqrt() * esine / rl;
        let rvdotl = pl.sqrt() / rl;
        let betal = (1.0 - el2).sqrt();
        let temp = esine / (1.0 + betal);
        let sinu = am / rl * (sineo1 - aynl - axnl * temp);
        let cosu = am / rl * (coseo1 - axnl + aynl * temp);
        let mut su = sinu.atan2(cosu);
        let sin2u = (cosu + cosu) * sinu;
        let cos2u = 1.0 - 2.0 * sinu * sinu;
        let temp = 1.0 / pl;
        let temp1 = 0.5 * j2 * temp;
        let temp2 = temp1 * temp;

        // short-period periodics
        let mrt = rl * (1.0 - 1.5 * temp2 * betal * self.con41)
            + 0.5 * temp1 * self.x1mth2 * cos2u;
        su -= 0.25 * temp2 * self.x7thm1 * sin2u;
        let xnode = nodem + 1.5 * temp2 * cosip * sin2u;
        let xinc = inclm + 1.5 * temp2 * cosip * sinip * cos2u;
        let mvt = rdotl - nm * temp1 * self.x1mth2 * sin2u / xke;
        let rvdot = rvdotl + nm * temp1 * (self.x1mth2 * cos2u + 1.5 * self.con41) / xke;

        // orientation vectors
        let (sinsu, cossu) = su.sin_cos();
        let (snod, cnod) = xnode.sin_cos();
        let (sini, cosi) = xinc.sin_cos();
        let xmx = -snod * cosi;
        let xmy = cnod * cosi;
        let u_vec = Vector3::new(xmx * sinsu + cnod * cossu, xmy * sinsu + snod * cossu, sini * sinsu);
        let v_vec = Vector3::new(xmx * cossu - cnod * sinsu, xmy * cossu - snod * sinsu, sini * cossu);

        if mrt < 1.0 {
            warn!(tsince, radius_er = mrt, "satellite has decayed below the Earth surface");
        }

        Ok(Prediction {
            position: u_vec * (mrt * radius),
            velocity: (u_vec * mvt + v_vec * rvdot) * vkmpersec,
            kepler_converged: kepler.converged,
        })
    }

    /// Perigee altitude above the model's equatorial radius (km).
    pub fn perigee_altitude(&self) -> Kilometer {
        self.altp * self.gravity.radius
    }

    /// Apogee altitude above the model's equatorial radius (km).
    pub fn apogee_altitude(&self) -> Kilometer {
        self.alta * self.gravity.radius
    }

    /// Mean semi-major axis at epoch (km).
    pub fn semi_major_axis(&self) -> Kilometer {
        self.a * self.gravity.radius
    }

    /// Whether the orbit period reaches the deep-space regime.
    pub fn is_deep_space(&self) -> bool {
        self.deep_space
    }

    /// Whether the simplified drag equations are used (perigee below 220 km).
    pub fn uses_simplified_drag(&self) -> bool {
        self.simplified_drag
    }
}

#[cfg(test)]
mod sgp4_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    const LINE1: &str = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
    const LINE2: &str = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

    fn vanguard() -> ElementSet {
        ElementSet::parse(LINE1, LINE2).unwrap()
    }

    fn assert_vector(actual: &Vector3<f64>, expected: [f64; 3], epsilon: f64) {
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(*a, e, epsilon = epsilon);
        }
    }

    #[test]
    fn test_vallado_reference_vectors() {
        let sgp4 = Sgp4::new(&vanguard(), GravityModel::Wgs72).unwrap();
        assert!(!sgp4.is_deep_space());
        assert!(!sgp4.uses_simplified_drag());

        let epoch = sgp4.propagate(0.0).unwrap();
        assert!(epoch.kepler_converged);
        assert_vector(&epoch.position, [7022.46529266, -1400.08296755, 0.03995155], 1e-5);
        assert_vector(&epoch.velocity, [1.893841015, 6.405893759, 4.534807250], 1e-8);

        let later = sgp4.propagate(360.0).unwrap();
        assert_vector(
            &later.position,
            [-7154.03120202, -3783.17682504, -3536.19412294],
            1e-5,
        );
    }

    #[test]
    fn test_gravity_models() {
        let tsince = 309.67110720001529;
        for (model, expected) in [
            (
                GravityModel::Wgs72Old,
                [-3754.251473242793, 7876.346815095482, 4719.220855042922],
            ),
            (
                GravityModel::Wgs72,
                [-3754.2514743216166, 7876.346817439062, 4719.220856478582],
            ),
            (
                GravityModel::Wgs84,
                [-3754.2437675772426, 7876.3549956188945, 4719.227897029576],
            ),
        ] {
            let sgp4 = Sgp4::new(&vanguard(), model).unwrap();
            let prediction = sgp4.propagate(tsince).unwrap();
            assert_vector(&prediction.position, expected, 1e-6);
        }
    }

    #[test]
    fn test_unconverged_kepler_still_propagates() {
        let sgp4 = Sgp4::new(&vanguard(), GravityModel::Wgs72).unwrap();
        let converged = sgp4.propagate(360.0).unwrap();

        let truncated = sgp4.propagate_with_kepler_budget(360.0, 1).unwrap();
        assert!(!truncated.kepler_converged);
        assert!(truncated.position.iter().all(|c| c.is_finite()));
        assert!(truncated.velocity.iter().all(|c| c.is_finite()));
        assert!((truncated.position - converged.position).norm() < 100.0);
    }

    #[test]
    fn test_propagate_is_pure() {
        let sgp4 = Sgp4::new(&vanguard(), GravityModel::Wgs72).unwrap();
        let first = sgp4.propagate(1234.5).unwrap();
        sgp4.propagate(-600.0).unwrap();
        assert_eq!(sgp4.propagate(1234.5).unwrap(), first);
    }

    #[test]
    fn test_radius_within_perigee_and_apogee() {
        let sgp4 = Sgp4::new(&vanguard(), GravityModel::Wgs72).unwrap();
        let radius = GravityModel::Wgs72.constants().radius;
        let margin = 20.0;

        for step in 0..=20 {
            let prediction = sgp4.propagate(step as f64 * 10.0).unwrap();
            let altitude = prediction.position.norm() - radius;
            assert!(altitude >= sgp4.perigee_altitude() - margin, "{altitude}");
            assert!(altitude <= sgp4.apogee_altitude() + margin, "{altitude}");
        }
        assert!(sgp4.perigee_altitude() < sgp4.apogee_altitude());
        assert_abs_diff_eq!(
            sgp4.semi_major_axis(),
            radius + 0.5 * (sgp4.perigee_altitude() + sgp4.apogee_altitude()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_invalid_elements() {
        let mut elements = vanguard();
        elements.eccentricity = 1.2;
        assert_eq!(
            Sgp4::new(&elements, GravityModel::Wgs72),
            Err(PropagationError::InvalidEccentricity(1.2))
        );

        let mut elements = vanguard();
        elements.mean_motion = 0.0;
        assert!(matches!(
            Sgp4::new(&elements, GravityModel::Wgs72),
            Err(PropagationError::NonPositiveMeanMotion { .. })
        ));
    }

    #[test]
    fn test_deep_space_is_propagated() {
        let mut elements = vanguard();
        elements.mean_motion = 2.0;
        elements.eccentricity = 0.01;

        let sgp4 = Sgp4::new(&elements, GravityModel::Wgs72).unwrap();
        assert!(sgp4.is_deep_space());
        let prediction = sgp4.propagate(60.0).unwrap();
        assert!(prediction.position.norm() > 20_000.0);
    }

    #[test]
    fn test_heavy_drag_eventually_fails() {
        let mut elements = vanguard();
        elements.bstar = 1.0;

        let sgp4 = Sgp4::new(&elements, GravityModel::Wgs72).unwrap();
        let failure = (1..=200)
            .map(|day| sgp4.propagate(day as f64 * 1440.0))
            .find_map(Result::err);
        assert!(failure.is_some());
    }
}
