//! # Kepler equation in SGP4 form
//!
//! SGP4 solves Kepler's equation for the sum `E + ω` of the eccentric anomaly and the argument
//! of perigee, using the Lyddane-style eccentricity components
//! `axn = e·cos ω` and `ayn = e·sin ω`:
//!
//! ```text
//! U = (E + ω) − axn·sin(E + ω) + ayn·cos(E + ω)
//! ```
//!
//! where `U = M + ω` is the corrected mean longitude measured from the node.
//!
//! The solver runs Newton–Raphson iterations with each correction clamped to ±0.95 rad, stops
//! once the correction falls under [`KEPLER_TOLERANCE`] and never runs more than
//! [`KEPLER_MAX_ITERATIONS`] iterations. A non-converged solve still returns the last iterate,
//! flagged through [`KeplerSolution::converged`].
use crate::constants::Radian;

/// Convergence threshold on the Newton correction (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Upper bound on the number of Newton iterations.
pub const KEPLER_MAX_ITERATIONS: usize = 20;

/// Largest Newton correction applied in one iteration (radians).
const MAX_STEP: f64 = 0.95;

/// Result of [`solve_kepler_equation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// `E + ω`, in radians.
    pub eccentric_longitude: Radian,
    /// Number of Newton iterations performed.
    pub iterations: usize,
    /// `false` when the iteration budget ran out before the tolerance was reached.
    pub converged: bool,
}

/// Solve `U = X − axn·sin X + ayn·cos X` for `X = E + ω`.
///
/// Arguments
/// -----------------
/// * `mean_longitude`: `U`, the mean anomaly plus argument of perigee (radians).
/// * `axn`: `e·cos ω`.
/// * `ayn`: `e·sin ω` (including the long-period J3 correction in SGP4).
///
/// Return
/// ----------
/// * A [`KeplerSolution`] holding `E + ω`; see the module documentation for the
///   convergence rules.
pub fn solve_kepler_equation(mean_longitude: Radian, axn: f64, ayn: f64) -> KeplerSolution {
    solve_with_budget(mean_longitude, axn, ayn, KEPLER_MAX_ITERATIONS)
}

pub(crate) fn solve_with_budget(
    mean_longitude: Radian,
    axn: f64,
    ayn: f64,
    max_iterations: usize,
) -> KeplerSolution {
    let mut eccentric_longitude = mean_longitude;
    let mut iterations = 0;
    let mut step = f64::INFINITY;

    while step.abs() >= KEPLER_TOLERANCE && iterations < max_iterations {
        let (sin_x, cos_x) = eccentric_longitude.sin_cos();
        let derivative = 1.0 - cos_x * axn - sin_x * ayn;
        step = (mean_longitude - ayn * cos_x + axn * sin_x - eccentric_longitude) / derivative;
        step = step.clamp(-MAX_STEP, MAX_STEP);

        eccentric_longitude += step;
        iterations += 1;
    }

    KeplerSolution {
        eccentric_longitude,
        iterations,
        converged: step.abs() < KEPLER_TOLERANCE,
    }
}
