//! A tracked satellite: one element set together with its initialized propagator.
use std::str::FromStr;

use crate::{
    constants::{Minute, MINUTES_PER_DAY},
    geodetic::{eci_to_geodetic, EarthRotation, GeodeticPosition, LatitudeMethod},
    sgp4::{gravity::GravityModel, Prediction, PropagationError, Sgp4},
    time::UtcInstant,
    tle::ElementSet,
    trace_errors::TraceError,
};

/// Immutable aggregate of an [`ElementSet`] and the [`Sgp4`] state built from it.
///
/// Every query is a pure function of the element set and the requested instant, so a
/// `Satellite` can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    elements: ElementSet,
    propagator: Sgp4,
    gravity_model: GravityModel,
}

impl Satellite {
    /// Build a satellite from an element set with the WGS-72 constants.
    pub fn new(elements: ElementSet) -> Result<Self, PropagationError> {
        Satellite::with_gravity_model(elements, GravityModel::default())
    }

    /// Build a satellite from an element set and an explicit gravity model.
    pub fn with_gravity_model(
        elements: ElementSet,
        gravity_model: GravityModel,
    ) -> Result<Self, PropagationError> {
        let propagator = Sgp4::new(&elements, gravity_model)?;
        Ok(Satellite {
            elements,
            propagator,
            gravity_model,
        })
    }

    /// Parse the two data lines of a TLE and initialize the propagator.
    pub fn from_tle(line1: &str, line2: &str) -> Result<Self, TraceError> {
        Satellite::initialize(ElementSet::parse(line1, line2)?)
    }

    /// Initialization failures are reported at the element set epoch.
    fn initialize(elements: ElementSet) -> Result<Self, TraceError> {
        let epoch = elements.epoch();
        Satellite::new(elements).map_err(|source| TraceError::Propagation {
            timestamp: epoch,
            source,
        })
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn propagator(&self) -> &Sgp4 {
        &self.propagator
    }

    pub fn gravity_model(&self) -> GravityModel {
        self.gravity_model
    }

    pub fn designator(&self) -> String {
        self.elements.designator()
    }

    /// Minutes elapsed between the element set epoch and `instant` (SGP4 `tsince`).
    pub fn minutes_since_epoch(&self, instant: &UtcInstant) -> Minute {
        (instant.to_julian_date() - self.elements.epoch_julian_date()) * MINUTES_PER_DAY
    }

    /// TEME position and velocity at `instant`.
    pub fn predict_at(&self, instant: &UtcInstant) -> Result<Prediction, PropagationError> {
        self.propagator.propagate(self.minutes_since_epoch(instant))
    }

    /// Sub-satellite point at `instant`.
    ///
    /// Arguments
    /// -----------------
    /// * `instant`: UTC instant of the sample.
    /// * `method`: latitude determination over the ellipsoid.
    /// * `rotation`: whether longitudes are Earth-fixed or inertial.
    ///
    /// Return
    /// ----------
    /// * The geodetic position, or the [`PropagationError`] raised by SGP4.
    pub fn position_at(
        &self,
        instant: &UtcInstant,
        method: LatitudeMethod,
        rotation: EarthRotation,
    ) -> Result<GeodeticPosition, PropagationError> {
        let prediction = self.predict_at(instant)?;
        Ok(eci_to_geodetic(
            &prediction.position,
            rotation.angle_at(instant),
            method,
        ))
    }
}

impl FromStr for Satellite {
    type Err = TraceError;

    /// Parse a 2-line or 3-line TLE text and initialize the propagator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Satellite::initialize(s.parse()?)
    }
}
