//! Per-body display sizes, orbit distances and screen-time periods.

use orrery_math::{ScaleCalibration, TimeScale, calibrate};
use tracing::debug;

use crate::{BodyCatalog, CelestialBody, SystemError};

/// Orbit distance used for the sun instead of its scaled value.
pub const SUN_ORBIT_RADIUS: f64 = 0.1;

/// Display radius used for the sun instead of its scaled value.
pub const SUN_DISPLAY_RADIUS: f64 = 1.0;

/// Everything needed to turn real body parameters into scene values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemScaling {
    /// Diameter (km) to display radius.
    pub diameter: ScaleCalibration,
    /// Orbit radius (10^6 km) to display distance.
    pub orbit: ScaleCalibration,
    /// Real periods to screen seconds.
    pub time: TimeScale,
}

/// Scene values for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyLayout {
    pub name: String,
    /// Sphere radius in scene units.
    pub display_radius: f64,
    /// Distance from the center in scene units.
    pub orbit_radius: f64,
    /// Screen seconds per rotation.
    pub day_seconds: f64,
    /// Screen seconds per revolution.
    pub year_seconds: f64,
}

impl SystemScaling {
    pub fn new(diameter: ScaleCalibration, orbit: ScaleCalibration, time: TimeScale) -> Self {
        Self {
            diameter,
            orbit,
            time,
        }
    }

    /// Mercury-to-Jupiter diameters onto `[0.2, 1.0]`, Mercury's orbit to the
    /// outer reference distance onto `[1.5, 40.0]`, 8 s per year, 1 s per day.
    pub fn reference() -> Result<Self, SystemError> {
        Ok(Self {
            diameter: calibrate(4879.0, 142_984.0, 0.2, 1.0)?,
            orbit: calibrate(57.9, 90_560.0, 1.5, 40.0)?,
            time: TimeScale::default(),
        })
    }

    /// Scale one body. The sun keeps fixed size and distance so it sits,
    /// visible, at the center.
    pub fn layout(&self, body: &CelestialBody) -> Result<BodyLayout, SystemError> {
        let (display_radius, orbit_radius) = if body.is_sun() {
            (SUN_DISPLAY_RADIUS, SUN_ORBIT_RADIUS)
        } else {
            (
                self.diameter.apply(body.diameter)?,
                self.orbit.apply(body.orbit_radius)?,
            )
        };

        let layout = BodyLayout {
            name: body.name.clone(),
            display_radius,
            orbit_radius,
            day_seconds: self.time.day_seconds(body.day_length),
            year_seconds: self.time.year_seconds(body.year_length),
        };
        debug!(
            body = %layout.name,
            radius = layout.display_radius,
            orbit = layout.orbit_radius,
            day_s = layout.day_seconds,
            year_s = layout.year_seconds,
            "laid out body"
        );
        Ok(layout)
    }

    /// Lay out every body of a catalog, in catalog order.
    pub fn layout_catalog(&self, catalog: &BodyCatalog) -> Result<Vec<BodyLayout>, SystemError> {
        catalog.iter().map(|body| self.layout(body)).collect()
    }
}
