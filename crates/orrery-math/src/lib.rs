//! Value types and semi-log magnitude scaling for the Orrery scene.

mod error;
mod period;
mod semilog;

pub use error::ScaleError;
pub use period::{DAYS_PER_YEAR, HOURS_PER_DAY, TimeScale};
pub use semilog::{ScaleCalibration, calibrate, scale};

/// A point in scene space. Plain value type, passed and returned by value.
pub type Point3 = glam::Vec3;
