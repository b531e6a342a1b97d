//! Scene assembly for the Orrery: the body table, per-body layout through
//! semi-log scaling, orbit/body node construction, and the random line test.

mod assembly;
mod body;
mod error;
mod layout;
mod lines;

pub use assembly::{ORBIT_PIPE_RADIUS, assemble_system, system_node};
pub use body::{BodyCatalog, CelestialBody};
pub use error::SystemError;
pub use layout::{BodyLayout, SUN_DISPLAY_RADIUS, SUN_ORBIT_RADIUS, SystemScaling};
pub use lines::{LineTest, MARKER_RADIUS, lines_test};
