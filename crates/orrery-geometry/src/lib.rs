//! Procedural scene geometry for the Orrery: oriented cylinders between two
//! points, the three-axis reference grid, and the retained scene nodes they
//! are delivered in.

mod appearance;
mod axis;
mod cylinder;
mod error;
mod node;
mod tube_mesh;

pub use appearance::{Appearance, Color};
pub use axis::{AXIS_RADIAL_SEGMENTS, AXIS_STEPS, Axis, AxisSpec, axes_node, build_axes, build_axis};
pub use cylinder::{CylinderSpec, OrientedCylinder, build_cylinder};
pub use error::{GeometryError, GeometryIssue};
pub use node::{Geometry, SceneNode, Spin, Transform};
pub use tube_mesh::{TubeMesh, generate_tube};

pub use orrery_math::Point3;
