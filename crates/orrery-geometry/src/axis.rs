//! Segmented reference axes built from oriented cylinders.

use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Appearance, Color, CylinderSpec, GeometryError, GeometryIssue, OrientedCylinder, SceneNode,
    build_cylinder,
};

/// Number of segments every axis is split into.
pub const AXIS_STEPS: usize = 21;

/// Sides of each axis segment's cross-section.
pub const AXIS_RADIAL_SEGMENTS: u32 = 8;

/// One of the three scene axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Conventional color: red, green, blue for x, y, z.
    pub fn color(self) -> Color {
        match self {
            Axis::X => Color::RED,
            Axis::Y => Color::GREEN,
            Axis::Z => Color::BLUE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Parameters for one segmented axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub axis: Axis,
    /// Total length, centered on the origin.
    pub height: f32,
    /// Tube radius of every segment.
    pub radius: f32,
    /// Color of even-indexed segments.
    pub primary: Color,
    /// Color of odd-indexed segments below the origin.
    pub negative: Color,
    /// Color of odd-indexed segments at or above the origin.
    pub positive: Color,
}

impl AxisSpec {
    /// Axis in its conventional color with gray/white alternation.
    pub fn new(axis: Axis, height: f32, radius: f32) -> Self {
        Self {
            axis,
            height,
            radius,
            primary: axis.color(),
            negative: Color::GRAY,
            positive: Color::WHITE,
        }
    }
}

/// Split `[-height/2, height/2]` along the axis into [`AXIS_STEPS`] tubes.
///
/// Even segments use the primary color; odd segments are gray below the
/// origin and white from the origin up.
pub fn build_axis(spec: &AxisSpec) -> Result<Vec<OrientedCylinder>, GeometryError> {
    if !(spec.height.is_finite() && spec.height > 0.0) {
        return Err(GeometryError::InvalidGeometry(
            GeometryIssue::NonPositiveHeight(spec.height),
        ));
    }

    let label = spec.axis.label();
    let primary = Arc::new(Appearance::solid(format!("axis_{label}"), spec.primary));
    let negative = Arc::new(Appearance::solid(format!("axis_{label}_negative"), spec.negative));
    let positive = Arc::new(Appearance::solid(format!("axis_{label}_positive"), spec.positive));

    let dir = spec.axis.unit();
    let step = spec.height / AXIS_STEPS as f32;
    let mut segments = Vec::with_capacity(AXIS_STEPS);

    for i in 0..AXIS_STEPS {
        let pos = -spec.height / 2.0 + i as f32 * step;
        let appearance = if i % 2 == 0 {
            &primary
        } else if pos < 0.0 {
            &negative
        } else {
            &positive
        };

        segments.push(build_cylinder(&CylinderSpec::new(
            dir * pos,
            dir * (pos + step),
            spec.radius,
            AXIS_RADIAL_SEGMENTS,
            Arc::clone(appearance),
        ))?);
    }

    debug!(axis = label, height = spec.height, "built axis");
    Ok(segments)
}

/// All three axes, x then y then z, in their conventional colors.
pub fn build_axes(height: f32, radius: f32) -> Result<Vec<OrientedCylinder>, GeometryError> {
    let mut all = Vec::with_capacity(3 * AXIS_STEPS);
    for axis in Axis::ALL {
        all.extend(build_axis(&AxisSpec::new(axis, height, radius))?);
    }
    Ok(all)
}

/// [`build_axes`] collected under a single node named `"axes"`.
pub fn axes_node(height: f32, radius: f32) -> Result<SceneNode, GeometryError> {
    let mut node = SceneNode::named("axes");
    for segment in build_axes(height, radius)? {
        node.add_child(segment.into_node());
    }
    Ok(node)
}
