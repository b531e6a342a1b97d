//! Oriented tubes between two arbitrary points.
//!
//! A tube primitive is authored lengthwise along Y and centered on its origin.
//! To stretch it from `start` to `end` the builder nests three nodes:
//!
//! ```text
//! root      translation = start, rotation = look-at(end)   (-Z faces end)
//! └ z_align rotation = +90° about X                        (Y becomes Z)
//!   └ tube  translation = -length/2 along Y, Cylinder geometry
//! ```
//!
//! After the z-align turn the tube spans local `z ∈ [-length, 0]`, so the
//! look-at rotation sends its far end onto `end`.

use std::sync::Arc;

use glam::{Mat3, Mat4, Quat, Vec3};
use tracing::trace;

use crate::{Appearance, Geometry, GeometryError, GeometryIssue, Point3, SceneNode, Transform};

/// Inputs for a single tube.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderSpec {
    /// Where the tube starts.
    pub start: Point3,
    /// Where the tube ends.
    pub end: Point3,
    /// Tube radius. Must be positive.
    pub radius: f32,
    /// Sides of the cross-section. At least 3.
    pub radial_segments: u32,
    /// Material shared with the caller.
    pub appearance: Arc<Appearance>,
}

impl CylinderSpec {
    /// Collect the inputs. Nothing is validated until [`build_cylinder`].
    pub fn new(
        start: Point3,
        end: Point3,
        radius: f32,
        radial_segments: u32,
        appearance: Arc<Appearance>,
    ) -> Self {
        Self {
            start,
            end,
            radius,
            radial_segments,
            appearance,
        }
    }

    /// Check the preconditions and return the segment's length and unit
    /// direction.
    fn validate(&self) -> Result<(f32, Vec3), GeometryError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GeometryError::InvalidGeometry(
                GeometryIssue::NonFiniteEndpoint,
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidGeometry(
                GeometryIssue::NonPositiveRadius(self.radius),
            ));
        }
        if self.radial_segments < 3 {
            return Err(GeometryError::InvalidGeometry(
                GeometryIssue::TooFewSegments(self.radial_segments),
            ));
        }

        let (length, direction) = segment_extent(self.start, self.end);
        if length == 0.0 {
            return Err(GeometryError::InvalidGeometry(
                GeometryIssue::DegenerateSegment,
            ));
        }
        if !length.is_finite() || !direction.is_finite() {
            return Err(GeometryError::InvalidGeometry(
                GeometryIssue::UnrepresentableLength,
            ));
        }
        Ok((length, direction))
    }
}

/// A tube node stretched from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedCylinder {
    start: Point3,
    end: Point3,
    length: f32,
    radius: f32,
    radial_segments: u32,
    appearance: Arc<Appearance>,
    node: SceneNode,
}

impl OrientedCylinder {
    /// Distance between the two endpoints.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Point the near cap sits on.
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Point the far cap sits on.
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Tube radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Sides of the cross-section.
    pub fn radial_segments(&self) -> u32 {
        self.radial_segments
    }

    /// Material shared with the caller and every node built from it.
    pub fn appearance(&self) -> &Arc<Appearance> {
        &self.appearance
    }

    /// Root of the node tree, ready to attach to a scene.
    pub fn node(&self) -> &SceneNode {
        &self.node
    }

    /// Give up the builder state and keep only the node tree.
    pub fn into_node(self) -> SceneNode {
        self.node
    }

    /// The cylinder primitive carried by the innermost node.
    pub fn geometry(&self) -> Geometry {
        Geometry::Cylinder {
            radius: self.radius,
            height: self.length,
            radial_segments: self.radial_segments,
            appearance: Arc::clone(&self.appearance),
        }
    }

    /// Model matrix of the geometry node: tube-local space to the space the
    /// root node is attached in.
    pub fn world_matrix(&self) -> Mat4 {
        let mut model = Mat4::IDENTITY;
        self.node.visit(Mat4::IDENTITY, &mut |node, world| {
            if node.geometry.is_some() {
                model = world;
            }
        });
        model
    }

    /// The cap that sits on `start`, after transform.
    pub fn near_end(&self) -> Point3 {
        self.world_matrix()
            .transform_point3(Vec3::Y * (self.length / 2.0))
    }

    /// The cap that sits on `end`, after transform.
    pub fn far_end(&self) -> Point3 {
        self.world_matrix()
            .transform_point3(Vec3::NEG_Y * (self.length / 2.0))
    }

    /// Center of the tube, after transform.
    pub fn midpoint(&self) -> Point3 {
        self.world_matrix().transform_point3(Vec3::ZERO)
    }

    /// Rebuild the tube for moved endpoints, keeping radius, segments and
    /// appearance.
    pub fn retarget(&self, start: Point3, end: Point3) -> Result<OrientedCylinder, GeometryError> {
        build_cylinder(&CylinderSpec {
            start,
            end,
            radius: self.radius,
            radial_segments: self.radial_segments,
            appearance: Arc::clone(&self.appearance),
        })
    }
}

/// Build a tube of `spec.radius` running from `spec.start` to `spec.end`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if the endpoints coincide or are
/// not finite, the radius is not positive, there are fewer than three radial
/// segments, or the distance between the endpoints does not fit in an `f32`.
pub fn build_cylinder(spec: &CylinderSpec) -> Result<OrientedCylinder, GeometryError> {
    let (length, direction) = spec.validate()?;

    let tube = SceneNode::named("tube")
        .with_transform(Transform::from_translation(Vec3::NEG_Y * (length / 2.0)))
        .with_geometry(Geometry::Cylinder {
            radius: spec.radius,
            height: length,
            radial_segments: spec.radial_segments,
            appearance: Arc::clone(&spec.appearance),
        });

    let z_align = SceneNode::named("z_align")
        .with_transform(Transform::from_rotation(Quat::from_rotation_x(
            std::f32::consts::FRAC_PI_2,
        )))
        .with_child(tube);

    let root = SceneNode::named("cylinder")
        .with_transform(Transform {
            translation: spec.start,
            rotation: look_rotation(direction),
        })
        .with_child(z_align);

    trace!(
        length,
        radius = spec.radius,
        segments = spec.radial_segments,
        "built cylinder"
    );

    Ok(OrientedCylinder {
        start: spec.start,
        end: spec.end,
        length,
        radius: spec.radius,
        radial_segments: spec.radial_segments,
        appearance: Arc::clone(&spec.appearance),
        node: root,
    })
}

/// Euclidean length and unit direction of `a -> b`.
///
/// Worked in f64: the squared differences of two finite f32 points cannot
/// overflow there, so only a length beyond `f32::MAX` comes back infinite.
fn segment_extent(a: Point3, b: Point3) -> (f32, Vec3) {
    let diff = b.as_dvec3() - a.as_dvec3();
    let length = diff.length();
    if length == 0.0 {
        return (0.0, Vec3::ZERO);
    }
    (length as f32, (diff / length).as_vec3())
}

/// Rotation whose local -Z axis points along `forward` (unit length).
///
/// Builds the same right/up/back basis as `Mat4::look_at_rh`, with world Y
/// as the up hint, falling back to Z when looking straight up or down.
fn look_rotation(forward: Vec3) -> Quat {
    let back = -forward;
    let up_hint = if back.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    let right = up_hint.cross(back).normalize();
    let up = back.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize()
}
