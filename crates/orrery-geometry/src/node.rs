//! Retained scene nodes: local transforms, geometry descriptors and spin
//! descriptors, composed into a tree that a host renderer walks.

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use crate::{Appearance, GeometryError};
use crate::tube_mesh::{TubeMesh, generate_tube};

/// Rigid local transform: rotation applied first, then translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Pure rotation.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation,
        }
    }

    /// Affine matrix for this transform.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Map a point from this node's space into its parent's space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

/// Continuous rotation about the node's local Y axis, repeating forever.
///
/// This is a descriptor for the host's animation facility; nothing here
/// advances time on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Radians turned per cycle.
    pub angle: f32,
    /// Seconds per cycle.
    pub duration_seconds: f32,
}

impl Spin {
    /// One full turn every `duration_seconds`.
    pub fn full_turn(duration_seconds: f32) -> Self {
        Self {
            angle: std::f32::consts::TAU,
            duration_seconds,
        }
    }

    /// Rotation reached after `elapsed_seconds`.
    pub fn rotation_at(&self, elapsed_seconds: f32) -> Quat {
        if self.duration_seconds <= 0.0 {
            return Quat::IDENTITY;
        }
        let cycles = elapsed_seconds / self.duration_seconds;
        Quat::from_rotation_y(self.angle * cycles.fract())
    }
}

/// Primitive geometry attached to a node. All primitives are centered at the
/// node's local origin.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Tube authored lengthwise along local Y, spanning `±height / 2`.
    Cylinder {
        radius: f32,
        height: f32,
        radial_segments: u32,
        appearance: Arc<Appearance>,
    },
    /// Sphere of the given radius.
    Sphere {
        radius: f32,
        appearance: Arc<Appearance>,
    },
    /// Ring lying in the local XZ plane.
    Torus {
        ring_radius: f32,
        pipe_radius: f32,
        appearance: Arc<Appearance>,
    },
}

impl Geometry {
    /// The appearance shared by this primitive.
    pub fn appearance(&self) -> &Arc<Appearance> {
        match self {
            Geometry::Cylinder { appearance, .. }
            | Geometry::Sphere { appearance, .. }
            | Geometry::Torus { appearance, .. } => appearance,
        }
    }

    /// Triangle mesh for tube geometry; other primitives are tessellated by
    /// the host and give `Ok(None)`.
    pub fn tube_mesh(&self) -> Result<Option<TubeMesh>, GeometryError> {
        match self {
            Geometry::Cylinder {
                radius,
                height,
                radial_segments,
                ..
            } => generate_tube(*radius, *height, *radial_segments).map(Some),
            _ => Ok(None),
        }
    }
}

/// A node in the retained scene tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    /// Optional label, used for lookups and log output.
    pub name: Option<String>,
    /// Transform relative to the parent node.
    pub transform: Transform,
    /// Geometry drawn at this node, if any.
    pub geometry: Option<Geometry>,
    /// Continuous rotation applied on top of `transform`.
    pub spin: Option<Spin>,
    /// Child nodes.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Empty node with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty node with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Replace the local transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach geometry drawn at this node.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Attach a continuous rotation.
    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child in place.
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that carry geometry.
    pub fn geometry_count(&self) -> usize {
        usize::from(self.geometry.is_some())
            + self
                .children
                .iter()
                .map(SceneNode::geometry_count)
                .sum::<usize>()
    }

    /// Depth-first search for a node by name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Visit every node in the subtree with its world matrix, parents first.
    /// Spin descriptors are not applied (rest pose).
    pub fn visit(&self, parent: Mat4, f: &mut impl FnMut(&SceneNode, Mat4)) {
        let world = parent * self.transform.matrix();
        f(self, world);
        for child in &self.children {
            child.visit(world, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_point_rotates_then_translates() {
        let t = Transform {
            translation: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        };
        let p = t.transform_point(Vec3::X);
        assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6, "{p}");
        let m = t.matrix().transform_point3(Vec3::X);
        assert!((m - p).length() < 1e-6);
    }

    #[test]
    fn test_visit_composes_parent_transforms() {
        let root = SceneNode::named("root")
            .with_transform(Transform::from_translation(Vec3::new(0.0, 5.0, 0.0)))
            .with_child(
                SceneNode::named("leaf")
                    .with_transform(Transform::from_translation(Vec3::new(2.0, 0.0, 0.0))),
            );

        let mut leaf_origin = None;
        root.visit(Mat4::IDENTITY, &mut |node, world| {
            if node.name.as_deref() == Some("leaf") {
                leaf_origin = Some(world.transform_point3(Vec3::ZERO));
            }
        });
        let origin = leaf_origin.unwrap();
        assert!((origin - Vec3::new(2.0, 5.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_counts_and_find() {
        let app = Arc::new(Appearance::default());
        let root = SceneNode::named("root")
            .with_child(SceneNode::named("a").with_geometry(Geometry::Sphere {
                radius: 1.0,
                appearance: app.clone(),
            }))
            .with_child(SceneNode::named("b").with_child(SceneNode::named("c")));

        assert_eq!(root.node_count(), 4);
        assert_eq!(root.geometry_count(), 1);
        assert!(root.find("c").is_some());
        assert!(root.find("missing").is_none());
        assert!(Arc::ptr_eq(
            root.find("a").unwrap().geometry.as_ref().unwrap().appearance(),
            &app
        ));
    }

    #[test]
    fn test_spin_wraps_each_cycle() {
        let spin = Spin::full_turn(2.0);
        let half = spin.rotation_at(1.0);
        let expected = Quat::from_rotation_y(std::f32::consts::PI);
        assert!(half.dot(expected).abs() > 0.9999);
        let again = spin.rotation_at(3.0);
        assert!(again.dot(expected).abs() > 0.9999);
        assert_eq!(Spin::full_turn(0.0).rotation_at(5.0), Quat::IDENTITY);
    }

    #[test]
    fn test_tube_mesh_only_for_cylinders() {
        let app = Arc::new(Appearance::default());
        let tube = Geometry::Cylinder {
            radius: 0.5,
            height: 2.0,
            radial_segments: 6,
            appearance: app.clone(),
        };
        assert_eq!(tube.tube_mesh().unwrap().unwrap().triangle_count(), 24);

        let sphere = Geometry::Sphere {
            radius: 1.0,
            appearance: app.clone(),
        };
        assert!(sphere.tube_mesh().unwrap().is_none());

        let flat = Geometry::Cylinder {
            radius: 0.5,
            height: 2.0,
            radial_segments: 2,
            appearance: app,
        };
        assert!(flat.tube_mesh().is_err());
    }
}
