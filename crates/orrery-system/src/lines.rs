//! Random line segments drawn as tubes, with a marker sphere on each end.
//!
//! Each tube should run exactly from a green marker to a red one, which makes
//! this a quick visual check of cylinder orientation.

use std::sync::Arc;

use orrery_geometry::{
    Appearance, Color, CylinderSpec, Geometry, OrientedCylinder, Point3, SceneNode, Transform,
    build_cylinder,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::SystemError;

/// Radius of the endpoint marker spheres.
pub const MARKER_RADIUS: f32 = 0.5;

/// The generated segments and their endpoint markers.
#[derive(Clone, Debug)]
pub struct LineTest {
    /// One tube per segment.
    pub segments: Vec<OrientedCylinder>,
    /// Green start marker and red end marker for every segment, in order.
    pub markers: Vec<SceneNode>,
}

impl LineTest {
    /// Collect markers and tubes under a node named `"lines"`.
    pub fn into_node(self) -> SceneNode {
        let mut node = SceneNode::named("lines");
        node.children.extend(self.markers);
        node.children
            .extend(self.segments.into_iter().map(OrientedCylinder::into_node));
        node
    }
}

/// Generate `count` random segments with endpoints in `[-extent, extent]^3`.
///
/// Deterministic for a given seed. The extent must be finite and positive,
/// and the sampling range `2 * extent` must be finite too.
pub fn lines_test(
    count: u32,
    extent: f32,
    radius: f32,
    radial_segments: u32,
    seed: u64,
) -> Result<LineTest, SystemError> {
    if !(extent > 0.0 && (2.0 * extent).is_finite()) {
        return Err(SystemError::InvalidExtent(extent));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let line = Arc::new(Appearance::lit("line", Color::WHITE));
    let start_marker = Arc::new(Appearance::solid("line_start", Color::GREEN));
    let end_marker = Arc::new(Appearance::solid("line_end", Color::RED));

    let mut segments = Vec::with_capacity(count as usize);
    let mut markers = Vec::with_capacity(2 * count as usize);

    for _ in 0..count {
        let start = random_point(&mut rng, extent);
        let end = random_point(&mut rng, extent);

        markers.push(marker(start, &start_marker));
        markers.push(marker(end, &end_marker));
        segments.push(build_cylinder(&CylinderSpec::new(
            start,
            end,
            radius,
            radial_segments,
            Arc::clone(&line),
        ))?);
    }

    debug!(count, seed, "generated line test");
    Ok(LineTest { segments, markers })
}

fn random_point(rng: &mut ChaCha8Rng, extent: f32) -> Point3 {
    Point3::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    )
}

fn marker(position: Point3, appearance: &Arc<Appearance>) -> SceneNode {
    SceneNode::new()
        .with_transform(Transform::from_translation(position))
        .with_geometry(Geometry::Sphere {
            radius: MARKER_RADIUS,
            appearance: Arc::clone(appearance),
        })
}
