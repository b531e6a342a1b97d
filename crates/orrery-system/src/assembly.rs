//! Builds the orbit and body nodes for every entry in a catalog.

use std::sync::Arc;

use glam::Vec3;
use orrery_geometry::{
    Appearance, Color, Geometry, GeometryError, GeometryIssue, SceneNode, Spin, Transform,
};
use tracing::info;

use crate::{BodyCatalog, BodyLayout, SystemError, SystemScaling};

/// Default tube radius of the orbit rings.
pub const ORBIT_PIPE_RADIUS: f32 = 0.025;

/// Assemble the solar system under one root node.
///
/// Each body hangs off its own orbit node: a white ring of the scaled orbit
/// radius that turns once per screen year. The body sits on the ring at
/// `(orbit, 0, 0)` and turns once per screen day.
pub fn assemble_system(
    catalog: &BodyCatalog,
    scaling: &SystemScaling,
    orbit_pipe_radius: f32,
) -> Result<SceneNode, SystemError> {
    system_node(&scaling.layout_catalog(catalog)?, orbit_pipe_radius)
}

/// [`assemble_system`] for bodies that are already laid out.
pub fn system_node(
    layouts: &[BodyLayout],
    orbit_pipe_radius: f32,
) -> Result<SceneNode, SystemError> {
    if !(orbit_pipe_radius.is_finite() && orbit_pipe_radius > 0.0) {
        return Err(GeometryError::InvalidGeometry(GeometryIssue::NonPositiveRadius(
            orbit_pipe_radius,
        ))
        .into());
    }

    let ring = Arc::new(Appearance::solid("orbit", Color::WHITE));
    let mut root = SceneNode::named("solar_system");

    for layout in layouts {
        root.add_child(orbit_node(layout, orbit_pipe_radius, &ring));
    }

    info!(bodies = layouts.len(), nodes = root.node_count(), "Assembled system");
    Ok(root)
}

fn orbit_node(layout: &BodyLayout, pipe_radius: f32, ring: &Arc<Appearance>) -> SceneNode {
    let orbit = layout.orbit_radius as f32;

    let body = SceneNode::named(layout.name.clone())
        .with_transform(Transform::from_translation(Vec3::new(orbit, 0.0, 0.0)))
        .with_geometry(Geometry::Sphere {
            radius: layout.display_radius as f32,
            appearance: Arc::new(Appearance::lit(layout.name.clone(), Color::WHITE)),
        })
        .with_spin(Spin::full_turn(layout.day_seconds as f32));

    SceneNode::named(format!("{}_orbit", layout.name))
        .with_geometry(Geometry::Torus {
            ring_radius: orbit,
            pipe_radius,
            appearance: Arc::clone(ring),
        })
        .with_spin(Spin::full_turn(layout.year_seconds as f32))
        .with_child(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CelestialBody;
    use glam::Mat4;

    fn assembled() -> SceneNode {
        assemble_system(
            &BodyCatalog::solar_system(),
            &SystemScaling::reference().unwrap(),
            ORBIT_PIPE_RADIUS,
        )
        .unwrap()
    }

    #[test]
    fn test_one_orbit_per_body() {
        let root = assembled();
        assert_eq!(root.children.len(), 10);
        // root + 10 orbits + 10 bodies
        assert_eq!(root.node_count(), 21);
        assert_eq!(root.geometry_count(), 20);
    }

    #[test]
    fn test_body_sits_on_its_ring() {
        let root = assembled();
        let orbit = root.find("earth_orbit").unwrap();
        let Some(Geometry::Torus { ring_radius, .. }) = orbit.geometry else {
            panic!("orbit without torus");
        };

        let mut earth_center = None;
        root.visit(Mat4::IDENTITY, &mut |node, world| {
            if node.name.as_deref() == Some("earth") {
                earth_center = Some(world.transform_point3(Vec3::ZERO));
            }
        });
        let center = earth_center.unwrap();
        assert!((center.length() - ring_radius).abs() < 1e-5);
    }

    #[test]
    fn test_spins_follow_periods() {
        let root = assembled();
        let earth = root.find("earth").unwrap();
        assert!((earth.spin.unwrap().duration_seconds - 1.0).abs() < 1e-6);
        let orbit = root.find("earth_orbit").unwrap();
        assert!((orbit.spin.unwrap().duration_seconds - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_sun_at_center() {
        let root = assembled();
        let sun = root.find("sun").unwrap();
        assert_eq!(sun.transform.translation.x, 0.1);
        match &sun.geometry {
            Some(Geometry::Sphere { radius, appearance }) => {
                assert_eq!(*radius, 1.0);
                assert_eq!(appearance.name, "sun");
            }
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn test_rings_share_appearance() {
        let root = assembled();
        let a = root.find("mars_orbit").unwrap().geometry.as_ref().unwrap();
        let b = root.find("venus_orbit").unwrap().geometry.as_ref().unwrap();
        assert!(Arc::ptr_eq(a.appearance(), b.appearance()));
    }

    #[test]
    fn test_bad_pipe_radius() {
        let result = assemble_system(
            &BodyCatalog::solar_system(),
            &SystemScaling::reference().unwrap(),
            0.0,
        );
        assert!(matches!(result, Err(SystemError::Geometry(_))));
    }

    #[test]
    fn test_system_node_matches_assembly() {
        let catalog = BodyCatalog::solar_system();
        let scaling = SystemScaling::reference().unwrap();
        let layouts = scaling.layout_catalog(&catalog).unwrap();
        let from_layouts = system_node(&layouts, ORBIT_PIPE_RADIUS).unwrap();
        let assembled = assemble_system(&catalog, &scaling, ORBIT_PIPE_RADIUS).unwrap();
        assert_eq!(from_layouts.node_count(), assembled.node_count());
        let earth = |root: &SceneNode| root.find("earth").unwrap().transform;
        assert_eq!(earth(&from_layouts), earth(&assembled));
        assert!(system_node(&layouts, -1.0).is_err());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog =
            BodyCatalog::new(vec![CelestialBody::new("vulcan", 40.0, 3000.0, 50.0, 100.0)])
                .unwrap();
        let root =
            assemble_system(&catalog, &SystemScaling::reference().unwrap(), 0.05).unwrap();
        let vulcan = root.find("vulcan").unwrap();
        // Inside Mercury's orbit, so below the low orbit anchor.
        assert!(vulcan.transform.translation.x < 1.5);
    }
}
