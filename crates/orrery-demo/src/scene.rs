//! Scene assembly from config: camera, reference axes, solar system and the
//! optional random line test.

use glam::Vec3;
use orrery_config::{Config, ConfigError};
use orrery_geometry::{AXIS_STEPS, GeometryError, SceneNode, Transform, axes_node};
use orrery_system::{BodyCatalog, BodyLayout, SystemError, SystemScaling, lines_test, system_node};
use tracing::info;

/// Errors from any stage of scene assembly.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    System(#[from] SystemError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The assembled scene plus the numbers worth reporting.
pub struct BuiltScene {
    pub root: SceneNode,
    pub layouts: Vec<BodyLayout>,
    pub axis_segments: usize,
    pub line_segments: usize,
}

impl BuiltScene {
    /// Human-readable lines describing the scene.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Scene: {} nodes, {} with geometry, {} axis segments, {} line segments",
            self.root.node_count(),
            self.root.geometry_count(),
            self.axis_segments,
            self.line_segments,
        )];
        for layout in &self.layouts {
            lines.push(format!(
                "  {:<8} radius {:.3}  orbit {:>6.3}  day {:>7.3}s  year {:>7.3}s",
                layout.name,
                layout.display_radius,
                layout.orbit_radius,
                layout.day_seconds,
                layout.year_seconds,
            ));
        }
        lines
    }
}

/// Build the whole scene described by `config`.
pub fn build_scene(config: &Config) -> Result<BuiltScene, SceneError> {
    let scaling = SystemScaling::new(
        config.scaling.diameter.calibration("diameter")?,
        config.scaling.orbit.calibration("orbit")?,
        config.scaling.time,
    );

    let catalog = match &config.scene.bodies {
        Some(path) => BodyCatalog::load(path)?,
        None => BodyCatalog::solar_system(),
    };

    let mut root = SceneNode::named("scene");
    root.add_child(
        SceneNode::named("camera").with_transform(Transform::from_translation(Vec3::from(
            config.scene.camera_position,
        ))),
    );

    let mut axis_segments = 0;
    if config.scene.show_axes {
        let axes = axes_node(config.scene.axes_height, config.scene.axes_radius)?;
        axis_segments = axes.children.len();
        root.add_child(axes);
    }

    let layouts = scaling.layout_catalog(&catalog)?;
    root.add_child(system_node(&layouts, config.scene.orbit_pipe_radius)?);

    let mut line_segments = 0;
    if config.lines.count > 0 {
        let lines = lines_test(
            config.lines.count,
            config.lines.extent,
            config.lines.radius,
            config.lines.radial_segments,
            config.lines.seed,
        )?;
        line_segments = lines.segments.len();
        root.add_child(lines.into_node());
    }

    info!(
        bodies = catalog.len(),
        axes = axis_segments / AXIS_STEPS,
        lines = line_segments,
        "Scene built"
    );

    Ok(BuiltScene {
        root,
        layouts,
        axis_segments,
        line_segments,
    })
}
