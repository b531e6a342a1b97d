//! Colors and the shared material handle attached to geometry.

use serde::{Deserialize, Serialize};

/// Linear RGBA color, each component in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const GRAY: Color = Color([0.5, 0.5, 0.5, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Color = Color([0.0, 0.0, 1.0, 1.0]);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }
}

/// Surface appearance of a piece of geometry.
///
/// Geometry holds appearances through `Arc<Appearance>`: the caller owns the
/// material, nodes only keep a reference to it and never change it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Human-readable name. For bodies this is also the texture stem
    /// (e.g. "earth" for `earth.jpg`).
    pub name: String,
    /// Diffuse color.
    pub diffuse: Color,
    /// Specular highlight color.
    pub specular: Color,
}

impl Appearance {
    /// Appearance with the same diffuse and specular color.
    pub fn solid(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            diffuse: color,
            specular: color,
        }
    }

    /// Appearance with a colored diffuse term and a white highlight.
    pub fn lit(name: impl Into<String>, diffuse: Color) -> Self {
        Self {
            name: name.into(),
            diffuse,
            specular: Color::WHITE,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::solid("default", Color::WHITE)
    }
}
