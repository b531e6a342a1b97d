//! Triangle mesh generation for capped tubes.

use glam::Vec3;

use crate::{GeometryError, GeometryIssue};

/// A capped tube mesh, centered at the origin and running along Y.
#[derive(Clone, Debug, PartialEq)]
pub struct TubeMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals: radial on the wall, ±Y on the caps.
    pub normals: Vec<Vec3>,
    /// Per-vertex UVs. U wraps around the tube, V runs bottom to top.
    pub uvs: Vec<[f32; 2]>,
    /// Counter-clockwise triangle indices (outward-facing).
    pub indices: Vec<u32>,
}

impl TubeMesh {
    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a capped tube with `radial_segments` sides.
///
/// The wall is `height` long, spanning `y ∈ [-height/2, height/2]`. Each ring
/// repeats its first vertex at the seam so UVs do not wrap. The mesh has
/// `4 * radial_segments` triangles.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a radius or height that is
/// not finite and positive, or fewer than three radial segments.
pub fn generate_tube(
    radius: f32,
    height: f32,
    radial_segments: u32,
) -> Result<TubeMesh, GeometryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidGeometry(
            GeometryIssue::NonPositiveRadius(radius),
        ));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(GeometryError::InvalidGeometry(
            GeometryIssue::NonPositiveHeight(height),
        ));
    }
    if radial_segments < 3 {
        return Err(GeometryError::InvalidGeometry(
            GeometryIssue::TooFewSegments(radial_segments),
        ));
    }

    let n = radial_segments;
    let half = height / 2.0;
    let ring_len = n + 1;

    let vertex_count = (4 * n + 6) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity((12 * n) as usize);

    let ring_dir = |i: u32| {
        let theta = i as f32 / n as f32 * std::f32::consts::TAU;
        Vec3::new(theta.sin(), 0.0, theta.cos())
    };

    // Wall: bottom ring then top ring.
    for (y, v) in [(-half, 0.0), (half, 1.0)] {
        for i in 0..ring_len {
            let dir = ring_dir(i);
            positions.push(dir * radius + Vec3::Y * y);
            normals.push(dir);
            uvs.push([i as f32 / n as f32, v]);
        }
    }
    for i in 0..n {
        let b0 = i;
        let b1 = i + 1;
        let t0 = ring_len + i;
        let t1 = ring_len + i + 1;
        indices.extend_from_slice(&[b0, b1, t1]);
        indices.extend_from_slice(&[b0, t1, t0]);
    }

    // Caps: center vertex followed by its own ring with a flat normal.
    for (y, normal) in [(half, Vec3::Y), (-half, Vec3::NEG_Y)] {
        let center = positions.len() as u32;
        positions.push(Vec3::Y * y);
        normals.push(normal);
        uvs.push([0.5, 0.5]);
        for i in 0..ring_len {
            let dir = ring_dir(i);
            positions.push(dir * radius + Vec3::Y * y);
            normals.push(normal);
            uvs.push([0.5 + dir.x * 0.5, 0.5 + dir.z * 0.5]);
        }
        for i in 0..n {
            let a = center + 1 + i;
            let b = center + 2 + i;
            if normal.y > 0.0 {
                indices.extend_from_slice(&[center, a, b]);
            } else {
                indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    Ok(TubeMesh {
        positions,
        normals,
        uvs,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_count_scales_with_segments() {
        for n in [3, 6, 8, 32] {
            let mesh = generate_tube(1.0, 10.0, n).unwrap();
            assert_eq!(mesh.triangle_count(), 4 * n as usize);
            assert_eq!(mesh.positions.len(), 4 * n as usize + 6);
        }
    }

    #[test]
    fn test_wall_vertices_at_radius() {
        let mesh = generate_tube(0.4, 3.0, 12).unwrap();
        for (pos, normal) in mesh.positions.iter().zip(&mesh.normals) {
            if normal.y == 0.0 {
                let radial = Vec3::new(pos.x, 0.0, pos.z).length();
                assert!((radial - 0.4).abs() < 1e-5, "radial = {radial}");
            }
        }
    }

    #[test]
    fn test_segment_count_does_not_change_length() {
        for n in [3, 6, 64] {
            let mesh = generate_tube(1.0, 10.0, n).unwrap();
            let min_y = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
            let max_y = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
            assert!((max_y - min_y - 10.0).abs() < 1e-5);
            assert!((max_y - 5.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        let mesh = generate_tube(1.0, 4.0, 7).unwrap();
        for tri in mesh.indices.chunks(3) {
            let a = mesh.positions[tri[0] as usize];
            let b = mesh.positions[tri[1] as usize];
            let c = mesh.positions[tri[2] as usize];
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward triangle {tri:?}");
        }
    }

    #[test]
    fn test_indices_valid() {
        let mesh = generate_tube(2.0, 1.0, 9).unwrap();
        let n = mesh.positions.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.uvs.len(), mesh.positions.len());
    }

    #[test]
    fn test_uvs_in_range() {
        let mesh = generate_tube(1.0, 2.0, 5).unwrap();
        for uv in &mesh.uvs {
            assert!((0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1]));
        }
    }

    #[test]
    fn test_too_few_segments_rejected() {
        for n in [0, 1, 2] {
            assert!(matches!(
                generate_tube(1.0, 1.0, n),
                Err(GeometryError::InvalidGeometry(GeometryIssue::TooFewSegments(m))) if m == n
            ));
        }
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        assert!(matches!(
            generate_tube(0.0, 1.0, 6),
            Err(GeometryError::InvalidGeometry(GeometryIssue::NonPositiveRadius(_)))
        ));
        assert!(matches!(
            generate_tube(f32::NAN, 1.0, 6),
            Err(GeometryError::InvalidGeometry(GeometryIssue::NonPositiveRadius(_)))
        ));
        assert!(matches!(
            generate_tube(1.0, -2.0, 6),
            Err(GeometryError::InvalidGeometry(GeometryIssue::NonPositiveHeight(_)))
        ));
    }
}
