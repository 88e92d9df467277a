//! UV sphere geometry for the solid-colour fruit models

use crate::GlbError;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub const DEFAULT_RADIUS: f32 = 0.5;
pub const DEFAULT_SEGMENTS: u32 = 16;
pub const DEFAULT_RINGS: u32 = 12;

/// Largest vertex count for u16 indices; index 65535 is reserved for primitive restart
const MAX_VERTICES: u64 = u16::MAX as u64;

/// Sampled sphere mesh plus its material tint.
///
/// Vertices form a `(rings + 1) x (segments + 1)` grid. Both seams and both
/// poles are duplicated so every grid cell indexes the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescription {
    radius: f32,
    segments: u32,
    rings: u32,
    base_color: [f32; 3],
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u16>,
}

impl MeshDescription {
    /// Sample a sphere of `radius` on a `segments` x `rings` grid.
    ///
    /// Zero segments or rings is accepted and yields no triangles.
    pub fn sphere(
        radius: f32,
        segments: u32,
        rings: u32,
        base_color: [f32; 3],
    ) -> Result<Self, GlbError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GlbError::InvalidInput(format!(
                "sphere radius must be finite and > 0, got {radius}"
            )));
        }
        if base_color
            .iter()
            .any(|c| !c.is_finite() || !(0.0..=1.0).contains(c))
        {
            return Err(GlbError::InvalidInput(format!(
                "base colour components must lie in [0, 1], got {base_color:?}"
            )));
        }
        let vertex_count = (rings as u64 + 1) * (segments as u64 + 1);
        if vertex_count > MAX_VERTICES {
            return Err(GlbError::InvalidInput(format!(
                "{segments} segments x {rings} rings needs {vertex_count} vertices, \
                 u16 indices allow at most {MAX_VERTICES}"
            )));
        }

        let mut positions = Vec::with_capacity(vertex_count as usize);
        let mut normals = Vec::with_capacity(vertex_count as usize);

        for ring in 0..=rings {
            let theta = ring_fraction(ring, rings) * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for seg in 0..=segments {
                let phi = ring_fraction(seg, segments) * TAU;
                let (sin_phi, cos_phi) = phi.sin_cos();

                let direction = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
                positions.push((direction * radius).to_array());
                normals.push(direction.normalize_or_zero().to_array());
            }
        }

        let stride = segments + 1;
        let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
        for ring in 0..rings {
            for seg in 0..segments {
                let first = (ring * stride + seg) as u16;
                let second = first + stride as u16;

                // Counter-clockwise seen from outside
                indices.extend_from_slice(&[first, first + 1, second]);
                indices.extend_from_slice(&[second, first + 1, second + 1]);
            }
        }

        Ok(Self {
            radius,
            segments,
            rings,
            base_color,
            positions,
            normals,
            indices,
        })
    }

    /// Sphere with the default placeholder resolution and radius
    pub fn fruit(base_color: [f32; 3]) -> Result<Self, GlbError> {
        Self::sphere(DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_RINGS, base_color)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn base_color(&self) -> [f32; 3] {
        self.base_color
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

/// `step / steps`, treating a zero-step range as a single sample at 0
fn ring_fraction(step: u32, steps: u32) -> f32 {
    if steps == 0 {
        0.0
    } else {
        step as f32 / steps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 3] = [0.8, 0.1, 0.1];

    #[test]
    fn test_grid_counts() {
        for (segments, rings) in [(16, 12), (3, 2), (1, 1), (7, 5)] {
            let mesh = MeshDescription::sphere(0.5, segments, rings, RED).unwrap();
            let vertices = ((rings + 1) * (segments + 1)) as usize;
            assert_eq!(mesh.positions().len(), vertices);
            assert_eq!(mesh.normals().len(), vertices);
            assert_eq!(mesh.indices().len(), (rings * segments * 6) as usize);
            assert!(mesh.indices().iter().all(|&i| (i as usize) < vertices));
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = MeshDescription::fruit(RED).unwrap();
        for normal in mesh.normals() {
            let len = Vec3::from_array(*normal).length();
            assert!((len - 1.0).abs() < 1e-5, "normal length {len}");
        }
    }

    #[test]
    fn test_positions_lie_on_radius() {
        let mesh = MeshDescription::sphere(2.0, 8, 6, RED).unwrap();
        for pos in mesh.positions() {
            assert!((Vec3::from_array(*pos).length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_poles_are_duplicated_per_segment() {
        let mesh = MeshDescription::sphere(1.0, 4, 3, RED).unwrap();
        let north = &mesh.positions()[..5];
        let south = &mesh.positions()[mesh.positions().len() - 5..];
        for p in north {
            assert!((p[1] - 1.0).abs() < 1e-6);
        }
        for p in south {
            assert!((p[1] + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        let mesh = MeshDescription::fruit(RED).unwrap();
        let positions = mesh.positions();
        let mut checked = 0;
        for tri in mesh.indices().chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|k| Vec3::from_array(positions[tri[k] as usize]));
            let normal = (b - a).cross(c - a);
            // Pole cells have one collapsed edge
            if normal.length() < 1e-6 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "triangle {tri:?} faces inward");
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_zero_segments_yields_no_triangles() {
        let mesh = MeshDescription::sphere(0.5, 0, 4, RED).unwrap();
        assert_eq!(mesh.positions().len(), 5);
        assert!(mesh.indices().is_empty());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            MeshDescription::sphere(0.0, 16, 12, RED),
            Err(GlbError::InvalidInput(_))
        ));
        assert!(matches!(
            MeshDescription::sphere(f32::NAN, 16, 12, RED),
            Err(GlbError::InvalidInput(_))
        ));
        assert!(matches!(
            MeshDescription::sphere(0.5, 16, 12, [1.5, 0.0, 0.0]),
            Err(GlbError::InvalidInput(_))
        ));
        assert!(matches!(
            MeshDescription::sphere(0.5, 512, 512, RED),
            Err(GlbError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_full_u16_grid_is_rejected() {
        // 256 x 256 vertices would need index 65535
        assert!(matches!(
            MeshDescription::sphere(1.0, 255, 255, RED),
            Err(GlbError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_largest_accepted_grid_avoids_restart_index() {
        let mesh = MeshDescription::sphere(1.0, 255, 254, RED).unwrap();
        assert_eq!(mesh.positions().len(), 255 * 256);
        let max = mesh.indices().iter().copied().max().unwrap();
        assert!(max < u16::MAX);
        assert_eq!(max as usize, mesh.positions().len() - 1);
    }
}
