use glam::Vec3;
use std::f32::consts::PI;

const SPHERE_WIDTH_SEGMENTS: u32 = 32;
const SPHERE_HEIGHT_SEGMENTS: u32 = 16;
const CYLINDER_RADIAL_SEGMENTS: u32 = 32;

/// Primitive shape descriptor, centered on its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box
    Cuboid { width: f32, height: f32, depth: f32 },
    /// UV sphere
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    /// Capped cylinder along the local Y axis
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32 },
}

impl Geometry {
    /// Unit cube
    pub const fn cube() -> Self {
        Geometry::Cuboid { width: 1.0, height: 1.0, depth: 1.0 }
    }

    pub const fn sphere(radius: f32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments: SPHERE_WIDTH_SEGMENTS,
            height_segments: SPHERE_HEIGHT_SEGMENTS,
        }
    }

    pub const fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments: CYLINDER_RADIAL_SEGMENTS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Cuboid { .. } => "cuboid",
            Geometry::Sphere { .. } => "sphere",
            Geometry::Cylinder { .. } => "cylinder",
        }
    }

    /// Tessellate into an indexed triangle list
    pub fn mesh(&self) -> Mesh {
        match *self {
            Geometry::Cuboid { width, height, depth } => cuboid_mesh(width, height, depth),
            Geometry::Sphere { radius, width_segments, height_segments } => {
                sphere_mesh(radius, width_segments.max(3), height_segments.max(2))
            }
            Geometry::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
                cylinder_mesh(radius_top, radius_bottom, height, radial_segments.max(3))
            }
        }
    }
}

/// Indexed triangle mesh in local space
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

fn cuboid_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let h = Vec3::new(width, height, depth) * 0.5;
    let positions = (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            )
        })
        .collect();

    // Corner bit layout: x = 1, y = 2, z = 4
    let indices = vec![
        [0, 2, 3], [0, 3, 1], // -z
        [4, 5, 7], [4, 7, 6], // +z
        [0, 4, 6], [0, 6, 2], // -x
        [1, 3, 7], [1, 7, 5], // +x
        [0, 1, 5], [0, 5, 4], // -y
        [2, 6, 7], [2, 7, 3], // +y
    ];

    Mesh { positions, indices }
}

fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let mut positions = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);

    for iy in 0..=height_segments {
        let theta = iy as f32 / height_segments as f32 * PI;
        for ix in 0..=width_segments {
            let phi = ix as f32 / width_segments as f32 * 2.0 * PI;
            positions.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    let row = width_segments + 1;
    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            // Pole rows collapse to a single triangle per segment
            if iy != 0 {
                indices.push([a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.push([b, c, d]);
            }
        }
    }

    Mesh { positions, indices }
}

fn cylinder_mesh(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Mesh {
    let half = height * 0.5;
    let mut positions = Vec::with_capacity((radial_segments * 2 + 2) as usize);

    for (radius, y) in [(radius_top, half), (radius_bottom, -half)] {
        for i in 0..radial_segments {
            let angle = i as f32 / radial_segments as f32 * 2.0 * PI;
            positions.push(Vec3::new(radius * angle.sin(), y, radius * angle.cos()));
        }
    }

    let top_center = positions.len() as u32;
    positions.push(Vec3::new(0.0, half, 0.0));
    let bottom_center = positions.len() as u32;
    positions.push(Vec3::new(0.0, -half, 0.0));

    let mut indices = Vec::with_capacity((radial_segments * 4) as usize);
    for i in 0..radial_segments {
        let next = (i + 1) % radial_segments;
        let (t0, t1) = (i, next);
        let (b0, b1) = (i + radial_segments, next + radial_segments);

        indices.push([t0, b0, t1]);
        indices.push([b0, b1, t1]);
        indices.push([top_center, t0, t1]);
        indices.push([bottom_center, b1, b0]);
    }

    Mesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_triangles() {
        let mesh = Geometry::cube().mesh();
        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        for p in &mesh.positions {
            assert_eq!(p.abs(), Vec3::splat(0.5));
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = Geometry::sphere(0.5).mesh();
        assert_eq!(
            mesh.triangle_count(),
            (2 * SPHERE_WIDTH_SEGMENTS * (SPHERE_HEIGHT_SEGMENTS - 1)) as usize
        );
        for p in &mesh.positions {
            assert!((p.length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn cylinder_spans_its_height() {
        let mesh = Geometry::cylinder(0.1, 0.1, 2.0).mesh();
        assert_eq!(mesh.triangle_count(), (CYLINDER_RADIAL_SEGMENTS * 4) as usize);

        let max_y = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let min_y = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_eq!(max_y, 1.0);
        assert_eq!(min_y, -1.0);

        for p in &mesh.positions {
            assert!(Vec3::new(p.x, 0.0, p.z).length() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn indices_are_in_range() {
        for geometry in [Geometry::cube(), Geometry::sphere(1.0), Geometry::cylinder(0.2, 0.3, 1.0)] {
            let mesh = geometry.mesh();
            let n = mesh.positions.len() as u32;
            assert!(mesh.indices.iter().flatten().all(|&i| i < n), "{}", geometry.name());
        }
    }
}
