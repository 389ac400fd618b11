use glam::{Mat4, Vec2, Vec4};

use super::framebuffer::FrameBuffer;
use crate::geometry::Mesh;

/// Triangles with a vertex closer than this to the eye plane are dropped
const MIN_CLIP_W: f32 = 1e-5;

/// Screen-space vertex: pixel coordinates plus NDC depth
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    pos: Vec2,
    depth: f32,
}

/// Twice the signed area of (a, b, p)
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Clip space to pixel space, or None if the vertex is behind the near plane
fn to_screen(clip: Vec4, width: f32, height: f32) -> Option<ScreenVertex> {
    if clip.w <= MIN_CLIP_W || clip.z < -clip.w {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    Some(ScreenVertex {
        pos: Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height),
        depth: ndc.z,
    })
}

/// Draw a mesh with a flat color using depth testing
///
/// Both windings are filled. Returns the number of triangles that reached
/// rasterization.
pub fn draw_mesh(target: &mut FrameBuffer, mesh: &Mesh, mvp: Mat4, rgba: [u8; 4]) -> usize {
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let screen: Vec<Option<ScreenVertex>> = mesh
        .positions
        .iter()
        .map(|p| to_screen(mvp * p.extend(1.0), width as f32, height as f32))
        .collect();

    let mut drawn = 0;
    for [a, b, c] in &mesh.indices {
        let (Some(v0), Some(v1), Some(v2)) =
            (screen[*a as usize], screen[*b as usize], screen[*c as usize])
        else {
            continue;
        };

        if fill_triangle(target, [v0, v1, v2], rgba) {
            drawn += 1;
        }
    }
    drawn
}

fn fill_triangle(target: &mut FrameBuffer, v: [ScreenVertex; 3], rgba: [u8; 4]) -> bool {
    let area = edge(v[0].pos, v[1].pos, v[2].pos);
    if area.abs() < f32::EPSILON {
        return false;
    }

    let (width, height) = target.dimensions();
    let min = v[0].pos.min(v[1].pos).min(v[2].pos).floor().max(Vec2::ZERO);
    let max = v[0].pos.max(v[1].pos).max(v[2].pos).ceil();
    if min.x >= width as f32 || min.y >= height as f32 || max.x < 0.0 || max.y < 0.0 {
        return false;
    }

    let x0 = min.x as u32;
    let y0 = min.y as u32;
    let x1 = (max.x as u32).min(width - 1);
    let y1 = (max.y as u32).min(height - 1);
    let inv_area = 1.0 / area;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(v[1].pos, v[2].pos, p) * inv_area;
            let w1 = edge(v[2].pos, v[0].pos, p) * inv_area;
            let w2 = edge(v[0].pos, v[1].pos, p) * inv_area;

            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let depth = w0 * v[0].depth + w1 * v[1].depth + w2 * v[2].depth;
            target.write_sample(x, y, depth, rgba);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::geometry::Geometry;
    use glam::Vec3;

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn quad(z: f32, half: f32) -> Mesh {
        Mesh {
            positions: vec![
                Vec3::new(-half, -half, z),
                Vec3::new(half, -half, z),
                Vec3::new(half, half, z),
                Vec3::new(-half, half, z),
            ],
            indices: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    #[test]
    fn edge_sign_follows_winding() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        assert!(edge(a, b, Vec2::new(0.0, 1.0)) > 0.0);
        assert!(edge(a, b, Vec2::new(0.0, -1.0)) < 0.0);
    }

    #[test]
    fn fullscreen_quad_covers_every_pixel() {
        let mut fb = FrameBuffer::new(16, 16);
        fb.clear(BLACK);

        let drawn = draw_mesh(&mut fb, &quad(0.0, 1.0), Mat4::IDENTITY, RED);
        assert_eq!(drawn, 2);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(fb.pixel(x, y), Some(RED), "pixel {x},{y}");
            }
        }
    }

    #[test]
    fn reversed_winding_is_filled() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.clear(BLACK);
        let mut mesh = quad(0.0, 1.0);
        for tri in &mut mesh.indices {
            tri.swap(1, 2);
        }
        draw_mesh(&mut fb, &mesh, Mat4::IDENTITY, RED);
        assert_eq!(fb.pixel(4, 4), Some(RED));
    }

    #[test]
    fn nearer_geometry_wins_regardless_of_order() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.clear(BLACK);
        draw_mesh(&mut fb, &quad(-0.5, 1.0), Mat4::IDENTITY, RED);
        draw_mesh(&mut fb, &quad(0.5, 1.0), Mat4::IDENTITY, BLUE);
        assert_eq!(fb.pixel(4, 4), Some(RED));
    }

    #[test]
    fn cube_through_camera_lands_in_center() {
        let mut fb = FrameBuffer::new(64, 48);
        fb.clear(BLACK);
        let camera = PerspectiveCamera::for_aspect(64.0 / 48.0);

        let drawn = draw_mesh(&mut fb, &Geometry::cube().mesh(), camera.view_projection(), BLUE);
        assert!(drawn > 0);
        assert_eq!(fb.pixel(32, 24), Some(BLUE));
        assert_eq!(fb.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn geometry_behind_camera_is_skipped() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.clear(BLACK);
        let camera = PerspectiveCamera::for_aspect(1.0);
        let behind = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));

        let drawn = draw_mesh(&mut fb, &Geometry::cube().mesh(), camera.view_projection() * behind, RED);
        assert_eq!(drawn, 0);
        assert_eq!(fb.pixel(4, 4), Some(BLACK));
    }

    #[test]
    fn empty_target_draws_nothing() {
        let mut fb = FrameBuffer::new(0, 0);
        assert_eq!(draw_mesh(&mut fb, &quad(0.0, 1.0), Mat4::IDENTITY, RED), 0);
    }
}
