use std::rc::Rc;

use crate::camera::PerspectiveCamera;
use crate::core::{draw_mesh, DisplayContext, FrameBuffer};
use crate::error::{Result, StageError};
use crate::geometry::{Geometry, Mesh};
use crate::math::{to_rgba8, Rgb};
use crate::page::Element;
use crate::scene::Scene;

/// Largest samples-per-axis factor a surface accepts
pub const MAX_SUPERSAMPLE: u32 = 4;

/// Rasterization options shared by every surface on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    pub antialias: bool,
    /// Samples per axis when antialiasing
    pub supersample: u32,
    pub background: Rgb,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            supersample: 2,
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl SurfaceOptions {
    /// Supersample factor must lie in `1..=MAX_SUPERSAMPLE`
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            Ok(())
        } else {
            Err(StageError::InvalidSupersample {
                value: self.supersample,
                max: MAX_SUPERSAMPLE,
            })
        }
    }

    fn sample_factor(&self) -> u32 {
        if self.antialias {
            self.supersample
        } else {
            1
        }
    }
}

/// Drawable context bound to one container element
///
/// Owns the camera and the color/depth targets. The viewport always tracks
/// the container's client size as of the last `resize()`.
pub struct RenderSurface {
    container: Rc<Element>,
    camera: PerspectiveCamera,
    viewport: DisplayContext,
    options: SurfaceOptions,
    target: FrameBuffer,
    resolved: Vec<u8>,
    meshes: Vec<(Geometry, Mesh)>,
}

/// Tessellate each distinct geometry once
fn cached_mesh(cache: &mut Vec<(Geometry, Mesh)>, geometry: Geometry) -> &Mesh {
    let idx = match cache.iter().position(|(g, _)| *g == geometry) {
        Some(idx) => idx,
        None => {
            let mesh = geometry.mesh();
            log::trace!("tessellated {}: {} triangles", geometry.name(), mesh.triangle_count());
            cache.push((geometry, mesh));
            cache.len() - 1
        }
    };
    &cache[idx].1
}

impl RenderSurface {
    /// Bind to a container sized to its current client area
    pub fn new(container: Rc<Element>, options: SurfaceOptions) -> Result<Self> {
        options.validate()?;

        let viewport = container.client_size();
        if viewport.is_empty() {
            return Err(StageError::EmptyViewport {
                id: container.id().to_string(),
                width: viewport.width,
                height: viewport.height,
            });
        }

        let factor = options.sample_factor();
        let samples = viewport.scaled(factor).ok_or(StageError::ViewportTooLarge {
            width: viewport.width,
            height: viewport.height,
            factor,
        })?;
        log::debug!(
            "surface `{}`: {}x{} ({}x{} samples)",
            container.id(),
            viewport.width,
            viewport.height,
            samples.width,
            samples.height
        );

        Ok(Self {
            camera: PerspectiveCamera::for_aspect(viewport.aspect()),
            viewport,
            options,
            target: FrameBuffer::new(samples.width, samples.height),
            resolved: vec![0; viewport.buffer_size()],
            meshes: Vec::new(),
            container,
        })
    }

    /// Re-read the container size and match camera and targets to it
    ///
    /// A zero-sized container leaves the surface unchanged.
    pub fn resize(&mut self) {
        let size = self.container.client_size();
        if size.is_empty() || size == self.viewport {
            return;
        }

        let Some(samples) = size.scaled(self.options.sample_factor()) else {
            log::warn!(
                "surface `{}`: {}x{} too large to supersample; keeping {}x{}",
                self.container.id(),
                size.width,
                size.height,
                self.viewport.width,
                self.viewport.height
            );
            return;
        };

        self.viewport = size;
        self.camera.set_aspect(size.aspect());
        self.target.resize(samples.width, samples.height);
        self.resolved = vec![0; size.buffer_size()];

        log::debug!("surface `{}` resized to {}x{}", self.container.id(), size.width, size.height);
    }

    /// Clear and draw every scene object, then resolve to viewport pixels
    pub fn render(&mut self, scene: &Scene) {
        self.target.clear(to_rgba8(self.options.background));

        let view_projection = self.camera.view_projection();
        for (object, world) in scene.world_objects() {
            let mesh = cached_mesh(&mut self.meshes, object.geometry);
            draw_mesh(&mut self.target, mesh, view_projection * world, to_rgba8(object.color));
        }

        self.resolved = self.target.resolve(self.options.sample_factor());
    }

    pub fn container(&self) -> &Rc<Element> {
        &self.container
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn viewport(&self) -> DisplayContext {
        self.viewport
    }

    /// Resolved RGBA pixels from the last render
    pub fn pixels(&self) -> &[u8] {
        &self.resolved
    }

    /// Resolved pixel at viewport coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let idx = ((y * self.viewport.width + x) * 4) as usize;
        self.resolved.get(idx..idx + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hex_to_rgb;
    use crate::scene::SceneObject;

    fn element(width: u32, height: u32) -> Rc<Element> {
        let element = Rc::new(Element::new("test"));
        element.set_client_size(width, height);
        element
    }

    #[test]
    fn aspect_matches_container() {
        let surface = RenderSurface::new(element(640, 360), SurfaceOptions::default()).expect("surface");
        assert_eq!(surface.aspect(), 640.0 / 360.0);
        assert_eq!(surface.viewport(), DisplayContext::new(640, 360));
        assert_eq!(surface.pixels().len(), 640 * 360 * 4);
    }

    #[test]
    fn empty_container_is_rejected() {
        let result = RenderSurface::new(element(0, 100), SurfaceOptions::default());
        assert!(matches!(result, Err(StageError::EmptyViewport { width: 0, .. })));
    }

    #[test]
    fn resize_tracks_container() {
        let container = element(100, 100);
        let mut surface = RenderSurface::new(Rc::clone(&container), SurfaceOptions::default()).expect("surface");

        container.set_client_size(300, 150);
        surface.resize();
        assert_eq!(surface.aspect(), 2.0);
        assert_eq!(surface.viewport(), DisplayContext::new(300, 150));

        // Repeated calls are harmless
        surface.resize();
        surface.resize();
        assert_eq!(surface.aspect(), 2.0);
    }

    #[test]
    fn resize_ignores_zero_size() {
        let container = element(200, 100);
        let mut surface = RenderSurface::new(Rc::clone(&container), SurfaceOptions::default()).expect("surface");

        container.set_client_size(0, 0);
        surface.resize();
        assert_eq!(surface.viewport(), DisplayContext::new(200, 100));
        assert_eq!(surface.aspect(), 2.0);
    }

    #[test]
    fn render_draws_object_over_background() {
        let options = SurfaceOptions { antialias: false, ..SurfaceOptions::default() };
        let mut surface = RenderSurface::new(element(64, 64), options).expect("surface");

        let mut scene = Scene::new();
        scene.add(SceneObject::new("cube", Geometry::cube(), hex_to_rgb(0x58a6ff)));
        surface.render(&scene);

        assert_eq!(surface.pixel(32, 32), Some([0x58, 0xa6, 0xff, 255]));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(64, 0), None);
    }

    #[test]
    fn supersample_outside_range_is_rejected() {
        for supersample in [0, MAX_SUPERSAMPLE + 1, 200] {
            let options = SurfaceOptions { supersample, ..SurfaceOptions::default() };
            let result = RenderSurface::new(element(1200, 400), options);
            assert!(
                matches!(result, Err(StageError::InvalidSupersample { value, .. }) if value == supersample),
                "supersample {supersample}"
            );
        }
    }

    #[test]
    fn oversized_sample_target_is_an_error() {
        let options = SurfaceOptions { supersample: MAX_SUPERSAMPLE, ..SurfaceOptions::default() };
        let result = RenderSurface::new(element(u32::MAX / 2, 1), options);
        assert!(matches!(result, Err(StageError::ViewportTooLarge { factor: 4, .. })));
    }

    #[test]
    fn antialiased_render_keeps_viewport_size() {
        let mut surface = RenderSurface::new(element(40, 30), SurfaceOptions::default()).expect("surface");
        surface.render(&Scene::new());
        assert_eq!(surface.pixels().len(), 40 * 30 * 4);
        assert_eq!(surface.pixel(20, 15), Some([0, 0, 0, 255]));
    }
}
