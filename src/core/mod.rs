pub mod display_context;
pub mod framebuffer;
pub mod gpu_context;
pub mod rasterizer;
pub mod surface_renderer;
pub mod timer;

pub use display_context::DisplayContext;
pub use framebuffer::FrameBuffer;
pub use gpu_context::GpuContext;
pub use rasterizer::draw_mesh;
pub use surface_renderer::SurfaceRenderer;
pub use timer::Accumulator;
