use thiserror::Error;

pub type Result<T> = std::result::Result<T, StageError>;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("container `{0}` is not present in the document")]
    MissingContainer(String),

    #[error("container `{id}` has an empty viewport ({width}x{height})")]
    EmptyViewport { id: String, width: u32, height: u32 },

    #[error("supersample factor {value} is outside 1..={max}")]
    InvalidSupersample { value: u32, max: u32 },

    #[error("{width}x{height} viewport overflows at {factor}x supersampling")]
    ViewportTooLarge { width: u32, height: u32, factor: u32 },

    #[error("failed to read config `{path}`: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface frame unavailable: {0}")]
    SurfaceFrame(#[from] wgpu::SurfaceError),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode snapshot: {0}")]
    Image(#[from] image::ImageError),
}
