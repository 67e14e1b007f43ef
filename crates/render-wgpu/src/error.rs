use std::path::PathBuf;

/// Errors from the wgpu backend. All of them are startup failures except
/// [`RenderError::Surface`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read shader source {}: {source}", path.display())]
    ShaderLoad {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
