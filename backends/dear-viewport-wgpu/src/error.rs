use thiserror::Error;

/// Errors raised by the wgpu swapchain backend
#[derive(Debug, Error)]
pub enum WgpuSwapchainError {
    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Surface does not support {format:?}; supported: {supported:?}")]
    UnsupportedFormat {
        format: wgpu::TextureFormat,
        supported: Vec<wgpu::TextureFormat>,
    },

    #[error("No suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("Device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Surface validation failed while acquiring a frame")]
    SurfaceValidation,
}
