//! Error types for viewport windows
//!
//! Construction is the only fallible step. Failures from the windowing
//! library or the graphics device are boxed and propagated unchanged; there
//! is no degraded mode for a viewport that could not get a window.

use thiserror::Error;

/// Result type for viewport window operations
pub type ViewportResult<T> = Result<T, ViewportError>;

/// Boxed collaborator error
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while binding a viewport to an OS window
#[derive(Error, Debug)]
pub enum ViewportError {
    /// The windowing library could not create the window
    #[error("Window creation failed")]
    WindowCreation(#[source] BoxedError),

    /// The graphics device could not create a swapchain for the window
    #[error("Swapchain creation failed")]
    SwapchainCreation(#[source] BoxedError),

    /// The native platform record could not be allocated
    #[error("Failed to allocate {size} bytes for native viewport data")]
    NativeAllocation { size: usize },

    /// A configuration value is unusable
    #[error("Configuration error: {setting}")]
    Configuration { setting: String },
}

impl ViewportError {
    /// Wrap a windowing library error
    pub fn window_creation<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        vp_error!("Window creation failed: {}", err);
        Self::WindowCreation(Box::new(err))
    }

    /// Wrap a graphics device error
    pub fn swapchain_creation<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        vp_error!("Swapchain creation failed: {}", err);
        Self::SwapchainCreation(Box::new(err))
    }

    /// Create a native allocation error
    pub fn native_allocation(size: usize) -> Self {
        vp_error!("Native viewport data allocation of {} bytes failed", size);
        Self::NativeAllocation { size }
    }

    /// Create a configuration error
    pub fn configuration(setting: impl Into<String>) -> Self {
        let setting = setting.into();
        vp_warn!("Configuration error: {}", setting);
        Self::Configuration { setting }
    }
}
