use thiserror::Error;

/// Errors raised by the winit window backend
#[derive(Debug, Error)]
pub enum WinitWindowError {
    #[error("Window creation failed: {0}")]
    Os(#[from] winit::error::OsError),
}
