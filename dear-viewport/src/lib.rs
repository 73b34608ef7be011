//! Per-viewport window shim for multi-viewport immediate-mode GUIs
//!
//! A multi-viewport GUI library (Dear ImGui with `ViewportsEnable`) asks the
//! platform layer to create one OS window per floating viewport. This crate
//! binds each such viewport to exactly one window and one swapchain, keeps
//! resize/move/close notifications flowing back into the viewport, and
//! releases both resources together when the viewport goes away.
//!
//! The windowing library and the graphics device are consumed through the
//! narrow traits in [`backend`]. Concrete implementations live in the
//! `dear-viewport-winit` and `dear-viewport-wgpu` crates.
//!
//! # Example
//!
//! ```rust,no_run
//! # use dear_viewport::*;
//! # fn run<D, P>(device: &D, windows: &mut P) -> ViewportResult<()>
//! # where
//! #     P: WindowSystem,
//! #     D: GraphicsDevice<<P::Window as PlatformWindow>::SurfaceSource>,
//! # {
//! let mut registry = ViewportRegistry::new();
//! let mut viewport = Viewport::new(ViewportId(42), [100.0, 100.0], [640.0, 480.0])
//!     .with_flags(ViewportFlags::NO_TASK_BAR_ICON);
//!
//! registry.create(device, windows, &mut viewport)?;
//!
//! // once per frame
//! registry.update(&mut viewport);
//! if viewport.platform_request_close() {
//!     registry.dispose(&mut viewport);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod logging;

pub mod backend;
pub mod config;
pub mod error;
pub mod flags;
pub mod native;
pub mod registry;
pub mod viewport;
pub mod window;

pub use backend::{
    GraphicsDevice, PixelFormat, PlatformWindow, Swapchain, SwapchainDescription,
    WindowDescriptor, WindowEvent, WindowSystem,
};
pub use config::{SwapchainConfig, ViewportWindowConfig};
pub use error::{ViewportError, ViewportResult};
pub use flags::{ViewportFlags, WindowFlags, window_flags_for};
pub use native::{NativeViewportData, ViewportData};
pub use registry::{ViewportRegistry, WindowKey};
pub use viewport::{PlatformViewport, Viewport, ViewportId};
pub use window::ViewportWindow;
