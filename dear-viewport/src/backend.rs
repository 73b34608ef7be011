//! Collaborator interfaces
//!
//! The window shim never talks to a windowing library or a graphics API
//! directly. It goes through these traits, which cover exactly what it needs:
//! create a window, create and resize a swapchain, pump window events and
//! close the window.

use std::ffi::c_void;

use crate::flags::WindowFlags;

/// Notification from the windowing library about one window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WindowEvent {
    /// The client area now has this size in physical pixels
    Resized { width: u32, height: u32 },
    /// The window now sits at this screen position
    Moved { x: i32, y: i32 },
    /// The user asked to close the window
    CloseRequested,
}

/// Parameters for creating an OS window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub title: String,
    pub position: [i32; 2],
    pub size: [u32; 2],
    pub flags: WindowFlags,
    /// Whether the windowing library should take ownership of the window
    /// (the "should own window" argument). Viewport windows are owned by the
    /// adapter, so this is `false` for them.
    pub own_window: bool,
}

/// Pixel format of swapchain back-buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// Single-channel 32-bit float
    #[default]
    R32Float,
    Bgra8Unorm,
    Bgra8UnormSrgb,
    Rgba8Unorm,
    Rgba8UnormSrgb,
    Rgba16Float,
}

/// Parameters for creating a swapchain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapchainDescription {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Allocate a depth buffer alongside the color buffers
    pub depth: bool,
    /// Synchronize presentation with the display refresh
    pub vsync: bool,
}

/// An OS window as exposed by the windowing library
pub trait PlatformWindow {
    /// What the graphics device needs to build a surface for this window
    type SurfaceSource;

    /// Windowing library error type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Surface source for swapchain creation
    fn surface_source(&self) -> Self::SurfaceSource;

    /// Current client-area size in physical pixels
    fn size(&self) -> [u32; 2];

    /// Native OS window handle (HWND, X11 window, NSView, ...)
    fn native_handle(&self) -> *mut c_void;

    /// Windowing library id of this window
    fn window_id(&self) -> u32;

    /// Drain pending events for this window, handing each to `sink`
    fn pump_events(&mut self, sink: &mut dyn FnMut(WindowEvent));

    /// Close the window
    fn close(&mut self);
}

/// A windowing library able to create windows
pub trait WindowSystem {
    type Window: PlatformWindow;

    /// Create a window
    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<Self::Window, <Self::Window as PlatformWindow>::Error>;
}

/// Back-buffers a graphics device presents to one window
pub trait Swapchain {
    /// Resize the back-buffers
    fn resize(&mut self, width: u32, height: u32);

    /// Release the swapchain
    fn release(self);
}

/// A graphics device able to create swapchains from `Source` surfaces
pub trait GraphicsDevice<Source> {
    type Swapchain: Swapchain;

    /// Graphics backend error type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a swapchain presenting to `source`
    fn create_swapchain(
        &self,
        source: Source,
        description: &SwapchainDescription,
    ) -> Result<Self::Swapchain, Self::Error>;
}
