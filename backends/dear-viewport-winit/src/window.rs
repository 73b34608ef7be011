//! Viewport windows backed by winit

use std::ffi::c_void;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use dear_viewport::{PlatformWindow, WindowDescriptor, WindowEvent, WindowFlags, WindowSystem};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use crate::error::WinitWindowError;
use crate::handle::native_handle;
use crate::router::{EventRouter, Registration};

// Ids published through the native record. winit ids are pointer-sized, so
// they are not used there directly.
static NEXT_WINDOW_ID: AtomicU32 = AtomicU32::new(1);

fn next_window_id() -> u32 {
    NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed)
}

/// Translate a window descriptor into winit window attributes
pub fn window_attributes(descriptor: &WindowDescriptor) -> WindowAttributes {
    let flags = descriptor.flags;
    let mut attrs = WindowAttributes::default()
        .with_title(descriptor.title.clone())
        .with_inner_size(LogicalSize::new(
            descriptor.size[0] as f64,
            descriptor.size[1] as f64,
        ))
        .with_position(LogicalPosition::new(
            descriptor.position[0] as f64,
            descriptor.position[1] as f64,
        ))
        .with_visible(!flags.contains(WindowFlags::HIDDEN))
        .with_decorations(!flags.contains(WindowFlags::BORDERLESS))
        .with_resizable(flags.contains(WindowFlags::RESIZABLE));

    if flags.contains(WindowFlags::ALWAYS_ON_TOP) {
        attrs = attrs.with_window_level(WindowLevel::AlwaysOnTop);
    }

    if flags.contains(WindowFlags::SKIP_TASKBAR) {
        attrs = skip_taskbar(attrs);
    }

    attrs
}

#[cfg(target_os = "windows")]
fn skip_taskbar(attrs: WindowAttributes) -> WindowAttributes {
    use winit::platform::windows::WindowAttributesExtWindows;
    attrs.with_skip_taskbar(true)
}

#[cfg(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn skip_taskbar(attrs: WindowAttributes) -> WindowAttributes {
    use winit::platform::x11::{WindowAttributesExtX11, WindowType};
    // Utility windows are left out of the taskbar by X11 window managers.
    attrs.with_x11_window_type(vec![WindowType::Utility])
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
fn skip_taskbar(attrs: WindowAttributes) -> WindowAttributes {
    attrs
}

/// Creates viewport windows on the active event loop.
///
/// winit only creates windows from inside `ApplicationHandler` callbacks, so
/// this is a short-lived borrow built per callback.
pub struct WinitWindowSystem<'a> {
    event_loop: &'a ActiveEventLoop,
    router: EventRouter,
}

impl<'a> WinitWindowSystem<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop, router: &EventRouter) -> Self {
        Self {
            event_loop,
            router: router.clone(),
        }
    }
}

impl WindowSystem for WinitWindowSystem<'_> {
    type Window = WinitWindow;

    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<WinitWindow, WinitWindowError> {
        let window = self
            .event_loop
            .create_window(window_attributes(descriptor))?;
        tracing::debug!(
            "created winit window {:?} \"{}\" at {:?} size {:?}",
            window.id(),
            descriptor.title,
            descriptor.position,
            descriptor.size
        );
        Ok(WinitWindow::from_window(Arc::new(window), &self.router))
    }
}

/// A winit window driven by a viewport adapter.
///
/// Events reach it through the [`EventRouter`] it was registered with.
/// `close` hides the window and stops event collection; the OS window is
/// destroyed once the last `Arc` to it is dropped.
pub struct WinitWindow {
    window: Arc<Window>,
    id: WindowId,
    window_id: u32,
    router: EventRouter,
    registration: Registration,
    closed: bool,
}

impl WinitWindow {
    /// Adopt an existing window, e.g. the application's main window
    pub fn from_window(window: Arc<Window>, router: &EventRouter) -> Self {
        let id = window.id();
        let registration = router.register(id, Arc::downgrade(&window));
        Self {
            window,
            id,
            window_id: next_window_id(),
            router: router.clone(),
            registration,
            closed: false,
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl PlatformWindow for WinitWindow {
    type SurfaceSource = Arc<Window>;
    type Error = WinitWindowError;

    fn surface_source(&self) -> Arc<Window> {
        self.window.clone()
    }

    fn size(&self) -> [u32; 2] {
        let size = self.window.inner_size();
        [size.width, size.height]
    }

    fn native_handle(&self) -> *mut c_void {
        native_handle(self.window.as_ref())
    }

    /// Process-unique id assigned when the window was adopted
    fn window_id(&self) -> u32 {
        self.window_id
    }

    fn pump_events(&mut self, sink: &mut dyn FnMut(WindowEvent)) {
        if self.closed {
            return;
        }
        for event in self.router.take_pending(self.id) {
            sink(event);
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.window.set_visible(false);
        self.router.unregister(self.id, self.registration);
        tracing::debug!("closed winit window {:?}", self.id);
    }
}

impl Drop for WinitWindow {
    fn drop(&mut self) {
        self.router.unregister(self.id, self.registration);
    }
}

impl std::fmt::Debug for WinitWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitWindow")
            .field("id", &self.id)
            .field("window_id", &self.window_id)
            .field("closed", &self.closed)
            .finish()
    }
}
