//! One viewport bound to one OS window and its swapchain

use crate::backend::{
    GraphicsDevice, PlatformWindow, Swapchain, WindowDescriptor, WindowEvent, WindowSystem,
};
use crate::config::ViewportWindowConfig;
use crate::error::{ViewportError, ViewportResult};
use crate::flags::window_flags_for;
use crate::native::{NativeViewportData, ViewportData};
use crate::viewport::{PlatformViewport, ViewportId};

/// Adapter binding a GUI viewport to an OS window and its swapchain.
///
/// Windows created through [`ViewportWindow::new`] are owned: the adapter
/// forwards their resize/move/close events into the viewport and closes them
/// on disposal. Windows passed to [`ViewportWindow::wrap`] (typically the
/// main application window) are only tracked.
///
/// All methods must be called on the thread that owns the windowing library.
pub struct ViewportWindow<W: PlatformWindow, S: Swapchain> {
    viewport_id: ViewportId,
    window: W,
    swapchain: Option<S>,
    window_owned: bool,
    native: NativeViewportData,
    disposed: bool,
}

impl<W: PlatformWindow, S: Swapchain> ViewportWindow<W, S> {
    /// Create a window and swapchain for `viewport` with the default configuration
    pub fn new<D, P, V>(device: &D, windows: &mut P, viewport: &V) -> ViewportResult<Self>
    where
        D: GraphicsDevice<W::SurfaceSource, Swapchain = S>,
        P: WindowSystem<Window = W>,
        V: PlatformViewport + ?Sized,
    {
        Self::new_with_config(device, windows, viewport, &ViewportWindowConfig::default())
    }

    /// Create a window and swapchain for `viewport`
    pub fn new_with_config<D, P, V>(
        device: &D,
        windows: &mut P,
        viewport: &V,
        config: &ViewportWindowConfig,
    ) -> ViewportResult<Self>
    where
        D: GraphicsDevice<W::SurfaceSource, Swapchain = S>,
        P: WindowSystem<Window = W>,
        V: PlatformViewport + ?Sized,
    {
        config.validate()?;

        let [x, y] = viewport.pos();
        let [width, height] = viewport.size();
        let descriptor = WindowDescriptor {
            title: config.title.clone(),
            position: [x as i32, y as i32],
            size: [width as u32, height as u32],
            flags: window_flags_for(viewport.flags()),
            own_window: false,
        };
        vp_debug!(
            "creating window for viewport {} at {:?} size {:?} flags {:?}",
            viewport.id(),
            descriptor.position,
            descriptor.size,
            descriptor.flags
        );

        let mut window = windows
            .create_window(&descriptor)
            .map_err(ViewportError::window_creation)?;

        let description = config.swapchain.describe(window.size());
        let swapchain = match device.create_swapchain(window.surface_source(), &description) {
            Ok(swapchain) => swapchain,
            Err(err) => {
                window.close();
                return Err(ViewportError::swapchain_creation(err));
            }
        };

        let native = match NativeViewportData::alloc(window.native_handle(), window.window_id(), true)
        {
            Ok(native) => native,
            Err(err) => {
                swapchain.release();
                window.close();
                return Err(err);
            }
        };

        Ok(Self {
            viewport_id: viewport.id(),
            window,
            swapchain: Some(swapchain),
            window_owned: true,
            native,
            disposed: false,
        })
    }

    /// Track an existing window for `viewport` without creating anything
    pub fn wrap<V>(viewport: &V, window: W) -> ViewportResult<Self>
    where
        V: PlatformViewport + ?Sized,
    {
        let native = NativeViewportData::alloc(window.native_handle(), window.window_id(), false)?;
        vp_debug!("wrapping existing window for viewport {}", viewport.id());
        Ok(Self {
            viewport_id: viewport.id(),
            window,
            swapchain: None,
            window_owned: false,
            native,
            disposed: false,
        })
    }

    /// Drain pending window events, forwarding them into `viewport`.
    ///
    /// Call once per frame. A resize raises the pending-resize request and
    /// resizes the swapchain, a move raises the pending-move request and a
    /// close raises the pending-close request. Events of wrapped windows are
    /// drained without forwarding. Does nothing after [`dispose`](Self::dispose).
    pub fn update<V>(&mut self, viewport: &mut V)
    where
        V: PlatformViewport + ?Sized,
    {
        if self.disposed {
            return;
        }
        debug_assert_eq!(viewport.id(), self.viewport_id, "viewport mismatch");

        let forward = self.window_owned;
        let Self {
            window, swapchain, ..
        } = self;
        window.pump_events(&mut |event| {
            if !forward {
                return;
            }
            match event {
                WindowEvent::Resized { width, height } => {
                    viewport.set_platform_request_resize(true);
                    if let Some(swapchain) = swapchain.as_mut() {
                        swapchain.resize(width, height);
                    }
                }
                WindowEvent::Moved { .. } => viewport.set_platform_request_move(true),
                WindowEvent::CloseRequested => viewport.set_platform_request_close(true),
            }
        });
    }

    /// Release the swapchain, close the window and free the native record.
    ///
    /// Only the first call has an effect. Wrapped windows are not closed.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(swapchain) = self.swapchain.take() {
            swapchain.release();
        }
        if self.window_owned {
            self.window.close();
        }
        self.native.free();
        vp_debug!("disposed viewport window {}", self.viewport_id);
    }

    pub fn viewport_id(&self) -> ViewportId {
        self.viewport_id
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// The swapchain, `None` for wrapped windows and after disposal
    pub fn swapchain(&self) -> Option<&S> {
        self.swapchain.as_ref()
    }

    pub fn swapchain_mut(&mut self) -> Option<&mut S> {
        self.swapchain.as_mut()
    }

    /// Whether the adapter created (and will close) the window
    pub fn is_window_owned(&self) -> bool {
        self.window_owned
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Native platform record, null after disposal
    pub fn native_data(&self) -> *mut ViewportData {
        self.native.as_ptr()
    }
}

impl<W: PlatformWindow, S: Swapchain> Drop for ViewportWindow<W, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<W: PlatformWindow, S: Swapchain> std::fmt::Debug for ViewportWindow<W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportWindow")
            .field("viewport_id", &self.viewport_id)
            .field("window_id", &self.window.window_id())
            .field("has_swapchain", &self.swapchain.is_some())
            .field("window_owned", &self.window_owned)
            .field("disposed", &self.disposed)
            .finish()
    }
}
