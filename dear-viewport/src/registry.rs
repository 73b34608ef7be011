//! Registry of live viewport windows
//!
//! The GUI library only stores an opaque [`WindowKey`] in each viewport's
//! correlation slot. The registry maps that key back to the adapter and owns
//! it, so the viewport never holds a pointer into Rust-owned memory that could
//! outlive its target.

use std::collections::BTreeMap;
use std::ffi::c_void;

use crate::backend::{GraphicsDevice, PlatformWindow, Swapchain, WindowSystem};
use crate::config::ViewportWindowConfig;
use crate::error::ViewportResult;
use crate::logging::log_live_windows;
use crate::viewport::PlatformViewport;
use crate::window::ViewportWindow;

/// Opaque correlation key stored in a viewport's platform user data slot.
///
/// Keys are never reused within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowKey(u64);

impl WindowKey {
    /// Raw key value, e.g. to store in a `void*` slot of a C viewport
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Rebuild a key from [`to_raw`](Self::to_raw) output. Zero is never a key.
    pub fn from_raw(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }
}

impl std::fmt::Display for WindowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Owner of every live [`ViewportWindow`].
///
/// Adapters are boxed and stay at the same address from insertion until
/// they are disposed, so the native record and window handles published into
/// a viewport remain valid for exactly that span.
pub struct ViewportRegistry<W: PlatformWindow, S: Swapchain> {
    windows: BTreeMap<WindowKey, Box<ViewportWindow<W, S>>>,
    next_key: u64,
}

impl<W: PlatformWindow, S: Swapchain> Default for ViewportRegistry<W, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PlatformWindow, S: Swapchain> ViewportRegistry<W, S> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            next_key: 1,
        }
    }

    /// Create a window and swapchain for `viewport` and register them
    pub fn create<D, P, V>(
        &mut self,
        device: &D,
        windows: &mut P,
        viewport: &mut V,
    ) -> ViewportResult<WindowKey>
    where
        D: GraphicsDevice<W::SurfaceSource, Swapchain = S>,
        P: WindowSystem<Window = W>,
        V: PlatformViewport + ?Sized,
    {
        self.create_with_config(device, windows, viewport, &ViewportWindowConfig::default())
    }

    /// Create a window and swapchain for `viewport` with `config` and register them
    pub fn create_with_config<D, P, V>(
        &mut self,
        device: &D,
        windows: &mut P,
        viewport: &mut V,
        config: &ViewportWindowConfig,
    ) -> ViewportResult<WindowKey>
    where
        D: GraphicsDevice<W::SurfaceSource, Swapchain = S>,
        P: WindowSystem<Window = W>,
        V: PlatformViewport + ?Sized,
    {
        let window = ViewportWindow::new_with_config(device, windows, viewport, config)?;
        Ok(self.insert(viewport, window))
    }

    /// Register an existing window (typically the main one) for `viewport`
    pub fn wrap<V>(&mut self, viewport: &mut V, window: W) -> ViewportResult<WindowKey>
    where
        V: PlatformViewport + ?Sized,
    {
        let window = ViewportWindow::wrap(viewport, window)?;
        Ok(self.insert(viewport, window))
    }

    fn insert<V>(&mut self, viewport: &mut V, window: ViewportWindow<W, S>) -> WindowKey
    where
        V: PlatformViewport + ?Sized,
    {
        if viewport
            .platform_user_data()
            .is_some_and(|stale| self.windows.contains_key(&stale))
        {
            vp_warn!(
                "viewport {} already has a window; disposing the old one",
                viewport.id()
            );
            self.dispose(viewport);
        }

        let key = WindowKey(self.next_key);
        self.next_key += 1;

        let window = Box::new(window);
        viewport.set_platform_handle(window.window().native_handle());
        viewport.set_platform_handle_raw(window.native_data() as *mut c_void);
        viewport.set_platform_user_data(Some(key));
        vp_debug!("registered {} for viewport {}", key, viewport.id());

        self.windows.insert(key, window);
        log_live_windows(self.windows.len());
        key
    }

    pub fn get(&self, key: WindowKey) -> Option<&ViewportWindow<W, S>> {
        self.windows.get(&key).map(|window| window.as_ref())
    }

    pub fn get_mut(&mut self, key: WindowKey) -> Option<&mut ViewportWindow<W, S>> {
        self.windows.get_mut(&key).map(|window| window.as_mut())
    }

    /// Find the adapter correlated with `viewport`
    pub fn lookup<V>(&self, viewport: &V) -> Option<&ViewportWindow<W, S>>
    where
        V: PlatformViewport + ?Sized,
    {
        self.get(viewport.platform_user_data()?)
    }

    pub fn lookup_mut<V>(&mut self, viewport: &V) -> Option<&mut ViewportWindow<W, S>>
    where
        V: PlatformViewport + ?Sized,
    {
        self.get_mut(viewport.platform_user_data()?)
    }

    /// Pump the window correlated with `viewport`.
    ///
    /// Returns `false` when no live adapter is correlated with it.
    pub fn update<V>(&mut self, viewport: &mut V) -> bool
    where
        V: PlatformViewport + ?Sized,
    {
        let Some(key) = viewport.platform_user_data() else {
            return false;
        };
        match self.windows.get_mut(&key) {
            Some(window) => {
                window.update(viewport);
                true
            }
            None => false,
        }
    }

    /// Dispose the adapter correlated with `viewport` and clear the viewport's
    /// platform slots.
    ///
    /// The swapchain is released and the window closed before the
    /// correlation key is invalidated. Returns `false`, leaving the viewport
    /// untouched, when no live adapter is correlated with it.
    pub fn dispose<V>(&mut self, viewport: &mut V) -> bool
    where
        V: PlatformViewport + ?Sized,
    {
        let Some(key) = viewport.platform_user_data() else {
            return false;
        };
        let Some(mut window) = self.windows.remove(&key) else {
            vp_trace!("{} is not registered", key);
            return false;
        };

        window.dispose();
        viewport.set_platform_handle_raw(std::ptr::null_mut());
        viewport.set_platform_handle(std::ptr::null_mut());
        viewport.set_platform_user_data(None);
        vp_debug!("unregistered {} for viewport {}", key, viewport.id());
        log_live_windows(self.windows.len());
        true
    }

    /// Dispose every adapter. Used when the GUI library shuts down and its
    /// viewports are about to disappear.
    pub fn dispose_all(&mut self) {
        for (_, mut window) in std::mem::take(&mut self.windows) {
            window.dispose();
        }
        log_live_windows(0);
    }

    pub fn contains(&self, key: WindowKey) -> bool {
        self.windows.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = WindowKey> + '_ {
        self.windows.keys().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WindowKey, &mut ViewportWindow<W, S>)> {
        self.windows
            .iter_mut()
            .map(|(key, window)| (*key, window.as_mut()))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl<W: PlatformWindow, S: Swapchain> Drop for ViewportRegistry<W, S> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
