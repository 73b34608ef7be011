//! Winit window backend for dear-viewport
//!
//! Provides the windowing side of the viewport shim on top of winit:
//!
//! - [`WinitWindowSystem`] creates viewport windows from inside an
//!   `ApplicationHandler` callback,
//! - [`WinitWindow`] is the per-viewport window handed to the adapter,
//! - [`EventRouter`] carries resize/move/close notifications from the
//!   application's event handler to the window they belong to.
//!
//! winit delivers all window events through one event loop, so instead of
//! pumping the OS queue per window, the application routes each event and
//! the adapter drains its window's queue on `update`.
//!
//! # Example
//!
//! ```rust,no_run
//! use dear_viewport_winit::{EventRouter, WinitWindowSystem};
//! use winit::event::WindowEvent;
//! use winit::event_loop::ActiveEventLoop;
//! use winit::window::WindowId;
//!
//! struct App {
//!     router: EventRouter,
//! }
//!
//! impl App {
//!     fn on_window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
//!         self.router.route(id, &event);
//!         let _windows = WinitWindowSystem::new(event_loop, &self.router);
//!         // registry.create(&device, &mut windows, &mut viewport) ...
//!     }
//! }
//! ```

mod error;
mod handle;
mod router;
mod window;

pub use error::WinitWindowError;
pub use handle::native_handle;
pub use router::EventRouter;
pub use window::{WinitWindow, WinitWindowSystem, window_attributes};
