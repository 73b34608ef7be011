//! Native window handle extraction

use std::ffi::c_void;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

/// The OS-level handle of `window` as an untyped pointer.
///
/// HWND on Windows, the X11 window id on Xlib/Xcb, the `wl_surface` on
/// Wayland, the `NSView`/`UIView` on Apple platforms. Null when the handle is
/// unavailable (e.g. an Android window while suspended).
pub fn native_handle(window: &impl HasWindowHandle) -> *mut c_void {
    let Ok(handle) = window.window_handle() else {
        return std::ptr::null_mut();
    };
    match handle.as_raw() {
        RawWindowHandle::Win32(h) => h.hwnd.get() as *mut c_void,
        RawWindowHandle::Xlib(h) => h.window as usize as *mut c_void,
        RawWindowHandle::Xcb(h) => h.window.get() as usize as *mut c_void,
        RawWindowHandle::Wayland(h) => h.surface.as_ptr(),
        RawWindowHandle::AppKit(h) => h.ns_view.as_ptr(),
        RawWindowHandle::UiKit(h) => h.ui_view.as_ptr(),
        RawWindowHandle::AndroidNdk(h) => h.a_native_window.as_ptr(),
        _ => std::ptr::null_mut(),
    }
}
